use qrcode::{Color, QrCode};

// Module matrix
//------------------------------------------------------------------------------

/// Immutable square grid of dark/light modules, row-major with the origin at
/// the top left. Built once from the symbol provider and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    modules: Vec<bool>,
    w: usize,
}

impl ModuleMatrix {
    pub fn new(modules: Vec<bool>, w: usize) -> Self {
        debug_assert_eq!(modules.len(), w * w, "matrix is not square");
        Self { modules, w }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    /// Reads the module at `(x, y)`. Any out of bounds coordinate reads as
    /// light, so neighbor probes never need their own bounds checks.
    pub fn is_dark(&self, x: i16, y: i16) -> bool {
        let w = self.w as i16;
        if x < 0 || y < 0 || x >= w || y >= w {
            return false;
        }
        self.modules[y as usize * self.w + x as usize]
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }
}

impl From<&QrCode> for ModuleMatrix {
    fn from(code: &QrCode) -> Self {
        let w = code.width();
        let modules = code.to_colors().iter().map(|&c| c == Color::Dark).collect();
        Self::new(modules, w)
    }
}

#[cfg(test)]
impl ModuleMatrix {
    /// Builds a matrix from rows of `#` (dark) and `.` (light).
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let rows: Vec<&str> = pattern.split_whitespace().collect();
        let w = rows.len();
        let mut modules = Vec::with_capacity(w * w);
        for row in &rows {
            assert_eq!(row.len(), w, "pattern is not square");
            modules.extend(row.chars().map(|ch| ch == '#'));
        }
        Self::new(modules, w)
    }
}

#[cfg(test)]
mod matrix_tests {
    use super::ModuleMatrix;

    #[test]
    fn test_out_of_bounds_reads_light() {
        let m = ModuleMatrix::new(vec![true; 4], 2);
        assert!(m.is_dark(0, 0));
        assert!(m.is_dark(1, 1));
        assert!(!m.is_dark(-1, 0));
        assert!(!m.is_dark(0, -1));
        assert!(!m.is_dark(2, 0));
        assert!(!m.is_dark(0, 2));
    }

    #[test]
    fn test_pattern_addressing_is_row_major() {
        let m = ModuleMatrix::from_pattern(
            "#..
             .#.
             ..#",
        );
        assert_eq!(m.width(), 3);
        assert!(m.is_dark(0, 0));
        assert!(m.is_dark(1, 1));
        assert!(m.is_dark(2, 2));
        assert!(!m.is_dark(2, 0));
        assert!(!m.is_dark(0, 2));
        assert_eq!(m.count_dark_modules(), 3);
    }
}
