use qrcode::{EcLevel, QrCode, Version};

use crate::error::RenderResult;
use crate::matrix::ModuleMatrix;

// Symbol provider
//------------------------------------------------------------------------------

/// Encodes `content` as a QR symbol at the highest error correction level and
/// returns the module matrix together with the symbol version (1-40).
///
/// The matrix carries no quiet zone of its own; margins are entirely the
/// geometry planner's concern.
pub fn encode(content: &str) -> RenderResult<(ModuleMatrix, i16)> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::H)?;
    let version = match code.version() {
        Version::Normal(v) => v,
        // automatic version selection never picks a micro symbol
        Version::Micro(_) => unreachable!("micro symbol version"),
    };
    Ok((ModuleMatrix::from(&code), version))
}

#[cfg(test)]
mod symbol_tests {
    use qrcode::types::QrError;

    use super::encode;
    use crate::error::RenderError;

    #[test]
    fn test_version_matches_module_count() {
        let (matrix, version) = encode("https://github.com/MALTF").unwrap();
        assert_eq!(matrix.width(), (17 + 4 * version) as usize);
    }

    #[test]
    fn test_finder_pattern_present() {
        let (matrix, _) = encode("OK").unwrap();
        // top left finder ring corners are always dark
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(6, 0));
        assert!(matrix.is_dark(0, 6));
        assert!(matrix.is_dark(6, 6));
        assert!(matrix.is_dark(3, 3));
    }

    #[test]
    fn test_oversized_content_fails() {
        // version 40 at level H caps out at 1273 bytes
        let content = "x".repeat(2000);
        assert_eq!(encode(&content), Err(RenderError::Encoding(QrError::DataTooLong)));
    }
}
