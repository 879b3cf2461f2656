// Alignment pattern locator
//------------------------------------------------------------------------------

/// Derives the module-space alignment pattern center coordinates along one
/// axis for a symbol `version`, in descending order starting at `N - 7`.
///
/// Version 1 symbols carry no alignment pattern; for those this returns the
/// degenerate single entry `[0]` and callers must guard against using it.
pub fn pattern_positions(version: i16) -> Vec<i16> {
    if version < 2 {
        return vec![0];
    }
    let n = 17 + 4 * version;
    let count = version / 7 + 2;
    let skip = if count == 2 { 1 } else { (count - 1) * 4 / (count + 1) };

    let mut positions = Vec::with_capacity(count as usize);
    let mut position = n - 7;
    for _ in 0..count {
        positions.push(position);
        position -= skip;
    }
    positions
}
