//! Display width of characters as the balloon sees them.
//!
//! This is a coarse heuristic, not an East Asian Width table: anything in the
//! Han script or above Latin-1 takes two columns, everything else one. Rendered
//! balloons depend on exactly this boundary, so keep it as is.

/// Highest code point still drawn as a single column. The whole Han script
/// sits above it, so this one bound covers Han too.
const LATIN1_MAX: u32 = 0xFF;

/// Columns taken by a single character: 1 or 2.
pub fn char_width(c: char) -> usize {
    if c as u32 > LATIN1_MAX {
        2
    } else {
        1
    }
}

/// Sum of [`char_width`] over every character of `s`.
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}
