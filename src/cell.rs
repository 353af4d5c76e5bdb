//! The elementary unit of braille output — a 6-dot cell pattern — and an
//! ordered, concatenable sequence of cells.
//!
//! A cell's dot pattern is an integer in 0..=63 where bit k (0-indexed)
//! means dot k+1 is raised.  Pattern 0 is the blank/space cell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest valid dot pattern (all six dots raised).
pub const MAX_DOT_PATTERN: u8 = 0b11_1111;

/// First code point of the Unicode Braille Patterns block.
pub const BRAILLE_BLOCK_BASE: u32 = 0x2800;

/// One braille cell: a dot pattern in 0..=63.
///
/// Cells are immutable values, copied freely; nothing owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrailleCell(u8);

impl BrailleCell {
    /// The blank/space cell (no dots raised).
    pub const BLANK: BrailleCell = BrailleCell(0);

    /// Build a cell from braille dot notation: `from_dots(145)` raises
    /// dots 1, 4 and 5.  Each decimal digit of the argument must be a
    /// dot number 1–6, listed at most once.  `from_dots(0)` is the
    /// blank cell.
    ///
    /// Panics at compile time (or at runtime for non-const calls) on an
    /// invalid dot digit; the call sites are all literal tables.
    pub const fn from_dots(notation: u32) -> BrailleCell {
        if notation == 0 {
            return BrailleCell(0);
        }
        let mut rest = notation;
        let mut pattern: u8 = 0;
        while rest > 0 {
            let digit = rest % 10;
            assert!(digit >= 1 && digit <= 6, "dot number must be 1-6");
            let bit = 1u8 << (digit - 1);
            assert!(pattern & bit == 0, "dot number listed twice");
            pattern |= bit;
            rest /= 10;
        }
        BrailleCell(pattern)
    }

    /// Build a cell from a raw dot pattern, rejecting values above 63.
    pub fn from_pattern(pattern: u8) -> Option<BrailleCell> {
        if pattern <= MAX_DOT_PATTERN {
            Some(BrailleCell(pattern))
        } else {
            None
        }
    }

    /// The raw dot pattern in 0..=63.
    pub fn pattern(self) -> u8 {
        self.0
    }

    /// Whether dot `n` (1-based, 1..=6) is raised.
    pub fn has_dot(self, n: u8) -> bool {
        n >= 1 && n <= 6 && self.0 & (1 << (n - 1)) != 0
    }

    /// The Unicode braille character for this cell (U+2800 + pattern).
    pub fn to_char(self) -> char {
        // Pattern is <= 63, so the code point is always inside the
        // Braille Patterns block.
        char::from_u32(BRAILLE_BLOCK_BASE + self.0 as u32).unwrap_or('\u{2800}')
    }
}

impl fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An ordered sequence of braille cells.  Insertion order is rendering
/// order; duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellsList {
    cells: Vec<BrailleCell>,
}

impl CellsList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Append one cell at the end.
    pub fn push(&mut self, cell: BrailleCell) {
        self.cells.push(cell);
    }

    /// Append another list at the end, preserving its order.
    pub fn append(&mut self, mut other: CellsList) {
        self.cells.append(&mut other.cells);
    }

    /// Append `count` blank cells.
    pub fn push_blanks(&mut self, count: usize) {
        self.cells.extend(std::iter::repeat(BrailleCell::BLANK).take(count));
    }

    /// Number of cells stored in the list.
    ///
    /// This is the *stored* length.  Higher-level elements may report a
    /// larger *cells number* that includes fixed layout overhead (see
    /// `BsrMusicHeading::cells_number`); the two are deliberately kept
    /// as separate, separately named quantities.
    pub fn cells_number(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BrailleCell> {
        self.cells.iter()
    }

    /// The cells as a slice.
    pub fn as_slice(&self) -> &[BrailleCell] {
        &self.cells
    }
}

impl FromIterator<BrailleCell> for CellsList {
    fn from_iter<I: IntoIterator<Item = BrailleCell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl Extend<BrailleCell> for CellsList {
    fn extend<I: IntoIterator<Item = BrailleCell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellsList {
    type Item = &'a BrailleCell;
    type IntoIter = std::slice::Iter<'a, BrailleCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for CellsList {
    type Item = BrailleCell;
    type IntoIter = std::vec::IntoIter<BrailleCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl From<Vec<BrailleCell>> for CellsList {
    fn from(cells: Vec<BrailleCell>) -> Self {
        Self { cells }
    }
}

impl fmt::Display for CellsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dot_notation_sets_the_right_bits() {
        assert_eq!(BrailleCell::from_dots(0).pattern(), 0);
        assert_eq!(BrailleCell::from_dots(1).pattern(), 0b00_0001);
        assert_eq!(BrailleCell::from_dots(145).pattern(), 0b01_1001);
        assert_eq!(BrailleCell::from_dots(123456).pattern(), 0b11_1111);
        // Order of the digits does not matter.
        assert_eq!(BrailleCell::from_dots(541), BrailleCell::from_dots(145));
    }

    #[test]
    #[should_panic(expected = "dot number listed twice")]
    fn dot_notation_rejects_repeated_dots() {
        let _ = BrailleCell::from_dots(11);
    }

    #[test]
    fn pattern_constructor_rejects_out_of_range() {
        assert_eq!(BrailleCell::from_pattern(63).map(|c| c.pattern()), Some(63));
        assert_eq!(BrailleCell::from_pattern(64), None);
    }

    #[test]
    fn cell_maps_into_the_unicode_braille_block() {
        assert_eq!(BrailleCell::BLANK.to_char(), '\u{2800}');
        assert_eq!(BrailleCell::from_dots(1).to_char(), '⠁');
        assert_eq!(BrailleCell::from_dots(2345).to_char(), '⠞');
    }

    #[test]
    fn append_preserves_order() {
        let mut a: CellsList = [BrailleCell::from_dots(1), BrailleCell::from_dots(12)]
            .into_iter()
            .collect();
        let b: CellsList = [BrailleCell::from_dots(14)].into_iter().collect();
        a.append(b);
        assert_eq!(a.cells_number(), 3);
        assert_eq!(a.to_string(), "⠁⠃⠉");
    }
}
