//! ASCII braille — one printable byte per cell, per the North-American
//! braille ASCII convention.  The 64-entry table is a bijection between
//! dot patterns and characters; `decode_ascii` is its inverse.

use std::io::Write;

use super::{CellEncoder, EncodeError};
use crate::cell::BrailleCell;

/// Dot pattern → ASCII character, indexed by pattern 0..=63.
static ASCII_TABLE: &[u8; 64] =
    b" A1B'K2L@CIF/MSP\"E3H9O6R^DJG>NTQ,*5<-U8V.%[$+X!&;:4\\0Z7(_?W]#Y)=";

/// The ASCII braille encoder.  No byte order mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiBraille;

impl AsciiBraille {
    /// The ASCII character for one cell.
    pub fn encode_to_byte(cell: BrailleCell) -> Result<u8, EncodeError> {
        let pattern = cell.pattern();
        ASCII_TABLE
            .get(pattern as usize)
            .copied()
            .ok_or(EncodeError::CellOutOfRange { pattern })
    }
}

impl CellEncoder for AsciiBraille {
    fn encode_cell(&self, cell: BrailleCell, out: &mut dyn Write) -> Result<(), EncodeError> {
        out.write_all(&[Self::encode_to_byte(cell)?])?;
        Ok(())
    }
}

/// Inverse of the ASCII braille table: the cell whose encoding is
/// `byte`, or `None` for bytes outside the table.
pub fn decode_ascii(byte: u8) -> Option<BrailleCell> {
    ASCII_TABLE
        .iter()
        .position(|&b| b == byte)
        .and_then(|pattern| BrailleCell::from_pattern(pattern as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pinned_ascii_fixtures() {
        let byte = |dots| AsciiBraille::encode_to_byte(BrailleCell::from_dots(dots)).unwrap();
        assert_eq!(byte(0), b' ');
        assert_eq!(byte(1), b'A');
        assert_eq!(byte(1345), b'N');
        assert_eq!(byte(3456), b'#'); // numeric indicator
        assert_eq!(byte(6), b',');
        assert_eq!(byte(2456), b'W');
        assert_eq!(byte(123456), b'=');
    }

    #[test]
    fn table_is_a_bijection() {
        let mut seen = [false; 256];
        for pattern in 0..64u8 {
            let cell = BrailleCell::from_pattern(pattern).unwrap();
            let byte = AsciiBraille::encode_to_byte(cell).unwrap();
            assert!(
                !seen[byte as usize],
                "two dot patterns encode to ASCII byte {byte:#04x}"
            );
            seen[byte as usize] = true;
            // Decoding recovers the pattern exactly.
            assert_eq!(decode_ascii(byte), Some(cell));
        }
    }

    #[test]
    fn decode_rejects_bytes_outside_the_table() {
        assert_eq!(decode_ascii(b'a'), None); // table is uppercase
        assert_eq!(decode_ascii(0x00), None);
        assert_eq!(decode_ascii(0xFF), None);
    }
}
