//! UTF-16 braille — one two-byte code unit per cell, U+2800 + pattern,
//! in big- or little-endian byte order.  The Braille Patterns block is
//! below U+10000, so no surrogate pairs arise.

use std::io::Write;

use super::{CellEncoder, EncodeError};
use crate::cell::{BrailleCell, BRAILLE_BLOCK_BASE};

fn code_unit(cell: BrailleCell) -> u16 {
    BRAILLE_BLOCK_BASE as u16 + cell.pattern() as u16
}

/// UTF-16 big-endian encoder.  Byte order mark FE FF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16BigEndianBraille;

impl CellEncoder for Utf16BigEndianBraille {
    fn encode_cell(&self, cell: BrailleCell, out: &mut dyn Write) -> Result<(), EncodeError> {
        out.write_all(&code_unit(cell).to_be_bytes())?;
        Ok(())
    }
}

/// UTF-16 little-endian encoder.  Byte order mark FF FE.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16LittleEndianBraille;

impl CellEncoder for Utf16LittleEndianBraille {
    fn encode_cell(&self, cell: BrailleCell, out: &mut dyn Write) -> Result<(), EncodeError> {
        out.write_all(&code_unit(cell).to_le_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_units_sit_in_the_braille_block() {
        assert_eq!(code_unit(BrailleCell::BLANK), 0x2800);
        assert_eq!(code_unit(BrailleCell::from_dots(145)), 0x2819);
        assert_eq!(code_unit(BrailleCell::from_dots(123456)), 0x283F);
    }

    #[test]
    fn endianness_swaps_bytes_per_code_unit() {
        let cell = BrailleCell::from_dots(2345);
        let mut be = Vec::new();
        let mut le = Vec::new();
        Utf16BigEndianBraille.encode_cell(cell, &mut be).unwrap();
        Utf16LittleEndianBraille.encode_cell(cell, &mut le).unwrap();
        assert_eq!(be, vec![0x28, 0x1E]);
        assert_eq!(le, vec![0x1E, 0x28]);
    }
}
