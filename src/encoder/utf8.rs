//! UTF-8 braille — three bytes per cell, the UTF-8 encoding of code
//! point U+2800 + pattern.  The whole Braille Patterns block sits in
//! the three-byte UTF-8 range, so the width is fixed.

use std::io::Write;

use super::{CellEncoder, EncodeError};
use crate::cell::BrailleCell;

/// The UTF-8 encoder.  Byte order mark EF BB BF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Braille;

impl CellEncoder for Utf8Braille {
    fn encode_cell(&self, cell: BrailleCell, out: &mut dyn Write) -> Result<(), EncodeError> {
        let mut buf = [0u8; 4];
        let encoded = cell.to_char().encode_utf8(&mut buf);
        out.write_all(encoded.as_bytes())?;
        Ok(())
    }
}
