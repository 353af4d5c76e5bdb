//! Cell-stream encoders — serialize a cells list to bytes under one of
//! four encodings: ASCII braille, UTF-8, UTF-16 big-endian, UTF-16
//! little-endian.
//!
//! Encoders hold no buffer of their own; all writing is append-only to
//! the caller's sink and safe to run incrementally (per line, per
//! measure) against the same open stream.  The byte order mark, when
//! requested, is the session's business and is written at most once at
//! the very start of the stream — never per cell, so concatenating many
//! cells lists into one stream cannot duplicate it.

mod ascii;
mod utf16;
mod utf8;

pub use ascii::{decode_ascii, AsciiBraille};
pub use utf16::{Utf16BigEndianBraille, Utf16LittleEndianBraille};
pub use utf8::Utf8Braille;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::{BrailleCell, CellsList};

/// Encoding failure.  `CellOutOfRange` is unreachable through
/// [`BrailleCell`]'s checked constructors but verified at the table
/// boundary anyway; both variants are internal, not user errors.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to write encoded cells: {0}")]
    Io(#[from] std::io::Error),
    #[error("dot pattern {pattern} is outside the encodable range 0-63")]
    CellOutOfRange { pattern: u8 },
    #[error("unknown braille output kind '{0}'")]
    UnknownOutputKind(String),
}

/// The target byte encoding for braille output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrailleOutputKind {
    Ascii,
    Utf8,
    Utf16BigEndian,
    Utf16LittleEndian,
}

impl BrailleOutputKind {
    /// The encoding's byte order mark.  Empty for ASCII braille.
    pub fn bom(self) -> &'static [u8] {
        match self {
            BrailleOutputKind::Ascii => &[],
            BrailleOutputKind::Utf8 => &[0xEF, 0xBB, 0xBF],
            BrailleOutputKind::Utf16BigEndian => &[0xFE, 0xFF],
            BrailleOutputKind::Utf16LittleEndian => &[0xFF, 0xFE],
        }
    }

    /// The encoder implementing this kind.
    pub fn encoder(self) -> &'static dyn CellEncoder {
        match self {
            BrailleOutputKind::Ascii => &AsciiBraille,
            BrailleOutputKind::Utf8 => &Utf8Braille,
            BrailleOutputKind::Utf16BigEndian => &Utf16BigEndianBraille,
            BrailleOutputKind::Utf16LittleEndian => &Utf16LittleEndianBraille,
        }
    }
}

impl fmt::Display for BrailleOutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BrailleOutputKind::Ascii => "ascii",
            BrailleOutputKind::Utf8 => "utf8",
            BrailleOutputKind::Utf16BigEndian => "utf16-big-endian",
            BrailleOutputKind::Utf16LittleEndian => "utf16-little-endian",
        };
        f.write_str(name)
    }
}

impl FromStr for BrailleOutputKind {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(BrailleOutputKind::Ascii),
            "utf8" => Ok(BrailleOutputKind::Utf8),
            "utf16-big-endian" => Ok(BrailleOutputKind::Utf16BigEndian),
            "utf16-little-endian" => Ok(BrailleOutputKind::Utf16LittleEndian),
            other => Err(EncodeError::UnknownOutputKind(other.to_string())),
        }
    }
}

/// Output configuration, passed explicitly to each session — there is
/// no process-wide encoding state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrailleOutputConfig {
    pub kind: BrailleOutputKind,
    /// Whether to emit the byte order mark; consulted once per session.
    pub emit_bom: bool,
}

impl BrailleOutputConfig {
    pub fn new(kind: BrailleOutputKind, emit_bom: bool) -> Self {
        Self { kind, emit_bom }
    }
}

/// One concrete cell encoding.  `encode_cell` writes the encoded form
/// of exactly one cell; `encode_cells` is the shared list behavior —
/// one cell after another in list order, no separators, no reordering.
pub trait CellEncoder {
    fn encode_cell(&self, cell: BrailleCell, out: &mut dyn Write) -> Result<(), EncodeError>;

    fn encode_cells(&self, cells: &CellsList, out: &mut dyn Write) -> Result<(), EncodeError> {
        for &cell in cells {
            self.encode_cell(cell, out)?;
        }
        Ok(())
    }
}

/// An output session: one sink, one encoding, BOM written at most once
/// before the first bytes.  Cells lists append back to back, so the
/// session can be fed per line or per measure.
#[derive(Debug)]
pub struct BrailleSession<W: Write> {
    config: BrailleOutputConfig,
    out: W,
    started: bool,
}

impl<W: Write> BrailleSession<W> {
    pub fn new(config: BrailleOutputConfig, out: W) -> Self {
        Self { config, out, started: false }
    }

    /// Serialize one cells list onto the stream.
    pub fn write_cells_list(&mut self, cells: &CellsList) -> Result<(), EncodeError> {
        if !self.started {
            self.started = true;
            if self.config.emit_bom {
                self.out.write_all(self.config.kind.bom())?;
            }
        }
        self.config.kind.encoder().encode_cells(cells, &mut self.out)
    }

    /// Finish the session and hand the sink back.
    pub fn into_inner(self) -> W {
        self.out
    }
}
