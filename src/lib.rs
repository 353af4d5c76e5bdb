//! braillelib — BSR finalization and braille cell encoding.
//!
//! The library takes a draft Braille Score Representation (BSR) tree —
//! already paginated by an upstream pass — finalizes the placement of
//! headings, clefs, keys, times and tempi, transcribes text and musical
//! signs into braille cells, and serializes cell sequences to bytes in
//! ASCII braille, UTF-8 or UTF-16 (either byte order).
//!
//! # Example
//! ```no_run
//! use braillelib::{finalize_score, BrailleOutputConfig, BrailleOutputKind, BrailleSession};
//!
//! # fn run(draft: &braillelib::BsrScore) -> Result<(), Box<dyn std::error::Error>> {
//! let finalized = finalize_score(draft)?;
//!
//! let config = BrailleOutputConfig::new(BrailleOutputKind::Utf8, true);
//! let mut session = BrailleSession::new(config, Vec::new());
//! for page in &finalized.pages {
//!     for line in page.lines() {
//!         session.write_cells_list(&line.cells()?)?;
//!     }
//! }
//! let bytes = session.into_inner();
//! # Ok(())
//! # }
//! ```

pub mod alphabet;
pub mod cell;
pub mod encoder;
pub mod finalizer;
pub mod model;
pub mod signs;

use std::io::Write;

pub use alphabet::{braille_character, braille_word, braille_word_lossy, TranscribeError};
pub use cell::{BrailleCell, CellsList};
pub use encoder::{
    BrailleOutputConfig, BrailleOutputKind, BrailleSession, CellEncoder, EncodeError,
};
pub use finalizer::{BsrFinalizer, FinalizeError};
pub use model::*;

/// Finalize a draft BSR tree.
/// Convenience wrapper constructing a one-shot [`BsrFinalizer`].
pub fn finalize_score(draft: &BsrScore) -> Result<BsrScore, FinalizeError> {
    BsrFinalizer::new().finalize(draft)
}

/// Transcribe a word of printable text into braille cells.
pub fn transcribe_word(word: &str) -> Result<CellsList, TranscribeError> {
    braille_word(word)
}

/// Serialize one cells list to `out` in a single-shot session:
/// the BOM (when configured) followed by the encoded cells.
pub fn write_cells(
    cells: &CellsList,
    config: &BrailleOutputConfig,
    out: impl Write,
) -> Result<(), EncodeError> {
    let mut session = BrailleSession::new(*config, out);
    session.write_cells_list(cells)
}

/// Convert a BSR score to a JSON string.
/// Useful for golden tests and data exchange.
pub fn score_to_json(score: &BsrScore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(score)
}
