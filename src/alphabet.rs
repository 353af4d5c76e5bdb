//! Alphabet transcriber — maps printable text to braille cells.
//!
//! Both entry points are pure: the same input always yields the same
//! cell sequence, with no dependency on prior calls.  Mode indicators
//! (the dot-6 capital prefix, the dots-3456 numeric prefix) are emitted
//! per character so that `braille_word` is exactly the ordered
//! concatenation of `braille_character` over the word's characters.

use thiserror::Error;

use crate::cell::{BrailleCell, CellsList};

/// Capital indicator — prefixed to each capital letter.
pub const CAPITAL_INDICATOR: BrailleCell = BrailleCell::from_dots(6);

/// Numeric indicator — prefixed to each digit.
pub const NUMERIC_INDICATOR: BrailleCell = BrailleCell::from_dots(3456);

/// Raised when a source character has no braille mapping.
///
/// Recoverable by the immediate caller: substitute a fallback glyph
/// (see [`braille_word_lossy`]), skip the character, or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranscribeError {
    #[error("no braille mapping for character {ch:?}")]
    UnsupportedCharacter { ch: char },
}

/// Cell for a lowercase letter a–z (standard English braille).
fn letter_cell(ch: char) -> Option<BrailleCell> {
    let dots = match ch {
        'a' => 1,
        'b' => 12,
        'c' => 14,
        'd' => 145,
        'e' => 15,
        'f' => 124,
        'g' => 1245,
        'h' => 125,
        'i' => 24,
        'j' => 245,
        'k' => 13,
        'l' => 123,
        'm' => 134,
        'n' => 1345,
        'o' => 135,
        'p' => 1234,
        'q' => 12345,
        'r' => 1235,
        's' => 234,
        't' => 2345,
        'u' => 136,
        'v' => 1236,
        'w' => 2456,
        'x' => 1346,
        'y' => 13456,
        'z' => 1356,
        _ => return None,
    };
    Some(BrailleCell::from_dots(dots))
}

/// Cell for a digit: 1–9 map to the letter cells a–i, 0 to j.
/// The numeric indicator is the caller's business.
pub(crate) fn digit_cell(ch: char) -> Option<BrailleCell> {
    match ch {
        '1'..='9' => letter_cell((b'a' + (ch as u8 - b'1')) as char),
        '0' => letter_cell('j'),
        _ => None,
    }
}

/// Cell for a supported punctuation character.
///
/// The question mark and the double quote share dots 236, the usual
/// English-braille ambiguity resolved by position in print.
fn punctuation_cell(ch: char) -> Option<BrailleCell> {
    let dots = match ch {
        ',' => 2,
        ';' => 23,
        '\'' => 3,
        ':' => 25,
        '.' => 256,
        '!' => 235,
        '?' | '"' => 236,
        '-' => 36,
        '(' | ')' => 2356,
        _ => return None,
    };
    Some(BrailleCell::from_dots(dots))
}

/// Transcribe a single source character into its cell sequence.
///
/// Supported: letters (capitals get a dot-6 prefix), digits (numeric
/// indicator prefix), space, and common punctuation.  Anything else is
/// an [`TranscribeError::UnsupportedCharacter`]; whether that is fatal
/// is the caller's policy.
pub fn braille_character(ch: char) -> Result<CellsList, TranscribeError> {
    let mut cells = CellsList::new();
    match ch {
        ' ' => cells.push(BrailleCell::BLANK),
        'a'..='z' => cells.push(letter_cell(ch).unwrap()),
        'A'..='Z' => {
            cells.push(CAPITAL_INDICATOR);
            cells.push(letter_cell(ch.to_ascii_lowercase()).unwrap());
        }
        '0'..='9' => {
            cells.push(NUMERIC_INDICATOR);
            cells.push(digit_cell(ch).unwrap());
        }
        _ => match punctuation_cell(ch) {
            Some(cell) => cells.push(cell),
            None => return Err(TranscribeError::UnsupportedCharacter { ch }),
        },
    }
    Ok(cells)
}

/// Transcribe a whole word: the ordered concatenation of
/// [`braille_character`] over every character.  The empty string yields
/// an empty list.
pub fn braille_word(word: &str) -> Result<CellsList, TranscribeError> {
    let mut cells = CellsList::new();
    for ch in word.chars() {
        cells.append(braille_character(ch)?);
    }
    Ok(cells)
}

/// Lossy variant of [`braille_word`]: unsupported characters are
/// replaced by the blank cell and reported through the `log` facade.
pub fn braille_word_lossy(word: &str) -> CellsList {
    let mut cells = CellsList::new();
    for ch in word.chars() {
        match braille_character(ch) {
            Ok(chunk) => cells.append(chunk),
            Err(TranscribeError::UnsupportedCharacter { ch }) => {
                log::warn!("substituting blank cell for unsupported character {ch:?}");
                cells.push(BrailleCell::BLANK);
            }
        }
    }
    cells
}
