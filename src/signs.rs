//! Fixed cell tables for musical signs (accidentals, clefs, note values,
//! octave marks, numbers), shared by the model's `cells()` methods.
//!
//! The patterns follow standard braille music transcription.  They are
//! pinned as literal fixtures in the tests below; any divergence from a
//! reference transcription table is a compatibility concern to be
//! resolved against that table, not silently edited here.

use crate::alphabet::{digit_cell, NUMERIC_INDICATOR};
use crate::cell::{BrailleCell, CellsList};
use crate::model::{BsrBarlineKind, BsrClefKind, BsrNoteValue, NoteStep};

// ── Accidentals ─────────────────────────────────────────────────────
pub const SHARP: BrailleCell = BrailleCell::from_dots(146);
pub const FLAT: BrailleCell = BrailleCell::from_dots(126);
pub const NATURAL: BrailleCell = BrailleCell::from_dots(16);

/// Augmentation dot, appended once per dot after a note sign.
pub const AUGMENTATION_DOT: BrailleCell = BrailleCell::from_dots(3);

/// The "=" of a metronome marking (e.g. quarter = 120).
pub const METRONOME_EQUALS: BrailleCell = BrailleCell::from_dots(2356);

// ── Clefs ───────────────────────────────────────────────────────────
// Three-cell clef signs: a common 345 prefix, the clef-specific middle
// cell, and the 123 terminator.
const CLEF_PREFIX: BrailleCell = BrailleCell::from_dots(345);
const CLEF_SUFFIX: BrailleCell = BrailleCell::from_dots(123);

/// The three-cell sign for a clef.
pub fn clef_cells(kind: BsrClefKind) -> CellsList {
    let middle = match kind {
        BsrClefKind::Treble => BrailleCell::from_dots(34),
        BsrClefKind::Bass => BrailleCell::from_dots(3456),
        BsrClefKind::Alto => BrailleCell::from_dots(346),
    };
    [CLEF_PREFIX, middle, CLEF_SUFFIX].into_iter().collect()
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Upper digit cell (the letter cells a–j), without numeric indicator.
fn upper_digit(d: u32) -> BrailleCell {
    debug_assert!(d <= 9);
    digit_cell(char::from_digit(d, 10).unwrap_or('0')).unwrap_or(BrailleCell::BLANK)
}

/// Lower digit cell: the upper pattern dropped one row
/// (dots 1→2, 2→3, 4→5, 5→6), used for time-signature denominators.
fn lower_digit(d: u32) -> BrailleCell {
    let dots = match d {
        1 => 2,
        2 => 23,
        3 => 25,
        4 => 256,
        5 => 26,
        6 => 235,
        7 => 2356,
        8 => 236,
        9 => 35,
        _ => 356, // 0
    };
    BrailleCell::from_dots(dots)
}

fn decimal_digits(n: u32) -> Vec<u32> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push(rest % 10);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// A whole number: one numeric indicator followed by its upper digits.
pub fn number_cells(n: u32) -> CellsList {
    let mut cells = CellsList::new();
    cells.push(NUMERIC_INDICATOR);
    for d in decimal_digits(n) {
        cells.push(upper_digit(d));
    }
    cells
}

/// A number in lower cells, no indicator (time-signature denominators).
pub fn lower_number_cells(n: u32) -> CellsList {
    decimal_digits(n).into_iter().map(lower_digit).collect()
}

// ── Key and time signatures ─────────────────────────────────────────

/// Key-signature cells from a count of fifths: up to three accidentals
/// repeat the sign; four or more use a number followed by one sign.
/// Zero fifths renders nothing.
pub fn key_signature_cells(fifths: i32) -> CellsList {
    let sign = if fifths >= 0 { SHARP } else { FLAT };
    let count = fifths.unsigned_abs();
    let mut cells = CellsList::new();
    if count == 0 {
        return cells;
    }
    if count <= 3 {
        for _ in 0..count {
            cells.push(sign);
        }
    } else {
        cells.append(number_cells(count));
        cells.push(sign);
    }
    cells
}

/// Time-signature cells: numeric indicator, upper-cell numerator,
/// lower-cell denominator (6/8 renders as ⠼⠋⠦).
pub fn time_signature_cells(beats: u32, beat_type: u32) -> CellsList {
    let mut cells = number_cells(beats);
    cells.append(lower_number_cells(beat_type));
    cells
}

// ── Notes and rests ─────────────────────────────────────────────────

/// Eighth-form base pattern for a pitch step.
fn step_base(step: NoteStep) -> u32 {
    match step {
        NoteStep::C => 145,
        NoteStep::D => 15,
        NoteStep::E => 124,
        NoteStep::F => 1245,
        NoteStep::G => 125,
        NoteStep::A => 24,
        NoteStep::B => 245,
    }
}

/// The note sign for a pitch step and value.  The eighth form is the
/// base; a quarter adds dot 6, a half adds dot 3, a whole adds both.
pub fn note_cell(step: NoteStep, value: BsrNoteValue) -> BrailleCell {
    let mut pattern = BrailleCell::from_dots(step_base(step)).pattern();
    let (dot3, dot6) = match value {
        BsrNoteValue::Whole => (true, true),
        BsrNoteValue::Half => (true, false),
        BsrNoteValue::Quarter => (false, true),
        BsrNoteValue::Eighth => (false, false),
    };
    if dot3 {
        pattern |= 1u8 << 2;
    }
    if dot6 {
        pattern |= 1u8 << 5;
    }
    BrailleCell::from_pattern(pattern).unwrap_or(BrailleCell::BLANK)
}

/// The rest sign for a value.
pub fn rest_cell(value: BsrNoteValue) -> BrailleCell {
    let dots = match value {
        BsrNoteValue::Whole => 134,
        BsrNoteValue::Half => 136,
        BsrNoteValue::Quarter => 1236,
        BsrNoteValue::Eighth => 1346,
    };
    BrailleCell::from_dots(dots)
}

/// Octave mark preceding a note, for octaves 1–7 (octave 4 holds
/// middle C).  Octaves outside the marked range get no mark.
pub fn octave_mark(octave: i32) -> Option<BrailleCell> {
    let dots = match octave {
        1 => 4,
        2 => 45,
        3 => 456,
        4 => 5,
        5 => 46,
        6 => 56,
        7 => 6,
        _ => return None,
    };
    Some(BrailleCell::from_dots(dots))
}

// ── Barlines ────────────────────────────────────────────────────────

/// Barline cells.  A regular barline renders no cells of its own (the
/// inter-measure blank is the line's separator); final and sectional
/// double bars have explicit signs.
pub fn barline_cells(kind: BsrBarlineKind) -> CellsList {
    match kind {
        BsrBarlineKind::Regular => CellsList::new(),
        BsrBarlineKind::Final => {
            [BrailleCell::from_dots(126), BrailleCell::from_dots(13)]
                .into_iter()
                .collect()
        }
        BsrBarlineKind::SectionalDouble => [
            BrailleCell::from_dots(126),
            BrailleCell::from_dots(13),
            BrailleCell::from_dots(3),
        ]
        .into_iter()
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pinned_number_fixtures() {
        assert_eq!(number_cells(0).to_string(), "⠼⠚");
        assert_eq!(number_cells(7).to_string(), "⠼⠛");
        assert_eq!(number_cells(120).to_string(), "⠼⠁⠃⠚");
    }

    #[test]
    fn pinned_time_signature_fixtures() {
        // 6/8 is the classic reference example.
        assert_eq!(time_signature_cells(6, 8).to_string(), "⠼⠋⠦");
        assert_eq!(time_signature_cells(3, 4).to_string(), "⠼⠉⠲");
        assert_eq!(time_signature_cells(12, 8).to_string(), "⠼⠁⠃⠦");
    }

    #[test]
    fn key_signatures_repeat_up_to_three_accidentals() {
        assert!(key_signature_cells(0).is_empty());
        assert_eq!(key_signature_cells(2).to_string(), "⠩⠩");
        assert_eq!(key_signature_cells(-3).to_string(), "⠣⠣⠣");
    }

    #[test]
    fn large_key_signatures_use_a_count() {
        assert_eq!(key_signature_cells(4).to_string(), "⠼⠙⠩");
        assert_eq!(key_signature_cells(-5).to_string(), "⠼⠑⠣");
    }

    #[test]
    fn pinned_note_fixtures() {
        // Eighth C is the bare base pattern; longer values add dots 6/3.
        assert_eq!(note_cell(NoteStep::C, BsrNoteValue::Eighth).to_char(), '⠙');
        assert_eq!(note_cell(NoteStep::C, BsrNoteValue::Quarter).to_char(), '⠹');
        assert_eq!(note_cell(NoteStep::C, BsrNoteValue::Half).to_char(), '⠝');
        assert_eq!(note_cell(NoteStep::C, BsrNoteValue::Whole).to_char(), '⠽');
        assert_eq!(note_cell(NoteStep::A, BsrNoteValue::Quarter).to_char(), '⠪');
    }

    #[test]
    fn pinned_rest_fixtures() {
        assert_eq!(rest_cell(BsrNoteValue::Whole).to_char(), '⠍');
        assert_eq!(rest_cell(BsrNoteValue::Half).to_char(), '⠥');
        assert_eq!(rest_cell(BsrNoteValue::Quarter).to_char(), '⠧');
        assert_eq!(rest_cell(BsrNoteValue::Eighth).to_char(), '⠭');
    }

    #[test]
    fn octave_marks_cover_the_marked_range() {
        assert_eq!(octave_mark(4), Some(BrailleCell::from_dots(5)));
        assert_eq!(octave_mark(1), Some(BrailleCell::from_dots(4)));
        assert_eq!(octave_mark(7), Some(BrailleCell::from_dots(6)));
        assert_eq!(octave_mark(0), None);
        assert_eq!(octave_mark(8), None);
    }

    #[test]
    fn pinned_clef_fixtures() {
        assert_eq!(clef_cells(BsrClefKind::Treble).to_string(), "⠜⠌⠇");
        assert_eq!(clef_cells(BsrClefKind::Bass).to_string(), "⠜⠼⠇");
        assert_eq!(clef_cells(BsrClefKind::Alto).to_string(), "⠜⠬⠇");
    }

    #[test]
    fn pinned_barline_fixtures() {
        assert!(barline_cells(BsrBarlineKind::Regular).is_empty());
        assert_eq!(barline_cells(BsrBarlineKind::Final).to_string(), "⠣⠅");
        assert_eq!(barline_cells(BsrBarlineKind::SectionalDouble).to_string(), "⠣⠅⠄");
    }
}
