//! Data model for the Braille Score Representation (BSR).
//!
//! A BSR tree is the score laid out for braille output: a Score holds
//! Pages, a Page holds heading blocks and Lines, a Line holds Measures
//! and inline change events, a Measure holds leaf elements.  Containment
//! is strictly nested and ordinal order within a parent is rendering
//! order.
//!
//! The same types describe both the draft tree produced by the upstream
//! pagination pass and the finalized tree produced by
//! [`crate::finalizer::BsrFinalizer`]; the finalized tree additionally
//! guarantees at most one heading block of each kind per page and keeps
//! the heading's first key/time as attributes instead of inline
//! elements.
//!
//! Every element records the line number of the originating MusicXML
//! input for diagnostics.

use serde::{Deserialize, Serialize};

use crate::alphabet::{braille_word, TranscribeError};
use crate::cell::CellsList;
use crate::signs;

/// Fixed separator overhead the downstream layout reserves after a
/// music heading, counted by `cells_number` but never stored.
const MUSIC_HEADING_TRAILING_BLANKS: usize = 2;

/// Metadata of the originating MSR score, held for cross-reference
/// only — this subsystem never traverses the MSR itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreInfo {
    /// Title of the piece
    pub title: Option<String>,
    /// Composer name
    pub composer: Option<String>,
    /// Arranger name
    pub arranger: Option<String>,
}

/// A complete BSR score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrScore {
    /// Originating MSR score metadata
    pub info: ScoreInfo,
    /// Transcriber's notes — global, not page-scoped
    pub transcription_notes: Vec<BsrTranscriptionNotes>,
    /// Ordered pages
    pub pages: Vec<BsrPage>,
}

impl BsrScore {
    /// Create an empty score bound to the given source metadata.
    pub fn new(info: ScoreInfo) -> Self {
        Self {
            info,
            transcription_notes: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Number of pages in the score.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.line_count()).sum()
    }
}

/// One page of braille output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BsrPage {
    /// Heading blocks and lines, in rendering order
    pub elements: Vec<BsrPageElement>,
}

impl BsrPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of music lines on this page.
    pub fn line_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BsrPageElement::Line(_)))
            .count()
    }

    /// The page's lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &BsrLine> {
        self.elements.iter().filter_map(|e| match e {
            BsrPageElement::Line(line) => Some(line),
            _ => None,
        })
    }

    /// The page heading, if the page carries one.
    pub fn page_heading(&self) -> Option<&BsrPageHeading> {
        self.elements.iter().find_map(|e| match e {
            BsrPageElement::PageHeading(h) => Some(h),
            _ => None,
        })
    }

    /// The music heading, if the page carries one.
    pub fn music_heading(&self) -> Option<&BsrMusicHeading> {
        self.elements.iter().find_map(|e| match e {
            BsrPageElement::MusicHeading(h) => Some(h),
            _ => None,
        })
    }

    /// The foot notes block, if the page carries one.
    pub fn foot_notes(&self) -> Option<&BsrFootNotes> {
        self.elements.iter().find_map(|e| match e {
            BsrPageElement::FootNotes(f) => Some(f),
            _ => None,
        })
    }
}

/// A page-level element.
///
/// A draft page may carry loose `Key`/`Time`/`Tempo` elements (for
/// instance a key right after a music heading); the finalizer places
/// them into the heading or the current line.  A finalized page
/// contains only heading blocks and lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BsrPageElement {
    PageHeading(BsrPageHeading),
    MusicHeading(BsrMusicHeading),
    FootNotes(BsrFootNotes),
    Line(BsrLine),
    Key(BsrKey),
    Time(BsrTime),
    Tempo(BsrTempo),
}

/// Per-page literary heading: title and page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrPageHeading {
    pub title: String,
    pub page_number: u32,
    /// Originating MusicXML input line
    pub input_line: usize,
}

impl BsrPageHeading {
    /// Title cells, one blank, then the page number.
    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        let mut cells = braille_word(&self.title)?;
        if !cells.is_empty() {
            cells.push_blanks(1);
        }
        cells.append(signs::number_cells(self.page_number));
        Ok(cells)
    }
}

/// Per-page music heading: the key and time in effect at the top of the
/// page, stored as attributes rather than inline elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrMusicHeading {
    pub key: Option<BsrKey>,
    pub time: Option<BsrTime>,
    /// Originating MusicXML input line
    pub input_line: usize,
}

impl BsrMusicHeading {
    pub fn new(input_line: usize) -> Self {
        Self { key: None, time: None, input_line }
    }

    /// The stored cells: key signature then time signature, separated
    /// by one blank when both are present.
    pub fn cells(&self) -> CellsList {
        let mut cells = CellsList::new();
        if let Some(ref key) = self.key {
            cells.append(signs::key_signature_cells(key.fifths));
        }
        if let Some(ref time) = self.time {
            if !cells.is_empty() {
                cells.push_blanks(1);
            }
            cells.append(signs::time_signature_cells(time.beats, time.beat_type));
        }
        cells
    }

    /// Reported cells number: the stored cells plus the fixed trailing
    /// separator blanks the downstream layout emits after the heading.
    /// Deliberately distinct from `cells().cells_number()`.
    pub fn cells_number(&self) -> usize {
        self.cells().cells_number() + MUSIC_HEADING_TRAILING_BLANKS
    }
}

/// Per-page foot notes block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrFootNotes {
    pub lines: Vec<String>,
    /// Originating MusicXML input line
    pub input_line: usize,
}

impl BsrFootNotes {
    /// The note lines transcribed back to back, one blank between them.
    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        let mut cells = CellsList::new();
        for (i, text) in self.lines.iter().enumerate() {
            if i > 0 {
                cells.push_blanks(1);
            }
            cells.append(braille_word(text)?);
        }
        Ok(cells)
    }
}

/// One music line: measures plus inline key/time/tempo change events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BsrLine {
    pub elements: Vec<BsrLineElement>,
}

impl BsrLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of measures on the line.
    pub fn measure_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BsrLineElement::Measure(_)))
            .count()
    }

    /// The line's measures, in order.
    pub fn measures(&self) -> impl Iterator<Item = &BsrMeasure> {
        self.elements.iter().filter_map(|e| match e {
            BsrLineElement::Measure(m) => Some(m),
            _ => None,
        })
    }

    /// The single long cell sequence for the line: element cells in
    /// order, one blank cell between consecutive elements.
    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        let mut cells = CellsList::new();
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                cells.push_blanks(1);
            }
            cells.append(element.cells()?);
        }
        Ok(cells)
    }
}

/// A line-level element: a measure, or a mid-line change event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BsrLineElement {
    Measure(BsrMeasure),
    Key(BsrKey),
    Time(BsrTime),
    Tempo(BsrTempo),
}

impl BsrLineElement {
    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        match self {
            BsrLineElement::Measure(m) => m.cells(),
            BsrLineElement::Key(k) => Ok(k.cells()),
            BsrLineElement::Time(t) => Ok(t.cells()),
            BsrLineElement::Tempo(t) => Ok(t.cells()),
        }
    }
}

/// One measure of a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrMeasure {
    /// Printed measure number
    pub print_number: u32,
    /// Leaf elements in rendering order
    pub elements: Vec<BsrMeasureElement>,
    /// Originating MusicXML input line
    pub input_line: usize,
}

impl BsrMeasure {
    pub fn new(print_number: u32, input_line: usize) -> Self {
        Self { print_number, elements: Vec::new(), input_line }
    }

    /// Element cells joined back to back, no separators.
    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        let mut cells = CellsList::new();
        for element in &self.elements {
            cells.append(element.cells()?);
        }
        Ok(cells)
    }
}

/// A measure-level element.
///
/// The full set is legal in a draft; after finalization a measure
/// contains only `Barline`, `Number`, `Words`, `Clef`, `Note` and
/// `Spaces` — keys, times and tempi move to the heading or the line,
/// transcription notes move to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BsrMeasureElement {
    Barline(BsrBarline),
    Number(BsrNumber),
    Words(BsrWords),
    Clef(BsrClef),
    Key(BsrKey),
    Time(BsrTime),
    Tempo(BsrTempo),
    Note(BsrNote),
    Spaces(BsrSpaces),
    TranscriptionNotes(BsrTranscriptionNotes),
}

impl BsrMeasureElement {
    /// Element kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BsrMeasureElement::Barline(_) => "barline",
            BsrMeasureElement::Number(_) => "number",
            BsrMeasureElement::Words(_) => "words",
            BsrMeasureElement::Clef(_) => "clef",
            BsrMeasureElement::Key(_) => "key",
            BsrMeasureElement::Time(_) => "time",
            BsrMeasureElement::Tempo(_) => "tempo",
            BsrMeasureElement::Note(_) => "note",
            BsrMeasureElement::Spaces(_) => "spaces",
            BsrMeasureElement::TranscriptionNotes(_) => "transcription notes",
        }
    }

    /// Originating MusicXML input line.
    pub fn input_line(&self) -> usize {
        match self {
            BsrMeasureElement::Barline(e) => e.input_line,
            BsrMeasureElement::Number(e) => e.input_line,
            BsrMeasureElement::Words(e) => e.input_line,
            BsrMeasureElement::Clef(e) => e.input_line,
            BsrMeasureElement::Key(e) => e.input_line,
            BsrMeasureElement::Time(e) => e.input_line,
            BsrMeasureElement::Tempo(e) => e.input_line,
            BsrMeasureElement::Note(e) => e.input_line,
            BsrMeasureElement::Spaces(e) => e.input_line,
            BsrMeasureElement::TranscriptionNotes(e) => e.input_line,
        }
    }

    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        match self {
            BsrMeasureElement::Barline(e) => Ok(e.cells()),
            BsrMeasureElement::Number(e) => Ok(e.cells()),
            BsrMeasureElement::Words(e) => e.cells(),
            BsrMeasureElement::Clef(e) => Ok(e.cells()),
            BsrMeasureElement::Key(e) => Ok(e.cells()),
            BsrMeasureElement::Time(e) => Ok(e.cells()),
            BsrMeasureElement::Tempo(e) => Ok(e.cells()),
            BsrMeasureElement::Note(e) => Ok(e.cells()),
            BsrMeasureElement::Spaces(e) => Ok(e.cells()),
            BsrMeasureElement::TranscriptionNotes(e) => e.cells(),
        }
    }
}

// ── Leaf elements ───────────────────────────────────────────────────

/// Barline styles with distinct braille signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BsrBarlineKind {
    Regular,
    Final,
    SectionalDouble,
}

/// A barline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrBarline {
    pub kind: BsrBarlineKind,
    pub input_line: usize,
}

impl BsrBarline {
    pub fn cells(&self) -> CellsList {
        signs::barline_cells(self.kind)
    }
}

/// A printed measure number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrNumber {
    pub value: u32,
    pub input_line: usize,
}

impl BsrNumber {
    pub fn cells(&self) -> CellsList {
        signs::number_cells(self.value)
    }
}

/// Literary text attached to the music (directions, rehearsal words).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrWords {
    pub text: String,
    pub input_line: usize,
}

impl BsrWords {
    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        braille_word(&self.text)
    }
}

/// Clef kinds with braille signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BsrClefKind {
    Treble,
    Bass,
    Alto,
}

/// A clef.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrClef {
    pub kind: BsrClefKind,
    pub input_line: usize,
}

impl BsrClef {
    pub fn cells(&self) -> CellsList {
        signs::clef_cells(self.kind)
    }
}

/// A key signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrKey {
    /// Number of sharps (positive) or flats (negative)
    pub fifths: i32,
    pub input_line: usize,
}

impl BsrKey {
    pub fn cells(&self) -> CellsList {
        signs::key_signature_cells(self.fifths)
    }
}

/// A time signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrTime {
    /// Numerator (e.g., 3 in 3/4)
    pub beats: u32,
    /// Denominator (e.g., 4 in 3/4)
    pub beat_type: u32,
    pub input_line: usize,
}

impl BsrTime {
    pub fn cells(&self) -> CellsList {
        signs::time_signature_cells(self.beats, self.beat_type)
    }
}

/// A tempo (metronome) indication: beat unit = bpm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrTempo {
    pub beat_unit: BsrNoteValue,
    pub bpm: u32,
    pub input_line: usize,
}

impl BsrTempo {
    /// Beat-unit note sign, the equals sign, then the number.
    pub fn cells(&self) -> CellsList {
        let mut cells = CellsList::new();
        cells.push(signs::note_cell(NoteStep::C, self.beat_unit));
        cells.push(signs::METRONOME_EQUALS);
        cells.append(signs::number_cells(self.bpm));
        cells
    }
}

/// Pitch step names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteStep {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Note values with distinct braille signs.  Shorter values re-use
/// these four shapes in standard transcription; the upstream pass maps
/// them before building the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BsrNoteValue {
    Whole,
    Half,
    Quarter,
    Eighth,
}

/// Pitch of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsrPitch {
    pub step: NoteStep,
    /// Octave number (octave 4 holds middle C)
    pub octave: i32,
}

/// A note or rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrNote {
    /// Pitch (None if this is a rest)
    pub pitch: Option<BsrPitch>,
    pub value: BsrNoteValue,
    /// Augmentation dots
    pub dots: u8,
    pub input_line: usize,
}

impl BsrNote {
    /// Octave mark (when the octave is in the marked range), the note
    /// or rest sign, then one augmentation-dot cell per dot.
    pub fn cells(&self) -> CellsList {
        let mut cells = CellsList::new();
        match self.pitch {
            Some(pitch) => {
                if let Some(mark) = signs::octave_mark(pitch.octave) {
                    cells.push(mark);
                }
                cells.push(signs::note_cell(pitch.step, self.value));
            }
            None => cells.push(signs::rest_cell(self.value)),
        }
        for _ in 0..self.dots {
            cells.push(signs::AUGMENTATION_DOT);
        }
        cells
    }
}

/// A run of blank cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrSpaces {
    pub count: usize,
    pub input_line: usize,
}

impl BsrSpaces {
    pub fn cells(&self) -> CellsList {
        let mut cells = CellsList::new();
        cells.push_blanks(self.count);
        cells
    }
}

/// A transcriber's note — hoisted to the score by the finalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrTranscriptionNotes {
    pub text: String,
    pub input_line: usize,
}

impl BsrTranscriptionNotes {
    pub fn cells(&self) -> Result<CellsList, TranscribeError> {
        braille_word(&self.text)
    }
}
