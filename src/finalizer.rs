//! Rewrite a draft BSR tree into its finalized form in one forward
//! pass.  The draft comes from the upstream pagination pass with line
//! and page breaks already decided; this pass settles *placement*:
//!
//! - each page keeps at most one page heading, music heading and foot
//!   notes block;
//! - the first key and time seen while a music heading is the active
//!   context become heading attributes, later ones stay inline in the
//!   current line as change events;
//! - tempi always stay inline in the current line;
//! - transcription notes are hoisted to the score.
//!
//! The finalized tree is built fresh, element by element; the draft is
//! never mutated.  A malformed draft (a loose change event with nowhere
//! to go, a duplicated heading block) aborts the pass with a diagnostic
//! naming the offending element and its input line — no partial tree is
//! returned.

use thiserror::Error;

use crate::model::{
    BsrKey, BsrLine, BsrLineElement, BsrMeasure, BsrMeasureElement, BsrPage, BsrPageElement,
    BsrScore, BsrTime,
};

/// Structural error in the draft tree.  These indicate a bug in the
/// upstream pass, not a user mistake, and surface all the way up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinalizeError {
    #[error("{kind} element at input line {input_line} has no current line to attach to")]
    NoCurrentLine { kind: &'static str, input_line: usize },
    #[error("second page heading on one page, at input line {input_line}")]
    DuplicatePageHeading { input_line: usize },
    #[error("second music heading on one page, at input line {input_line}")]
    DuplicateMusicHeading { input_line: usize },
    #[error("second foot notes block on one page, at input line {input_line}")]
    DuplicateFootNotes { input_line: usize },
}

/// The finalization pass.  One instance processes exactly one draft:
/// `finalize` consumes the finalizer, so it cannot be re-entered.
#[derive(Debug, Default)]
pub struct BsrFinalizer;

/// Traversal cursor for one page.  Headings and lines are addressed by
/// index into the page under construction; the indices are cleared at
/// page entry and superseded as siblings enter.
#[derive(Debug, Default)]
struct PageCursor {
    page_heading_seen: bool,
    foot_notes_seen: bool,
    /// Index of the music heading in the new page's elements.  Stays
    /// bound until the page ends or another heading enters, so keys and
    /// times visited after the heading can still fill its slots.
    music_heading: Option<usize>,
    /// Index of the current line in the new page's elements.
    current_line: Option<usize>,
}

impl BsrFinalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite `draft` into a finalized score.
    pub fn finalize(self, draft: &BsrScore) -> Result<BsrScore, FinalizeError> {
        let mut finalized = BsrScore::new(draft.info.clone());
        finalized.transcription_notes = draft.transcription_notes.clone();

        for draft_page in &draft.pages {
            let page = finalize_page(draft_page, &mut finalized)?;
            finalized.pages.push(page);
        }
        Ok(finalized)
    }
}

fn finalize_page(
    draft_page: &BsrPage,
    score: &mut BsrScore,
) -> Result<BsrPage, FinalizeError> {
    let mut page = BsrPage::new();
    let mut cursor = PageCursor::default();

    for element in &draft_page.elements {
        match element {
            BsrPageElement::PageHeading(heading) => {
                if cursor.page_heading_seen {
                    return Err(FinalizeError::DuplicatePageHeading {
                        input_line: heading.input_line,
                    });
                }
                cursor.page_heading_seen = true;
                page.elements.push(BsrPageElement::PageHeading(heading.clone()));
            }
            BsrPageElement::MusicHeading(heading) => {
                if cursor.music_heading.is_some() {
                    return Err(FinalizeError::DuplicateMusicHeading {
                        input_line: heading.input_line,
                    });
                }
                cursor.music_heading = Some(page.elements.len());
                page.elements.push(BsrPageElement::MusicHeading(heading.clone()));
            }
            BsrPageElement::FootNotes(notes) => {
                if cursor.foot_notes_seen {
                    return Err(FinalizeError::DuplicateFootNotes {
                        input_line: notes.input_line,
                    });
                }
                cursor.foot_notes_seen = true;
                page.elements.push(BsrPageElement::FootNotes(notes.clone()));
            }
            BsrPageElement::Line(draft_line) => {
                let line = finalize_line(draft_line, &mut page, &cursor, score)?;
                cursor.current_line = Some(page.elements.len());
                page.elements.push(BsrPageElement::Line(line));
            }
            BsrPageElement::Key(key) => {
                if !heading_takes_key(&mut page, &cursor, key) {
                    append_to_current_line(
                        &mut page,
                        &cursor,
                        BsrLineElement::Key(key.clone()),
                        "key",
                        key.input_line,
                    )?;
                }
            }
            BsrPageElement::Time(time) => {
                if !heading_takes_time(&mut page, &cursor, time) {
                    append_to_current_line(
                        &mut page,
                        &cursor,
                        BsrLineElement::Time(time.clone()),
                        "time",
                        time.input_line,
                    )?;
                }
            }
            BsrPageElement::Tempo(tempo) => {
                // Never a heading attribute.
                append_to_current_line(
                    &mut page,
                    &cursor,
                    BsrLineElement::Tempo(tempo.clone()),
                    "tempo",
                    tempo.input_line,
                )?;
            }
        }
    }
    Ok(page)
}

/// Rebuild one line.  Measures are appended to the line as they enter
/// and leaf elements fill the measure in place, so a key, time or tempo
/// pulled out of a measure lands inline *after* that measure.
fn finalize_line(
    draft_line: &BsrLine,
    page: &mut BsrPage,
    cursor: &PageCursor,
    score: &mut BsrScore,
) -> Result<BsrLine, FinalizeError> {
    let mut line = BsrLine::new();

    for element in &draft_line.elements {
        match element {
            BsrLineElement::Measure(draft_measure) => {
                line.elements.push(BsrLineElement::Measure(BsrMeasure::new(
                    draft_measure.print_number,
                    draft_measure.input_line,
                )));
                let measure_idx = line.elements.len() - 1;

                for me in &draft_measure.elements {
                    match me {
                        BsrMeasureElement::Key(key) => {
                            if !heading_takes_key(page, cursor, key) {
                                line.elements.push(BsrLineElement::Key(key.clone()));
                            }
                        }
                        BsrMeasureElement::Time(time) => {
                            if !heading_takes_time(page, cursor, time) {
                                line.elements.push(BsrLineElement::Time(time.clone()));
                            }
                        }
                        BsrMeasureElement::Tempo(tempo) => {
                            line.elements.push(BsrLineElement::Tempo(tempo.clone()));
                        }
                        BsrMeasureElement::TranscriptionNotes(notes) => {
                            score.transcription_notes.push(notes.clone());
                        }
                        leaf => {
                            if let BsrLineElement::Measure(measure) =
                                &mut line.elements[measure_idx]
                            {
                                measure.elements.push(leaf.clone());
                            }
                        }
                    }
                }
            }
            BsrLineElement::Key(key) => {
                if !heading_takes_key(page, cursor, key) {
                    line.elements.push(BsrLineElement::Key(key.clone()));
                }
            }
            BsrLineElement::Time(time) => {
                if !heading_takes_time(page, cursor, time) {
                    line.elements.push(BsrLineElement::Time(time.clone()));
                }
            }
            BsrLineElement::Tempo(tempo) => {
                line.elements.push(BsrLineElement::Tempo(tempo.clone()));
            }
        }
    }
    Ok(line)
}

/// Store `key` in the bound music heading if its key slot is still
/// empty.  Returns whether the heading took it.
fn heading_takes_key(page: &mut BsrPage, cursor: &PageCursor, key: &BsrKey) -> bool {
    if let Some(idx) = cursor.music_heading {
        if let BsrPageElement::MusicHeading(heading) = &mut page.elements[idx] {
            if heading.key.is_none() {
                heading.key = Some(key.clone());
                return true;
            }
        }
    }
    false
}

/// Store `time` in the bound music heading if its time slot is still
/// empty.  Returns whether the heading took it.
fn heading_takes_time(page: &mut BsrPage, cursor: &PageCursor, time: &BsrTime) -> bool {
    if let Some(idx) = cursor.music_heading {
        if let BsrPageElement::MusicHeading(heading) = &mut page.elements[idx] {
            if heading.time.is_none() {
                heading.time = Some(time.clone());
                return true;
            }
        }
    }
    false
}

/// Append a change event to the page's current line, or fail with a
/// diagnostic when no line is bound yet.
fn append_to_current_line(
    page: &mut BsrPage,
    cursor: &PageCursor,
    element: BsrLineElement,
    kind: &'static str,
    input_line: usize,
) -> Result<(), FinalizeError> {
    let idx = cursor
        .current_line
        .ok_or(FinalizeError::NoCurrentLine { kind, input_line })?;
    if let BsrPageElement::Line(line) = &mut page.elements[idx] {
        line.elements.push(element);
    }
    Ok(())
}
