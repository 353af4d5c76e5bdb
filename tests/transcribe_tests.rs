//! End-to-end tests: draft tree → finalize → line cells → encoded
//! bytes, plus JSON round trips of the model.

use braillelib::*;
use pretty_assertions::assert_eq;

fn draft_etude() -> BsrScore {
    let mut score = BsrScore::new(ScoreInfo {
        title: Some("Etude".to_string()),
        composer: Some("Czerny".to_string()),
        arranger: None,
    });
    score.pages.push(BsrPage {
        elements: vec![
            BsrPageElement::PageHeading(BsrPageHeading {
                title: "Etude".to_string(),
                page_number: 1,
                input_line: 2,
            }),
            BsrPageElement::MusicHeading(BsrMusicHeading::new(3)),
            BsrPageElement::Key(BsrKey { fifths: 2, input_line: 4 }),
            BsrPageElement::Time(BsrTime { beats: 3, beat_type: 4, input_line: 5 }),
            BsrPageElement::Line(BsrLine {
                elements: vec![BsrLineElement::Measure(BsrMeasure {
                    print_number: 1,
                    elements: vec![
                        BsrMeasureElement::Note(BsrNote {
                            pitch: Some(BsrPitch { step: NoteStep::C, octave: 4 }),
                            value: BsrNoteValue::Quarter,
                            dots: 0,
                            input_line: 10,
                        }),
                        BsrMeasureElement::Note(BsrNote {
                            pitch: None,
                            value: BsrNoteValue::Half,
                            dots: 0,
                            input_line: 11,
                        }),
                        BsrMeasureElement::Barline(BsrBarline {
                            kind: BsrBarlineKind::Final,
                            input_line: 12,
                        }),
                    ],
                    input_line: 9,
                })],
            }),
        ],
    });
    score
}

#[test]
fn heading_cells_render_key_then_time() {
    let finalized = finalize_score(&draft_etude()).unwrap();
    let heading = finalized.pages[0].music_heading().unwrap();

    // Two sharps, one blank, then 3/4.
    assert_eq!(heading.cells().to_string(), "⠩⠩⠀⠼⠉⠲");
    // The reported cells number adds the fixed trailing separator
    // blanks on top of the stored cells.
    assert_eq!(heading.cells_number(), heading.cells().cells_number() + 2);
}

#[test]
fn line_cells_feed_the_ascii_encoder() {
    let finalized = finalize_score(&draft_etude()).unwrap();
    let line = finalized.pages[0].lines().next().unwrap();
    let cells = line.cells().unwrap();

    // Octave-4 mark + quarter C, half rest, final barline.
    assert_eq!(cells.to_string(), "⠐⠹⠥⠣⠅");

    let mut bytes = Vec::new();
    write_cells(
        &cells,
        &BrailleOutputConfig::new(BrailleOutputKind::Ascii, false),
        &mut bytes,
    )
    .unwrap();
    assert_eq!(bytes, b"\"?U<K");
}

#[test]
fn words_and_numbers_join_inside_a_measure() {
    let line = BsrLine {
        elements: vec![
            BsrLineElement::Measure(BsrMeasure {
                print_number: 12,
                elements: vec![
                    BsrMeasureElement::Number(BsrNumber { value: 12, input_line: 1 }),
                    BsrMeasureElement::Words(BsrWords { text: "ab".to_string(), input_line: 2 }),
                ],
                input_line: 1,
            }),
            BsrLineElement::Measure(BsrMeasure {
                print_number: 13,
                elements: vec![BsrMeasureElement::Words(BsrWords {
                    text: "c".to_string(),
                    input_line: 3,
                })],
                input_line: 3,
            }),
        ],
    };

    // Elements join back to back inside a measure; one blank separates
    // consecutive measures on the line.
    let cells = line.cells().unwrap();
    let mut bytes = Vec::new();
    write_cells(
        &cells,
        &BrailleOutputConfig::new(BrailleOutputKind::Ascii, false),
        &mut bytes,
    )
    .unwrap();
    assert_eq!(bytes, b"#ABAB C");
}

#[test]
fn tempo_cells_render_beat_unit_equals_number() {
    let tempo = BsrTempo { beat_unit: BsrNoteValue::Quarter, bpm: 120, input_line: 6 };
    // Quarter-note sign, the equals sign, then the number.
    assert_eq!(tempo.cells().to_string(), "⠹⠶⠼⠁⠃⠚");
}

#[test]
fn foot_notes_cells_join_lines_with_one_blank() {
    let notes = BsrFootNotes {
        lines: vec!["ab".to_string(), "c".to_string()],
        input_line: 20,
    };
    assert_eq!(notes.cells().unwrap().to_string(), "⠁⠃⠀⠉");
}

#[test]
fn unsupported_text_surfaces_from_line_cells() {
    let line = BsrLine {
        elements: vec![BsrLineElement::Measure(BsrMeasure {
            print_number: 1,
            elements: vec![BsrMeasureElement::Words(BsrWords {
                text: "fermata…".to_string(),
                input_line: 7,
            })],
            input_line: 7,
        })],
    };

    assert_eq!(
        line.cells().unwrap_err(),
        TranscribeError::UnsupportedCharacter { ch: '…' }
    );
}

#[test]
fn utf8_pipeline_with_bom() {
    let cells = transcribe_word("ab").unwrap();
    let mut bytes = Vec::new();
    write_cells(
        &cells,
        &BrailleOutputConfig::new(BrailleOutputKind::Utf8, true),
        &mut bytes,
    )
    .unwrap();
    assert_eq!(
        bytes,
        vec![0xEF, 0xBB, 0xBF, 0xE2, 0xA0, 0x81, 0xE2, 0xA0, 0x83]
    );
}

#[test]
fn finalized_score_round_trips_through_json() {
    let finalized = finalize_score(&draft_etude()).unwrap();
    let json = score_to_json(&finalized).unwrap();
    let back: BsrScore = serde_json::from_str(&json).unwrap();
    assert_eq!(back, finalized);
}
