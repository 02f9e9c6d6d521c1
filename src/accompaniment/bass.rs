//! Bass line generation from a chord progression.
//!
//! Each chord occupies one measure starting at `index * beats_per_measure`.
//! Chords the parser does not recognize produce no notes.

use super::types::{BassLineOptions, BassNote, BassStyle};
use crate::chord::{ChordParser, NoteName, ParsedChord, SymbolChordParser};
use crate::error::TheoryError;
use log::debug;

/// Stateless bass line generator, generic over the chord parser
#[derive(Debug, Clone, Default)]
pub struct BassLineGenerator<P = SymbolChordParser> {
    parser: P,
}

impl BassLineGenerator<SymbolChordParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ChordParser> BassLineGenerator<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Generate a bass line for `chords`.
    ///
    /// # Example
    /// ```rust
    /// use jam_theory::accompaniment::{BassLineGenerator, BassLineOptions};
    ///
    /// let notes = BassLineGenerator::new()
    ///     .generate(&["C", "G"], &BassLineOptions::default())
    ///     .unwrap();
    ///
    /// assert_eq!(notes.len(), 2);
    /// assert_eq!((notes[0].note.as_str(), notes[0].time, notes[0].duration), ("C2", 0.0, 4.0));
    /// assert_eq!((notes[1].note.as_str(), notes[1].time, notes[1].duration), ("G2", 4.0, 4.0));
    /// ```
    pub fn generate<S: AsRef<str>>(
        &self,
        chords: &[S],
        options: &BassLineOptions,
    ) -> Result<Vec<BassNote>, TheoryError> {
        options.validate()?;

        let beats = options.beats_per_measure;
        let mut notes = Vec::new();

        for (index, symbol) in chords.iter().enumerate() {
            let chord = match self.parser.parse(symbol.as_ref()) {
                Some(chord) => chord,
                None => {
                    debug!("skipping unrecognized chord {:?} in bass line", symbol.as_ref());
                    continue;
                }
            };
            let start = index as f64 * beats as f64;

            match options.style {
                BassStyle::Root => root_pattern(&chord, start, options, &mut notes),
                BassStyle::Walking => walking_pattern(&chord, start, options, &mut notes),
                BassStyle::Arpeggio => arpeggio_pattern(&chord, start, options, &mut notes),
                BassStyle::Octave => octave_pattern(&chord, start, options, &mut notes),
            }
        }

        Ok(notes)
    }
}

fn note_at(name: NoteName, octave: u8) -> String {
    format!("{}{}", name, octave)
}

fn root_pattern(chord: &ParsedChord, start: f64, options: &BassLineOptions, out: &mut Vec<BassNote>) {
    out.push(BassNote {
        note: note_at(chord.root, options.octave),
        time: start,
        duration: options.beats_per_measure as f64,
        velocity: 0.8,
    });
}

/// Cycle through the chord tones, one per beat. Needs at least a triad.
fn walking_pattern(
    chord: &ParsedChord,
    start: f64,
    options: &BassLineOptions,
    out: &mut Vec<BassNote>,
) {
    let tones = &chord.notes;
    if tones.len() < 3 {
        return;
    }

    for beat in 0..options.beats_per_measure {
        out.push(BassNote {
            note: note_at(tones[beat as usize % tones.len()], options.octave),
            time: start + beat as f64,
            duration: 1.0,
            velocity: if beat == 0 { 0.9 } else { 0.7 },
        });
    }
}

/// Root on beat 1; the third listed tone (the fifth of a triad) on beat 3.
fn arpeggio_pattern(
    chord: &ParsedChord,
    start: f64,
    options: &BassLineOptions,
    out: &mut Vec<BassNote>,
) {
    let tones: Vec<NoteName> = chord.notes.iter().take(3).copied().collect();
    let Some(&root) = tones.first() else {
        return;
    };

    out.push(BassNote {
        note: note_at(root, options.octave),
        time: start,
        duration: 1.0,
        velocity: 0.85,
    });

    if tones.len() >= 3 {
        out.push(BassNote {
            note: note_at(tones[2], options.octave),
            time: start + 2.0,
            duration: 1.0,
            velocity: 0.75,
        });
    }
}

fn octave_pattern(chord: &ParsedChord, start: f64, options: &BassLineOptions, out: &mut Vec<BassNote>) {
    out.push(BassNote {
        note: note_at(chord.root, options.octave),
        time: start,
        duration: 1.0,
        velocity: 0.9,
    });
    out.push(BassNote {
        note: note_at(chord.root, options.octave + 1),
        time: start + 2.0,
        duration: 1.0,
        velocity: 0.75,
    });
}
