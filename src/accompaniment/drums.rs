//! Drum pattern generation
//!
//! Each style is a fixed one-measure groove repeated `measures` times, offset by
//! `measure * beats_per_measure`. Events within a measure are emitted voice by
//! voice (not sorted by time) and are never deduplicated.

use super::types::{Drum, DrumEvent, DrumPatternOptions, DrumStyle};
use crate::error::TheoryError;

/// Length given to every drum hit, in beats (a sixteenth note)
pub const DRUM_HIT_DURATION: f64 = 0.25;

fn hit(drum: Drum, time: f64, velocity: f64) -> DrumEvent {
    DrumEvent {
        drum,
        time,
        duration: DRUM_HIT_DURATION,
        velocity,
    }
}

/// Generate a drum pattern.
///
/// # Example
/// ```rust
/// use jam_theory::accompaniment::{generate_drum_pattern, Drum, DrumPatternOptions, DrumStyle};
///
/// let events = generate_drum_pattern(&DrumPatternOptions::with_style(DrumStyle::Rock)).unwrap();
///
/// let count = |drum: Drum| events.iter().filter(|e| e.drum == drum).count();
/// assert_eq!(count(Drum::Kick), 2);
/// assert_eq!(count(Drum::Snare), 2);
/// assert_eq!(count(Drum::Hihat), 4);
/// ```
pub fn generate_drum_pattern(options: &DrumPatternOptions) -> Result<Vec<DrumEvent>, TheoryError> {
    options.validate()?;

    let beats = options.beats_per_measure;
    let mut events = Vec::new();

    for measure in 0..options.measures {
        let offset = measure as f64 * beats as f64;
        match options.style {
            DrumStyle::Rock => rock(offset, beats, &mut events),
            DrumStyle::Pop => pop(offset, beats, &mut events),
            DrumStyle::Jazz => jazz(offset, beats, &mut events),
            DrumStyle::Electronic => electronic(offset, beats, &mut events),
        }
    }

    Ok(events)
}

/// Backbeat: kick on 1 and 3, snare on 2 and 4, accented quarter hi-hats
fn rock(offset: f64, beats: u32, out: &mut Vec<DrumEvent>) {
    out.push(hit(Drum::Kick, offset, 0.9));
    out.push(hit(Drum::Kick, offset + 2.0, 0.85));

    out.push(hit(Drum::Snare, offset + 1.0, 0.9));
    out.push(hit(Drum::Snare, offset + 3.0, 0.9));

    for beat in 0..beats {
        let velocity = if beat % 2 == 0 { 0.7 } else { 0.5 };
        out.push(hit(Drum::Hihat, offset + beat as f64, velocity));
    }
}

/// Lighter backbeat with steady eighth-note hi-hats
fn pop(offset: f64, beats: u32, out: &mut Vec<DrumEvent>) {
    out.push(hit(Drum::Kick, offset, 0.8));
    out.push(hit(Drum::Kick, offset + 2.0, 0.75));

    out.push(hit(Drum::Snare, offset + 1.0, 0.85));
    out.push(hit(Drum::Snare, offset + 3.0, 0.85));

    for eighth in 0..beats * 2 {
        out.push(hit(Drum::Hihat, offset + eighth as f64 * 0.5, 0.6));
    }
}

/// Soft kick, a single light snare, and a ride pattern on the hi-hat voice
fn jazz(offset: f64, beats: u32, out: &mut Vec<DrumEvent>) {
    out.push(hit(Drum::Kick, offset, 0.6));
    out.push(hit(Drum::Kick, offset + 2.0, 0.5));

    out.push(hit(Drum::Snare, offset + 1.0, 0.4));

    for beat in 0..beats {
        let velocity = if beat % 2 == 0 { 0.5 } else { 0.3 };
        out.push(hit(Drum::Hihat, offset + beat as f64, velocity));
    }
}

/// Four-on-the-floor kick with off-beat hi-hats
fn electronic(offset: f64, beats: u32, out: &mut Vec<DrumEvent>) {
    for beat in 0..beats {
        out.push(hit(Drum::Kick, offset + beat as f64, 0.9));
    }

    for beat in 0..beats {
        out.push(hit(Drum::Hihat, offset + beat as f64 + 0.5, 0.7));
    }

    out.push(hit(Drum::Snare, offset + 1.0, 0.85));
    out.push(hit(Drum::Snare, offset + 3.0, 0.85));
}
