//! Accompaniment type definitions
//!
//! All times and durations are in beats from the start of the progression; a
//! scheduler maps beats onto a real clock.

use crate::error::TheoryError;
use serde::{Deserialize, Serialize};

/// Highest octave accepted for bass notes (the octave pattern plays `octave + 1`)
pub const MAX_BASS_OCTAVE: u8 = 8;

/// Longest measure either generator accepts, in beats
pub const MAX_BEATS_PER_MEASURE: u32 = 64;

fn validate_beats(beats_per_measure: u32) -> Result<(), TheoryError> {
    if beats_per_measure == 0 {
        return Err(TheoryError::OptionsError(
            "beats per measure must be at least 1".to_string(),
        ));
    }
    if beats_per_measure > MAX_BEATS_PER_MEASURE {
        return Err(TheoryError::OptionsError(format!(
            "{} beats per measure is above the maximum of {}",
            beats_per_measure, MAX_BEATS_PER_MEASURE
        )));
    }
    Ok(())
}

/// Bass pattern style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BassStyle {
    /// One whole-measure root per chord
    #[default]
    Root,
    /// Chord tones on every beat
    Walking,
    /// Root on beat 1, fifth on beat 3
    Arpeggio,
    /// Root on beat 1, root an octave up on beat 3
    Octave,
}

impl BassStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "root" => Some(BassStyle::Root),
            "walking" => Some(BassStyle::Walking),
            "arpeggio" => Some(BassStyle::Arpeggio),
            "octave" => Some(BassStyle::Octave),
            _ => None,
        }
    }
}

/// Drum pattern style (genre-named)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrumStyle {
    #[default]
    Rock,
    Pop,
    Jazz,
    Electronic,
}

impl DrumStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rock" => Some(DrumStyle::Rock),
            "pop" => Some(DrumStyle::Pop),
            "jazz" => Some(DrumStyle::Jazz),
            "electronic" => Some(DrumStyle::Electronic),
            _ => None,
        }
    }
}

/// Percussion voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drum {
    Kick,
    Snare,
    /// Also stands in for the ride cymbal in the jazz pattern
    Hihat,
}

/// A single bass note
///
/// # Fields
/// - `note`: Note name with octave, e.g. `"C2"`, `"Bb3"`
/// - `time`: Start in beats from the progression start
/// - `duration`: Length in beats, always > 0
/// - `velocity`: 0..=1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BassNote {
    pub note: String,
    pub time: f64,
    pub duration: f64,
    pub velocity: f64,
}

/// A single drum hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrumEvent {
    pub drum: Drum,
    pub time: f64,
    /// Nominal one-shot length, see [`DRUM_HIT_DURATION`](super::DRUM_HIT_DURATION)
    pub duration: f64,
    pub velocity: f64,
}

/// Options for [`BassLineGenerator::generate`](super::BassLineGenerator::generate)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BassLineOptions {
    pub style: BassStyle,
    pub octave: u8,
    /// One chord lasts one measure
    pub beats_per_measure: u32,
}

impl Default for BassLineOptions {
    fn default() -> Self {
        Self {
            style: BassStyle::Root,
            octave: 2,
            beats_per_measure: 4,
        }
    }
}

impl BassLineOptions {
    pub fn with_style(style: BassStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TheoryError> {
        validate_beats(self.beats_per_measure)?;
        if self.octave > MAX_BASS_OCTAVE {
            return Err(TheoryError::OptionsError(format!(
                "octave {} is above the maximum of {}",
                self.octave, MAX_BASS_OCTAVE
            )));
        }
        Ok(())
    }
}

/// Options for [`generate_drum_pattern`](super::generate_drum_pattern)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrumPatternOptions {
    pub style: DrumStyle,
    pub measures: u32,
    pub beats_per_measure: u32,
}

impl Default for DrumPatternOptions {
    fn default() -> Self {
        Self {
            style: DrumStyle::Rock,
            measures: 1,
            beats_per_measure: 4,
        }
    }
}

impl DrumPatternOptions {
    pub fn with_style(style: DrumStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TheoryError> {
        validate_beats(self.beats_per_measure)
    }
}
