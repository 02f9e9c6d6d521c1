//! Tension models
//!
//! Two tables are kept side by side and are not interchangeable:
//! - [`BasicTensionModel`] scores the coarse [`ChordQuality`] and adds bonuses for
//!   9th/11th/13th extensions. This is what [`ChordAnalyzer`](super::ChordAnalyzer)
//!   reports.
//! - [`ExtendedQualityTensionModel`] scores the literal chord quality
//!   (`dominant7`, `halfDiminished7`, ...) from a more granular table.

use super::parser::ParsedChord;
use super::types::ChordQuality;
use serde::{Deserialize, Serialize};

/// Strategy scoring how much harmonic pull a chord carries, in 0..=1
pub trait TensionModel {
    fn tension(&self, chord: &ParsedChord) -> f64;
}

/// Quality-based tension with additive extension bonuses, clipped to 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTensionModel;

impl BasicTensionModel {
    pub fn base_tension(quality: ChordQuality) -> f64 {
        match quality {
            ChordQuality::Major => 0.2,
            ChordQuality::Minor => 0.4,
            ChordQuality::Dominant => 0.7,
            ChordQuality::Diminished => 0.9,
            ChordQuality::Augmented => 0.85,
            ChordQuality::Suspended => 0.5,
            ChordQuality::Unknown => 0.5,
        }
    }

    /// Tension for a quality token already classified as `quality`.
    pub fn tension_for(quality: ChordQuality, token: &str) -> f64 {
        let mut tension = Self::base_tension(quality);

        if token.contains('9') {
            tension += 0.1;
        }
        if token.contains("11") {
            tension += 0.15;
        }
        if token.contains("13") {
            tension += 0.1;
        }

        tension.min(1.0)
    }
}

impl TensionModel for BasicTensionModel {
    fn tension(&self, chord: &ParsedChord) -> f64 {
        let quality = ChordQuality::classify(&chord.quality, chord.has_major_third());
        Self::tension_for(quality, &chord.quality)
    }
}

/// Literal chord qualities scored by [`ExtendedQualityTensionModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
    Diminished7,
    HalfDiminished7,
    Augmented7,
    Sus2,
    Sus4,
    Add9,
    Add11,
    Major9,
    Minor9,
    Major11,
    Minor11,
    Major13,
    Minor13,
    #[serde(rename = "6")]
    Sixth,
    Minor6,
    Power,
}

impl ExtendedQuality {
    const ALL: [ExtendedQuality; 23] = [
        ExtendedQuality::Major,
        ExtendedQuality::Minor,
        ExtendedQuality::Diminished,
        ExtendedQuality::Augmented,
        ExtendedQuality::Dominant7,
        ExtendedQuality::Major7,
        ExtendedQuality::Minor7,
        ExtendedQuality::Diminished7,
        ExtendedQuality::HalfDiminished7,
        ExtendedQuality::Augmented7,
        ExtendedQuality::Sus2,
        ExtendedQuality::Sus4,
        ExtendedQuality::Add9,
        ExtendedQuality::Add11,
        ExtendedQuality::Major9,
        ExtendedQuality::Minor9,
        ExtendedQuality::Major11,
        ExtendedQuality::Minor11,
        ExtendedQuality::Major13,
        ExtendedQuality::Minor13,
        ExtendedQuality::Sixth,
        ExtendedQuality::Minor6,
        ExtendedQuality::Power,
    ];

    /// The literal quality name, e.g. `"halfDiminished7"`
    pub fn name(self) -> &'static str {
        match self {
            ExtendedQuality::Major => "major",
            ExtendedQuality::Minor => "minor",
            ExtendedQuality::Diminished => "diminished",
            ExtendedQuality::Augmented => "augmented",
            ExtendedQuality::Dominant7 => "dominant7",
            ExtendedQuality::Major7 => "major7",
            ExtendedQuality::Minor7 => "minor7",
            ExtendedQuality::Diminished7 => "diminished7",
            ExtendedQuality::HalfDiminished7 => "halfDiminished7",
            ExtendedQuality::Augmented7 => "augmented7",
            ExtendedQuality::Sus2 => "sus2",
            ExtendedQuality::Sus4 => "sus4",
            ExtendedQuality::Add9 => "add9",
            ExtendedQuality::Add11 => "add11",
            ExtendedQuality::Major9 => "major9",
            ExtendedQuality::Minor9 => "minor9",
            ExtendedQuality::Major11 => "major11",
            ExtendedQuality::Minor11 => "minor11",
            ExtendedQuality::Major13 => "major13",
            ExtendedQuality::Minor13 => "minor13",
            ExtendedQuality::Sixth => "6",
            ExtendedQuality::Minor6 => "minor6",
            ExtendedQuality::Power => "power",
        }
    }

    /// Parse a literal quality name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|q| q.name() == name)
    }

    /// Map a [`SymbolChordParser`](super::SymbolChordParser) quality token.
    ///
    /// Tokens with no literal counterpart (`7sus4`, `7b9`, `69`, ...) map to `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        let quality = match token {
            "M" => ExtendedQuality::Major,
            "m" => ExtendedQuality::Minor,
            "dim" => ExtendedQuality::Diminished,
            "aug" => ExtendedQuality::Augmented,
            "7" => ExtendedQuality::Dominant7,
            "maj7" => ExtendedQuality::Major7,
            "m7" => ExtendedQuality::Minor7,
            "dim7" => ExtendedQuality::Diminished7,
            "m7b5" => ExtendedQuality::HalfDiminished7,
            "aug7" => ExtendedQuality::Augmented7,
            "sus2" => ExtendedQuality::Sus2,
            "sus4" => ExtendedQuality::Sus4,
            "add9" => ExtendedQuality::Add9,
            "add11" => ExtendedQuality::Add11,
            "maj9" => ExtendedQuality::Major9,
            "m9" => ExtendedQuality::Minor9,
            "11" => ExtendedQuality::Major11,
            "m11" => ExtendedQuality::Minor11,
            "maj13" | "13" => ExtendedQuality::Major13,
            "m13" => ExtendedQuality::Minor13,
            "6" => ExtendedQuality::Sixth,
            "m6" => ExtendedQuality::Minor6,
            "5" => ExtendedQuality::Power,
            _ => return None,
        };
        Some(quality)
    }
}

/// Granular tension table keyed on the literal chord quality.
///
/// # Examples
/// ```
/// use jam_theory::chord::ExtendedQualityTensionModel;
///
/// assert_eq!(ExtendedQualityTensionModel::tension_for_name("halfDiminished7"), 0.8);
/// assert_eq!(ExtendedQualityTensionModel::tension_for_name("major"), 0.0);
/// assert_eq!(ExtendedQualityTensionModel::tension_for_name("lydianDominant"), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedQualityTensionModel;

impl ExtendedQualityTensionModel {
    /// Score for anything the table does not list
    pub const UNMATCHED: f64 = 0.5;

    pub fn tension_for_quality(quality: ExtendedQuality) -> f64 {
        match quality {
            ExtendedQuality::Major => 0.0,
            ExtendedQuality::Minor => 0.2,
            ExtendedQuality::Diminished => 0.8,
            ExtendedQuality::Augmented => 0.9,
            ExtendedQuality::Dominant7 => 0.7,
            ExtendedQuality::Major7 => 0.3,
            ExtendedQuality::Minor7 => 0.4,
            ExtendedQuality::Diminished7 => 0.9,
            ExtendedQuality::HalfDiminished7 => 0.8,
            ExtendedQuality::Augmented7 => 0.95,
            ExtendedQuality::Sus2 => 0.5,
            ExtendedQuality::Sus4 => 0.6,
            ExtendedQuality::Add9 => 0.3,
            ExtendedQuality::Add11 => 0.4,
            ExtendedQuality::Major9 => 0.4,
            ExtendedQuality::Minor9 => 0.5,
            ExtendedQuality::Major11 => 0.5,
            ExtendedQuality::Minor11 => 0.6,
            ExtendedQuality::Major13 => 0.6,
            ExtendedQuality::Minor13 => 0.7,
            ExtendedQuality::Sixth => 0.2,
            ExtendedQuality::Minor6 => 0.3,
            ExtendedQuality::Power => 0.1,
        }
    }

    pub fn tension_for_name(name: &str) -> f64 {
        ExtendedQuality::from_name(name)
            .map(Self::tension_for_quality)
            .unwrap_or(Self::UNMATCHED)
    }
}

impl TensionModel for ExtendedQualityTensionModel {
    fn tension(&self, chord: &ParsedChord) -> f64 {
        ExtendedQuality::from_token(&chord.quality)
            .map(Self::tension_for_quality)
            .unwrap_or(Self::UNMATCHED)
    }
}
