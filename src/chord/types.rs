//! Chord analysis type definitions

use super::function::HarmonicFunction;
use super::pitch::{NoteName, PitchClass};
use crate::structure::Genre;
use serde::{Deserialize, Serialize};

/// Coarse chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended,
    Dominant,
    Unknown,
}

impl ChordQuality {
    /// Classify a quality token.
    ///
    /// The checks run in a fixed priority order and the first match wins:
    /// diminished, augmented, suspended, dominant seventh (a `7` that is not part
    /// of `maj7`/`m7`), minor, major. `has_major_third` lets chords whose token
    /// says nothing about the third (`9`, `add9`, `6`) still count as major.
    pub fn classify(token: &str, has_major_third: bool) -> ChordQuality {
        if token.contains("dim") {
            ChordQuality::Diminished
        } else if token.contains("aug") {
            ChordQuality::Augmented
        } else if token.contains("sus") {
            ChordQuality::Suspended
        } else if token.contains('7') && !token.contains("maj7") && !token.contains("m7") {
            ChordQuality::Dominant
        } else if (token.starts_with('m') && !token.starts_with("maj"))
            || token.contains("min")
            || token.starts_with('-')
        {
            ChordQuality::Minor
        } else if token.contains("maj") || token.starts_with('M') || has_major_third {
            ChordQuality::Major
        } else {
            ChordQuality::Unknown
        }
    }
}

/// Analysis of a single chord symbol.
///
/// A symbol that cannot be parsed still produces an analysis: empty root, type and
/// notes, `Unknown` quality, zero tension and zero confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordAnalysis {
    /// Chord symbol as given
    pub symbol: String,
    /// Root note name, empty if unparsed
    pub root: String,
    /// Quality token reported by the parser (e.g. `m7`, `7sus4`)
    #[serde(rename = "type")]
    pub chord_type: String,
    pub notes: Vec<String>,
    pub quality: ChordQuality,
    /// Present only when a key was supplied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub function: Option<HarmonicFunction>,
    /// 0 (stable) to 1 (maximum pull)
    pub tension: f64,
    pub confidence: f64,
}

impl ChordAnalysis {
    /// Analysis returned for a symbol the parser did not recognize
    pub fn unrecognized(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            root: String::new(),
            chord_type: String::new(),
            notes: Vec::new(),
            quality: ChordQuality::Unknown,
            function: None,
            tension: 0.0,
            confidence: 0.0,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.confidence > 0.0
    }

    /// Pitch class of the root, `None` when the chord was not recognized
    pub fn root_class(&self) -> Option<PitchClass> {
        NoteName::parse(&self.root).map(NoteName::pitch_class)
    }
}

/// Optional context for [`ChordAnalyzer::analyze`](super::ChordAnalyzer::analyze)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisContext {
    /// Tonal center, e.g. `"C"` or `"Am"`
    pub key: Option<String>,
    /// Chords heard before this one. Informational; no rule reads it yet.
    pub previous_chords: Vec<String>,
    pub genre: Option<Genre>,
}

impl AnalysisContext {
    pub fn in_key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_cascade() {
        assert_eq!(ChordQuality::classify("dim7", false), ChordQuality::Diminished);
        assert_eq!(ChordQuality::classify("aug7", true), ChordQuality::Augmented);
        assert_eq!(ChordQuality::classify("7sus4", false), ChordQuality::Suspended);
        assert_eq!(ChordQuality::classify("7", true), ChordQuality::Dominant);
        assert_eq!(ChordQuality::classify("7b9", true), ChordQuality::Dominant);
        assert_eq!(ChordQuality::classify("maj7", true), ChordQuality::Major);
        assert_eq!(ChordQuality::classify("m7", false), ChordQuality::Minor);
        assert_eq!(ChordQuality::classify("m7b5", false), ChordQuality::Minor);
        assert_eq!(ChordQuality::classify("m", false), ChordQuality::Minor);
        assert_eq!(ChordQuality::classify("M", true), ChordQuality::Major);
        assert_eq!(ChordQuality::classify("9", true), ChordQuality::Major);
        assert_eq!(ChordQuality::classify("5", false), ChordQuality::Unknown);
        assert_eq!(ChordQuality::classify("11", false), ChordQuality::Unknown);
    }

    #[test]
    fn test_unrecognized_analysis() {
        let analysis = ChordAnalysis::unrecognized("Q#");
        assert_eq!(analysis.symbol, "Q#");
        assert!(analysis.root.is_empty());
        assert!(analysis.notes.is_empty());
        assert_eq!(analysis.quality, ChordQuality::Unknown);
        assert_eq!(analysis.tension, 0.0);
        assert!(!analysis.is_recognized());
        assert!(analysis.root_class().is_none());
    }
}
