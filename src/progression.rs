//! Progression-level scoring: voice-leading smoothness and cadence detection.

use crate::chord::{
    parse_key, AnalysisContext, ChordAnalysis, ChordAnalyzer, DiatonicFunction, FunctionMap,
    PitchClass, SevenDegreeMap,
};
use crate::error::TheoryError;
use serde::Serialize;

/// Score for a root movement of `semitones` (0..=6 after folding).
///
/// Steps and fourths/fifths score highest; repeated roots and tritones lowest.
fn movement_quality(semitones: u8) -> f64 {
    match semitones {
        0 => 0.3,
        1 => 0.5,
        2 => 0.9,
        3 => 0.7,
        4 => 0.8,
        5 => 0.95,
        6 => 0.4,
        _ => 0.6,
    }
}

/// Shortest distance around the pitch-class circle, 0..=6
fn circular_movement(from: PitchClass, to: PitchClass) -> u8 {
    let distance = to.degree_from(from);
    distance.min(12 - distance)
}

/// Mean smoothness of root movement across a progression, in 0..=1.
///
/// Progressions with fewer than two chords score a perfect 1.0. A transition
/// involving an unrecognized chord (no root) scores the default 0.6.
///
/// # Example
/// ```rust
/// use jam_theory::chord::{AnalysisContext, ChordAnalyzer};
/// use jam_theory::progression::calculate_voice_leading_quality;
///
/// let chords = ChordAnalyzer::new().analyze_progression(&["C", "F"], &AnalysisContext::default());
/// assert_eq!(calculate_voice_leading_quality(&chords), 0.95);
/// assert_eq!(calculate_voice_leading_quality(&chords[..1]), 1.0);
/// ```
pub fn calculate_voice_leading_quality(progression: &[ChordAnalysis]) -> f64 {
    if progression.len() < 2 {
        return 1.0;
    }

    let total: f64 = progression
        .windows(2)
        .map(|pair| match (pair[0].root_class(), pair[1].root_class()) {
            (Some(from), Some(to)) => movement_quality(circular_movement(from, to)),
            _ => movement_quality(u8::MAX),
        })
        .sum();

    total / (progression.len() - 1) as f64
}

/// Diatonic function of a chord in `key`; unrecognized chords are `Chromatic`.
fn diatonic_function(chord: &ChordAnalysis, key: PitchClass) -> DiatonicFunction {
    chord
        .root_class()
        .map(|root| SevenDegreeMap.function_of(root, key))
        .unwrap_or(DiatonicFunction::Chromatic)
}

/// Whether a progression cadences to the tonic of `key`.
///
/// True when the last chord is the tonic, or when the penultimate chord is the
/// dominant (an authentic cadence, whatever the last chord is). Fewer than two
/// chords never resolve. Uses the seven-degree diatonic map.
pub fn analyze_progression_resolves(
    progression: &[ChordAnalysis],
    key: &str,
) -> Result<bool, TheoryError> {
    let tonic = parse_key(key).ok_or_else(|| TheoryError::KeyError(key.to_string()))?;

    let (penultimate, last) = match progression {
        [.., penultimate, last] => (penultimate, last),
        _ => return Ok(false),
    };

    if diatonic_function(last, tonic) == DiatonicFunction::Tonic {
        return Ok(true);
    }

    Ok(diatonic_function(penultimate, tonic) == DiatonicFunction::Dominant)
}

/// Per-chord analyses plus progression-level scores
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionAnalysis {
    pub key: String,
    pub chords: Vec<ChordAnalysis>,
    pub voice_leading_quality: f64,
    pub resolves_to_tonic: bool,
}

impl ProgressionAnalysis {
    /// Score already-analyzed chords
    pub fn from_chords(chords: Vec<ChordAnalysis>, key: &str) -> Result<Self, TheoryError> {
        let resolves_to_tonic = analyze_progression_resolves(&chords, key)?;
        let voice_leading_quality = calculate_voice_leading_quality(&chords);

        Ok(Self {
            key: key.to_string(),
            chords,
            voice_leading_quality,
            resolves_to_tonic,
        })
    }

    /// Average tension of the recognized chords, 0.0 if there are none
    pub fn average_tension(&self) -> f64 {
        let recognized: Vec<f64> = self
            .chords
            .iter()
            .filter(|c| c.is_recognized())
            .map(|c| c.tension)
            .collect();
        if recognized.is_empty() {
            return 0.0;
        }
        recognized.iter().sum::<f64>() / recognized.len() as f64
    }
}

/// Analyze chord symbols in `key` and score the progression.
///
/// # Example
/// ```rust
/// use jam_theory::analyze_progression_in_key;
///
/// let analysis = analyze_progression_in_key(&["Am", "Dm", "G", "C"], "C").unwrap();
/// assert!(analysis.resolves_to_tonic);
/// assert_eq!(analysis.chords.len(), 4);
///
/// let open = analyze_progression_in_key(&["C", "F"], "C").unwrap();
/// assert!(!open.resolves_to_tonic);
/// ```
pub fn analyze_progression_in_key<S: AsRef<str>>(
    chords: &[S],
    key: &str,
) -> Result<ProgressionAnalysis, TheoryError> {
    let analyses = ChordAnalyzer::new().analyze_progression(chords, &AnalysisContext::in_key(key));
    ProgressionAnalysis::from_chords(analyses, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(chords: &[&str]) -> Vec<ChordAnalysis> {
        ChordAnalyzer::new().analyze_progression(chords, &AnalysisContext::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_voice_leading_short_progressions() {
        assert_eq!(calculate_voice_leading_quality(&[]), 1.0);
        assert_eq!(calculate_voice_leading_quality(&analyze(&["C"])), 1.0);
        assert_eq!(calculate_voice_leading_quality(&analyze(&["garbage"])), 1.0);
    }

    #[test]
    fn test_voice_leading_table() {
        // C→C 0, C→Db 1, C→D 2, C→Eb 3, C→E 4, C→F 5, C→F# 6
        let expected = [
            ("C", 0.3),
            ("Db", 0.5),
            ("D", 0.9),
            ("Eb", 0.7),
            ("E", 0.8),
            ("F", 0.95),
            ("F#", 0.4),
        ];
        for (target, score) in expected {
            let chords = analyze(&["C", target]);
            assert_eq!(calculate_voice_leading_quality(&chords), score, "C -> {}", target);
        }
    }

    #[test]
    fn test_voice_leading_folds_large_intervals() {
        // C→G is 7 up, folded to 5
        assert_eq!(calculate_voice_leading_quality(&analyze(&["C", "G"])), 0.95);
        // C→B is 11 up, folded to 1
        assert_eq!(calculate_voice_leading_quality(&analyze(&["C", "B"])), 0.5);
    }

    #[test]
    fn test_voice_leading_mean() {
        // C→F 0.95, F→G 0.9, G→C 0.95
        let quality = calculate_voice_leading_quality(&analyze(&["C", "F", "G", "C"]));
        assert!(approx(quality, (0.95 + 0.9 + 0.95) / 3.0));
    }

    #[test]
    fn test_voice_leading_unrecognized_chord_scores_default() {
        let quality = calculate_voice_leading_quality(&analyze(&["C", "???", "F"]));
        assert!(approx(quality, 0.6));
    }

    #[test]
    fn test_resolves_on_tonic() {
        assert!(analyze_progression_resolves(&analyze(&["Am", "Dm", "G", "C"]), "C").unwrap());
    }

    #[test]
    fn test_does_not_resolve_on_plagal_ending() {
        assert!(!analyze_progression_resolves(&analyze(&["C", "F"]), "C").unwrap());
    }

    #[test]
    fn test_authentic_cadence_from_penultimate_dominant() {
        // G → Am: last is submediant, but penultimate is dominant
        assert!(analyze_progression_resolves(&analyze(&["F", "G", "Am"]), "C").unwrap());
        // Mode words in the key are accepted
        assert!(analyze_progression_resolves(&analyze(&["D7", "G"]), "G major").unwrap());
    }

    #[test]
    fn test_resolution_needs_two_chords() {
        assert!(!analyze_progression_resolves(&analyze(&["C"]), "C").unwrap());
        assert!(!analyze_progression_resolves(&[], "C").unwrap());
    }

    #[test]
    fn test_resolution_rejects_bad_key() {
        let err = analyze_progression_resolves(&analyze(&["G", "C"]), "nope").unwrap_err();
        assert_eq!(err, TheoryError::KeyError("nope".to_string()));
    }

    #[test]
    fn test_progression_analysis_bundle() {
        let analysis = analyze_progression_in_key(&["C", "Am", "F", "G7"], "C").unwrap();
        assert!(!analysis.resolves_to_tonic);
        assert!(approx(analysis.voice_leading_quality, (0.7 + 0.8 + 0.9) / 3.0));
        assert!(approx(analysis.average_tension(), (0.2 + 0.4 + 0.2 + 0.7) / 4.0));
    }
}
