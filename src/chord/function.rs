//! Harmonic function relative to a tonal center
//!
//! Two degree maps coexist and give different answers for some degrees:
//! - [`SixFunctionMap`] labels six degrees and calls the rest `unknown`. Used by
//!   [`ChordAnalyzer`](super::ChordAnalyzer).
//! - [`SevenDegreeMap`] labels the seven diatonic degrees of a major key and calls
//!   the rest `chromatic`. Used by the cadence check in
//!   [`progression`](crate::progression).
//!
//! Both are keyed on `(root - key) mod 12`, so a root and the same root an
//! octave higher always get the same label.

use super::pitch::PitchClass;
use serde::{Deserialize, Serialize};

/// Function labels produced by [`SixFunctionMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonicFunction {
    Tonic,
    Subdominant,
    Dominant,
    Mediant,
    Submediant,
    Leading,
    Unknown,
}

/// Function labels produced by [`SevenDegreeMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiatonicFunction {
    Tonic,
    Supertonic,
    Mediant,
    Subdominant,
    Dominant,
    Submediant,
    LeadingTone,
    Chromatic,
}

/// Strategy mapping a semitone degree above the tonic to a function label
pub trait FunctionMap {
    type Function;

    /// `degree` is in 0..12
    fn function_for_degree(&self, degree: u8) -> Self::Function;

    fn function_of(&self, root: PitchClass, key: PitchClass) -> Self::Function {
        self.function_for_degree(root.degree_from(key))
    }
}

/// Six named functions; degrees 1, 2, 3, 6, 8 and 10 are `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SixFunctionMap;

impl FunctionMap for SixFunctionMap {
    type Function = HarmonicFunction;

    fn function_for_degree(&self, degree: u8) -> HarmonicFunction {
        match degree % 12 {
            0 => HarmonicFunction::Tonic,
            5 => HarmonicFunction::Subdominant,
            7 => HarmonicFunction::Dominant,
            4 => HarmonicFunction::Mediant,
            9 => HarmonicFunction::Submediant,
            11 => HarmonicFunction::Leading,
            _ => HarmonicFunction::Unknown,
        }
    }
}

/// Seven diatonic degrees of the major scale; everything else is `Chromatic`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SevenDegreeMap;

impl FunctionMap for SevenDegreeMap {
    type Function = DiatonicFunction;

    fn function_for_degree(&self, degree: u8) -> DiatonicFunction {
        match degree % 12 {
            0 => DiatonicFunction::Tonic,
            2 => DiatonicFunction::Supertonic,
            4 => DiatonicFunction::Mediant,
            5 => DiatonicFunction::Subdominant,
            7 => DiatonicFunction::Dominant,
            9 => DiatonicFunction::Submediant,
            11 => DiatonicFunction::LeadingTone,
            _ => DiatonicFunction::Chromatic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_function_map() {
        let c = PitchClass::new(0);
        assert_eq!(SixFunctionMap.function_of(PitchClass::new(7), c), HarmonicFunction::Dominant);
        assert_eq!(SixFunctionMap.function_of(PitchClass::new(5), c), HarmonicFunction::Subdominant);
        assert_eq!(SixFunctionMap.function_of(PitchClass::new(11), c), HarmonicFunction::Leading);
        // Supertonic is not one of the six
        assert_eq!(SixFunctionMap.function_of(PitchClass::new(2), c), HarmonicFunction::Unknown);
    }

    #[test]
    fn test_seven_degree_map() {
        let c = PitchClass::new(0);
        assert_eq!(SevenDegreeMap.function_of(PitchClass::new(2), c), DiatonicFunction::Supertonic);
        assert_eq!(SevenDegreeMap.function_of(PitchClass::new(11), c), DiatonicFunction::LeadingTone);
        assert_eq!(SevenDegreeMap.function_of(PitchClass::new(1), c), DiatonicFunction::Chromatic);
        assert_eq!(SevenDegreeMap.function_of(PitchClass::new(10), c), DiatonicFunction::Chromatic);
    }

    #[test]
    fn test_relative_to_other_keys() {
        // D is the dominant of G, E is the submediant of G
        let g = PitchClass::new(7);
        assert_eq!(SixFunctionMap.function_of(PitchClass::new(2), g), HarmonicFunction::Dominant);
        assert_eq!(SevenDegreeMap.function_of(PitchClass::new(4), g), DiatonicFunction::Submediant);
    }

    #[test]
    fn test_periodic_over_octave() {
        for key in 0..12 {
            for root in -24..24 {
                let k = PitchClass::new(key);
                assert_eq!(
                    SixFunctionMap.function_of(PitchClass::new(root), k),
                    SixFunctionMap.function_of(PitchClass::new(root + 12), k)
                );
                assert_eq!(
                    SevenDegreeMap.function_of(PitchClass::new(root), k),
                    SevenDegreeMap.function_of(PitchClass::new(root + 12), k)
                );
            }
        }
    }
}
