//! # Chord Module
//!
//! Symbolic analysis of chord symbols: root, quality, tension and harmonic function.
//!
//! ## Sub-modules
//! - `pitch` - Pitch classes, spelled note names, intervals, key parsing
//! - `parser` - `ChordParser` trait and the table-driven `SymbolChordParser`
//! - `types` - `ChordAnalysis`, `ChordQuality`, `AnalysisContext`
//! - `function` - Harmonic function degree maps (`SixFunctionMap`, `SevenDegreeMap`)
//! - `tension` - Tension models (`BasicTensionModel`, `ExtendedQualityTensionModel`)
//! - `analyzer` - `ChordAnalyzer`, the entry point
//! - `suggest` - `ChordSuggester`, ranked next-chord suggestions
//!
//! ## Example
//! ```rust
//! use jam_theory::chord::{AnalysisContext, ChordAnalyzer, HarmonicFunction};
//!
//! let analyzer = ChordAnalyzer::new();
//! let chords = analyzer.analyze_progression(&["Am", "Dm", "G", "C"], &AnalysisContext::in_key("C"));
//!
//! assert_eq!(chords.len(), 4);
//! assert_eq!(chords[2].function, Some(HarmonicFunction::Dominant));
//! assert_eq!(chords[3].function, Some(HarmonicFunction::Tonic));
//! ```
//!
//! ## Quality Classification
//!
//! The parser's quality token is classified by a priority cascade; the first
//! rule that matches wins:
//!
//! 1. contains `dim` → diminished
//! 2. contains `aug` → augmented
//! 3. contains `sus` → suspended
//! 4. contains `7` but not `maj7`/`m7` → dominant
//! 5. minor token (`m...`, `min...`, `-...`) → minor
//! 6. major token or a major third in the chord → major
//! 7. otherwise unknown
//!
//! ## Two Models
//!
//! Tension and harmonic function each have two strategies that disagree on
//! some inputs. They are exposed side by side and never merged:
//!
//! | Concern | Used by `ChordAnalyzer` | Alternate |
//! |---|---|---|
//! | Tension | `BasicTensionModel` | `ExtendedQualityTensionModel` |
//! | Function | `SixFunctionMap` | `SevenDegreeMap` (cadence detection) |

mod analyzer;
mod function;
mod parser;
mod pitch;
mod suggest;
mod tension;
mod types;

pub use analyzer::{ChordAnalyzer, PARSED_CONFIDENCE};
pub use function::{DiatonicFunction, FunctionMap, HarmonicFunction, SevenDegreeMap, SixFunctionMap};
pub use parser::{ChordParser, ParsedChord, SymbolChordParser};
pub use pitch::{intervals, parse_key, parse_key_root, Interval, Letter, NoteName, PitchClass};
pub use suggest::{
    rank_suggestions, ChordRelationship, ChordSuggester, ChordSuggestion, SuggestionOptions,
    DEFAULT_MAX_SUGGESTIONS, MIN_RANKED_CONFIDENCE, RANK_DECAY,
};
pub use tension::{BasicTensionModel, ExtendedQuality, ExtendedQualityTensionModel, TensionModel};
pub use types::{AnalysisContext, ChordAnalysis, ChordQuality};
