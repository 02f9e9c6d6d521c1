pub mod accompaniment;
pub mod chord;
pub mod config;
pub mod error;
pub mod progression;
pub mod structure;

pub use chord::{
    AnalysisContext, ChordAnalysis, ChordAnalyzer, ChordQuality, ChordSuggester, ChordSuggestion,
    HarmonicFunction, SuggestionOptions,
};
pub use config::EngineConfig;
pub use error::*;
pub use progression::{
    analyze_progression_in_key, analyze_progression_resolves, calculate_voice_leading_quality,
    ProgressionAnalysis,
};
pub use structure::{suggest_next_section, Genre, SectionType, SongStructure};

/// Analyze a single chord symbol with no key context.
/// This is the simplest entry point for the library.
pub fn analyze_chord(symbol: &str) -> ChordAnalysis {
    ChordAnalyzer::new().analyze(symbol, &AnalysisContext::default())
}

/// Analyze a single chord symbol relative to a tonal center
pub fn analyze_chord_in_key(symbol: &str, key: &str) -> ChordAnalysis {
    ChordAnalyzer::new().analyze(symbol, &AnalysisContext::in_key(key))
}
