//! Chord analysis engine
//!
//! Combines a [`ChordParser`] with the [`BasicTensionModel`] and the
//! [`SixFunctionMap`] to describe a chord symbol.

use super::function::{FunctionMap, HarmonicFunction, SixFunctionMap};
use super::parser::{ChordParser, SymbolChordParser};
use super::pitch::parse_key;
use super::tension::{BasicTensionModel, TensionModel};
use super::types::{AnalysisContext, ChordAnalysis, ChordQuality};
use log::debug;

/// Fixed confidence reported for any symbol the parser recognized.
///
/// This is not a measured confidence; it only separates parsed chords (0.95)
/// from unparsed ones (0.0).
pub const PARSED_CONFIDENCE: f64 = 0.95;

/// Stateless chord analyzer, generic over the parsing backend.
///
/// # Example
/// ```rust
/// use jam_theory::chord::{AnalysisContext, ChordAnalyzer, ChordQuality, HarmonicFunction};
///
/// let analyzer = ChordAnalyzer::new();
/// let g7 = analyzer.analyze("G7", &AnalysisContext::in_key("C"));
///
/// assert_eq!(g7.root, "G");
/// assert_eq!(g7.quality, ChordQuality::Dominant);
/// assert_eq!(g7.function, Some(HarmonicFunction::Dominant));
/// assert_eq!(g7.tension, 0.7);
/// assert_eq!(g7.confidence, 0.95);
///
/// let bad = analyzer.analyze("not a chord", &AnalysisContext::default());
/// assert_eq!(bad.confidence, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChordAnalyzer<P = SymbolChordParser> {
    parser: P,
}

impl ChordAnalyzer<SymbolChordParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ChordParser> ChordAnalyzer<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Analyze a single chord symbol.
    ///
    /// Never fails: an unrecognized symbol yields [`ChordAnalysis::unrecognized`].
    /// The harmonic function is only computed when `context.key` is set; a key
    /// that cannot be parsed gives [`HarmonicFunction::Unknown`].
    pub fn analyze(&self, symbol: &str, context: &AnalysisContext) -> ChordAnalysis {
        let chord = match self.parser.parse(symbol) {
            Some(chord) => chord,
            None => {
                debug!("unrecognized chord symbol {:?}", symbol);
                return ChordAnalysis::unrecognized(symbol);
            }
        };

        let quality = ChordQuality::classify(&chord.quality, chord.has_major_third());
        let tension = BasicTensionModel.tension(&chord);
        let function = context.key.as_deref().map(|key| match parse_key(key) {
            Some(tonic) => SixFunctionMap.function_of(chord.root_class(), tonic),
            None => {
                debug!("cannot read key {:?} while analyzing {:?}", key, symbol);
                HarmonicFunction::Unknown
            }
        });

        ChordAnalysis {
            symbol: symbol.to_string(),
            root: chord.root.to_string(),
            chord_type: chord.quality.clone(),
            notes: chord.note_names(),
            quality,
            function,
            tension,
            confidence: PARSED_CONFIDENCE,
        }
    }

    /// Analyze each chord of a progression in order.
    ///
    /// Every position is analyzed with the chords before it as
    /// `previous_chords`; key and genre are shared.
    pub fn analyze_progression<S: AsRef<str>>(
        &self,
        chords: &[S],
        context: &AnalysisContext,
    ) -> Vec<ChordAnalysis> {
        chords
            .iter()
            .enumerate()
            .map(|(index, chord)| {
                let positional = AnalysisContext {
                    previous_chords: chords[..index]
                        .iter()
                        .map(|c| c.as_ref().to_string())
                        .collect(),
                    ..context.clone()
                };
                self.analyze(chord.as_ref(), &positional)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ParsedChord;

    #[test]
    fn test_analyze_basic_chords() {
        let analyzer = ChordAnalyzer::new();
        let none = AnalysisContext::default();

        let am = analyzer.analyze("Am", &none);
        assert_eq!(am.root, "A");
        assert_eq!(am.chord_type, "m");
        assert_eq!(am.notes, vec!["A", "C", "E"]);
        assert_eq!(am.quality, ChordQuality::Minor);
        assert_eq!(am.tension, 0.4);
        assert_eq!(am.function, None);

        let cmaj7 = analyzer.analyze("Cmaj7", &none);
        assert_eq!(cmaj7.quality, ChordQuality::Major);
        assert_eq!(cmaj7.tension, 0.2);

        let g7sus4 = analyzer.analyze("G7sus4", &none);
        assert_eq!(g7sus4.quality, ChordQuality::Suspended);
        assert_eq!(g7sus4.tension, 0.5);
    }

    #[test]
    fn test_function_requires_key() {
        let analyzer = ChordAnalyzer::new();
        let f = analyzer.analyze("F", &AnalysisContext::in_key("C"));
        assert_eq!(f.function, Some(HarmonicFunction::Subdominant));

        let d = analyzer.analyze("Dm", &AnalysisContext::in_key("C"));
        assert_eq!(d.function, Some(HarmonicFunction::Unknown));

        let bad_key = analyzer.analyze("C", &AnalysisContext::in_key("Q"));
        assert_eq!(bad_key.function, Some(HarmonicFunction::Unknown));
        assert_eq!(bad_key.confidence, PARSED_CONFIDENCE);
    }

    #[test]
    fn test_unparsable_symbol_is_soft() {
        let analyzer = ChordAnalyzer::new();
        let result = analyzer.analyze("???", &AnalysisContext::in_key("C"));
        assert_eq!(result.symbol, "???");
        assert_eq!(result.quality, ChordQuality::Unknown);
        assert_eq!(result.function, None);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_progression_keeps_order_and_key() {
        let analyzer = ChordAnalyzer::new();
        let result =
            analyzer.analyze_progression(&["C", "G", "Am", "F"], &AnalysisContext::in_key("C"));

        assert_eq!(result.len(), 4);
        let roots: Vec<&str> = result.iter().map(|a| a.root.as_str()).collect();
        assert_eq!(roots, vec!["C", "G", "A", "F"]);
        assert_eq!(result[1].function, Some(HarmonicFunction::Dominant));
        assert_eq!(result[2].function, Some(HarmonicFunction::Submediant));
    }

    /// Parser that only knows "X" and reports a fixed diminished token.
    struct FixedParser;

    impl ChordParser for FixedParser {
        fn parse(&self, symbol: &str) -> Option<ParsedChord> {
            if symbol != "X" {
                return None;
            }
            let root = crate::chord::NoteName::parse("B")?;
            Some(ParsedChord {
                root,
                quality: "dim".to_string(),
                notes: vec![root],
                bass: None,
            })
        }
    }

    #[test]
    fn test_pluggable_parser() {
        let analyzer = ChordAnalyzer::with_parser(FixedParser);
        let x = analyzer.analyze("X", &AnalysisContext::in_key("C"));
        assert_eq!(x.root, "B");
        assert_eq!(x.quality, ChordQuality::Diminished);
        assert_eq!(x.function, Some(HarmonicFunction::Leading));
        assert_eq!(analyzer.analyze("C", &AnalysisContext::default()).confidence, 0.0);
    }
}
