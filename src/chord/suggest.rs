//! Next-chord suggestions
//!
//! Candidates come from a few independent strategies, then get ranked by
//! confidence and cut to the requested count:
//!
//! | Strategy | Applies to | Suggests |
//! |---|---|---|
//! | genre moves | pop, on the tonic | V (0.9), vi (0.85) |
//! | | jazz | V7 of the current root (0.9) |
//! | | blues | IV7 (0.88), V7 (0.87) of the current root |
//! | fifth moves | any | up a fifth (0.82), up a fourth (0.75) |
//! | parallel | any | parallel minor of a major chord, or the major triad otherwise (0.7) |
//! | tritone substitution | jazz | dominant seventh an augmented fourth up (0.75) |
//!
//! Candidates are not deduplicated: a pop tonic gets the dominant from both the
//! genre and the fifth strategies.

use super::parser::{ChordParser, SymbolChordParser};
use super::pitch::intervals::{AUGMENTED_FOURTH, MAJOR_SIXTH, PERFECT_FIFTH, PERFECT_FOURTH};
use super::pitch::{parse_key_root, NoteName};
use super::types::ChordQuality;
use crate::error::TheoryError;
use crate::structure::Genre;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Confidence lost per rank below the first
pub const RANK_DECAY: f64 = 0.05;

/// Ranked confidence never decays below this
pub const MIN_RANKED_CONFIDENCE: f64 = 0.6;

/// How a suggested chord relates to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordRelationship {
    Resolution,
    Progression,
    Substitution,
    Chromatic,
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSuggestion {
    /// Chord symbol, readable by [`SymbolChordParser`]
    pub chord: String,
    pub confidence: f64,
    pub reasoning: String,
    pub relationship: ChordRelationship,
    /// Estimated change in tension, -1..=1
    pub tension_change: f64,
}

impl ChordSuggestion {
    fn new(
        chord: String,
        confidence: f64,
        reasoning: &str,
        relationship: ChordRelationship,
        tension_change: f64,
    ) -> Self {
        Self {
            chord,
            confidence,
            reasoning: reasoning.to_string(),
            relationship,
            tension_change,
        }
    }

    /// One-sentence explanation for display next to the suggestion
    pub fn explain(&self, key: &str) -> String {
        format!(
            "{} - {} ({}% confidence). This creates a {} sound in the key of {}.",
            self.chord,
            self.reasoning,
            (self.confidence * 100.0).round() as i64,
            if self.tension_change > 0.0 {
                "more tense"
            } else {
                "resolving"
            },
            key
        )
    }
}

/// Options for [`ChordSuggester::suggest`]
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionOptions {
    pub key: String,
    pub genre: Genre,
    pub max_suggestions: usize,
}

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            key: "C".to_string(),
            genre: Genre::Pop,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl SuggestionOptions {
    pub fn new(key: &str, genre: Genre) -> Self {
        Self {
            key: key.to_string(),
            genre,
            ..Self::default()
        }
    }
}

/// Suggests the chord to play after the current one.
///
/// # Example
/// ```rust
/// use jam_theory::chord::{ChordSuggester, SuggestionOptions};
/// use jam_theory::Genre;
///
/// let suggestions = ChordSuggester::new()
///     .suggest("C", &SuggestionOptions::new("C", Genre::Pop))
///     .unwrap();
///
/// assert_eq!(suggestions.len(), 3);
/// assert_eq!(suggestions[0].chord, "G");
/// assert_eq!(suggestions[1].chord, "Am");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChordSuggester<P = SymbolChordParser> {
    parser: P,
}

impl ChordSuggester<SymbolChordParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ChordParser> ChordSuggester<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Ranked suggestions for the chord after `current`.
    ///
    /// A current chord the parser does not recognize gets no suggestions. A key
    /// that cannot be parsed is an error.
    pub fn suggest(
        &self,
        current: &str,
        options: &SuggestionOptions,
    ) -> Result<Vec<ChordSuggestion>, TheoryError> {
        let key = parse_key_root(&options.key)
            .ok_or_else(|| TheoryError::KeyError(options.key.clone()))?;

        let Some(chord) = self.parser.parse(current) else {
            debug!("no suggestions for unrecognized chord {:?}", current);
            return Ok(Vec::new());
        };
        let quality = ChordQuality::classify(&chord.quality, chord.has_major_third());

        let mut candidates = Vec::new();
        genre_moves(chord.root, key, options.genre, &mut candidates);
        fifth_moves(chord.root, &mut candidates);
        parallel_move(chord.root, quality, &mut candidates);
        if options.genre == Genre::Jazz {
            tritone_substitution(chord.root, &mut candidates);
        }

        Ok(rank_suggestions(candidates, options.max_suggestions))
    }
}

/// Sort by confidence (stable), keep the top `max`, then decay each by its rank.
pub fn rank_suggestions(mut candidates: Vec<ChordSuggestion>, max: usize) -> Vec<ChordSuggestion> {
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    candidates.truncate(max);

    for (rank, suggestion) in candidates.iter_mut().enumerate() {
        suggestion.confidence =
            (suggestion.confidence - rank as f64 * RANK_DECAY).max(MIN_RANKED_CONFIDENCE);
    }
    candidates
}

fn genre_moves(root: NoteName, key: NoteName, genre: Genre, out: &mut Vec<ChordSuggestion>) {
    use ChordRelationship::Progression;

    match genre {
        Genre::Pop if root.pitch_class() == key.pitch_class() => {
            out.push(ChordSuggestion::new(
                key.transpose(PERFECT_FIFTH).to_string(),
                0.9,
                "Strong tonic to dominant movement (I→V)",
                Progression,
                0.5,
            ));
            out.push(ChordSuggestion::new(
                format!("{}m", key.transpose(MAJOR_SIXTH)),
                0.85,
                "Common pop progression (I→vi)",
                Progression,
                0.2,
            ));
        }
        Genre::Jazz => out.push(ChordSuggestion::new(
            format!("{}7", root.transpose(PERFECT_FIFTH)),
            0.9,
            "Classic ii-V or V-I jazz movement",
            Progression,
            -0.3,
        )),
        Genre::Blues => {
            out.push(ChordSuggestion::new(
                format!("{}7", root.transpose(PERFECT_FOURTH)),
                0.88,
                "Blues I→IV progression",
                Progression,
                0.3,
            ));
            out.push(ChordSuggestion::new(
                format!("{}7", root.transpose(PERFECT_FIFTH)),
                0.87,
                "Blues I→V progression",
                Progression,
                0.4,
            ));
        }
        _ => {}
    }
}

fn fifth_moves(root: NoteName, out: &mut Vec<ChordSuggestion>) {
    out.push(ChordSuggestion::new(
        root.transpose(PERFECT_FIFTH).to_string(),
        0.82,
        "Strong fifth relationship (circle of fifths)",
        ChordRelationship::Progression,
        0.3,
    ));
    out.push(ChordSuggestion::new(
        root.transpose(PERFECT_FOURTH).to_string(),
        0.75,
        "Subdominant movement",
        ChordRelationship::Progression,
        -0.2,
    ));
}

/// Major-family chords (including dominant sevenths) swap to the parallel minor
fn parallel_move(root: NoteName, quality: ChordQuality, out: &mut Vec<ChordSuggestion>) {
    let is_major = matches!(quality, ChordQuality::Major | ChordQuality::Dominant);
    let (chord, reasoning, tension_change) = if is_major {
        (format!("{}m", root), "Parallel minor for color variation", 0.2)
    } else {
        (root.to_string(), "Parallel major for color variation", -0.2)
    };

    out.push(ChordSuggestion::new(
        chord,
        0.7,
        reasoning,
        ChordRelationship::Parallel,
        tension_change,
    ));
}

fn tritone_substitution(root: NoteName, out: &mut Vec<ChordSuggestion>) {
    out.push(ChordSuggestion::new(
        format!("{}7", root.transpose(AUGMENTED_FOURTH)),
        0.75,
        "Tritone substitution for sophisticated jazz sound",
        ChordRelationship::Substitution,
        0.4,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn suggest(current: &str, key: &str, genre: Genre, max: usize) -> Vec<ChordSuggestion> {
        let options = SuggestionOptions {
            max_suggestions: max,
            ..SuggestionOptions::new(key, genre)
        };
        ChordSuggester::new().suggest(current, &options).unwrap()
    }

    fn chords(suggestions: &[ChordSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.chord.as_str()).collect()
    }

    #[test]
    fn test_pop_tonic_moves() {
        let all = suggest("C", "C", Genre::Pop, 10);
        assert_eq!(chords(&all), vec!["G", "Am", "G", "F", "Cm"]);

        let top = suggest("C", "C", Genre::Pop, 3);
        assert_eq!(chords(&top), vec!["G", "Am", "G"]);
        assert!(approx(top[0].confidence, 0.9));
        assert!(approx(top[1].confidence, 0.8));
        assert!(approx(top[2].confidence, 0.72));
    }

    #[test]
    fn test_pop_tonic_is_enharmonic_aware() {
        let db = suggest("C#", "Db", Genre::Pop, 2);
        assert_eq!(chords(&db), vec!["Ab", "Bbm"]);
    }

    #[test]
    fn test_pop_off_tonic_uses_fifths_and_parallel() {
        let f = suggest("F", "C", Genre::Pop, 10);
        assert_eq!(chords(&f), vec!["C", "Bb", "Fm"]);
        assert!(f.iter().all(|s| s.relationship != ChordRelationship::Substitution));
    }

    #[test]
    fn test_jazz_moves_and_tritone_substitution() {
        let all = suggest("G7", "C", Genre::Jazz, 10);
        assert_eq!(chords(&all), vec!["D7", "D", "C", "C#7", "Gm"]);

        let tritone = all.iter().find(|s| s.chord == "C#7").unwrap();
        assert_eq!(tritone.relationship, ChordRelationship::Substitution);
        assert_eq!(tritone.tension_change, 0.4);
    }

    #[test]
    fn test_blues_four_and_five() {
        let all = suggest("A7", "A", Genre::Blues, 10);
        assert_eq!(chords(&all), vec!["D7", "E7", "E", "D", "Am"]);
    }

    #[test]
    fn test_parallel_of_minor_is_major() {
        let all = suggest("Dm7", "C", Genre::Rock, 10);
        let parallel = all
            .iter()
            .find(|s| s.relationship == ChordRelationship::Parallel)
            .unwrap();
        assert_eq!(parallel.chord, "D");
        assert_eq!(parallel.tension_change, -0.2);
    }

    #[test]
    fn test_rank_decay_never_below_floor() {
        // A7 .9, A .82, G .75, G#7 .75, D .7 before decay
        let ranked = suggest("Dm7", "C", Genre::Jazz, 10);
        assert_eq!(ranked.len(), 5);
        assert!(approx(ranked[0].confidence, 0.9));
        assert!(approx(ranked[1].confidence, 0.77));
        assert!(approx(ranked[2].confidence, 0.65));
        assert!(ranked[3..]
            .iter()
            .all(|s| approx(s.confidence, MIN_RANKED_CONFIDENCE)));
        assert!(ranked.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_truncation() {
        assert!(suggest("C", "C", Genre::Pop, 0).is_empty());
        assert_eq!(suggest("C", "C", Genre::Jazz, 1).len(), 1);
        assert_eq!(
            suggest("C", "C", Genre::Pop, DEFAULT_MAX_SUGGESTIONS).len(),
            DEFAULT_MAX_SUGGESTIONS
        );
    }

    #[test]
    fn test_unrecognized_chord_gets_nothing() {
        assert!(suggest("???", "C", Genre::Jazz, 5).is_empty());
    }

    #[test]
    fn test_bad_key_is_an_error() {
        let err = ChordSuggester::new()
            .suggest("C", &SuggestionOptions::new("H", Genre::Pop))
            .unwrap_err();
        assert_eq!(err, TheoryError::KeyError("H".to_string()));
    }

    #[test]
    fn test_suggestions_parse_back() {
        for genre in [Genre::Pop, Genre::Jazz, Genre::Blues, Genre::Rock] {
            for current in ["C", "Bb7", "F#m", "Ebmaj7"] {
                for suggestion in suggest(current, "C", genre, 10) {
                    assert!(
                        SymbolChordParser.parse(&suggestion.chord).is_some(),
                        "{} after {}",
                        suggestion.chord,
                        current
                    );
                }
            }
        }
    }

    #[test]
    fn test_explain() {
        let top = &suggest("C", "C", Genre::Pop, 1)[0];
        assert_eq!(
            top.explain("C"),
            "G - Strong tonic to dominant movement (I→V) (90% confidence). \
             This creates a more tense sound in the key of C."
        );
    }

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let top = &suggest("C", "C", Genre::Pop, 1)[0];
        let json = serde_json::to_value(top).unwrap();
        assert_eq!(json["relationship"], "progression");
        assert_eq!(json["tensionChange"], 0.5);
    }
}
