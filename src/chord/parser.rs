//! Chord symbol parsing
//!
//! Splits a chord symbol (C, Am, G7sus4, Bb/D, ...) into its root, a quality
//! token and the spelled chord tones. The rest of the engine only sees the
//! [`ChordParser`] trait, so a different parsing backend can be plugged in.

use super::pitch::intervals::*;
use super::pitch::{Interval, NoteName, PitchClass};

/// Result of parsing a chord symbol
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedChord {
    pub root: NoteName,
    /// Canonical quality token, e.g. `"M"`, `"m7"`, `"7sus4"`
    pub quality: String,
    /// Chord tones in root position, root first
    pub notes: Vec<NoteName>,
    /// Slash bass note, if one was written
    pub bass: Option<NoteName>,
}

impl ParsedChord {
    pub fn root_class(&self) -> PitchClass {
        self.root.pitch_class()
    }

    /// True if the chord contains a major third above the root
    pub fn has_major_third(&self) -> bool {
        let root = self.root_class();
        self.notes
            .iter()
            .skip(1)
            .any(|n| n.pitch_class().degree_from(root) == 4)
    }

    pub fn note_names(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.to_string()).collect()
    }
}

/// Symbol → {root, quality token, notes}
pub trait ChordParser {
    /// Returns `None` for any symbol the parser does not recognize.
    fn parse(&self, symbol: &str) -> Option<ParsedChord>;
}

const NINTH: Interval = MAJOR_SECOND;
const FLAT_NINTH: Interval = MINOR_SECOND;
const SHARP_NINTH: Interval = AUGMENTED_SECOND;
const ELEVENTH: Interval = PERFECT_FOURTH;
const THIRTEENTH: Interval = MAJOR_SIXTH;

/// Chord types: aliases (first is canonical) and intervals above the root
const CHORD_TYPES: &[(&[&str], &[Interval])] = &[
    (&["M", "", "maj", "^"], &[UNISON, MAJOR_THIRD, PERFECT_FIFTH]),
    (&["m", "min", "-"], &[UNISON, MINOR_THIRD, PERFECT_FIFTH]),
    (&["dim", "°", "o"], &[UNISON, MINOR_THIRD, DIMINISHED_FIFTH]),
    (&["aug", "+", "+5"], &[UNISON, MAJOR_THIRD, AUGMENTED_FIFTH]),
    (&["sus4", "sus"], &[UNISON, PERFECT_FOURTH, PERFECT_FIFTH]),
    (&["sus2"], &[UNISON, MAJOR_SECOND, PERFECT_FIFTH]),
    (&["5"], &[UNISON, PERFECT_FIFTH]),
    (&["6", "add6", "M6"], &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SIXTH]),
    (&["m6", "-6"], &[UNISON, MINOR_THIRD, PERFECT_FIFTH, MAJOR_SIXTH]),
    (&["69", "6/9"], &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SIXTH, NINTH]),
    (&["7", "dom"], &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH]),
    (
        &["maj7", "M7", "Δ", "ma7", "Maj7", "^7"],
        &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH],
    ),
    (
        &["m7", "min7", "mi7", "-7"],
        &[UNISON, MINOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH],
    ),
    (
        &["dim7", "°7", "o7"],
        &[UNISON, MINOR_THIRD, DIMINISHED_FIFTH, DIMINISHED_SEVENTH],
    ),
    (
        &["m7b5", "ø", "-7b5", "h7"],
        &[UNISON, MINOR_THIRD, DIMINISHED_FIFTH, MINOR_SEVENTH],
    ),
    (
        &["aug7", "7#5", "+7"],
        &[UNISON, MAJOR_THIRD, AUGMENTED_FIFTH, MINOR_SEVENTH],
    ),
    (
        &["7sus4", "7sus"],
        &[UNISON, PERFECT_FOURTH, PERFECT_FIFTH, MINOR_SEVENTH],
    ),
    (
        &["7b9"],
        &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH, FLAT_NINTH],
    ),
    (
        &["7#9"],
        &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH, SHARP_NINTH],
    ),
    (
        &["9", "dom9"],
        &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH, NINTH],
    ),
    (
        &["maj9", "M9", "Δ9"],
        &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH, NINTH],
    ),
    (
        &["m9", "min9", "-9"],
        &[UNISON, MINOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH, NINTH],
    ),
    (
        &["11", "dom11"],
        &[UNISON, PERFECT_FIFTH, MINOR_SEVENTH, NINTH, ELEVENTH],
    ),
    (
        &["m11", "min11", "-11"],
        &[UNISON, MINOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH, NINTH, ELEVENTH],
    ),
    (
        &["13", "dom13"],
        &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH, NINTH, THIRTEENTH],
    ),
    (
        &["maj13", "M13", "Δ13"],
        &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH, NINTH, THIRTEENTH],
    ),
    (
        &["m13", "min13", "-13"],
        &[UNISON, MINOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH, NINTH, THIRTEENTH],
    ),
    (&["add9", "2", "add2"], &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, NINTH]),
    (&["madd9", "m(add9)"], &[UNISON, MINOR_THIRD, PERFECT_FIFTH, NINTH]),
    (&["add11", "add4"], &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, ELEVENTH]),
];

/// Table-driven parser for common lead-sheet chord symbols.
///
/// # Examples
/// ```
/// use jam_theory::chord::{ChordParser, SymbolChordParser};
///
/// let chord = SymbolChordParser.parse("Bbm").unwrap();
/// assert_eq!(chord.quality, "m");
/// assert_eq!(chord.note_names(), vec!["Bb", "Db", "F"]);
///
/// let g7 = SymbolChordParser.parse("G7").unwrap();
/// assert_eq!(g7.note_names(), vec!["G", "B", "D", "F"]);
///
/// assert!(SymbolChordParser.parse("Xyz").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolChordParser;

impl SymbolChordParser {
    fn lookup(suffix: &str) -> Option<(&'static str, &'static [Interval])> {
        CHORD_TYPES
            .iter()
            .find(|(aliases, _)| aliases.contains(&suffix))
            .map(|(aliases, intervals)| (aliases[0], *intervals))
    }
}

impl ChordParser for SymbolChordParser {
    fn parse(&self, symbol: &str) -> Option<ParsedChord> {
        let trimmed = symbol.trim();
        let (root, consumed) = NoteName::parse_prefix(trimmed)?;
        let rest = &trimmed[consumed..];

        // Slash bass, unless the part after '/' is not a note (e.g. "6/9")
        let (suffix, bass) = match rest.rsplit_once('/') {
            Some((quality, bass)) => match NoteName::parse(bass) {
                Some(note) => (quality, Some(note)),
                None => (rest, None),
            },
            None => (rest, None),
        };

        let (quality, intervals) = Self::lookup(suffix)?;
        let notes = intervals.iter().map(|&i| root.transpose(i)).collect();

        Some(ParsedChord {
            root,
            quality: quality.to_string(),
            notes,
            bass,
        })
    }
}
