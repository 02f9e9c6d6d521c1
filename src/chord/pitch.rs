//! Pitch classes, spelled note names and intervals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A note identity modulo octave, 0 (C) through 11 (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wraps any semitone count into 0..12, so `new(n)` and `new(n + 12)` are equal.
    pub fn new(semitones: i32) -> Self {
        Self(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Upward semitone distance from `tonic` to `self`, in 0..12.
    pub fn degree_from(self, tonic: PitchClass) -> u8 {
        (self.0 as i32 - tonic.0 as i32).rem_euclid(12) as u8
    }
}

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Semitone offset of the natural note from C
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    fn step(self, steps: u8) -> Letter {
        Self::ALL[(self.index() + steps as usize) % 7]
    }

    fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// An interval measured both in letter steps and semitones.
///
/// Keeping the letter distance lets chord tones be spelled correctly
/// (`Bb` + minor third = `Db`, not `C#`). Compound intervals are stored
/// reduced to within the octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub steps: u8,
    pub semitones: u8,
}

impl Interval {
    pub const fn new(steps: u8, semitones: u8) -> Self {
        Self { steps, semitones }
    }
}

pub mod intervals {
    use super::Interval;

    pub const UNISON: Interval = Interval::new(0, 0);
    pub const MINOR_SECOND: Interval = Interval::new(1, 1);
    pub const MAJOR_SECOND: Interval = Interval::new(1, 2);
    pub const AUGMENTED_SECOND: Interval = Interval::new(1, 3);
    pub const MINOR_THIRD: Interval = Interval::new(2, 3);
    pub const MAJOR_THIRD: Interval = Interval::new(2, 4);
    pub const PERFECT_FOURTH: Interval = Interval::new(3, 5);
    pub const AUGMENTED_FOURTH: Interval = Interval::new(3, 6);
    pub const DIMINISHED_FIFTH: Interval = Interval::new(4, 6);
    pub const PERFECT_FIFTH: Interval = Interval::new(4, 7);
    pub const AUGMENTED_FIFTH: Interval = Interval::new(4, 8);
    pub const MAJOR_SIXTH: Interval = Interval::new(5, 9);
    pub const DIMINISHED_SEVENTH: Interval = Interval::new(6, 9);
    pub const MINOR_SEVENTH: Interval = Interval::new(6, 10);
    pub const MAJOR_SEVENTH: Interval = Interval::new(6, 11);
}

/// A spelled note name without octave, e.g. `C`, `F#`, `Bb`, `Ebb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pub letter: Letter,
    /// Positive = sharps, negative = flats
    pub accidental: i8,
}

impl NoteName {
    pub fn new(letter: Letter, accidental: i8) -> Self {
        Self { letter, accidental }
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass::new(self.letter.semitone() + self.accidental as i32)
    }

    /// Parse a note name at the start of `s`.
    ///
    /// Returns the note and the number of bytes consumed. Accepts any run of
    /// `#`/`♯` or `b`/`♭` accidentals after the letter; a run whose net count
    /// does not fit in an `i8` is rejected.
    pub fn parse_prefix(s: &str) -> Option<(NoteName, usize)> {
        let mut chars = s.char_indices();
        let (_, first) = chars.next()?;
        let letter = Letter::from_char(first)?;
        let mut accidental: i8 = 0;
        let mut consumed = first.len_utf8();

        for (idx, c) in chars {
            accidental = match c {
                '#' | '♯' => accidental.checked_add(1)?,
                'b' | '♭' => accidental.checked_sub(1)?,
                _ => break,
            };
            consumed = idx + c.len_utf8();
        }

        Some((NoteName::new(letter, accidental), consumed))
    }

    /// Parse a complete note name such as `"Eb"`; trailing text is rejected.
    pub fn parse(s: &str) -> Option<NoteName> {
        let trimmed = s.trim();
        match Self::parse_prefix(trimmed)? {
            (note, consumed) if consumed == trimmed.len() => Some(note),
            _ => None,
        }
    }

    /// Spell the note `interval` above this one.
    pub fn transpose(self, interval: Interval) -> NoteName {
        let letter = self.letter.step(interval.steps);
        let target = self.pitch_class().value() as i32 + interval.semitones as i32;
        // Smallest signed offset from the natural letter to the target pitch
        let mut accidental = (target - letter.semitone()).rem_euclid(12);
        if accidental > 6 {
            accidental -= 12;
        }
        NoteName::new(letter, accidental as i8)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        let symbol = if self.accidental > 0 { "#" } else { "b" };
        for _ in 0..self.accidental.unsigned_abs() {
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

/// Parse a tonal center such as `"C"`, `"F#"`, `"Bb major"` or `"Am"`.
///
/// Only the root pitch class is returned; the mode word is accepted and ignored.
pub fn parse_key(key: &str) -> Option<PitchClass> {
    parse_key_root(key).map(NoteName::pitch_class)
}

/// Spelled root of a tonal center, for callers that build chord symbols in the key
pub fn parse_key_root(key: &str) -> Option<NoteName> {
    let trimmed = key.trim();
    let (note, consumed) = NoteName::parse_prefix(trimmed)?;
    match trimmed[consumed..].trim() {
        "" | "m" | "min" | "minor" | "maj" | "major" | "M" => Some(note),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::new(12), PitchClass::new(0));
        assert_eq!(PitchClass::new(-1).value(), 11);
        assert_eq!(PitchClass::new(7).degree_from(PitchClass::new(0)), 7);
        assert_eq!(PitchClass::new(0).degree_from(PitchClass::new(7)), 5);
    }

    #[test]
    fn test_parse_note_names() {
        assert_eq!(NoteName::parse("C").unwrap().pitch_class().value(), 0);
        assert_eq!(NoteName::parse("F#").unwrap().pitch_class().value(), 6);
        assert_eq!(NoteName::parse("Bb").unwrap().pitch_class().value(), 10);
        assert_eq!(NoteName::parse("Cb").unwrap().pitch_class().value(), 11);
        assert!(NoteName::parse("H").is_none());
        assert!(NoteName::parse("Cm").is_none());
    }

    #[test]
    fn test_spelling_by_interval() {
        let b_flat = NoteName::parse("Bb").unwrap();
        assert_eq!(b_flat.transpose(intervals::MINOR_THIRD).to_string(), "Db");
        assert_eq!(b_flat.transpose(intervals::PERFECT_FIFTH).to_string(), "F");

        let f_sharp = NoteName::parse("F#").unwrap();
        assert_eq!(f_sharp.transpose(intervals::MAJOR_THIRD).to_string(), "A#");

        let c = NoteName::parse("C").unwrap();
        assert_eq!(c.transpose(intervals::DIMINISHED_SEVENTH).to_string(), "Bbb");
    }

    #[test]
    fn test_parse_key_with_mode() {
        assert_eq!(parse_key("C"), Some(PitchClass::new(0)));
        assert_eq!(parse_key("Am"), Some(PitchClass::new(9)));
        assert_eq!(parse_key("Eb major"), Some(PitchClass::new(3)));
        assert_eq!(parse_key("x"), None);
        assert_eq!(parse_key("C dorian"), None);
        assert_eq!(parse_key_root("Bb minor").unwrap().to_string(), "Bb");
    }

    #[test]
    fn test_long_accidental_runs_are_rejected() {
        let max_sharps = format!("C{}", "#".repeat(127));
        assert_eq!(NoteName::parse(&max_sharps).unwrap().accidental, 127);

        assert!(NoteName::parse(&format!("C{}", "#".repeat(128))).is_none());
        assert!(NoteName::parse_prefix(&format!("C{}m", "♯".repeat(300))).is_none());
        assert!(NoteName::parse(&format!("D{}", "b".repeat(129))).is_none());
        assert_eq!(parse_key(&format!("C{}", "b".repeat(129))), None);

        // A run that nets out within range is fine
        let mixed = format!("E{}{}", "#".repeat(100), "b".repeat(100));
        assert_eq!(NoteName::parse(&mixed).unwrap().pitch_class().value(), 4);
    }
}
