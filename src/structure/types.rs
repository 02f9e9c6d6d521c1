//! Song structure type definitions

use super::lyrics::count_syllables_in_line;
use crate::error::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Song section tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Intro,
    Verse,
    Prechorus,
    Chorus,
    Bridge,
    Outro,
}

impl SectionType {
    pub fn name(self) -> &'static str {
        match self {
            SectionType::Intro => "intro",
            SectionType::Verse => "verse",
            SectionType::Prechorus => "prechorus",
            SectionType::Chorus => "chorus",
            SectionType::Bridge => "bridge",
            SectionType::Outro => "outro",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Genre tags understood by the structure sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Pop,
    Rock,
    Indie,
    Folk,
    Country,
    Blues,
    Jazz,
    Soul,
    Rnb,
    Hiphop,
    Electronic,
    Punk,
    Metal,
    Alternative,
    SingerSongwriter,
    #[default]
    Other,
}

impl Genre {
    pub fn from_name(name: &str) -> Option<Self> {
        let genre = match name.trim().to_ascii_lowercase().as_str() {
            "pop" => Genre::Pop,
            "rock" => Genre::Rock,
            "indie" => Genre::Indie,
            "folk" => Genre::Folk,
            "country" => Genre::Country,
            "blues" => Genre::Blues,
            "jazz" => Genre::Jazz,
            "soul" => Genre::Soul,
            "rnb" => Genre::Rnb,
            "hiphop" => Genre::Hiphop,
            "electronic" => Genre::Electronic,
            "punk" => Genre::Punk,
            "metal" => Genre::Metal,
            "alternative" => Genre::Alternative,
            "singer-songwriter" => Genre::SingerSongwriter,
            "other" => Genre::Other,
            _ => return None,
        };
        Some(genre)
    }

    /// Genres whose songs usually open with an intro
    pub fn starts_with_intro(self) -> bool {
        matches!(self, Genre::Rock | Genre::Indie | Genre::Electronic | Genre::Metal)
    }

    /// Genres that put a pre-chorus between verse and chorus
    pub fn uses_prechorus(self) -> bool {
        matches!(self, Genre::Pop | Genre::Rock | Genre::Indie | Genre::Alternative)
    }
}

/// Snapshot of a song's sections.
///
/// The counts are maintained by the caller and are expected to match the
/// occurrences of each tag in `sections`; the sequencer reads the counts as
/// given. [`SongStructure::from_sections`] derives them, and
/// [`SongStructure::validate`] checks them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongStructure {
    pub sections: Vec<SectionType>,
    pub verse_count: u32,
    pub chorus_count: u32,
    pub bridge_count: u32,
    pub has_intro: bool,
    pub has_outro: bool,
    pub genre: Genre,
}

impl SongStructure {
    pub fn new(genre: Genre) -> Self {
        Self {
            genre,
            ..Self::default()
        }
    }

    /// Build a structure whose counts and flags agree with `sections`
    pub fn from_sections(sections: Vec<SectionType>, genre: Genre) -> Self {
        let mut structure = Self::new(genre);
        for section in sections {
            structure.push(section);
        }
        structure
    }

    /// Append a section and update the matching count or flag
    pub fn push(&mut self, section: SectionType) {
        match section {
            SectionType::Intro => self.has_intro = true,
            SectionType::Verse => self.verse_count += 1,
            SectionType::Chorus => self.chorus_count += 1,
            SectionType::Bridge => self.bridge_count += 1,
            SectionType::Outro => self.has_outro = true,
            SectionType::Prechorus => {}
        }
        self.sections.push(section);
    }

    pub fn contains(&self, section: SectionType) -> bool {
        self.sections.contains(&section)
    }

    fn occurrences(&self, section: SectionType) -> u32 {
        self.sections.iter().filter(|&&s| s == section).count() as u32
    }

    /// Check that the counts and flags match the section list
    pub fn validate(&self) -> Result<(), TheoryError> {
        let counted = [
            (SectionType::Verse, self.verse_count),
            (SectionType::Chorus, self.chorus_count),
            (SectionType::Bridge, self.bridge_count),
        ];
        for (section, count) in counted {
            let actual = self.occurrences(section);
            if actual != count {
                return Err(TheoryError::StructureError {
                    section: section.to_string(),
                    message: format!("count is {} but the section list has {}", count, actual),
                });
            }
        }

        let flagged = [
            (SectionType::Intro, self.has_intro),
            (SectionType::Outro, self.has_outro),
        ];
        for (section, flag) in flagged {
            if self.contains(section) != flag {
                return Err(TheoryError::StructureError {
                    section: section.to_string(),
                    message: format!(
                        "flag is {} but the section list {} it",
                        flag,
                        if flag { "lacks" } else { "contains" }
                    ),
                });
            }
        }

        Ok(())
    }
}

/// One line of lyrics with its syllable count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    pub text: String,
    pub syllable_count: u32,
}

impl LyricLine {
    /// Count syllables in `text` with the vowel-group heuristic
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            syllable_count: count_syllables_in_line(text),
        }
    }
}

/// The lyrics of one section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLyrics {
    pub section_type: SectionType,
    pub lines: Vec<LyricLine>,
}

impl SectionLyrics {
    pub fn from_text(section_type: SectionType, text: &str) -> Self {
        Self {
            section_type,
            lines: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(LyricLine::from_text)
                .collect(),
        }
    }

    pub fn total_syllables(&self) -> u32 {
        self.lines.iter().map(|line| line.syllable_count).sum()
    }
}
