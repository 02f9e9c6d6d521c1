//! Song structure sequencing: next-section suggestions, completeness scoring and
//! section duration estimates.

use super::types::{Genre, SectionLyrics, SectionType, SongStructure};
use crate::error::TheoryError;
use log::{debug, trace};

/// Sung syllables per beat used for duration estimates
pub const SYLLABLES_PER_BEAT: f64 = 2.0;

const INTRO_WEIGHT: f64 = 0.1;
const OUTRO_WEIGHT: f64 = 0.1;
const VERSE_WEIGHT: f64 = 0.3;
const CHORUS_WEIGHT: f64 = 0.3;
const BRIDGE_WEIGHT: f64 = 0.2;

/// Sections in the list before a bridge is suggested
const MIN_SECTIONS_BEFORE_BRIDGE: usize = 6;

/// Estimate how long a section takes to sing, in seconds.
///
/// `duration = (syllables / 2) / (tempo / 60)`.
///
/// # Example
/// ```rust
/// use jam_theory::structure::{estimate_section_duration_seconds, SectionLyrics, SectionType};
///
/// let verse = SectionLyrics::from_text(SectionType::Verse, "Hello, darkness, my old friend\nI've come to talk");
/// assert_eq!(verse.total_syllables(), 11);
/// // 11 syllables = 5.5 beats = 2.75 s at 120 BPM
/// assert_eq!(estimate_section_duration_seconds(&verse, 120.0).unwrap(), 2.75);
/// ```
pub fn estimate_section_duration_seconds(
    section: &SectionLyrics,
    tempo: f64,
) -> Result<f64, TheoryError> {
    if !tempo.is_finite() || tempo <= 0.0 {
        return Err(TheoryError::TempoError(tempo));
    }

    let total_syllables = section.total_syllables() as f64;
    let beats_per_second = tempo / 60.0;
    let estimated_beats = total_syllables / SYLLABLES_PER_BEAT;

    Ok(estimated_beats / beats_per_second)
}

/// Score how complete a structure is, from 0.0 to 1.0.
///
/// | Element | Weight |
/// |---|---|
/// | intro | 0.1 |
/// | outro | 0.1 |
/// | verses | 0.3 for two or more, 0.15 for one |
/// | choruses | 0.3 for two or more, 0.15 for one |
/// | bridge | 0.2 for any |
pub fn validate_structure_completeness(structure: &SongStructure) -> f64 {
    let mut completeness = 0.0;

    if structure.has_intro {
        completeness += INTRO_WEIGHT;
    }
    if structure.has_outro {
        completeness += OUTRO_WEIGHT;
    }

    completeness += match structure.verse_count {
        0 => 0.0,
        1 => VERSE_WEIGHT * 0.5,
        _ => VERSE_WEIGHT,
    };
    completeness += match structure.chorus_count {
        0 => 0.0,
        1 => CHORUS_WEIGHT * 0.5,
        _ => CHORUS_WEIGHT,
    };

    if structure.bridge_count > 0 {
        completeness += BRIDGE_WEIGHT;
    }

    completeness
}

/// Suggest the section that should follow the current structure.
///
/// Deterministic state machine keyed on the last section:
///
/// | Last | Suggestion |
/// |---|---|
/// | (none) | intro for rock/indie/electronic/metal, otherwise verse |
/// | intro | verse |
/// | verse | chorus if there is no chorus yet; prechorus if the genre uses one and none exists; otherwise chorus |
/// | prechorus | chorus |
/// | chorus | verse if fewer than two verses; bridge if none yet and at least six sections; outro if two or more choruses; otherwise verse |
/// | bridge | chorus |
/// | outro | outro |
///
/// There is no stop condition: after a chorus the machine can keep
/// alternating verse and chorus. Use [`plan_structure`] for a bounded plan.
///
/// # Example
/// ```rust
/// use jam_theory::structure::{suggest_next_section, Genre, SectionType, SongStructure};
///
/// assert_eq!(suggest_next_section(&SongStructure::default(), Genre::Pop), SectionType::Verse);
/// assert_eq!(suggest_next_section(&SongStructure::default(), Genre::Metal), SectionType::Intro);
///
/// let opened = SongStructure::from_sections(vec![SectionType::Intro], Genre::Jazz);
/// assert_eq!(suggest_next_section(&opened, Genre::Jazz), SectionType::Verse);
/// ```
pub fn suggest_next_section(structure: &SongStructure, genre: Genre) -> SectionType {
    let Some(&last) = structure.sections.last() else {
        return if genre.starts_with_intro() {
            SectionType::Intro
        } else {
            SectionType::Verse
        };
    };

    let next = match last {
        SectionType::Intro => SectionType::Verse,
        SectionType::Verse => {
            if structure.chorus_count == 0 {
                SectionType::Chorus
            } else if genre.uses_prechorus() && !structure.contains(SectionType::Prechorus) {
                SectionType::Prechorus
            } else {
                SectionType::Chorus
            }
        }
        SectionType::Prechorus => SectionType::Chorus,
        SectionType::Chorus => {
            if structure.verse_count < 2 {
                SectionType::Verse
            } else if structure.bridge_count == 0
                && structure.sections.len() >= MIN_SECTIONS_BEFORE_BRIDGE
            {
                SectionType::Bridge
            } else if structure.chorus_count >= 2 {
                SectionType::Outro
            } else {
                SectionType::Verse
            }
        }
        SectionType::Bridge => SectionType::Chorus,
        SectionType::Outro => SectionType::Outro,
    };

    trace!("after {} ({} sections) suggest {}", last, structure.sections.len(), next);
    next
}

/// Build a structure by following [`suggest_next_section`] from scratch.
///
/// Stops once an outro has been added or the structure reaches `max_sections`,
/// whichever comes first. The counts of the result always match its sections.
///
/// # Example
/// ```rust
/// use jam_theory::structure::{plan_structure, validate_structure_completeness, Genre, SectionType};
///
/// let song = plan_structure(Genre::Pop, 12);
/// assert_eq!(song.sections.last(), Some(&SectionType::Outro));
/// assert!(song.validate().is_ok());
///
/// assert_eq!(plan_structure(Genre::Rock, 3).sections.len(), 3);
/// ```
pub fn plan_structure(genre: Genre, max_sections: usize) -> SongStructure {
    let mut structure = SongStructure::new(genre);

    while structure.sections.len() < max_sections {
        let next = suggest_next_section(&structure, genre);
        structure.push(next);
        if next == SectionType::Outro {
            break;
        }
    }

    debug!(
        "planned {} sections for {:?}: {:?}",
        structure.sections.len(),
        genre,
        structure.sections
    );
    structure
}
