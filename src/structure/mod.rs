//! # Structure Module
//!
//! Song-form helpers for the songwriting wizard: what section comes next, how
//! complete the form is, and how long a section's lyrics take to sing.
//!
//! ## Sub-modules
//! - `types` - SectionType, Genre, SongStructure, lyric records
//! - `sequencer` - Next-section state machine, completeness, duration estimate
//! - `lyrics` - Syllable counting heuristic
//!
//! ## Termination
//! [`suggest_next_section`] has no built-in end: a caller polling it must decide
//! when to stop. [`plan_structure`] takes that decision as an explicit section
//! limit.

mod lyrics;
mod sequencer;
mod types;


pub use lyrics::{count_syllables_in_line, count_syllables_in_word};
pub use sequencer::{
    estimate_section_duration_seconds, plan_structure, suggest_next_section,
    validate_structure_completeness, SYLLABLES_PER_BEAT,
};
pub use types::{Genre, LyricLine, SectionLyrics, SectionType, SongStructure};
