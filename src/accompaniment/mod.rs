//! # Accompaniment Module
//!
//! Generate timed bass and drum events for a scheduler/player.
//!
//! ## Sub-modules
//! - `types` - BassNote, DrumEvent, style enums and option structs
//! - `bass` - Bass line generation from chord symbols
//! - `drums` - Genre-named drum grooves
//!
//! ## Timing
//! Every event carries `time` and `duration` in beats from the start of the
//! progression (beat 0 = first downbeat). Tempo is not known here: the player
//! converts beats to seconds. Event order matters and duplicates are kept.
//!
//! ## Bass Styles
//! | Style | Per chord (one measure) |
//! |---|---|
//! | `root` | root, full measure, velocity 0.8 |
//! | `walking` | chord tone `beat mod len` on each beat (triads and up only) |
//! | `arpeggio` | root on beat 1, fifth on beat 3 |
//! | `octave` | root on beat 1, root an octave up on beat 3 |
//!
//! ## Drum Styles
//! | Style | Kick | Snare | Hi-hat |
//! |---|---|---|---|
//! | `rock` | 1, 3 | 2, 4 | quarters, accented on even beats |
//! | `pop` | 1, 3 | 2, 4 | eighths |
//! | `jazz` | 1, 3 | 2 | quarters (ride) |
//! | `electronic` | every beat | 2, 4 | off-beats |

mod bass;
mod drums;
mod types;


pub use bass::BassLineGenerator;
pub use drums::{generate_drum_pattern, DRUM_HIT_DURATION};
pub use types::{
    BassLineOptions, BassNote, BassStyle, Drum, DrumEvent, DrumPatternOptions, DrumStyle,
    MAX_BASS_OCTAVE, MAX_BEATS_PER_MEASURE,
};
