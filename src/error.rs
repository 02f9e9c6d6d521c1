//! # Error Types
//!
//! This module defines all error types for the theory engine.
//!
//! Chord symbols never produce an error: an unrecognized symbol yields a
//! zero-confidence [`ChordAnalysis`](crate::ChordAnalysis) instead. Errors are
//! reserved for structurally invalid input at the boundary (a key that is not a
//! note name, a measure with zero beats, a negative tempo, ...).
//!
//! ## Error Types
//! - `KeyError` - Tonal center could not be parsed
//! - `OptionsError` - Generator options out of range
//! - `TempoError` - Tempo is not a positive, finite BPM value
//! - `StructureError` - Section counts disagree with the section list
//! - `ConfigError` - Invalid YAML engine configuration
//!
//! ## Usage
//! ```rust
//! use jam_theory::{analyze_progression_in_key, TheoryError};
//!
//! match analyze_progression_in_key(&["Am", "Dm", "G", "C"], "H") {
//!     Ok(analysis) => println!("resolves: {}", analysis.resolves_to_tonic),
//!     Err(TheoryError::KeyError(key)) => eprintln!("Bad key {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// Tonal center could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use jam_theory::TheoryError;
    /// let err = TheoryError::KeyError("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid key: H");
    /// ```
    #[error("Invalid key: {0}")]
    KeyError(String),

    /// Generator options out of range.
    ///
    /// # Example
    /// ```
    /// # use jam_theory::TheoryError;
    /// let err = TheoryError::OptionsError("beats per measure must be at least 1".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid generator options: beats per measure must be at least 1"
    /// );
    /// ```
    #[error("Invalid generator options: {0}")]
    OptionsError(String),

    /// Tempo is zero, negative or not finite.
    #[error("Invalid tempo: {0} BPM")]
    TempoError(f64),

    /// Section bookkeeping error.
    ///
    /// Occurs when the counts carried by a `SongStructure` do not match the
    /// occurrences of the matching tag in its section list.
    ///
    /// # Example
    /// ```
    /// # use jam_theory::TheoryError;
    /// let err = TheoryError::StructureError {
    ///     section: "verse".to_string(),
    ///     message: "count is 3 but the section list has 2".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Structure error at verse: count is 3 but the section list has 2"
    /// );
    /// ```
    #[error("Structure error at {section}: {message}")]
    StructureError { section: String, message: String },

    /// Invalid engine configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
