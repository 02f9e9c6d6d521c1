//! # Engine Configuration
//!
//! Defaults for the generators and the structure planner, loaded from YAML.
//!
//! ```yaml
//! key: Eb
//! genre: indie
//! bass-style: walking
//! octave: 2
//! beats-per-measure: 3
//! drum-style: jazz
//! measures: 8
//! max-sections: 10
//! ```
//!
//! Every field is optional; missing fields keep the defaults of
//! [`EngineConfig::default`].

use crate::accompaniment::{BassLineOptions, BassStyle, DrumPatternOptions, DrumStyle};
use crate::chord::parse_key;
use crate::error::TheoryError;
use crate::structure::Genre;
use serde::Deserialize;

/// Default section limit for [`plan_structure`](crate::structure::plan_structure)
pub const DEFAULT_MAX_SECTIONS: usize = 12;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    pub key: Option<String>,
    pub genre: Option<String>,
    pub bass_style: Option<String>,
    pub octave: Option<u8>,
    pub beats_per_measure: Option<u32>,
    pub drum_style: Option<String>,
    pub measures: Option<u32>,
    pub max_sections: Option<usize>,
}

/// Validated engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Default tonal center for progression analysis
    pub key: Option<String>,
    pub genre: Genre,
    pub bass: BassLineOptions,
    pub drums: DrumPatternOptions,
    /// Stopping rule for the structure planner
    pub max_sections: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            key: None,
            genre: Genre::default(),
            bass: BassLineOptions::default(),
            drums: DrumPatternOptions::default(),
            max_sections: DEFAULT_MAX_SECTIONS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML configuration.
    ///
    /// # Example
    /// ```rust
    /// use jam_theory::accompaniment::{BassStyle, DrumStyle};
    /// use jam_theory::config::EngineConfig;
    ///
    /// let config = EngineConfig::from_yaml("bass-style: walking\nbeats-per-measure: 3\n").unwrap();
    /// assert_eq!(config.bass.style, BassStyle::Walking);
    /// assert_eq!(config.bass.beats_per_measure, 3);
    /// assert_eq!(config.drums.beats_per_measure, 3);
    /// assert_eq!(config.drums.style, DrumStyle::Rock);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, TheoryError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| TheoryError::ConfigError(e.to_string()))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, TheoryError> {
        let mut config = Self::default();

        if let Some(key) = raw.key {
            if parse_key(&key).is_none() {
                return Err(TheoryError::ConfigError(format!("Invalid key: {}", key)));
            }
            config.key = Some(key);
        }

        if let Some(ref genre) = raw.genre {
            config.genre = Genre::from_name(genre)
                .ok_or_else(|| TheoryError::ConfigError(format!("Unknown genre: {}", genre)))?;
        }

        if let Some(ref style) = raw.bass_style {
            config.bass.style = BassStyle::from_name(style)
                .ok_or_else(|| TheoryError::ConfigError(format!("Unknown bass style: {}", style)))?;
        }

        if let Some(octave) = raw.octave {
            config.bass.octave = octave;
        }

        if let Some(beats) = raw.beats_per_measure {
            config.bass.beats_per_measure = beats;
            config.drums.beats_per_measure = beats;
        }

        if let Some(ref style) = raw.drum_style {
            config.drums.style = DrumStyle::from_name(style)
                .ok_or_else(|| TheoryError::ConfigError(format!("Unknown drum style: {}", style)))?;
        }

        if let Some(measures) = raw.measures {
            config.drums.measures = measures;
        }

        if let Some(max_sections) = raw.max_sections {
            config.max_sections = max_sections;
        }

        config
            .bass
            .validate()
            .and_then(|_| config.drums.validate())
            .map_err(|e| TheoryError::ConfigError(e.to_string()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(EngineConfig::from_yaml("").unwrap(), EngineConfig::default());
        let defaults = EngineConfig::default();
        assert_eq!(defaults.bass.octave, 2);
        assert_eq!(defaults.bass.beats_per_measure, 4);
        assert_eq!(defaults.drums.measures, 1);
        assert_eq!(defaults.max_sections, DEFAULT_MAX_SECTIONS);
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
key: Eb
genre: singer-songwriter
bass-style: octave
octave: 1
beats-per-measure: 3
drum-style: jazz
measures: 8
max-sections: 10
"#;
        let config = EngineConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.key.as_deref(), Some("Eb"));
        assert_eq!(config.genre, Genre::SingerSongwriter);
        assert_eq!(config.bass.style, BassStyle::Octave);
        assert_eq!(config.bass.octave, 1);
        assert_eq!(config.drums.style, DrumStyle::Jazz);
        assert_eq!(config.drums.measures, 8);
        assert_eq!(config.drums.beats_per_measure, 3);
        assert_eq!(config.max_sections, 10);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = EngineConfig::from_yaml("drum-style: polka").unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: Unknown drum style: polka");

        assert!(EngineConfig::from_yaml("key: H").is_err());
        assert!(EngineConfig::from_yaml("genre: yodel").is_err());
        assert!(EngineConfig::from_yaml("beats-per-measure: 0").is_err());
        assert!(EngineConfig::from_yaml("beats-per-measure: 4294967295").is_err());
        assert!(EngineConfig::from_yaml("octave: 12").is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            EngineConfig::from_yaml("octave: [1, 2"),
            Err(TheoryError::ConfigError(_))
        ));
        assert!(EngineConfig::from_yaml("octave: high").is_err());
    }
}
