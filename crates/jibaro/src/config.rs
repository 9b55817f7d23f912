//! Front-end configuration loaded from `jibaro.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use jibaro_tictactoe::{DifficultyTier, FirstPlayer, Mark, PlayerProfile};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display profiles for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Players {
    /// Profile of the side playing `First`.
    #[serde(default = "PlayerProfile::default_first")]
    first: PlayerProfile,

    /// Profile of the side playing `Second`.
    #[serde(default = "PlayerProfile::default_second")]
    second: PlayerProfile,
}

impl Default for Players {
    fn default() -> Self {
        Self {
            first: PlayerProfile::default_first(),
            second: PlayerProfile::default_second(),
        }
    }
}

/// Front-end settings. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct JibaroConfig {
    /// Names and emoji shown for each side.
    #[serde(default)]
    players: Players,

    /// Who opens against the AI.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Tier the adaptive AI starts at.
    #[serde(default)]
    starting_tier: DifficultyTier,

    /// Fixed RNG seed; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl JibaroConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            first_player = config.first_player.label(),
            tier = %config.starting_tier,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file; using defaults");
            Ok(Self::default())
        }
    }

    /// Profile for the side playing `mark`.
    pub fn profile(&self, mark: Mark) -> &PlayerProfile {
        match mark {
            Mark::Second => &self.players.second,
            Mark::First | Mark::Empty => &self.players.first,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = JibaroConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, JibaroConfig::default());
        assert_eq!(config.profile(Mark::First).name(), "Luna");
        assert_eq!(*config.starting_tier(), DifficultyTier::Medium);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
first_player = "ai"
starting_tier = "hard"
seed = 17

[players.second]
name = "Abuela"
emoji = "🌺"
"#
        )
        .unwrap();

        let config = JibaroConfig::load(file.path()).unwrap();
        assert_eq!(*config.first_player(), FirstPlayer::Ai);
        assert_eq!(*config.starting_tier(), DifficultyTier::Hard);
        assert_eq!(*config.seed(), Some(17));
        assert_eq!(config.profile(Mark::Second).label(), "🌺 Abuela");
        assert_eq!(config.profile(Mark::First), &PlayerProfile::default_first());
    }

    #[test]
    fn test_invalid_file_reports_location() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "starting_tier = \"impossible\"").unwrap();

        let err = JibaroConfig::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().contains("Config error"));
    }
}
