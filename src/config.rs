use std::path::Path;

use crate::error::{ConfigError, FieldViolation};
use crate::game::GameState;

/// Default location of the optional settings file.
pub const DEFAULT_CONFIG_PATH: &str = "connect_four.toml";

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSettings,
}

/// Board size and number of players.
///
/// Values are signed so that a zero or negative entry from a file or the
/// command line is reported instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub height: i64,
    pub width: i64,
    pub players: i64,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            height: 6,
            width: 7,
            players: 2,
        }
    }
}

impl GameSettings {
    /// Check every field and report all non-positive ones at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let violations: Vec<FieldViolation> = [
            ("height", self.height),
            ("width", self.width),
            ("players", self.players),
        ]
        .into_iter()
        .filter(|&(_, value)| value <= 0)
        .map(|(field, value)| FieldViolation::not_positive(field, value))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }

    /// Validate and build the initial game state.
    pub fn new_game(&self) -> Result<GameState, ConfigError> {
        self.validate()?;
        let to_usize = |field: &str, value: i64| {
            usize::try_from(value).map_err(|_| {
                ConfigError::Invalid(vec![FieldViolation {
                    field: field.to_string(),
                    value,
                    message: "is too large for this platform".to_string(),
                }])
            })
        };
        GameState::new(
            to_usize("height", self.height)?,
            to_usize("width", self.width)?,
            to_usize("players", self.players)?,
        )
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replace file values with whichever command-line values were given.
    pub fn with_overrides(
        mut self,
        height: Option<i64>,
        width: Option<i64>,
        players: Option<i64>,
    ) -> Self {
        if let Some(height) = height {
            self.game.height = height;
        }
        if let Some(width) = width {
            self.game.width = width;
        }
        if let Some(players) = players {
            self.game.players = players;
        }
        self
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
