use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{Player, COLS};

/// Terminal front end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for input before redrawing.
    pub tick_rate_ms: u64,
    /// Column selected when a game starts.
    pub start_column: usize,
    pub show_column_numbers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 100,
            start_column: 3, // Start in middle
            show_column_numbers: true,
        }
    }
}

/// Display names for the two sides.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red_name: String,
    pub yellow_name: String,
}

impl PlayersConfig {
    /// Configured display name for `player`.
    pub fn name_for(&self, player: Player) -> &str {
        match player {
            Player::Red => self.red_name.as_str(),
            Player::Yellow => self.yellow_name.as_str(),
        }
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red_name: "Red".to_string(),
            yellow_name: "Yellow".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {}",
                COLS
            )));
        }
        if self.players.red_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.red_name must not be empty".into(),
            ));
        }
        if self.players.yellow_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.yellow_name must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
