use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION, WIN_LENGTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub colors: ColorConfig,
    pub animation: AnimationConfig,
}

/// Grid dimensions. The win length stays fixed at four regardless.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// `#rrggbb` colors for empty cells and each player's tokens.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub empty: String,
    pub player1: String,
    pub player2: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            empty: "#ffffff".into(),
            player1: "#3fe81a".into(),
            player2: "#f23ad0".into(),
        }
    }
}

/// Presentation pacing, in milliseconds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time a falling token spends on each row
    pub drop_rate_ms: u64,
    /// Half-period of the winning-line flash
    pub flash_rate_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            drop_rate_ms: 50,
            flash_rate_ms: 600,
        }
    }
}

/// Parse a `#rrggbb` color into its components.
pub fn parse_hex_color(value: &str) -> Result<(u8, u8, u8), ConfigError> {
    let invalid = || ConfigError::Validation(format!("'{value}' is not a #rrggbb color"));
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation("board.columns must be > 0".into()));
        }
        if self.board.rows > MAX_DIMENSION || self.board.columns > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows and board.columns must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.rows < WIN_LENGTH && self.board.columns < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board must have at least {WIN_LENGTH} rows or {WIN_LENGTH} columns"
            )));
        }

        for (name, value) in [
            ("colors.empty", &self.colors.empty),
            ("colors.player1", &self.colors.player1),
            ("colors.player2", &self.colors.player2),
        ] {
            parse_hex_color(value)
                .map_err(|_| ConfigError::Validation(format!("{name} must be a #rrggbb color")))?;
        }
        if self.colors.player1.eq_ignore_ascii_case(&self.colors.player2) {
            return Err(ConfigError::Validation(
                "colors.player1 and colors.player2 must differ".into(),
            ));
        }

        if self.animation.drop_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.drop_rate_ms must be > 0".into(),
            ));
        }
        if self.animation.flash_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.flash_rate_ms must be > 0".into(),
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
