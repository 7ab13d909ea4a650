use serde::Deserialize;
use std::{env, path::Path, path::PathBuf, time::Duration};
use thiserror::Error;

use guess_types::ui::UiOptions;

/// Delay before a won game returns to the Home screen.
pub const DEFAULT_RETURN_HOME_DELAY: Duration = Duration::from_millis(3000);

/// Environment override for `[game] return_home_delay_ms`.
pub const RETURN_DELAY_ENV: &str = "GUESS_RETURN_DELAY_MS";

#[derive(Debug, Default, Deserialize)]
pub struct GuessConfig {
    pub app: Option<AppConfig>,
    pub game: Option<GameConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs and face art.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable modal animations and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    /// Milliseconds a win stays on screen before returning home.
    pub return_home_delay_ms: Option<u64>,
    /// Prefill for the Home screen's minimum field.
    pub default_min: Option<i64>,
    /// Prefill for the Home screen's maximum field.
    pub default_max: Option<i64>,
}

/// Game settings resolved from config file and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub return_home_delay: Duration,
    pub default_min: Option<i64>,
    pub default_max: Option<i64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            return_home_delay: DEFAULT_RETURN_HOME_DELAY,
            default_min: None,
            default_max: None,
        }
    }
}

impl GameSettings {
    /// Resolve from config, letting `GUESS_RETURN_DELAY_MS` win over the file.
    #[must_use]
    pub fn resolve(config: Option<&GuessConfig>) -> Self {
        let env_delay = env::var(RETURN_DELAY_ENV).ok();
        Self::resolve_with(config, env_delay.as_deref())
    }

    fn resolve_with(config: Option<&GuessConfig>, env_delay: Option<&str>) -> Self {
        let game = config.and_then(|cfg| cfg.game.as_ref());
        let file_delay = game.and_then(|g| g.return_home_delay_ms);
        let env_delay = env_delay.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                tracing::warn!("Ignoring invalid {RETURN_DELAY_ENV}={raw:?}");
                None
            }
        });

        Self {
            return_home_delay: env_delay
                .or(file_delay)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_RETURN_HOME_DELAY),
            default_min: game.and_then(|g| g.default_min),
            default_max: game.and_then(|g| g.default_max),
        }
    }
}

impl GuessConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".guess").join("config.toml"))
}
