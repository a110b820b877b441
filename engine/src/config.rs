use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use mercattoria_types::ui::{ModalEffectKind, UiOptions};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "MERCATTORIA_CONFIG";
/// Environment variable that forces reduced motion on or off.
pub const REDUCED_MOTION_ENV: &str = "MERCATTORIA_REDUCED_MOTION";

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    pub app: Option<AppConfig>,
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

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and borders.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable entrance reveals and modal animations.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Capture the mouse (click to open, wheel to scroll).
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// `pop` or `slide`.
    pub modal_effect: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            mouse: true,
            modal_effect: None,
        }
    }
}

impl ReportConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    /// Load a specific file. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
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

    /// UI options from this config alone (no environment overrides).
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let Some(app) = self.app.as_ref() else {
            return UiOptions::default();
        };

        let modal_effect = match app.modal_effect.as_deref() {
            None => ModalEffectKind::default(),
            Some(raw) => ModalEffectKind::parse(raw).unwrap_or_else(|| {
                tracing::warn!("Unknown modal_effect in config: {}", raw);
                ModalEffectKind::default()
            }),
        };

        UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
            mouse: app.mouse,
            modal_effect,
        }
    }
}

/// Resolve UI options from an optional config plus the process environment.
#[must_use]
pub fn resolve_ui_options(config: Option<&ReportConfig>) -> UiOptions {
    resolve_ui_options_with(config, |name| env::var(name).ok())
}

pub(crate) fn resolve_ui_options_with(
    config: Option<&ReportConfig>,
    lookup: impl Fn(&str) -> Option<String>,
) -> UiOptions {
    let mut options = config.map(ReportConfig::ui_options).unwrap_or_default();
    if let Some(raw) = lookup(REDUCED_MOTION_ENV) {
        match parse_flag(&raw) {
            Some(flag) => options.reduced_motion = flag,
            None => tracing::warn!("Ignoring {}={}", REDUCED_MOTION_ENV, raw),
        }
    }
    options
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".mercattoria").join("config.toml"))
}
