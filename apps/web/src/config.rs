//! Application settings: an optional `helphut.toml` layered under
//! `HELPHUT__*` environment variables.

use config::{Config, Environment, File};
use helphut_logger::LevelFilter;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the settings file, resolved against the working directory.
pub const CONFIG_FILE: &str = "helphut";
/// Prefix of environment overrides (`HELPHUT__WINDOW__WIDTH=1440`).
pub const ENV_PREFIX: &str = "HELPHUT";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid log level '{level}'{}", format_context(.context))]
    InvalidLevel { level: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Attaches human readable context to a failed config result.
pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T, E: Into<ConfigError>> ConfigErrorExt<T> for Result<T, E> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|e| {
            let mut e = e.into();
            match &mut e {
                ConfigError::Config { context: c, .. }
                | ConfigError::InvalidLevel { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Top-level settings of the HelpHut shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub window: WindowConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "HelpHut".to_owned(),
            window: WindowConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads [`CONFIG_FILE`] from the working directory, if present, plus
    /// environment overrides.
    ///
    /// # Errors
    /// See [`load_config`].
    pub fn load() -> Result<Self, ConfigError> {
        load_config(Some(CONFIG_FILE))
    }
}

/// Native window size, ignored by browser builds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 1200.0, height: 800.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub filter: Option<String>,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, json: false }
    }
}

impl LogConfig {
    /// Parses `level` (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLevel`] for anything else.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level.parse().map_err(|_| ConfigError::InvalidLevel {
            level: self.level.clone().into(),
            context: None,
        })
    }
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// 1. **Base File**: settings from `path` (defaults to [`CONFIG_FILE`]). The
///    extension may be omitted; a missing file is not an error.
/// 2. **Environment Overrides**: values from variables prefixed with `HELPHUT__`.
///    Nested structures use double underscores (`HELPHUT__LOG__LEVEL` maps to `log.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is malformed or its content
/// does not match the structure of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
