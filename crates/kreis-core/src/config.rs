use crate::layout::{DEFAULT_MAJOR_TICK_EVERY, DEFAULT_TICK_COUNT, LayoutOptions};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WheelConfig {
    pub line_width: f64,
    pub tick_count: usize,
    pub major_tick_every: usize,
    pub major_tick_length: f64,
    pub minor_tick_length: f64,
    pub tick_width: f64,
    /// Distance from the ring to the tick centres, towards the middle.
    pub tick_inset: f64,
    pub indicator_length: f64,
    pub indicator_width: f64,
    pub animation_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            line_width: 24.0,
            tick_count: DEFAULT_TICK_COUNT,
            major_tick_every: DEFAULT_MAJOR_TICK_EVERY,
            major_tick_length: 20.0,
            minor_tick_length: 10.0,
            tick_width: 2.0,
            tick_inset: 25.0,
            indicator_length: 32.0,
            indicator_width: 4.0,
            animation_ms: 1000,
        }
    }
}

impl WheelConfig {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            tick_count: self.tick_count,
            major_tick_every: self.major_tick_every,
        }
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub hold_secs: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { hold_secs: 3.0 }
    }
}

impl SelectionConfig {
    pub fn hold(&self) -> Duration {
        Duration::try_from_secs_f64(self.hold_secs).unwrap_or(crate::selection::DEFAULT_HOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "kreis", "kreis").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("KREIS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(env_source())
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Parses a TOML document on its own, without the file or environment layers.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
