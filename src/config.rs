use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::size::ByteSize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub display: DisplayConfig,
    pub random: RandomConfig,
}

/// Budgets applied by `strutil truncate` when no flags are given.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub max_lines: usize,
    pub max_bytes: ByteSize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            max_lines: 20,
            max_bytes: ByteSize(10_000),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EllipsisSide {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub side: EllipsisSide,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            width: 40,
            side: EllipsisSide::Right,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub length: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig { length: 16 }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("strutil").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(_err) => {
                #[cfg(feature = "trace")]
                tracing::warn!(path = %path.display(), error = %_err, "ignoring malformed config");
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}
