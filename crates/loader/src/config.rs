use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

const DEFAULT_TRY_EXTENSIONS: &[&str] = &[".md", ".txt", ".py"];

/// Strategy for choosing the directory mentions are resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePathMode {
    #[default]
    Cwd,
    GitRoot,
}

impl BasePathMode {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "cwd" => Some(Self::Cwd),
            "git_root" => Some(Self::GitRoot),
            _ => None,
        }
    }
}

/// Immutable per-instance configuration. Validated once at construction;
/// no call mutates it.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub resolve_relative_to: BasePathMode,
    pub try_extensions: Vec<String>,
    pub show_loaded_files: bool,
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resolve_relative_to: BasePathMode::Cwd,
            try_extensions: DEFAULT_TRY_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            show_loaded_files: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Raw on-disk shape: every field optional, defaults filled in during
/// validation.
#[derive(Debug, Default, Deserialize)]
struct RawLoaderConfig {
    resolve_relative_to: Option<String>,
    try_extensions: Option<Vec<String>>,
    show_loaded_files: Option<bool>,
    max_file_size: Option<u64>,
}

impl LoaderConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_raw(parse_raw(bytes)?)
    }

    fn from_raw(raw: RawLoaderConfig) -> Result<Self> {
        let defaults = Self::default();

        let resolve_relative_to = match raw.resolve_relative_to.as_deref() {
            Some(name) => BasePathMode::parse(name)
                .ok_or_else(|| ConfigError::InvalidMode(name.to_string()))?,
            None => defaults.resolve_relative_to,
        };

        let try_extensions = raw.try_extensions.unwrap_or(defaults.try_extensions);
        for ext in &try_extensions {
            if !ext.starts_with('.') {
                return Err(ConfigError::InvalidExtension(ext.clone()));
            }
        }

        Ok(Self {
            resolve_relative_to,
            try_extensions,
            show_loaded_files: raw.show_loaded_files.unwrap_or(defaults.show_loaded_files),
            max_file_size: raw.max_file_size.unwrap_or(defaults.max_file_size),
        })
    }
}

fn parse_raw(bytes: &[u8]) -> Result<RawLoaderConfig> {
    if let Ok(raw) = serde_json::from_slice::<RawLoaderConfig>(bytes) {
        return Ok(raw);
    }
    let text =
        std::str::from_utf8(bytes).map_err(|err| ConfigError::ParseError(err.to_string()))?;
    toml::from_str(text).map_err(|err| ConfigError::ParseError(err.to_string()))
}
