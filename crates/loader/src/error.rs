use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config is not valid JSON/TOML: {0}")]
    ParseError(String),

    #[error("Invalid resolve_relative_to '{0}': expected 'cwd' or 'git_root'")]
    InvalidMode(String),

    #[error("Invalid extension '{0}': extensions must include their leading '.'")]
    InvalidExtension(String),
}
