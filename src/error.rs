use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Cannot scan {path}")]
    ScanRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Check failed: {0}")]
    CheckFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ComplianceGuardError {
    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::ScanRoot { .. } => "ScanRoot",
            Self::CheckFailed(_) => "Check",
            Self::JsonSerialize(_) => "Serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, ComplianceGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
