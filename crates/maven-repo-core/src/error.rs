//! Errors for Maven repository handling.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MavenRepoError {
    #[error("Could not determine the current user's home directory")]
    HomeDirNotFound,

    #[error("Failed to create local Maven repository directory '{}': {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid publisher configuration: {source}")]
    InvalidConfig {
        #[source]
        source: serde_json::Error,
    },

    #[error("No Maven repository URL given")]
    MissingRepositoryUrl,

    #[error("Unsupported Maven repository URL '{url}': expected an http or file URL")]
    UnsupportedRepository { url: String },
}

pub type Result<T> = std::result::Result<T, MavenRepoError>;

impl From<serde_json::Error> for MavenRepoError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidConfig { source }
    }
}
