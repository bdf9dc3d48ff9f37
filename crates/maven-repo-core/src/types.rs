//! Repository classification.

use serde::Serialize;
use std::fmt;

/// Kind of Maven repository, derived from the URL prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryType {
    Http,
    File,
    #[default]
    Unknown,
}

impl RepositoryType {
    /// Classifies a repository URL by its literal prefix.
    ///
    /// `https://` URLs are `Http` as well since only the `http` prefix is
    /// inspected. Anything else, including the empty string, is `Unknown`.
    pub fn classify(url: &str) -> Self {
        if url.starts_with("http") {
            Self::Http
        } else if url.starts_with("file") {
            Self::File
        } else {
            Self::Unknown
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::File => "file",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RepositoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RepositoryType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "http" => Self::Http,
            "file" => Self::File,
            _ => Self::Unknown,
        })
    }
}

pub fn repository_type(url: &str) -> RepositoryType {
    RepositoryType::classify(url)
}
