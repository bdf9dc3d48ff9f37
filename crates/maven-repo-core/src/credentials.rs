//! Repository credentials and publisher configuration.
//!
//! A credential is either a literal value or a reference to a variable that
//! Gradle resolves at build time. References are written `[name]`.

use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Literal(String),
    /// Variable name with the surrounding brackets removed.
    VariableRef(String),
}

impl Credential {
    /// Parses a raw credential value. Empty values carry no credential.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else if raw.starts_with('[') {
            Some(Self::VariableRef(strip_ends(raw).to_string()))
        } else {
            Some(Self::Literal(raw.to_string()))
        }
    }

    pub fn is_variable_ref(&self) -> bool {
        matches!(self, Self::VariableRef(_))
    }

    /// Value as written inside an authentication clause that references
    /// variables. Literals lose their first and last characters too.
    pub fn unwrapped(&self) -> &str {
        match self {
            Self::VariableRef(name) => name,
            Self::Literal(value) => strip_ends(value),
        }
    }
}

/// Drops the first and last characters of `s`.
fn strip_ends(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// User name and password for an http repository, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MavenCredentials {
    #[serde(rename = "mavenUser", default)]
    pub user: Option<String>,
    #[serde(rename = "mavenPassword", default)]
    pub password: Option<String>,
}

impl MavenCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            password: Some(password.into()),
        }
    }

    pub fn user(&self) -> Option<Credential> {
        self.user.as_deref().and_then(Credential::parse)
    }

    pub fn password(&self) -> Option<Credential> {
        self.password.as_deref().and_then(Credential::parse)
    }
}

/// Publication target settings passed by the container generator, e.g.
/// `{"mavenRepositoryUrl": "http://host:8081/repo", "mavenUser": "[myUserVar]"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherConfig {
    #[serde(default)]
    pub maven_repository_url: Option<String>,
    #[serde(flatten)]
    pub credentials: MavenCredentials,
}

impl PublisherConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
