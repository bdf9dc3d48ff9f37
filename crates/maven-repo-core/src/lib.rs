//! Maven repository helpers for generated Android containers.
//!
//! This crate classifies Maven repository URLs, renders the Gradle
//! `repository(...)` statement used as the container's publication target,
//! and prepares the local Maven repository under `~/.m2/repository`.

pub mod credentials;
pub mod error;
pub mod local;
pub mod statement;
pub mod types;

pub use credentials::{Credential, MavenCredentials, PublisherConfig};
pub use error::{MavenRepoError, Result};
pub use local::{
    Filesystem, LocalDirStatus, LocalRepository, StdFilesystem, default_local_directory,
    ensure_local_directory_exists, is_local_maven_repo,
};
pub use statement::target_repository_statement;
pub use types::{RepositoryType, repository_type};
