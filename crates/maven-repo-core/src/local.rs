//! Local Maven repository (`~/.m2/repository`) resolution.

use crate::error::{MavenRepoError, Result};
use std::io;
use std::path::{Path, PathBuf};

const FILE_URL_PREFIX: &str = "file://";

/// Filesystem operations needed to prepare the local repository.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` together with any missing parents.
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalDirStatus {
    Created,
    AlreadyExists,
}

/// The local Maven repository of a given home directory.
///
/// The home directory is captured once, typically at process start, and
/// every path is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    home: PathBuf,
}

impl LocalRepository {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Uses the current user's home directory.
    pub fn from_env() -> Result<Self> {
        dirs::home_dir()
            .map(Self::new)
            .ok_or(MavenRepoError::HomeDirNotFound)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `file://<home>/.m2/repository`, joined with the platform separator.
    pub fn default_directory_url(&self) -> String {
        let path = self.home.join(".m2").join("repository");
        format!("{FILE_URL_PREFIX}{}", path.display())
    }

    /// Filesystem path of the default directory.
    pub fn directory_path(&self) -> PathBuf {
        let url = self.default_directory_url();
        PathBuf::from(url.strip_prefix(FILE_URL_PREFIX).unwrap_or(&url))
    }

    /// Exact string comparison against [`Self::default_directory_url`];
    /// no trailing slash, case or symlink normalization.
    pub fn is_local_repo(&self, url: &str) -> bool {
        !url.is_empty() && url == self.default_directory_url()
    }

    pub fn ensure_exists(&self, fs: &impl Filesystem) -> Result<LocalDirStatus> {
        let dir = self.directory_path();
        if fs.exists(&dir) {
            tracing::debug!(
                "Local Maven repository directory already exists: {}",
                dir.display()
            );
            return Ok(LocalDirStatus::AlreadyExists);
        }

        tracing::debug!(
            "Local Maven repository directory does not exist, creating {}",
            dir.display()
        );
        fs.ensure_dir(&dir)
            .map_err(|source| MavenRepoError::CreateDirectory {
                path: dir.clone(),
                source,
            })?;
        Ok(LocalDirStatus::Created)
    }
}

pub fn default_local_directory() -> Result<String> {
    Ok(LocalRepository::from_env()?.default_directory_url())
}

pub fn is_local_maven_repo(url: &str) -> Result<bool> {
    Ok(LocalRepository::from_env()?.is_local_repo(url))
}

pub fn ensure_local_directory_exists() -> Result<LocalDirStatus> {
    LocalRepository::from_env()?.ensure_exists(&StdFilesystem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Default)]
    struct MemoryFilesystem {
        dirs: RefCell<HashSet<PathBuf>>,
        created: RefCell<Vec<PathBuf>>,
    }

    impl Filesystem for MemoryFilesystem {
        fn exists(&self, path: &Path) -> bool {
            self.dirs.borrow().contains(path)
        }

        fn ensure_dir(&self, path: &Path) -> io::Result<()> {
            self.dirs.borrow_mut().insert(path.to_path_buf());
            self.created.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct ReadOnlyFilesystem;

    impl Filesystem for ReadOnlyFilesystem {
        fn exists(&self, _path: &Path) -> bool {
            false
        }

        fn ensure_dir(&self, _path: &Path) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    fn home() -> PathBuf {
        std::env::temp_dir().join("maven-repo-home")
    }

    #[test]
    fn test_default_directory_url() {
        let repo = LocalRepository::new(home());
        let expected = format!(
            "file://{}",
            home().join(".m2").join("repository").display()
        );
        assert_eq!(repo.default_directory_url(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_default_directory_url_unix() {
        let repo = LocalRepository::new("/home/me");
        assert_eq!(repo.default_directory_url(), "file:///home/me/.m2/repository");
        assert_eq!(
            repo.directory_path(),
            PathBuf::from("/home/me/.m2/repository")
        );
    }

    #[test]
    fn test_directory_path_strips_prefix() {
        let repo = LocalRepository::new(home());
        assert_eq!(repo.directory_path(), home().join(".m2").join("repository"));
    }

    #[test]
    fn test_is_local_repo() {
        let repo = LocalRepository::new(home());
        assert!(repo.is_local_repo(&repo.default_directory_url()));
        assert!(!repo.is_local_repo("file:///other"));
        assert!(!repo.is_local_repo(""));
        assert!(!repo.is_local_repo(&format!("{}/", repo.default_directory_url())));
    }

    #[test]
    fn test_ensure_exists_creates_once() {
        let repo = LocalRepository::new(home());
        let fs = MemoryFilesystem::default();

        assert_eq!(repo.ensure_exists(&fs).unwrap(), LocalDirStatus::Created);
        assert_eq!(
            repo.ensure_exists(&fs).unwrap(),
            LocalDirStatus::AlreadyExists
        );
        assert_eq!(*fs.created.borrow(), vec![repo.directory_path()]);
    }

    #[test]
    fn test_ensure_exists_propagates_failure() {
        let repo = LocalRepository::new(home());
        let err = repo.ensure_exists(&ReadOnlyFilesystem).unwrap_err();
        match err {
            MavenRepoError::CreateDirectory { path, source } => {
                assert_eq!(path, repo.directory_path());
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_std_filesystem() {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = LocalRepository::new(temp_dir.path());

        assert!(!StdFilesystem.exists(&repo.directory_path()));
        assert_eq!(
            repo.ensure_exists(&StdFilesystem).unwrap(),
            LocalDirStatus::Created
        );
        assert!(repo.directory_path().is_dir());
        assert_eq!(
            repo.ensure_exists(&StdFilesystem).unwrap(),
            LocalDirStatus::AlreadyExists
        );
    }
}
