//! Repository discovery using git2-rs.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

/// Open the repository containing `start`.
pub fn open_repository(start: &Path) -> Result<Repository, GitError> {
    Repository::discover(start).map_err(|source| GitError::NotARepository {
        path: start.display().to_string(),
        source,
    })
}

/// Working directory root of `repo`.
///
/// This is the directory the override file is read from and the directory
/// git commands run in.
pub fn workspace_root(repo: &Repository) -> Result<PathBuf, GitError> {
    let root = repo.workdir().ok_or(GitError::BareRepository)?.to_path_buf();
    debug!("Workspace root: {}", root.display());
    Ok(root)
}
