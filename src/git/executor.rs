//! Commit invocation: optional staging followed by `git commit`.
//!
//! All operations shell out to the system `git` binary, inheriting the
//! user's git config, hooks and signing setup.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::CommitError;

/// Trait for the git operations a commit needs.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitExecutor: Send + Sync {
    /// Whether the index holds any staged changes.
    async fn has_staged_changes(&self, cwd: &Path) -> Result<bool, CommitError>;

    /// Stage every change in the working tree.
    async fn stage_all(&self, cwd: &Path) -> Result<(), CommitError>;

    /// Create a commit with exactly `message`; returns git's stdout.
    async fn commit(&self, cwd: &Path, message: &str) -> Result<String, CommitError>;
}

/// Default executor that calls the real `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitExecutor;

#[async_trait]
impl CommitExecutor for GitExecutor {
    async fn has_staged_changes(&self, cwd: &Path) -> Result<bool, CommitError> {
        let stdout = run_git(cwd, &["diff", "--name-only", "--cached"], "diff").await?;
        Ok(!stdout.trim().is_empty())
    }

    async fn stage_all(&self, cwd: &Path) -> Result<(), CommitError> {
        run_git(cwd, &["add", "--all"], "add").await?;
        Ok(())
    }

    async fn commit(&self, cwd: &Path, message: &str) -> Result<String, CommitError> {
        run_git(cwd, &["commit", "-m", message], "commit").await
    }
}

/// What a successful commit did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Everything was staged first because nothing was staged.
    pub staged_all: bool,
    /// Non-empty lines git printed on stdout.
    pub output: Vec<String>,
}

/// Check that the `git` binary is available.
pub fn check_git_installed() -> Result<(), CommitError> {
    which::which("git")
        .map(|_| ())
        .map_err(|_| CommitError::GitNotInstalled)
}

/// Commit `message` in `cwd`.
///
/// With `smart_commit` enabled and an empty index, all changes are staged
/// first. There is no retry: a failure is returned to the caller once.
pub async fn commit_with<E: CommitExecutor + ?Sized>(
    executor: &E,
    cwd: &Path,
    message: &str,
    smart_commit: bool,
) -> Result<CommitReport, CommitError> {
    info!("About to commit '{}'", message);

    let mut report = CommitReport::default();

    if smart_commit && !executor.has_staged_changes(cwd).await? {
        info!("Staging all files (smart commit enabled with nothing staged)");
        executor.stage_all(cwd).await?;
        report.staged_all = true;
    }

    let stdout = executor.commit(cwd, message).await?;
    report.output = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect();

    Ok(report)
}

/// Run a git command in `cwd` and return its stdout.
async fn run_git(cwd: &Path, args: &[&str], operation: &str) -> Result<String, CommitError> {
    debug!("Running git {} in {}", operation, cwd.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| CommitError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        // `git commit` with nothing to commit reports on stdout.
        let stderr = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        return Err(CommitError::NonZeroExit {
            operation: operation.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
