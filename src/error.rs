//! Error types for gitcz modules using thiserror.
//!
//! User cancellation and validation failures are not errors: cancellation is
//! reported as `None` / `Flow::Cancelled`, and validation failures keep the
//! prompt open.

use thiserror::Error;

/// Errors from the terminal prompt layer.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to interact with the terminal: {0}")]
    Terminal(#[source] std::io::Error),
}

/// Errors from repository discovery and git config access.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not inside a git repository ({path}): {source}")]
    NotARepository {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Bare repositories are not supported")]
    BareRepository,

    #[error("Failed to read git config: {0}")]
    Config(#[source] git2::Error),
}

/// Errors from the commit collaborator (the `git` binary).
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("git not found in PATH. Install git and try again.")]
    GitNotInstalled,

    #[error("Failed to spawn git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} exited with code {code}: {stderr}")]
    NonZeroExit {
        operation: String,
        code: i32,
        stderr: String,
    },
}

/// Errors from the end-to-end commit pipeline.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Commit failed: {0}")]
    Commit(#[from] CommitError),
}
