//! Git integration: repository discovery via git2-rs and commits via the
//! `git` binary.

pub mod executor;
pub mod repo;

pub use executor::{CommitExecutor, CommitReport, GitExecutor, check_git_installed, commit_with};
pub use repo::{open_repository, workspace_root};
