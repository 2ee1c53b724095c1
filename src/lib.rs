//! gitcz - An interactive wizard for conventional commit messages.
//!
//! # Overview
//!
//! gitcz asks for a commit type, an optional scope and a subject (and, in
//! verbose mode, a body and footer), assembles a conventional commit message
//! and hands it to `git commit`. Commit types, scopes and footer templates
//! come from built-in defaults overlaid by a JSON file in the repository root.

pub mod config;
pub mod error;
pub mod git;
pub mod run;
pub mod settings;
pub mod wizard;

// Re-export commonly used types
pub use config::{ChoiceItem, Configuration};
pub use error::{CommitError, GitError, PromptError, RunError};
pub use git::{CommitExecutor, CommitReport, GitExecutor};
pub use run::{RunOptions, RunOutcome, run};
pub use settings::{HostSettings, SettingOverrides};
pub use wizard::{Flow, PromptProvider, Session, Stage, TerminalPrompts, Wizard};
