//! The commit pipeline: settings, configuration, wizard, commit.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Configuration;
use crate::error::RunError;
use crate::git::{CommitExecutor, CommitReport, commit_with, open_repository, workspace_root};
use crate::settings::{HostSettings, SettingOverrides};
use crate::wizard::{PromptProvider, Wizard};

/// Options for one pipeline run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the repository is discovered from.
    pub start_dir: PathBuf,
    pub overrides: SettingOverrides,
    /// Print the message instead of committing.
    pub dry_run: bool,
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user dismissed a prompt. Nothing was committed.
    Cancelled,
    /// The wizard finished without a usable message. Nothing was committed.
    Empty,
    DryRun(String),
    Committed {
        message: String,
        report: CommitReport,
    },
}

/// Run the wizard and commit the resulting message.
///
/// The executor is only invoked when every stage completed and the trimmed
/// message is non-empty.
pub async fn run<P, E>(options: &RunOptions, prompts: &P, executor: &E) -> Result<RunOutcome, RunError>
where
    P: PromptProvider,
    E: CommitExecutor + ?Sized,
{
    let (root, settings) = {
        let repo = open_repository(&options.start_dir)?;
        let root = workspace_root(&repo)?;
        let settings = HostSettings::resolve(&repo, &options.overrides)?;
        (root, settings)
    };
    debug!("Settings: {:?}", settings);

    let config = Configuration::load(&root, &settings.config_file);

    let wizard = Wizard::new(&config, prompts, settings.verbose);
    let Some(session) = wizard.run()? else {
        info!("Commit cancelled");
        return Ok(RunOutcome::Cancelled);
    };

    let message = session.message().trim().to_string();
    if message.is_empty() {
        return Ok(RunOutcome::Empty);
    }

    if options.dry_run {
        return Ok(RunOutcome::DryRun(message));
    }

    let report = commit_with(executor, &root, &message, settings.smart_commit).await?;

    Ok(RunOutcome::Committed { message, report })
}
