//! git-cz - CLI entry point.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use gitcz::git::check_git_installed;
use gitcz::{GitExecutor, RunOptions, RunOutcome, SettingOverrides, TerminalPrompts};

/// Compose a conventional commit message interactively and commit it.
#[derive(Parser, Debug)]
#[command(name = "git-cz")]
#[command(about = "Compose a conventional commit message interactively and commit it")]
#[command(version)]
struct Cli {
    /// Also ask for a body and a footer (git config: gitcz.verbose)
    #[arg(short, long)]
    verbose: bool,

    /// Override file with types, scopes and footers, relative to the repository root
    /// (git config: gitcz.configFile, default: .gitcz.json)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Stage all changes first when nothing is staged (git config: gitcz.smartCommit)
    #[arg(long)]
    smart_commit: bool,

    /// Print the message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Run as if started in <PATH>
    #[arg(short = 'C', value_name = "PATH", default_value = ".")]
    directory: PathBuf,
}

impl Cli {
    fn run_options(self) -> RunOptions {
        RunOptions {
            start_dir: self.directory,
            overrides: SettingOverrides {
                verbose: self.verbose.then_some(true),
                config_file: self.config,
                smart_commit: self.smart_commit.then_some(true),
            },
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() {
    // Write to stderr so logs don't interfere with the prompts or --dry-run output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        error!("{:?}", e);
        eprintln!("Error: {e}");

        // Print the full error chain
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }

        process::exit(1);
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let options = cli.run_options();

    if !options.dry_run {
        check_git_installed().context("git is required to create commits")?;
    }

    let outcome = gitcz::run(&options, &TerminalPrompts, &GitExecutor).await?;

    match outcome {
        RunOutcome::Cancelled | RunOutcome::Empty => {}
        RunOutcome::DryRun(message) => println!("{message}"),
        RunOutcome::Committed { message, report } => {
            if report.staged_all {
                println!("  [DONE] Staged all changes");
            }
            for line in &report.output {
                println!("{line}");
            }
            let header = message.lines().next().unwrap_or_default();
            println!("  [DONE] Created commit: {header}");
        }
    }

    Ok(())
}
