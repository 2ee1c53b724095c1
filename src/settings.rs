//! Host settings: verbose mode, override file name and smart commit.
//!
//! Settings are read from git config (`gitcz.verbose`, `gitcz.configFile`,
//! `gitcz.smartCommit`) and may be overridden from the command line.

use git2::{Config, ErrorCode, Repository};
use tracing::{debug, warn};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::GitError;

const VERBOSE_KEY: &str = "gitcz.verbose";
const CONFIG_FILE_KEY: &str = "gitcz.configFile";
const SMART_COMMIT_KEY: &str = "gitcz.smartCommit";

/// Settings that shape one wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    /// Ask for body and footer too.
    pub verbose: bool,
    /// Override file name, relative to the repository root.
    pub config_file: String,
    /// Stage everything before committing when nothing is staged.
    pub smart_commit: bool,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            smart_commit: false,
        }
    }
}

/// Command-line values that take precedence over git config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingOverrides {
    pub verbose: Option<bool>,
    pub config_file: Option<String>,
    pub smart_commit: Option<bool>,
}

impl HostSettings {
    /// Resolve settings for `repo`: command line, then git config, then defaults.
    pub fn resolve(repo: &Repository, overrides: &SettingOverrides) -> Result<Self, GitError> {
        let config = repo.config().map_err(GitError::Config)?;
        Ok(Self::from_git_config(&config).with_overrides(overrides))
    }

    /// Read settings from a git config, using defaults for missing or
    /// invalid entries.
    pub fn from_git_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            verbose: read_entry(config, VERBOSE_KEY, Config::get_bool).unwrap_or(defaults.verbose),
            config_file: read_entry(config, CONFIG_FILE_KEY, Config::get_string)
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.config_file),
            smart_commit: read_entry(config, SMART_COMMIT_KEY, Config::get_bool)
                .unwrap_or(defaults.smart_commit),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: &SettingOverrides) -> Self {
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
        if let Some(ref name) = overrides.config_file {
            self.config_file = name.clone();
        }
        if let Some(smart_commit) = overrides.smart_commit {
            self.smart_commit = smart_commit;
        }
        self
    }
}

/// Read one git config entry, logging a warning if it holds a bad value.
fn read_entry<T>(
    config: &Config,
    key: &str,
    get: impl Fn(&Config, &str) -> Result<T, git2::Error>,
) -> Option<T> {
    match get(config, key) {
        Ok(value) => {
            debug!("Using {} from git config", key);
            Some(value)
        }
        Err(e) if e.code() == ErrorCode::NotFound => None,
        Err(e) => {
            warn!("Invalid git config value for {}: {}. Using default.", key, e);
            None
        }
    }
}
