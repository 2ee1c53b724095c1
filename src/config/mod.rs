//! Commit types, scopes and footer templates.
//!
//! The built-in defaults are overlaid by an optional JSON file in the
//! repository root. Each top-level key of that file (`types`, `scopes`,
//! `footer`) replaces the default list wholesale. Loading never fails: a
//! missing, unreadable or malformed file falls back to the defaults.

pub mod defaults;

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub use defaults::{CUSTOM_LABEL, DEFAULT_CONFIG_FILE, NONE_LABEL};

/// One selectable option: a commit type, a scope or a footer template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChoiceItem {
    pub label: String,
    /// Shown during selection only, never written into the message.
    #[serde(default)]
    pub description: String,
}

impl ChoiceItem {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ChoiceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{:<10} {}", self.label, self.description)
        }
    }
}

/// The choice lists one wizard run works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Never empty.
    pub types: Vec<ChoiceItem>,
    pub scopes: Vec<ChoiceItem>,
    pub footer: Vec<ChoiceItem>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            types: defaults::types(),
            scopes: Vec::new(),
            footer: defaults::footer(),
        }
    }
}

impl Configuration {
    /// Load the configuration for a workspace.
    ///
    /// Reads `<workspace_root>/<file_name>` if it exists and overlays its keys
    /// on the built-in defaults.
    pub fn load(workspace_root: &Path, file_name: &str) -> Self {
        let path = workspace_root.join(file_name);
        let mut config = Self::default();

        if !path.is_file() {
            debug!("No override file at {}, using defaults", path.display());
            return config;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path.display(), e);
                return config;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(overrides)) => {
                config.apply_overrides(&overrides);
                debug!(
                    "Loaded {} ({} types, {} scopes, {} footers)",
                    path.display(),
                    config.types.len(),
                    config.scopes.len(),
                    config.footer.len()
                );
            }
            Ok(_) => warn!(
                "{} is not a JSON object. Using defaults.",
                path.display()
            ),
            Err(e) => warn!("Could not parse {}: {}. Using defaults.", path.display(), e),
        }

        config
    }

    fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        if let Some(types) = parse_items(overrides, "types") {
            if types.is_empty() {
                warn!("Ignoring empty 'types' override; keeping the default types");
            } else {
                self.types = types;
            }
        }
        if let Some(scopes) = parse_items(overrides, "scopes") {
            self.scopes = scopes;
        }
        if let Some(footer) = parse_items(overrides, "footer") {
            self.footer = footer;
        }
    }
}

/// Parse one top-level key as a list of choices.
///
/// Returns `None` when the key is absent or its value has the wrong shape.
fn parse_items(overrides: &Map<String, Value>, key: &str) -> Option<Vec<ChoiceItem>> {
    let value = overrides.get(key)?;
    match serde_json::from_value::<Vec<ChoiceItem>>(value.clone()) {
        Ok(items) => Some(items),
        Err(e) => {
            warn!("Ignoring malformed '{}' override: {}", key, e);
            None
        }
    }
}
