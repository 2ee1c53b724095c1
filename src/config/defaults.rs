//! Built-in commit types and footer templates.

use super::ChoiceItem;

/// Label of the "no value" entry in scope and footer lists.
pub const NONE_LABEL: &str = "(none)";

/// Label of the "type my own" entry in scope and footer lists.
pub const CUSTOM_LABEL: &str = "(custom)";

/// Default name of the project-local override file.
pub const DEFAULT_CONFIG_FILE: &str = ".gitcz.json";

const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("feat", "A new feature"),
    ("fix", "A bug fix"),
    ("docs", "Documentation only changes"),
    (
        "style",
        "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
    ),
    (
        "refactor",
        "A code change that neither fixes a bug nor adds a feature",
    ),
    ("perf", "A code change that improves performance"),
    ("test", "Adding missing tests"),
    (
        "chore",
        "Changes to the build process or auxiliary tools and libraries",
    ),
    ("revert", "Reverts a previous commit"),
];

const DEFAULT_FOOTER: &[(&str, &str)] = &[
    (NONE_LABEL, "No footer for this commit"),
    ("BREAKING CHANGE: ", "Incompatible change"),
    (CUSTOM_LABEL, "Write your own footer"),
];

pub(crate) fn types() -> Vec<ChoiceItem> {
    to_items(DEFAULT_TYPES)
}

pub(crate) fn footer() -> Vec<ChoiceItem> {
    to_items(DEFAULT_FOOTER)
}

fn to_items(pairs: &[(&str, &str)]) -> Vec<ChoiceItem> {
    pairs
        .iter()
        .map(|(label, description)| ChoiceItem::new(*label, *description))
        .collect()
}
