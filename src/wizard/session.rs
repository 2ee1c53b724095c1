//! Wizard session state and commit message assembly.

/// Separator between the header, body and footer blocks.
pub const BLOCK_SEPARATOR: &str = "\r\n\r\n";

/// Answers collected by one wizard run.
///
/// Every field starts unset. Each stage sets exactly one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub footer: Option<String>,
}

impl Session {
    /// Assemble the conventional commit message.
    ///
    /// Produces:
    /// ```text
    /// type(scope): subject\r\n\r\nbody\r\n\r\nfooter
    /// ```
    /// The scope is only parenthesized when non-empty; body and footer are
    /// independent trailing blocks. Returns an empty string when the type or
    /// subject is missing, which means "do not commit".
    pub fn message(&self) -> String {
        let (Some(commit_type), Some(subject)) =
            (non_empty(&self.commit_type), non_empty(&self.subject))
        else {
            return String::new();
        };

        let mut message = String::from(commit_type);
        if let Some(scope) = non_empty(&self.scope) {
            message.push('(');
            message.push_str(scope);
            message.push(')');
        }
        message.push_str(": ");
        message.push_str(subject);

        for block in [non_empty(&self.body), non_empty(&self.footer)]
            .into_iter()
            .flatten()
        {
            message.push_str(BLOCK_SEPARATOR);
            message.push_str(block);
        }

        message
    }

    /// Whether enough answers were collected to produce a message.
    pub fn is_complete(&self) -> bool {
        non_empty(&self.commit_type).is_some() && non_empty(&self.subject).is_some()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
