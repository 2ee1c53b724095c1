//! The commit message wizard.
//!
//! A session is moved through a fixed sequence of stages. Each stage either
//! hands the updated session on ([`Flow::Continue`]) or reports that the user
//! dismissed a prompt ([`Flow::Cancelled`]), which ends the whole run with no
//! side effects.

pub mod prompt;
pub mod session;

use std::fmt;

use tracing::debug;

use crate::config::{ChoiceItem, Configuration, CUSTOM_LABEL, NONE_LABEL};
use crate::error::PromptError;

pub use prompt::{PromptProvider, TerminalPrompts, Validator};
pub use session::Session;

const TYPE_QUESTION: &str = "Select the type of change you are committing";
const SCOPE_QUESTION: &str = "Select the scope of this change";
const CUSTOM_SCOPE_QUESTION: &str = "Enter a new scope";
const SUBJECT_QUESTION: &str = "Write a short, imperative description of the change (about 50 characters)";
const BODY_QUESTION: &str = "Provide a longer description of the change (optional)";
const FOOTER_QUESTION: &str = "Select a footer for this commit";
const FOOTER_MESSAGE_QUESTION: &str = "Write the footer text";

/// One step of the wizard, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectType,
    SelectScope,
    EnterSubject,
    EnterBody,
    SelectFooter,
    EnterFooterMessage,
}

impl Stage {
    /// Stages for a run; body and footer stages only in verbose mode.
    pub fn sequence(verbose: bool) -> &'static [Stage] {
        const SHORT: &[Stage] = &[Stage::SelectType, Stage::SelectScope, Stage::EnterSubject];
        const FULL: &[Stage] = &[
            Stage::SelectType,
            Stage::SelectScope,
            Stage::EnterSubject,
            Stage::EnterBody,
            Stage::SelectFooter,
            Stage::EnterFooterMessage,
        ];

        if verbose { FULL } else { SHORT }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SelectType => "type",
            Stage::SelectScope => "scope",
            Stage::EnterSubject => "subject",
            Stage::EnterBody => "body",
            Stage::SelectFooter => "footer",
            Stage::EnterFooterMessage => "footer message",
        };
        f.write_str(name)
    }
}

/// Outcome of a single stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(Session),
    Cancelled,
}

/// Rejects an empty subject.
pub fn validate_subject(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("subject must not be empty".to_string());
    }
    Ok(())
}

/// Accepts anything, including an empty body.
pub fn accept_any(_input: &str) -> Result<(), String> {
    Ok(())
}

/// Rejects an empty footer message.
pub fn validate_footer_message(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("footer message must not be empty".to_string());
    }
    Ok(())
}

/// Drives one session through the stages using a prompt provider.
pub struct Wizard<'a, P: PromptProvider> {
    config: &'a Configuration,
    prompts: &'a P,
    verbose: bool,
}

impl<'a, P: PromptProvider> Wizard<'a, P> {
    pub fn new(config: &'a Configuration, prompts: &'a P, verbose: bool) -> Self {
        Self {
            config,
            prompts,
            verbose,
        }
    }

    /// Run every stage in order.
    ///
    /// Returns `Ok(None)` as soon as any stage is cancelled.
    pub fn run(&self) -> Result<Option<Session>, PromptError> {
        let mut session = Session::default();

        for &stage in Stage::sequence(self.verbose) {
            debug!("Wizard stage: {}", stage);
            match self.run_stage(stage, session)? {
                Flow::Continue(next) => session = next,
                Flow::Cancelled => {
                    debug!("Wizard cancelled at {} stage", stage);
                    return Ok(None);
                }
            }
        }

        Ok(Some(session))
    }

    /// Run a single stage against `session`.
    pub fn run_stage(&self, stage: Stage, session: Session) -> Result<Flow, PromptError> {
        match stage {
            Stage::SelectType => self.select_type(session),
            Stage::SelectScope => self.select_scope(session),
            Stage::EnterSubject => self.enter_subject(session),
            Stage::EnterBody => self.enter_body(session),
            Stage::SelectFooter => self.select_footer(session),
            Stage::EnterFooterMessage => self.enter_footer_message(session),
        }
    }

    fn select_type(&self, mut session: Session) -> Result<Flow, PromptError> {
        let Some(pick) = self.prompts.ask_choice(TYPE_QUESTION, &self.config.types)? else {
            return Ok(Flow::Cancelled);
        };
        session.commit_type = Some(pick.label);
        Ok(Flow::Continue(session))
    }

    fn select_scope(&self, mut session: Session) -> Result<Flow, PromptError> {
        let mut choices = Vec::with_capacity(self.config.scopes.len() + 2);
        choices.push(ChoiceItem::new(NONE_LABEL, "No scope for this commit"));
        choices.extend(self.config.scopes.iter().cloned());
        choices.push(ChoiceItem::new(CUSTOM_LABEL, "Enter your own scope"));

        let Some(scope) = self.choose_or_enter(SCOPE_QUESTION, &choices, CUSTOM_SCOPE_QUESTION)?
        else {
            return Ok(Flow::Cancelled);
        };

        session.scope = Some(if scope == NONE_LABEL {
            String::new()
        } else {
            scope
        });
        Ok(Flow::Continue(session))
    }

    fn enter_subject(&self, mut session: Session) -> Result<Flow, PromptError> {
        let Some(subject) = self
            .prompts
            .ask_text(SUBJECT_QUESTION, Some(validate_subject))?
        else {
            return Ok(Flow::Cancelled);
        };
        session.subject = Some(subject);
        Ok(Flow::Continue(session))
    }

    fn enter_body(&self, mut session: Session) -> Result<Flow, PromptError> {
        let Some(body) = self.prompts.ask_text(BODY_QUESTION, Some(accept_any))? else {
            return Ok(Flow::Cancelled);
        };
        session.body = Some(body);
        Ok(Flow::Continue(session))
    }

    fn select_footer(&self, mut session: Session) -> Result<Flow, PromptError> {
        if self.config.footer.is_empty() {
            session.footer = Some(String::new());
            return Ok(Flow::Continue(session));
        }

        let Some(pick) = self.prompts.ask_choice(FOOTER_QUESTION, &self.config.footer)? else {
            return Ok(Flow::Cancelled);
        };
        session.footer = Some(pick.label);
        Ok(Flow::Continue(session))
    }

    /// Complete the footer chosen in the previous stage.
    ///
    /// The "none" choice clears the footer without prompting, the "custom"
    /// choice starts from an empty footer, and any other label is a prefix
    /// that the typed text is appended to.
    fn enter_footer_message(&self, mut session: Session) -> Result<Flow, PromptError> {
        let prefix = match session.footer.take().unwrap_or_default() {
            label if label.is_empty() || label == NONE_LABEL => {
                session.footer = Some(String::new());
                return Ok(Flow::Continue(session));
            }
            label if label == CUSTOM_LABEL => String::new(),
            label => label,
        };

        let Some(text) = self
            .prompts
            .ask_text(FOOTER_MESSAGE_QUESTION, Some(validate_footer_message))?
        else {
            return Ok(Flow::Cancelled);
        };
        session.footer = Some(prefix + &text);
        Ok(Flow::Continue(session))
    }

    /// Pick from `choices`; picking the custom entry asks for free text.
    ///
    /// Dismissing either prompt cancels.
    fn choose_or_enter(
        &self,
        question: &str,
        choices: &[ChoiceItem],
        custom_question: &str,
    ) -> Result<Option<String>, PromptError> {
        match self.prompts.ask_choice(question, choices)? {
            Some(pick) if pick.label == CUSTOM_LABEL => {
                self.prompts.ask_text(custom_question, None)
            }
            Some(pick) => Ok(Some(pick.label)),
            None => Ok(None),
        }
    }
}
