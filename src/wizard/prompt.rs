//! Prompt provider abstraction and its terminal implementation.
//!
//! The wizard only talks to [`PromptProvider`], so it can be driven headless
//! in tests by a scripted provider.

use std::io;

use dialoguer::{Input, Select};

use crate::config::ChoiceItem;
use crate::error::PromptError;

/// Input validator: `Err(message)` keeps the prompt open and shows `message`.
pub type Validator = fn(&str) -> Result<(), String>;

/// Capability to ask the user questions.
///
/// `Ok(None)` means the user dismissed the prompt without answering.
pub trait PromptProvider {
    /// Ask for free text, re-asking until `validator` accepts the answer.
    fn ask_text(
        &self,
        question: &str,
        validator: Option<Validator>,
    ) -> Result<Option<String>, PromptError>;

    /// Ask the user to pick one of `choices`.
    fn ask_choice(
        &self,
        question: &str,
        choices: &[ChoiceItem],
    ) -> Result<Option<ChoiceItem>, PromptError>;
}

/// Interactive prompts on the controlling terminal.
///
/// Esc or `q` dismisses a selection list; Ctrl-C dismisses any prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompts;

impl PromptProvider for TerminalPrompts {
    fn ask_text(
        &self,
        question: &str,
        validator: Option<Validator>,
    ) -> Result<Option<String>, PromptError> {
        let mut input = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true);

        if let Some(validate) = validator {
            input = input.validate_with(move |text: &String| validate(text));
        }

        cancellable(input.interact_text())
    }

    fn ask_choice(
        &self,
        question: &str,
        choices: &[ChoiceItem],
    ) -> Result<Option<ChoiceItem>, PromptError> {
        let selection = Select::new()
            .with_prompt(question)
            .items(choices)
            .default(0)
            .interact_opt();

        Ok(cancellable(selection)?
            .flatten()
            .and_then(|index| choices.get(index).cloned()))
    }
}

/// Map Ctrl-C to a dismissed prompt and every other failure to an error.
fn cancellable<T>(result: dialoguer::Result<T>) -> Result<Option<T>, PromptError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            let e: io::Error = e.into();
            if e.kind() == io::ErrorKind::Interrupted {
                Ok(None)
            } else {
                Err(PromptError::Terminal(e))
            }
        }
    }
}
