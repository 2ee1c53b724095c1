//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use git2::{Repository, Signature};

use gitcz::wizard::Validator;
use gitcz::{ChoiceItem, CommitError, CommitExecutor, PromptError, PromptProvider};

/// One scripted user action.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Type this text into a free-text prompt.
    Text(String),
    /// Pick the entry with this label from a list.
    Pick(String),
    /// Dismiss the prompt.
    Cancel,
}

pub fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}

pub fn pick(label: &str) -> Answer {
    Answer::Pick(label.to_string())
}

/// A headless prompt provider that replays scripted answers.
///
/// Text answers rejected by the prompt's validator are recorded and the next
/// answer is tried, mirroring a prompt that stays open until it is valid.
#[derive(Default)]
pub struct ScriptedPrompts {
    answers: RefCell<VecDeque<Answer>>,
    questions: RefCell<Vec<String>>,
    rejections: RefCell<Vec<String>>,
    offered: RefCell<Vec<Vec<ChoiceItem>>>,
}

impl ScriptedPrompts {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            ..Self::default()
        }
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    /// Validation messages shown so far.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.borrow().clone()
    }

    /// Choice lists offered so far, in order.
    pub fn offered(&self) -> Vec<Vec<ChoiceItem>> {
        self.offered.borrow().clone()
    }

    /// Answers that were never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, question: &str) -> Answer {
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("No scripted answer left for '{}'", question))
    }
}

impl PromptProvider for ScriptedPrompts {
    fn ask_text(
        &self,
        question: &str,
        validator: Option<Validator>,
    ) -> Result<Option<String>, PromptError> {
        self.questions.borrow_mut().push(question.to_string());

        loop {
            match self.next(question) {
                Answer::Text(input) => {
                    if let Some(validate) = validator {
                        if let Err(message) = validate(&input) {
                            self.rejections.borrow_mut().push(message);
                            continue;
                        }
                    }
                    return Ok(Some(input));
                }
                Answer::Cancel => return Ok(None),
                Answer::Pick(label) => {
                    panic!("Scripted pick '{}' for text prompt '{}'", label, question)
                }
            }
        }
    }

    fn ask_choice(
        &self,
        question: &str,
        choices: &[ChoiceItem],
    ) -> Result<Option<ChoiceItem>, PromptError> {
        self.questions.borrow_mut().push(question.to_string());
        self.offered.borrow_mut().push(choices.to_vec());

        match self.next(question) {
            Answer::Pick(label) => {
                let choice = choices
                    .iter()
                    .find(|c| c.label == label)
                    .unwrap_or_else(|| panic!("'{}' is not offered for '{}'", label, question));
                Ok(Some(choice.clone()))
            }
            Answer::Cancel => Ok(None),
            Answer::Text(input) => {
                panic!("Scripted text '{}' for choice prompt '{}'", input, question)
            }
        }
    }
}

/// A commit executor that records commits instead of running git.
#[derive(Default)]
pub struct RecordingExecutor {
    pub staged: bool,
    pub fail_with: Option<String>,
    commits: Mutex<Vec<String>>,
    stage_calls: Mutex<usize>,
}

impl RecordingExecutor {
    pub fn failing(stderr: &str) -> Self {
        Self {
            fail_with: Some(stderr.to_string()),
            ..Self::default()
        }
    }

    /// Messages passed to `commit`, in order.
    pub fn commits(&self) -> Vec<String> {
        self.commits.lock().unwrap().clone()
    }

    pub fn stage_calls(&self) -> usize {
        *self.stage_calls.lock().unwrap()
    }
}

#[async_trait]
impl CommitExecutor for RecordingExecutor {
    async fn has_staged_changes(&self, _cwd: &Path) -> Result<bool, CommitError> {
        Ok(self.staged)
    }

    async fn stage_all(&self, _cwd: &Path) -> Result<(), CommitError> {
        *self.stage_calls.lock().unwrap() += 1;
        Ok(())
    }

    async fn commit(&self, _cwd: &Path, message: &str) -> Result<String, CommitError> {
        self.commits.lock().unwrap().push(message.to_string());
        match self.fail_with {
            Some(ref stderr) => Err(CommitError::NonZeroExit {
                operation: "commit".to_string(),
                code: 1,
                stderr: stderr.clone(),
            }),
            None => Ok("[main abc1234] recorded\n".to_string()),
        }
    }
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    ///
    /// The repository-local config carries an identity so `git commit` works
    /// on machines without a global one.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        {
            let mut config = repo.config().expect("Failed to open repo config");
            config
                .set_str("user.name", "Test User")
                .expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
            config
                .set_bool("commit.gpgsign", false)
                .expect("Failed to set commit.gpgsign");
        }
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Set a repository-local git config entry.
    pub fn set_config(&self, key: &str, value: &str) {
        self.repo
            .config()
            .expect("Failed to open repo config")
            .set_str(key, value)
            .expect("Failed to set config entry");
    }

    /// Write a file in the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Write a file and stage it.
    pub fn stage_file(&self, name: &str, content: &str) {
        self.write_file(name, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(name))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Create a commit from the current index via git2.
    pub fn commit_index(&self, message: &str) {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit");
    }

    /// Message of the commit HEAD points to.
    pub fn head_message(&self) -> Option<String> {
        let commit = self.repo.head().ok()?.peel_to_commit().ok()?;
        commit.message().map(String::from)
    }
}
