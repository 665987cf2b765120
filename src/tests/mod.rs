//! Scripted collaborators shared by the unit tests and the pipeline scenarios.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use crate::cli::prompts::Prompter;
use crate::error::{Error, Result};
use crate::github::{Identity, RepoHost, RepoSummary};


#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Checked(Vec<String>),
    Choice(String),
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Checkbox,
    Choice,
}

#[derive(Debug, Clone)]
pub struct PromptCall {
    pub kind: PromptKind,
    pub message: String,
    pub options: Vec<String>,
}

/// Replays canned answers in order and records every prompt shown.
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Answer>>,
    calls: RefCell<Vec<PromptCall>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<PromptCall> {
        self.calls.borrow().clone()
    }

    fn next(&self, kind: PromptKind, message: &str, options: Vec<String>) -> Answer {
        self.calls.borrow_mut().push(PromptCall {
            kind,
            message: message.to_string(),
            options,
        });
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {message}"))
    }
}

impl Prompter for ScriptedPrompt {
    async fn ask_text(&self, message: &str, _secret: bool) -> Result<Option<String>> {
        match self.next(PromptKind::Text, message, Vec::new()) {
            Answer::Text(text) => Ok(Some(text)),
            Answer::Cancel => Ok(None),
            other => panic!("text prompt got {other:?}"),
        }
    }

    async fn ask_checkbox(&self, message: &str, labels: &[String]) -> Result<Option<Vec<String>>> {
        match self.next(PromptKind::Checkbox, message, labels.to_vec()) {
            Answer::Checked(names) => Ok(Some(names)),
            Answer::Cancel => Ok(None),
            other => panic!("checkbox prompt got {other:?}"),
        }
    }

    async fn ask_choice(&self, message: &str, choices: &[&str]) -> Result<Option<String>> {
        let options = choices.iter().map(|c| c.to_string()).collect();
        match self.next(PromptKind::Choice, message, options) {
            Answer::Choice(choice) => Ok(Some(choice)),
            Answer::Cancel => Ok(None),
            other => panic!("choice prompt got {other:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Identity,
    List,
    Delete(String),
}

/// In-memory repository host.
pub struct FakeHost {
    repos: Vec<RepoSummary>,
    reject_token: bool,
    failing_delete: Option<String>,
    calls: RefCell<Vec<HostCall>>,
}

impl FakeHost {
    pub fn new(repos: Vec<RepoSummary>) -> Self {
        Self {
            repos,
            reject_token: false,
            failing_delete: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting_token() -> Self {
        Self {
            reject_token: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn failing_on(mut self, full_name: &str) -> Self {
        self.failing_delete = Some(full_name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Delete(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RepoHost for FakeHost {
    async fn current_identity(&self) -> Result<Identity> {
        self.calls.borrow_mut().push(HostCall::Identity);
        if self.reject_token {
            return Err(Error::InvalidToken);
        }
        Ok(Identity {
            login: "u".to_string(),
        })
    }

    async fn list_repositories(&self, _identity: &Identity) -> Result<Vec<RepoSummary>> {
        self.calls.borrow_mut().push(HostCall::List);
        Ok(self.repos.clone())
    }

    async fn delete(&self, repo: &RepoSummary) -> Result<()> {
        let name = repo.full_name();
        self.calls.borrow_mut().push(HostCall::Delete(name.clone()));
        if self.failing_delete.as_deref() == Some(name.as_str()) {
            return Err(Error::Io {
                source: io::Error::other("404 Not Found"),
            });
        }
        Ok(())
    }
}
