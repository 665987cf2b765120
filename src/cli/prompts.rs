use std::io;

use dialoguer::console::{Key, Term};
use dialoguer::{Input, MultiSelect, Select};
use tokio::task;

use crate::error::{Error, Result};

/// Interactive input used by the sweep.
///
/// Every method returns `Ok(None)` when the user cancels the prompt
/// (Ctrl-C or Esc), which is distinct from submitting an empty answer.
pub trait Prompter {
    /// Ask for a single line of text. `secret` masks the input.
    async fn ask_text(&self, message: &str, secret: bool) -> Result<Option<String>>;

    /// Ask the user to check any number of `labels`; returns the checked ones
    /// in label order.
    async fn ask_checkbox(&self, message: &str, labels: &[String]) -> Result<Option<Vec<String>>>;

    /// Ask the user to pick exactly one of `choices`.
    async fn ask_choice(&self, message: &str, choices: &[&str]) -> Result<Option<String>>;
}

/// Console-based interactive prompts using dialoguer
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl Prompter for ConsolePrompt {
    async fn ask_text(&self, message: &str, secret: bool) -> Result<Option<String>> {
        let prompt = message.to_string();
        let result = task::spawn_blocking(move || {
            if secret {
                read_secret(&Term::stderr(), &prompt).map_err(dialoguer::Error::from)
            } else {
                Input::new()
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()
                    .map(Some)
            }
        })
        .await
        .map_err(join_error)?;

        cancelled_as_none(result)
    }

    async fn ask_checkbox(&self, message: &str, labels: &[String]) -> Result<Option<Vec<String>>> {
        let prompt = message.to_string();
        let items = labels.to_vec();
        let result = task::spawn_blocking(move || {
            MultiSelect::new()
                .with_prompt(prompt)
                .items(&items)
                .interact_opt()
        })
        .await
        .map_err(join_error)?;

        let picked = cancelled_as_none(result)?;
        Ok(picked.map(|indices| {
            indices
                .into_iter()
                .filter_map(|i| labels.get(i).cloned())
                .collect()
        }))
    }

    async fn ask_choice(&self, message: &str, choices: &[&str]) -> Result<Option<String>> {
        let prompt = message.to_string();
        let items: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        let result = task::spawn_blocking(move || {
            Select::new()
                .with_prompt(prompt)
                .items(&items)
                .interact_opt()
        })
        .await
        .map_err(join_error)?;

        let picked = cancelled_as_none(result)?;
        Ok(picked.and_then(|i| choices.get(i).map(|c| c.to_string())))
    }
}

/// Ctrl-C surfaces from dialoguer as an interrupted read; treat it like Esc.
fn cancelled_as_none<T>(
    result: std::result::Result<Option<T>, dialoguer::Error>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(source) => Err(Error::Prompt { source }),
    }
}

/// Masked line input read key by key in raw mode, so Ctrl-C arrives as a
/// key press instead of SIGINT.
fn read_secret(term: &Term, prompt: &str) -> io::Result<Option<String>> {
    if !term.is_term() {
        return Err(io::Error::new(
            io::ErrorKind::NotConnected,
            "not a terminal",
        ));
    }
    term.write_str(&format!("{prompt}: "))?;
    let secret = collect_secret(|| term.read_key());
    term.write_line("")?;
    secret
}

fn collect_secret(mut next_key: impl FnMut() -> io::Result<Key>) -> io::Result<Option<String>> {
    let mut secret = String::new();
    loop {
        match next_key() {
            Ok(Key::Enter) => return Ok(Some(secret)),
            Ok(Key::Backspace) => {
                secret.pop();
            }
            Ok(Key::Char(c)) if !c.is_control() => secret.push(c),
            Ok(Key::Escape | Key::CtrlC) => return Ok(None),
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => return Ok(None),
            Err(err) => return Err(err),
        }
    }
}

fn join_error(err: task::JoinError) -> Error {
    Error::Io {
        source: io::Error::other(err.to_string()),
    }
}
