use std::collections::HashSet;
use std::fmt;
use std::io::Write;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::github::{RepoHost, RepositorySet, list_administered_repos};
use crate::utils::format_confirmation_message;

use super::prompts::Prompter;

pub const SELECT_PROMPT: &str = "Select repos to delete";
pub const CONFIRM_CHOICES: [&str; 2] = ["NO", "YES"];

/// How a run ended. Every variant is a normal exit with a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoToken,
    InvalidToken,
    NoRepositories,
    NothingSelected,
    Aborted,
    Finished { deleted: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoToken => write!(f, "No token provided"),
            Outcome::InvalidToken => write!(f, "{}", Error::InvalidToken),
            Outcome::NoRepositories => write!(f, "No repositories to delete"),
            Outcome::NothingSelected => write!(f, "No repo to delete"),
            Outcome::Aborted => write!(f, "Aborted"),
            Outcome::Finished { .. } => write!(f, "Finished"),
        }
    }
}

/// List, select, confirm, then delete. Progress lines go to `out`.
pub async fn sweep<H, P, W>(host: &H, prompt: &P, out: &mut W) -> Result<Outcome>
where
    H: RepoHost,
    P: Prompter,
    W: Write,
{
    let repos = match list_administered_repos(host).await {
        Ok(repos) => repos,
        Err(Error::InvalidToken) => return Ok(Outcome::InvalidToken),
        Err(err) => return Err(err),
    };
    if repos.is_empty() {
        return Ok(Outcome::NoRepositories);
    }

    let Some(selection) = select(prompt, &repos).await? else {
        return Ok(Outcome::Aborted);
    };
    if selection.is_empty() {
        return Ok(Outcome::NothingSelected);
    }

    if !confirm(prompt, &selection).await? {
        return Ok(Outcome::Aborted);
    }

    let deleted = delete_all(host, &selection, &repos, out).await?;
    Ok(Outcome::Finished { deleted })
}

/// `None` means the prompt was cancelled; `Some(vec![])` means nothing was checked.
pub async fn select<P: Prompter>(
    prompt: &P,
    repos: &RepositorySet,
) -> Result<Option<Vec<String>>> {
    let selection = prompt.ask_checkbox(SELECT_PROMPT, &repos.names()).await?;
    if let Some(names) = &selection {
        debug!("{} repositories selected", names.len());
    }
    Ok(selection)
}

pub async fn confirm<P: Prompter>(prompt: &P, selection: &[String]) -> Result<bool> {
    let message = format_confirmation_message(selection);
    let choice = prompt.ask_choice(&message, &CONFIRM_CHOICES).await?;
    Ok(choice.as_deref() == Some("YES"))
}

/// Delete the selected repositories one by one, in the set's order.
///
/// Stops at the first failure; repositories after it are left untouched.
pub async fn delete_all<H, W>(
    host: &H,
    selection: &[String],
    repos: &RepositorySet,
    out: &mut W,
) -> Result<usize>
where
    H: RepoHost,
    W: Write,
{
    let selected: HashSet<&str> = selection.iter().map(String::as_str).collect();
    if let Some(unknown) = selected.iter().find(|name| !repos.contains(name)) {
        return Err(Error::UnknownRepository {
            name: unknown.to_string(),
        });
    }

    let mut deleted = 0;
    for repo in repos.iter() {
        let name = repo.full_name();
        if !selected.contains(name.as_str()) {
            continue;
        }

        writeln!(out, "Deleting {name}...")?;
        out.flush()?;
        host.delete(repo)
            .await
            .map_err(|source| Error::DeleteFailed {
                name: name.clone(),
                source: Box::new(source),
            })?;
        writeln!(out, "OK")?;
        info!("Deleted {name}");
        deleted += 1;
    }
    Ok(deleted)
}
