use std::env;

use log::debug;
use secrecy::SecretString;

use crate::error::Result;

use super::entry::Args;
use super::prompts::Prompter;

pub const TOKEN_PROMPT: &str = "Enter your github token (https://github.com/settings/tokens)";

pub struct CliContext<P> {
    args: Args,
    prompt: P,
}

impl<P: Prompter> CliContext<P> {
    pub fn new(args: Args, prompt: P) -> Self {
        Self { args, prompt }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn api_url(&self) -> Option<&str> {
        self.args
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Resolve the token from `--token`, the token environment variable, or
    /// an interactive prompt, in that order.
    pub async fn resolve_token(&self) -> Result<Option<SecretString>> {
        resolve_token(
            self.args.token.as_deref(),
            &self.args.token_env,
            &env_value,
            &self.prompt,
        )
        .await
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(value: &str) -> Option<SecretString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::new(trimmed.to_string().into()))
    }
}

/// Returns `Ok(None)` when every source is empty and the prompt was cancelled.
///
/// The environment is only read when `cli_flag` is empty, and the prompt is
/// only shown when both are. Empty prompt answers are rejected and asked again.
pub async fn resolve_token<P: Prompter>(
    cli_flag: Option<&str>,
    env_key: &str,
    get_env: &dyn Fn(&str) -> Option<String>,
    prompt: &P,
) -> Result<Option<SecretString>> {
    if let Some(token) = cli_flag.and_then(non_empty) {
        debug!("Using token from --token");
        return Ok(Some(token));
    }

    let env_key = env_key.trim();
    if !env_key.is_empty()
        && let Some(token) = get_env(env_key).as_deref().and_then(non_empty)
    {
        debug!("Using token from ${env_key}");
        return Ok(Some(token));
    }

    loop {
        let Some(answer) = prompt.ask_text(TOKEN_PROMPT, true).await? else {
            return Ok(None);
        };
        if let Some(token) = non_empty(&answer) {
            return Ok(Some(token));
        }
        println!("Token cannot be empty.");
    }
}
