use std::io;

use clap::Parser;
use log::info;

use crate::error::Result;
use crate::github::GitHubClient;

use super::{
    context::CliContext,
    prompts::{ConsolePrompt, Prompter},
    sweep::{Outcome, sweep},
};

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactively pick GitHub repositories you administer and delete them",
    after_help = "Deleted repositories cannot be recovered. The token needs the repo and delete_repo scopes."
)]
pub struct Args {
    /// GitHub token (takes precedence over the environment)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Environment variable used to read the token (empty to disable)
    #[arg(long = "token-env", value_name = "ENV", default_value = "GITHUB_TOKEN")]
    pub token_env: String,

    /// GitHub API base url, for GitHub Enterprise Server
    #[arg(long = "api-url", value_name = "URL", env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
}

pub async fn run(args: Args) -> Result<()> {
    run_with_prompt(args, ConsolePrompt).await
}

pub async fn run_with_prompt<P: Prompter>(args: Args, prompt: P) -> Result<()> {
    let ctx = CliContext::new(args, prompt);

    let outcome = match ctx.resolve_token().await? {
        None => Outcome::NoToken,
        Some(token) => {
            let client = GitHubClient::new(&token, ctx.api_url())?;
            let mut stdout = io::stdout();
            sweep(&client, ctx.prompt(), &mut stdout).await?
        }
    };

    if let Outcome::Finished { deleted } = outcome {
        info!("{deleted} repositories deleted");
    }
    println!("{outcome}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_env_defaults_to_github_token() {
        let args = Args::try_parse_from(["repo-sweeper"]).unwrap();
        assert_eq!(args.token_env, "GITHUB_TOKEN");
        assert!(args.token.is_none());
    }

    #[test]
    fn token_flag_is_parsed() {
        let args = Args::try_parse_from(["repo-sweeper", "--token", "abc", "--token-env", ""])
            .unwrap();
        assert_eq!(args.token.as_deref(), Some("abc"));
        assert_eq!(args.token_env, "");
    }
}
