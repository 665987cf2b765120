use log::{debug, info};
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

pub mod host;
pub mod repository;


pub use self::host::{Identity, RepoHost};
pub use self::repository::{RepoSummary, RepositorySet, list_administered_repos};

const PER_PAGE: u8 = 100;

/// GitHub REST client authenticated with a personal access token.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Build a client for api.github.com, or for `api_url` when talking to
    /// a GitHub Enterprise Server instance.
    pub fn new(token: &SecretString, api_url: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.expose_secret().to_string());

        if let Some(url) = api_url {
            let url = url.trim_end_matches('/');
            builder = builder
                .base_uri(url.to_string())
                .map_err(|source| Error::InvalidApiUrl {
                    url: url.to_string(),
                    source,
                })?;
            debug!("Using GitHub API at {url}");
        }

        let octocrab = builder.build()?;
        Ok(Self { octocrab })
    }
}

impl RepoHost for GitHubClient {
    async fn current_identity(&self) -> Result<Identity> {
        let user = self.octocrab.current().user().await?;
        info!("Authenticated as {}", user.login);
        Ok(Identity { login: user.login })
    }

    async fn list_repositories(&self, identity: &Identity) -> Result<Vec<RepoSummary>> {
        debug!("Listing repositories for {}", identity.login);
        let first_page = self
            .octocrab
            .current()
            .list_repos_for_authenticated_user()
            .per_page(PER_PAGE)
            .send()
            .await?;
        let repos = self.octocrab.all_pages(first_page).await?;

        Ok(repos.into_iter().map(RepoSummary::from).collect())
    }

    async fn delete(&self, repo: &RepoSummary) -> Result<()> {
        self.octocrab.repos(&repo.owner, &repo.name).delete().await?;
        Ok(())
    }
}
