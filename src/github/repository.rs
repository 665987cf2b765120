use chrono::{DateTime, Utc};
use log::debug;
use octocrab::models;

use crate::error::Result;

use super::host::RepoHost;

/// Read-only view of a repository as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
    pub owner: String,
    pub name: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub admin: bool,
}

impl RepoSummary {
    /// `owner/name`, the label used throughout the sweep.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl From<models::Repository> for RepoSummary {
    fn from(repo: models::Repository) -> Self {
        let updated_at = repo.updated_at;
        let admin = repo.permissions.as_ref().is_some_and(|p| p.admin);

        // `full_name` is absent from some payloads; fall back to the owner login.
        let (owner, name) = match repo.full_name.as_deref().and_then(|f| f.split_once('/')) {
            Some((owner, name)) => (owner.to_string(), name.to_string()),
            None => (repo.owner.map(|o| o.login).unwrap_or_default(), repo.name),
        };

        Self {
            owner,
            name,
            updated_at,
            admin,
        }
    }
}

/// Administered repositories, oldest update first.
///
/// Ties keep the order the host listed them in. Repositories without an
/// update timestamp come first.
#[derive(Debug, Clone, Default)]
pub struct RepositorySet {
    repos: Vec<RepoSummary>,
}

impl RepositorySet {
    pub fn from_listing(repos: Vec<RepoSummary>) -> Self {
        let mut repos: Vec<RepoSummary> = repos.into_iter().filter(|r| r.admin).collect();
        repos.sort_by_key(|r| r.updated_at);
        Self { repos }
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepoSummary> {
        self.repos.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.repos.iter().map(RepoSummary::full_name).collect()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.repos.iter().any(|r| r.full_name() == full_name)
    }
}

/// Fetch everything the authenticated identity can see and keep what it administers.
pub async fn list_administered_repos<H: RepoHost>(host: &H) -> Result<RepositorySet> {
    let identity = host.current_identity().await?;
    let listed = host.list_repositories(&identity).await?;
    let total = listed.len();

    let set = RepositorySet::from_listing(listed);
    debug!(
        "{} repositories visible to {}, {} administered",
        total,
        identity.login,
        set.repos.len()
    );
    Ok(set)
}
