use crate::error::Result;

use super::repository::RepoSummary;

/// The account a token authenticates as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub login: String,
}

/// Remote operations the sweep needs from a repository host.
pub trait RepoHost {
    /// Resolve the account behind the configured credentials.
    ///
    /// # Returns
    /// * `Err(Error::InvalidToken)` when the host rejects the credentials
    async fn current_identity(&self) -> Result<Identity>;

    /// List every repository visible to `identity`, all pages included.
    async fn list_repositories(&self, identity: &Identity) -> Result<Vec<RepoSummary>>;

    /// Delete a single repository.
    async fn delete(&self, repo: &RepoSummary) -> Result<()>;
}
