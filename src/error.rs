use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when GitHub rejects the token.
pub const INVALID_TOKEN_MESSAGE: &str =
    "Invalid token. Make sure the token is correct and you have the repo and delete_repo rights";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{}", INVALID_TOKEN_MESSAGE))]
    InvalidToken,

    #[snafu(display("Invalid GitHub API url '{url}': {source}"))]
    InvalidApiUrl { url: String, source: octocrab::Error },

    #[snafu(display("GitHub API error: {source}"))]
    GitHub { source: octocrab::Error },

    #[snafu(display("Failed to delete '{name}': {source}"))]
    DeleteFailed { name: String, source: Box<Error> },

    #[snafu(display("Repository '{name}' is not in the list of administered repositories"))]
    UnknownRepository { name: String },

    #[snafu(display("Prompt failed: {source}"))]
    Prompt { source: dialoguer::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<octocrab::Error> for Error {
    fn from(error: octocrab::Error) -> Self {
        if is_unauthorized(&error) {
            Error::InvalidToken
        } else {
            Error::GitHub { source: error }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

fn is_unauthorized(error: &octocrab::Error) -> bool {
    matches!(error, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 401)
}
