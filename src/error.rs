use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhStarError {
    #[error(
        "Invalid credentials supplied.\nPlease set the environment variables GH_UNAME and GH_TOKEN to your GitHub username and access token."
    )]
    Auth,

    #[error("{0} is not a valid repo.")]
    InvalidRepo(String),

    #[error("Please check your internet connection.")]
    Connection,

    #[error("Unexpected response from GitHub ({status}): {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("No repositories found matching '{0}'")]
    NoResults(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid API base URL: {0}")]
    InvalidApiUrl(String),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GhStarError {
    /// True for the failures a user can fix themselves: bad credentials,
    /// a repository that doesn't exist, or no network.
    pub fn is_designed(&self) -> bool {
        matches!(self, Self::Auth | Self::InvalidRepo(_) | Self::Connection)
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<reqwest::Error> for GhStarError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            GhStarError::Connection
        } else {
            GhStarError::Network(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, GhStarError>;
