use crate::auth::Credentials;
use crate::error::{GhStarError, Result};
use crate::models::RepositoryRef;
use crate::types::SearchResponse;
use reqwest::header::{ACCEPT, CONTENT_LENGTH};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("ghstar/", env!("CARGO_PKG_VERSION"));
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GitHubClient {
    client: Client,
    credentials: Credentials,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(credentials: Credentials, base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GitHubClient {
            client,
            credentials,
            base_url,
        })
    }

    /// Build `{base}/<segments...>`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GhStarError::InvalidApiUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(ACCEPT, ACCEPT_HEADER)
            .basic_auth(self.credentials.username(), Some(self.credentials.token()))
    }

    /// Search repositories by keyword, in the order GitHub ranks them.
    ///
    /// The status code is not inspected: whatever comes back must carry an
    /// `items` array, otherwise parsing fails with [`GhStarError::Json`].
    pub async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryRef>> {
        let url = self.endpoint(&["search", "repositories"])?;
        debug!(%url, query, "Searching repositories");

        let response = self
            .authorized(self.client.get(url))
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(%status, count = parsed.items.len(), "Search returned");

        Ok(parsed.items.into_iter().map(RepositoryRef::from).collect())
    }

    /// Star a repository for the authenticated user.
    pub async fn star_repository(&self, repo: &RepositoryRef) -> Result<()> {
        let (owner, name) = repo
            .owner_and_name()
            .ok_or_else(|| GhStarError::InvalidRepo(repo.full_name.clone()))?;

        let url = self.endpoint(&["user", "starred", owner, name])?;
        debug!(%url, "Starring repository");

        let response = self
            .authorized(self.client.put(url))
            .header(CONTENT_LENGTH, "0")
            .send()
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::UNAUTHORIZED => Err(GhStarError::Auth),
            StatusCode::NOT_FOUND => Err(GhStarError::InvalidRepo(repo.full_name.clone())),
            status if status.is_success() => {
                warn!(%status, repo = %repo.full_name, "Unexpected success status while starring");
                Ok(())
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GhStarError::UnexpectedStatus { status, body })
            }
        }
    }
}
