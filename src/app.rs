use std::io::{BufRead, Write};

use tracing::info;

use crate::auth::Credentials;
use crate::cli::Cli;
use crate::error::{GhStarError, Result};
use crate::github::GitHubClient;
use crate::models::RepositoryRef;
use crate::selector;

/// Pick the target repository and star it.
///
/// In interactive mode `cli.repo` is a search query and the choice is read
/// from `input`; otherwise it is used verbatim as the full name. Returns the
/// repository that was starred.
pub async fn run<R: BufRead, W: Write>(
    cli: &Cli,
    credentials: Credentials,
    input: &mut R,
    out: &mut W,
) -> Result<RepositoryRef> {
    let client = GitHubClient::new(credentials, cli.api_url.clone())?;

    let target = if cli.interactive {
        let results = client.search_repositories(&cli.repo).await?;
        if results.is_empty() {
            return Err(GhStarError::NoResults(cli.repo.clone()));
        }
        selector::select(&results, input, out)?
    } else {
        RepositoryRef::named(cli.repo.as_str())
    };

    client.star_repository(&target).await?;
    info!(repo = %target.full_name, "Starred repository");

    Ok(target)
}
