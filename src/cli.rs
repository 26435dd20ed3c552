use clap::Parser;
use url::Url;

use crate::github::API_BASE_URL;

const EXAMPLES: &str = "\
examples:
  ghstar microsoft/vscode
  ghstar jlevy/the-art-of-command-line
  ghstar -i \"command line\"";

#[derive(Parser, Debug)]
#[command(name = "ghstar")]
#[command(about = "Star GitHub repos from the command line.")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Name of repo to star (a search query with --interactive)
    pub repo: String,

    /// Search for REPO and pick a result from a numbered list
    #[arg(short, long)]
    pub interactive: bool,

    /// GitHub API base URL
    #[arg(long, env = "GH_API_URL", default_value = API_BASE_URL, hide = true)]
    pub api_url: Url,
}
