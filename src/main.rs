use clap::Parser;
use colored::*;
use ghstar::app;
use ghstar::auth::Credentials;
use ghstar::cli::Cli;
use std::io;
use std::process::exit;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so the result list on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match Credentials::from_env() {
        Ok(credentials) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            app::run(&cli, credentials, &mut input, &mut out).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(repo) => {
            println!("{}", format!("Starred {}", repo.full_name).green());
        }
        Err(e) => {
            let message = if e.is_designed() {
                e.to_string()
            } else {
                format!("Error: {}", e)
            };
            eprintln!("{}", message.red());
            exit(e.exit_code());
        }
    }
}
