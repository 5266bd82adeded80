//! Quickstart - bootstrap a project onto GitHub in one interactive pass.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quickstart::cli::output;
use quickstart::cli::{execute, Cli};
use quickstart::error::{Error, GitError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("QUICKSTART_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("quickstart=debug")
        } else {
            EnvFilter::new("quickstart=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(err: &Error) -> Option<&'static str> {
    match err {
        Error::Git(GitError::NotInstalled(_)) => Some("install git and make sure it is on PATH"),
        Error::Git(GitError::Failed { stderr, .. }) if stderr.contains("already exists") => {
            Some("the remote is already configured; start from a clean directory")
        }
        Error::Hosting(e) => match e.status() {
            Some(401) => Some("check the GitHub access token"),
            Some(403) => Some("the token may lack the repo scope, or the rate limit was hit"),
            Some(404) => Some("check the repository name; pass --owner for an existing repository"),
            Some(422) => Some("a repository with that name may already exist"),
            _ => None,
        },
        _ => None,
    }
}
