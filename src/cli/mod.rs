//! Command-line interface.

pub mod output;
pub mod prompt;
pub mod run;

use clap::Parser;
use std::path::PathBuf;

/// Quickstart - bootstrap a project onto GitHub.
#[derive(Parser, Debug)]
#[command(
    name = "quickstart",
    about = "Push a fresh history to GitHub and set up .env and repository secrets",
    version
)]
pub struct Cli {
    /// Project directory to bootstrap
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file (defaults to quickstart.toml in the project directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, env = "QUICKSTART_API_URL")]
    pub api_url: Option<String>,

    /// Owner of an existing repository
    #[arg(long, env = "QUICKSTART_OWNER")]
    pub owner: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the bootstrap flow.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    run::execute(
        &cli.dir,
        cli.config.as_deref(),
        cli.api_url.as_deref(),
        cli.owner.clone(),
    )
}
