//! Bootstrap command - wires the terminal, git and GitHub into the wizard.

use std::path::Path;
use tracing::info;

use crate::cli::output;
use crate::cli::prompt::Terminal;
use crate::core::config::Config;
use crate::core::git::GitCli;
use crate::core::hosting::GitHub;
use crate::core::wizard::{Outcome, Step, Wizard};
use crate::error::{FsError, Result};

/// Run the interactive bootstrap in `dir`.
pub fn execute(
    dir: &Path,
    config_path: Option<&Path>,
    api_url: Option<&str>,
    owner: Option<String>,
) -> Result<()> {
    if !dir.is_dir() {
        return Err(FsError::MissingDir(dir.to_path_buf()).into());
    }

    let mut config = Config::resolve(config_path, dir)?;
    if let Some(url) = api_url {
        config.api.url = url.to_string();
    }
    info!(dir = %dir.display(), variables = config.variables.len(), "starting bootstrap");

    let git = GitCli::new(dir)?;
    let outcome = Wizard::new(&config, dir, Terminal, git)
        .with_owner(owner)
        .run(|token| GitHub::new(token, &config.api), report)?;

    summary(&outcome);
    Ok(())
}

fn report(step: &Step) {
    match step {
        Step::MetadataRemoved { existed: true } => output::success(".git folder removed"),
        Step::MetadataRemoved { existed: false } => output::dimmed("no .git folder to remove"),
        Step::Initialized => output::success("initialized a new git repository"),
        Step::RepositoryCreated { name } => {
            output::success(&format!("created repository {}", output::key(name)))
        }
        Step::Pushed { url, branch } => output::success(&format!(
            "pushed {} to {}",
            output::key(branch),
            output::path(url)
        )),
        Step::EnvWritten { path } => {
            output::success(&format!("created {}", output::path(path.display())))
        }
        Step::IgnoreUpdated { .. } => output::success(".env added to .gitignore"),
        Step::SecretUploaded { name } => {
            output::success(&format!("secret {} created", output::key(name)))
        }
    }
}

fn summary(outcome: &Outcome) {
    output::section("Project setup completed");
    output::kv("repository:", &outcome.repository);
    output::kv("remote:    ", &outcome.remote_url);
    output::kv("secrets:   ", outcome.uploaded.len());

    if !outcome.repository.has_owner() {
        println!();
        output::warn("no owner known for the existing repository; the remote URL is incomplete");
        output::hint("pass --owner <login> to set it");
    }
}
