//! Bootstrap flow.
//!
//! Runs the whole setup as a single forward pass:
//!
//! 1. remove `.git` and re-initialize the repository
//! 2. ask for the access token and connect to the hosting platform
//! 3. create the hosted repository unless one already exists
//! 4. add the remote, commit everything, rename the branch and push
//! 5. capture the configured variables into `.env`
//! 6. append `.env` to `.gitignore`
//! 7. upload every variable as a repository secret
//!
//! The first failure aborts the run. Nothing already done is rolled back.

use std::path::PathBuf;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::config::{Config, Variable};
use crate::core::env::{self, EnvBuffer};
use crate::core::git::{self, Vcs};
use crate::core::hosting::Hosting;
use crate::core::prompt::Prompter;
use crate::core::repository::{NewRepository, Repository};
use crate::core::validation::validate_value;
use crate::error::{FsError, Result, ValidationError};

pub const TOKEN_PROMPT: &str = "Enter your GitHub authentication token";
pub const EXISTING_PROMPT: &str = "Do you have an existing GitHub repository?";
pub const EXISTING_NAME_PROMPT: &str = "Enter the name of the existing GitHub repository";
pub const NEW_NAME_PROMPT: &str = "Enter the name for the new GitHub repository";
pub const USERNAME_PROMPT: &str = "Enter your GitHub username";

/// Prompt shown for a variable's value.
pub fn value_prompt(name: &str) -> String {
    format!("Enter value for {}", name)
}

/// Milestone reached during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `.git` handled; `existed` is false when there was nothing to remove
    MetadataRemoved { existed: bool },
    Initialized,
    RepositoryCreated { name: String },
    Pushed { url: String, branch: String },
    EnvWritten { path: PathBuf },
    IgnoreUpdated { path: PathBuf },
    SecretUploaded { name: String },
}

/// Result of a completed run.
#[derive(Debug)]
pub struct Outcome {
    pub repository: Repository,
    pub remote_url: String,
    /// Whether the hosted repository was created by this run
    pub created: bool,
    pub uploaded: Vec<String>,
}

/// The bootstrap flow bound to its inputs.
pub struct Wizard<'a, P, V> {
    config: &'a Config,
    dir: PathBuf,
    owner: Option<String>,
    prompter: P,
    vcs: V,
}

impl<'a, P: Prompter, V: Vcs> Wizard<'a, P, V> {
    pub fn new(config: &'a Config, dir: impl Into<PathBuf>, prompter: P, vcs: V) -> Self {
        Self {
            config,
            dir: dir.into(),
            owner: None,
            prompter,
            vcs,
        }
    }

    /// Owner used when the user already has a repository.
    ///
    /// Without it that path has no username and the owner segment of the
    /// remote URL and API paths stays empty.
    pub fn with_owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner;
        self
    }

    /// Run every step in order.
    ///
    /// `connect` turns the entered token into a hosting client. `on_step`
    /// is called after each milestone.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn run<H, C, F>(mut self, connect: C, mut on_step: F) -> Result<Outcome>
    where
        H: Hosting,
        C: FnOnce(&str) -> Result<H>,
        F: FnMut(&Step),
    {
        if !self.dir.is_dir() {
            return Err(FsError::MissingDir(self.dir.clone()).into());
        }

        let existed = git::remove_metadata(&self.dir)?;
        on_step(&Step::MetadataRemoved { existed });

        self.vcs.init()?;
        on_step(&Step::Initialized);

        let token = Zeroizing::new(self.prompter.secret(TOKEN_PROMPT)?);
        let hosting = connect(token.as_str())?;

        let (repository, created) = self.select_repository(&hosting)?;
        if created {
            on_step(&Step::RepositoryCreated {
                name: repository.name().to_string(),
            });
        }

        let remote_url = repository.remote_url(&self.config.git.host);
        self.publish(&remote_url)?;
        on_step(&Step::Pushed {
            url: remote_url.clone(),
            branch: self.config.git.branch.clone(),
        });

        let buffer = capture_values(&mut self.prompter, &self.config.variables)?;
        let path = env::write_env_file(&self.dir, &buffer)?;
        on_step(&Step::EnvWritten { path });

        let path = env::append_gitignore(&self.dir)?;
        on_step(&Step::IgnoreUpdated { path });

        let uploaded = upload_secrets(
            &hosting,
            &repository,
            &buffer,
            &self.config.variable_names(),
            &mut on_step,
        )?;

        info!(repo = %repository, secrets = uploaded.len(), "bootstrap complete");
        Ok(Outcome {
            repository,
            remote_url,
            created,
            uploaded,
        })
    }

    fn select_repository<H: Hosting>(&mut self, hosting: &H) -> Result<(Repository, bool)> {
        if self.prompter.confirm(EXISTING_PROMPT)? {
            let name = self.prompter.text(EXISTING_NAME_PROMPT)?;
            debug!(%name, owner = ?self.owner, "using existing repository");
            return Ok((Repository::new(self.owner.clone(), name), false));
        }

        let name = self.prompter.text(NEW_NAME_PROMPT)?;
        let username = self.prompter.text(USERNAME_PROMPT)?;

        hosting.create_repository(&NewRepository::from_config(&name, &self.config.repository))?;
        Ok((Repository::new(Some(username), name), true))
    }

    fn publish(&self, remote_url: &str) -> Result<()> {
        let git = &self.config.git;

        self.vcs.add_remote(&git.remote, remote_url)?;
        self.vcs.stage_all()?;
        self.vcs.commit(&git.commit_message)?;
        self.vcs.rename_branch(&git.branch)?;
        self.vcs.push(&git.remote, &git.branch)?;

        debug!(url = remote_url, branch = %git.branch, "pushed initial commit");
        Ok(())
    }
}

/// Ask for each variable in order and collect the answers.
///
/// # Errors
///
/// Returns a prompt error, or a validation error if a value breaks its
/// variable's rule or contains a line break.
pub fn capture_values<P: Prompter + ?Sized>(
    prompter: &mut P,
    variables: &[Variable],
) -> Result<EnvBuffer> {
    let mut buffer = EnvBuffer::new();

    for var in variables {
        let value = Zeroizing::new(prompter.text(&value_prompt(&var.name))?);
        let pattern = var.compiled_pattern()?;
        validate_value(&var.name, value.as_str(), var.required, pattern.as_ref())?;
        buffer.push(&var.name, value.as_str())?;
    }

    debug!(entries = buffer.len(), "captured values");
    Ok(buffer)
}

/// Upload each named variable as a repository secret, in order.
///
/// Values are read back out of the serialized buffer with
/// [`EnvBuffer::extract`]. Stops at the first failed upload.
///
/// # Errors
///
/// Returns `ValidationError::MissingEntry` if a name is absent from the
/// buffer, or the hosting error of the failed upload.
pub fn upload_secrets<H, F>(
    hosting: &H,
    repository: &Repository,
    buffer: &EnvBuffer,
    names: &[&str],
    on_step: &mut F,
) -> Result<Vec<String>>
where
    H: Hosting + ?Sized,
    F: FnMut(&Step),
{
    let mut uploaded = Vec::with_capacity(names.len());

    for name in names {
        let value = buffer
            .extract(name)
            .ok_or_else(|| ValidationError::MissingEntry(name.to_string()))?;
        hosting.put_secret(repository, name, value)?;

        uploaded.push(name.to_string());
        on_step(&Step::SecretUploaded {
            name: name.to_string(),
        });
    }

    Ok(uploaded)
}
