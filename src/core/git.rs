//! Version-control operations.
//!
//! The wizard talks to git through the [`Vcs`] trait so tests can record the
//! calls instead of touching a real repository. [`GitCli`] shells out to the
//! `git` executable, which keeps the user's own credential helpers in play
//! for the push.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::core::constants;
use crate::error::{FsError, GitError, Result};

/// Version-control operations used by the bootstrap flow.
///
/// No operation checks preconditions. Whatever the underlying tool rejects
/// (an existing remote, nothing to commit, a rejected push) is an error.
pub trait Vcs {
    /// Create an empty repository in the working directory.
    fn init(&self) -> Result<()>;

    /// Add a named remote.
    fn add_remote(&self, name: &str, url: &str) -> Result<()>;

    /// Stage every file in the working tree.
    fn stage_all(&self) -> Result<()>;

    /// Commit the staged files.
    fn commit(&self, message: &str) -> Result<()>;

    /// Force-rename the current branch.
    fn rename_branch(&self, name: &str) -> Result<()>;

    /// Push a branch to a remote.
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}

impl<T: Vcs + ?Sized> Vcs for &T {
    fn init(&self) -> Result<()> {
        (**self).init()
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        (**self).add_remote(name, url)
    }

    fn stage_all(&self) -> Result<()> {
        (**self).stage_all()
    }

    fn commit(&self, message: &str) -> Result<()> {
        (**self).commit(message)
    }

    fn rename_branch(&self, name: &str) -> Result<()> {
        (**self).rename_branch(name)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        (**self).push(remote, branch)
    }
}

/// Remove `<dir>/.git`, whatever it is.
///
/// A directory is removed recursively. A file (the `gitdir:` pointer of a
/// worktree or submodule) or a symlink is unlinked. Returns `true` if
/// something was removed, `false` if there was none.
///
/// # Errors
///
/// Returns `FsError::Remove` if `.git` exists but cannot be removed.
pub fn remove_metadata(dir: &Path) -> Result<bool> {
    let path = dir.join(constants::GIT_DIR);
    let to_err = |source| FsError::Remove {
        path: path.clone(),
        source,
    };

    let meta = match std::fs::symlink_metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no git metadata to remove");
            return Ok(false);
        }
        Err(e) => return Err(to_err(e).into()),
    };

    debug!(path = %path.display(), dir = meta.is_dir(), "removing git metadata");
    if meta.is_dir() {
        std::fs::remove_dir_all(&path).map_err(to_err)?;
    } else {
        std::fs::remove_file(&path).map_err(to_err)?;
    }
    Ok(true)
}

/// `git` executable bound to a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    dir: PathBuf,
}

impl GitCli {
    /// Locate `git` on `PATH` and bind it to `dir`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotInstalled` if no `git` executable is found.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let program = which::which("git").map_err(GitError::NotInstalled)?;
        Ok(Self {
            program,
            dir: dir.into(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!(dir = %self.dir.display(), %command, "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::Failed { command, stderr }.into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Vcs for GitCli {
    fn init(&self) -> Result<()> {
        self.run(&["init"]).map(drop)
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.run(&["remote", "add", name, url]).map(drop)
    }

    fn stage_all(&self) -> Result<()> {
        self.run(&["add", "."]).map(drop)
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(drop)
    }

    fn rename_branch(&self, name: &str) -> Result<()> {
        self.run(&["branch", "-M", name]).map(drop)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", remote, branch]).map(drop)
    }
}
