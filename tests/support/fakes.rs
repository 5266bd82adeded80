//! Recording fakes for git and the hosting platform.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use quickstart::core::git::Vcs;
use quickstart::core::hosting::Hosting;
use quickstart::core::repository::{NewRepository, Repository};
use quickstart::error::{GitError, HostingError, Result};

/// Branches already pushed, shared between runs like a real remote.
pub type Remote = Rc<RefCell<HashSet<String>>>;

/// Git double that records every call.
///
/// Mirrors the failures real git raises for the bootstrap flow: adding a
/// remote twice, and pushing an unrelated history over an existing branch.
#[derive(Debug, Default)]
pub struct FakeGit {
    pub calls: RefCell<Vec<String>>,
    remotes: RefCell<HashMap<String, String>>,
    pushed: Remote,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake sharing the pushed-branch set of `remote`.
    pub fn with_remote(remote: Remote) -> Self {
        Self {
            pushed: remote,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Vcs for FakeGit {
    fn init(&self) -> Result<()> {
        self.record("init".to_string());
        self.remotes.borrow_mut().clear();
        Ok(())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.record(format!("remote add {} {}", name, url));
        if self.remotes.borrow().contains_key(name) {
            return Err(GitError::Failed {
                command: format!("git remote add {} {}", name, url),
                stderr: format!("error: remote {} already exists.", name),
            }
            .into());
        }
        self.remotes
            .borrow_mut()
            .insert(name.to_string(), url.to_string());
        Ok(())
    }

    fn stage_all(&self) -> Result<()> {
        self.record("add .".to_string());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("commit -m {}", message));
        Ok(())
    }

    fn rename_branch(&self, name: &str) -> Result<()> {
        self.record(format!("branch -M {}", name));
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {} {}", remote, branch));
        let url = self.remotes.borrow().get(remote).cloned().unwrap_or_default();
        if !self.pushed.borrow_mut().insert(format!("{}#{}", url, branch)) {
            return Err(GitError::Failed {
                command: format!("git push {} {}", remote, branch),
                stderr: format!("! [rejected] {} -> {} (fetch first)", branch, branch),
            }
            .into());
        }
        Ok(())
    }
}

/// Call received by [`FakeHosting`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create(NewRepository),
    Secret {
        repo: String,
        name: String,
        value: String,
    },
}

/// Hosting double that records calls.
///
/// Creating a repository whose name was already created fails with 422.
#[derive(Debug, Default)]
pub struct FakeHosting {
    pub calls: RefCell<Vec<HostCall>>,
    pub tokens: RefCell<Vec<String>>,
    created: RefCell<HashSet<String>>,
    fail_secret: Option<String>,
}

impl FakeHosting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the upload of `name` with 500.
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_secret: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn creates(&self) -> Vec<NewRepository> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Create(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    /// `(repo, name, value)` of every secret upload, in order.
    pub fn secrets(&self) -> Vec<(String, String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Secret { repo, name, value } => Some((repo, name, value)),
                _ => None,
            })
            .collect()
    }

    /// Connector handing out this fake, recording the token.
    pub fn connect(&self, token: &str) -> Result<&Self> {
        self.tokens.borrow_mut().push(token.to_string());
        Ok(self)
    }
}

impl Hosting for FakeHosting {
    fn create_repository(&self, repo: &NewRepository) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Create(repo.clone()));
        if !self.created.borrow_mut().insert(repo.name.clone()) {
            return Err(HostingError::Status {
                method: "POST",
                url: "/user/repos".to_string(),
                status: 422,
                message: "Repository creation failed.".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn put_secret(&self, repo: &Repository, name: &str, value: &str) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Secret {
            repo: repo.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
        if self.fail_secret.as_deref() == Some(name) {
            return Err(HostingError::Status {
                method: "PUT",
                url: format!("/repos/{}/actions/secrets/{}", repo, name),
                status: 500,
                message: "Server Error".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
