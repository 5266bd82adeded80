//! Repository coordinates.

use serde::Serialize;
use std::fmt;

use crate::core::config::RepositoryConfig;

/// `(owner, name)` pair addressing a hosted repository.
///
/// The owner is only known when the wizard created the repository (the
/// username is asked for then) or when one was passed explicitly. Without
/// it the owner segment of URLs and API paths is left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    owner: Option<String>,
    name: String,
}

impl Repository {
    pub fn new(owner: Option<String>, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }

    /// Owner login, empty when unknown.
    pub fn owner(&self) -> &str {
        self.owner.as_deref().unwrap_or("")
    }

    /// Whether an owner was supplied.
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clone URL under `host`, e.g. `https://github.com/alice/demo.git`.
    pub fn remote_url(&self, host: &str) -> String {
        format!(
            "{}/{}/{}.git",
            host.trim_end_matches('/'),
            self.owner(),
            self.name
        )
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner(), self.name)
    }
}

/// Body of a "create repository for the authenticated user" request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRepository {
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub private: bool,
    pub is_template: bool,
}

impl NewRepository {
    /// Request for `name` with the configured attributes.
    pub fn from_config(name: &str, config: &RepositoryConfig) -> Self {
        Self {
            name: name.to_string(),
            description: config.description.clone(),
            homepage: config.homepage.clone(),
            private: config.private,
            is_template: config.template,
        }
    }
}
