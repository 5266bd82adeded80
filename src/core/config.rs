//! Configuration file management.
//!
//! Handles reading and validating the optional `quickstart.toml`. Every field
//! has a default, so an absent file (or an empty one) reproduces the
//! built-in bootstrap flow.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::validation::validate_key;
use crate::error::{ConfigError, Result, ValidationError};

/// Wizard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Attributes for newly created repositories
    pub repository: RepositoryConfig,
    /// Local git wiring
    pub git: GitConfig,
    /// Hosting API endpoint
    pub api: ApiConfig,
    /// Variables captured into `.env`, in prompt order
    pub variables: Vec<Variable>,
}

/// Attributes sent when creating a repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RepositoryConfig {
    pub description: String,
    pub homepage: String,
    pub private: bool,
    pub template: bool,
}

/// Remote, branch and commit used for the initial push.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitConfig {
    /// Web host the clone URL is built from
    pub host: String,
    pub remote: String,
    pub branch: String,
    pub commit_message: String,
}

/// Hosting API endpoint and version header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    pub version: String,
}

impl ApiConfig {
    /// Whether `version` can be sent as a header value.
    pub fn has_valid_version(&self) -> bool {
        !self.version.is_empty()
            && self
                .version
                .bytes()
                .all(|b| b == b'\t' || (0x20..0x7f).contains(&b))
    }
}

/// One entry of the variable table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variable {
    /// Name used both as `.env` key and as repository secret name
    pub name: String,
    /// Reject empty values
    #[serde(default)]
    pub required: bool,
    /// Regex non-empty values must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Variable {
    /// Optional variable with no validation rule.
    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            pattern: None,
        }
    }

    /// Compile the validation pattern, if any.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if the regex does not compile.
    pub fn compiled_pattern(&self) -> Result<Option<Regex>> {
        self.pattern
            .as_deref()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                    key: self.name.clone(),
                    source,
                })
            })
            .transpose()
            .map_err(Into::into)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            description: constants::DEFAULT_DESCRIPTION.to_string(),
            homepage: constants::DEFAULT_HOMEPAGE.to_string(),
            private: false,
            template: true,
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_GIT_HOST.to_string(),
            remote: constants::DEFAULT_REMOTE.to_string(),
            branch: constants::DEFAULT_BRANCH.to_string(),
            commit_message: constants::DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_API_URL.to_string(),
            version: constants::DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: RepositoryConfig::default(),
            git: GitConfig::default(),
            api: ApiConfig::default(),
            variables: constants::DEFAULT_VARIABLES
                .iter()
                .map(|name| Variable::optional(name))
                .collect(),
        }
    }
}

impl Config {
    /// Default config path inside a working directory.
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(constants::CONFIG_FILE)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `<dir>/quickstart.toml` is
    /// used when present and the built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or a
    /// validation error if the table is inconsistent.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path(dir);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse` with the path.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(variables = config.variables.len(), "config loaded");

        config.validate()?;
        Ok(config)
    }

    /// Validate the variable table and the API version.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty table, an unusable API version, an
    /// invalid or duplicate name, or a pattern that does not compile.
    pub fn validate(&self) -> Result<()> {
        if self.variables.is_empty() {
            return Err(ConfigError::NoVariables.into());
        }
        if !self.api.has_valid_version() {
            return Err(ConfigError::InvalidApiVersion(self.api.version.clone()).into());
        }

        let mut seen = HashSet::new();
        for var in &self.variables {
            validate_key(&var.name)?;
            if !seen.insert(var.name.as_str()) {
                return Err(ValidationError::DuplicateKey(var.name.clone()).into());
            }
            var.compiled_pattern()?;
        }

        Ok(())
    }

    /// Variable names in prompt order.
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }
}
