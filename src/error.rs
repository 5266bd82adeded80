//! Error types for quickstart.
//!
//! Every failure surfaces as one of a closed set of kinds so the binary can
//! report precisely what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Filesystem(#[from] FsError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Hosting(#[from] HostingError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config declares no variables")]
    NoVariables,

    #[error("invalid API version {0:?}: must be printable ASCII")]
    InvalidApiVersion(String),

    #[error("invalid pattern for {key}: {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("variable name cannot be empty")]
    EmptyKey,

    #[error("invalid variable name '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("duplicate variable: {0}")]
    DuplicateKey(String),

    #[error("value for {0} is required")]
    Required(String),

    #[error("value for {key} does not match pattern {pattern}")]
    Pattern { key: String, pattern: String },

    #[error("value for {0} contains a newline")]
    Multiline(String),

    #[error("{0} not found in environment buffer")]
    MissingEntry(String),
}

/// Local filesystem errors.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("directory not found: {0}")]
    MissingDir(PathBuf),

    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Version-control tool errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found: {0}")]
    NotInstalled(#[from] which::Error),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Hosting API errors.
#[derive(Error, Debug)]
pub enum HostingError {
    #[error("http client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned {status}: {message}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        message: String,
    },

    #[error("invalid repository public key: {0}")]
    PublicKey(String),

    #[error("failed to encrypt secret {0}")]
    Seal(String),
}

impl HostingError {
    /// HTTP status code, when the API answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            HostingError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Interactive input errors.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("no answer available for prompt: {0}")]
    Exhausted(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Input(InputError::Prompt(err))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
