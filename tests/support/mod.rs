//! Test support utilities for quickstart integration tests.
//!
//! Provides scripted answers, recording fakes for git and the hosting
//! platform, and a local HTTP responder for the GitHub client.

#![allow(dead_code)]

pub mod assertions;
pub mod fakes;
pub mod server;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use script::*;

use quickstart::core::constants::DEFAULT_VARIABLES;
use tempfile::TempDir;

/// Isolated project directory.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    /// Empty project directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Project directory with a file and a stale `.git` folder.
    pub fn with_history() -> Self {
        let t = Self::new();
        std::fs::write(t.dir.path().join("README.md"), "# demo\n").unwrap();
        std::fs::create_dir_all(t.dir.path().join(".git/refs/heads")).unwrap();
        std::fs::write(t.dir.path().join(".git/HEAD"), "ref: refs/heads/master\n").unwrap();
        t
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", name, e))
    }
}

/// One answer per default variable: `value-<NAME>`.
pub fn default_values() -> Vec<(String, String)> {
    DEFAULT_VARIABLES
        .iter()
        .map(|name| (name.to_string(), format!("value-{}", name)))
        .collect()
}
