//! Hosting platform operations.
//!
//! Provides the abstraction the wizard uses for remote repository
//! management, with a GitHub REST implementation.
//!
//! ## Adding a New Platform
//!
//! 1. Implement the `Hosting` trait
//! 2. Add the implementation in a new file (e.g., `gitea.rs`)
//! 3. Re-export from this module

use crate::core::repository::{NewRepository, Repository};
use crate::error::Result;

mod github;
mod seal;

pub use github::GitHub;
pub use seal::seal;

/// Remote repository management.
pub trait Hosting {
    /// Create a repository owned by the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns `HostingError` for any non-success response, such as a name
    /// collision, an invalid token, or rate limiting.
    fn create_repository(&self, repo: &NewRepository) -> Result<()>;

    /// Create or update a repository secret.
    ///
    /// # Errors
    ///
    /// Returns `HostingError` if the value cannot be encrypted or the API
    /// rejects the upload.
    fn put_secret(&self, repo: &Repository, name: &str, value: &str) -> Result<()>;
}

impl<H: Hosting + ?Sized> Hosting for &H {
    fn create_repository(&self, repo: &NewRepository) -> Result<()> {
        (**self).create_repository(repo)
    }

    fn put_secret(&self, repo: &Repository, name: &str, value: &str) -> Result<()> {
        (**self).put_secret(repo, name, value)
    }
}
