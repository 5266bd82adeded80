//! Quickstart - bootstrap a project onto GitHub in one interactive pass.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   ├── prompt        # dialoguer-backed prompter
//! │   └── run           # Wires the real adapters into the wizard
//! └── core/             # Core library components
//!     ├── config        # quickstart.toml and built-in defaults
//!     ├── env           # .env buffer, .env and .gitignore writes
//!     ├── git           # .git removal and the git CLI adapter
//!     ├── hosting/      # Hosting trait
//!     │   ├── github    # GitHub REST implementation
//!     │   └── seal      # Sealed-box encryption of secret values
//!     ├── prompt        # Prompter trait
//!     ├── repository    # Repository coordinates
//!     ├── validation    # Variable names and values
//!     └── wizard        # The bootstrap flow
//! ```
//!
//! # Flow
//!
//! - Discard `.git` and re-initialize the repository
//! - Create the hosted repository, or reuse an existing one
//! - Push an initial commit to `origin/main`
//! - Capture the configured variables into `.env`
//! - Mirror each variable as a repository secret

pub mod cli;
pub mod core;
pub mod error;
