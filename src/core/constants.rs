//! Constants used throughout quickstart.
//!
//! Centralizes file names and the default values of the configuration table.

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "quickstart.toml";

/// Version-control metadata directory removed before re-initializing.
pub const GIT_DIR: &str = ".git";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Ignore file that receives the `.env` entry.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Text appended to the ignore file.
pub const GITIGNORE_ENTRY: &str = "\n.env";

/// Web host used to build clone URLs.
pub const DEFAULT_GIT_HOST: &str = "https://github.com";

/// Remote name added to the fresh repository.
pub const DEFAULT_REMOTE: &str = "origin";

/// Branch the initial commit is pushed to.
pub const DEFAULT_BRANCH: &str = "main";

/// Message of the initial commit.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit";

/// GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Value of the `X-GitHub-Api-Version` header.
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

/// Description given to newly created repositories.
pub const DEFAULT_DESCRIPTION: &str = "Quickstart";

/// Homepage given to newly created repositories.
pub const DEFAULT_HOMEPAGE: &str = "https://github.com";

/// Variables captured into `.env` and mirrored as repository secrets, in order.
pub const DEFAULT_VARIABLES: &[&str] = &[
    "DB_USER",
    "DB_PASSWORD",
    "DB_URL",
    "HASURA_ADMIN_SECRET",
    "AUTH0_ISSUER_BASE_URL",
    "AUTH0_BASE_URL",
    "AUTH0_CLIENT_SECRET",
    "AUTH0_CLIENT_ID",
    "AUTH0_SECRET",
];
