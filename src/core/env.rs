//! Environment buffer and dotfile operations.
//!
//! The buffer is the serialized `.env` content. Values destined for the
//! hosting platform are read back out of it with [`EnvBuffer::extract`], so
//! whatever lands on disk is exactly what gets uploaded.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroize;

use crate::core::constants;
use crate::error::{FsError, Result, ValidationError};

/// Ordered `name=value` lines, newline-terminated.
#[derive(Default)]
pub struct EnvBuffer {
    names: Vec<String>,
    content: String,
}

impl EnvBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `name=value` line.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Multiline` if the value contains a line
    /// break, or `ValidationError::DuplicateKey` if `name` was already pushed.
    pub fn push(&mut self, name: &str, value: &str) -> Result<()> {
        if value.contains('\n') || value.contains('\r') {
            return Err(ValidationError::Multiline(name.to_string()).into());
        }
        if self.names.iter().any(|n| n == name) {
            return Err(ValidationError::DuplicateKey(name.to_string()).into());
        }

        self.content.push_str(name);
        self.content.push('=');
        self.content.push_str(value);
        self.content.push('\n');
        self.names.push(name.to_string());
        Ok(())
    }

    /// Re-derive a value from the serialized buffer.
    ///
    /// Takes the text after the first occurrence of `name=`, cut at the next
    /// occurrence of `name=` and then at the first newline. A value that
    /// itself contains another variable's `NAME=` therefore shadows that
    /// variable.
    pub fn extract(&self, name: &str) -> Option<&str> {
        let needle = format!("{}=", name);
        let start = self.content.find(&needle)? + needle.len();
        let rest = &self.content[start..];
        let rest = match rest.find(&needle) {
            Some(end) => &rest[..end],
            None => rest,
        };
        Some(rest.split('\n').next().unwrap_or(rest))
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Serialized content.
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Drop for EnvBuffer {
    fn drop(&mut self) {
        self.content.zeroize();
    }
}

impl std::fmt::Debug for EnvBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvBuffer")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for EnvBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

/// Write the buffer to `<dir>/.env`, replacing any existing file.
///
/// # Errors
///
/// Returns `FsError::Write` if the file cannot be written.
pub fn write_env_file(dir: &Path, buffer: &EnvBuffer) -> Result<PathBuf> {
    let path = dir.join(constants::ENV_FILE);
    debug!(path = %path.display(), entries = buffer.len(), "writing env file");

    let to_err = |source| FsError::Write {
        path: path.clone(),
        source,
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(&path)
            .map_err(to_err)?;
        file.write_all(buffer.as_str().as_bytes()).map_err(to_err)?;
        file.flush().map_err(to_err)?;

        // Existing files keep their old mode on open; tighten it.
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
            .map_err(to_err)?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(&path, buffer.as_str()).map_err(to_err)?;
    }

    Ok(path)
}

/// Append the `.env` entry to `<dir>/.gitignore`, creating it if absent.
///
/// # Errors
///
/// Returns `FsError::Write` if the file cannot be opened or written.
pub fn append_gitignore(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(constants::GITIGNORE_FILE);
    debug!(path = %path.display(), "appending env entry to gitignore");

    let to_err = |source| FsError::Write {
        path: path.clone(),
        source,
    };

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(to_err)?;
    file.write_all(constants::GITIGNORE_ENTRY.as_bytes())
        .map_err(to_err)?;

    Ok(path)
}
