//! Sealed-box encryption for repository secrets.
//!
//! GitHub only accepts secret values encrypted for the repository's
//! X25519 public key with a libsodium `crypto_box_seal`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crypto_box::aead::OsRng;
use crypto_box::PublicKey;

use crate::error::{HostingError, Result};

/// Encrypt `value` for a base64-encoded public key.
///
/// Returns the base64-encoded sealed box.
///
/// # Errors
///
/// Returns `HostingError::PublicKey` if the key is not 32 bytes of valid
/// base64, or `HostingError::Seal` if encryption fails.
pub fn seal(name: &str, public_key: &str, value: &str) -> Result<String> {
    let raw = STANDARD
        .decode(public_key.trim())
        .map_err(|e| HostingError::PublicKey(e.to_string()))?;
    let bytes: [u8; 32] = raw
        .as_slice()
        .try_into()
        .map_err(|_| HostingError::PublicKey(format!("expected 32 bytes, got {}", raw.len())))?;

    let sealed = PublicKey::from(bytes)
        .seal(&mut OsRng, value.as_bytes())
        .map_err(|_| HostingError::Seal(name.to_string()))?;

    Ok(STANDARD.encode(sealed))
}
