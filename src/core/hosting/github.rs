//! GitHub REST client.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{seal, Hosting};
use crate::core::config::ApiConfig;
use crate::core::repository::{NewRepository, Repository};
use crate::error::{ConfigError, HostingError, Result};

const USER_AGENT: &str = concat!("quickstart/", env!("CARGO_PKG_VERSION"));

/// Token-authenticated GitHub API client.
///
/// Repository public keys are fetched once per repository and reused for
/// every secret uploaded afterwards.
pub struct GitHub {
    client: Client,
    base: String,
    token: Zeroizing<String>,
    keys: RefCell<HashMap<String, PublicKey>>,
}

#[derive(Debug, Clone, Deserialize)]
struct PublicKey {
    key_id: String,
    key: String,
}

#[derive(Serialize)]
struct SecretBody<'a> {
    encrypted_value: &'a str,
    key_id: &'a str,
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

impl GitHub {
    /// Build a client bound to `token`.
    ///
    /// The token is not checked here; an invalid one surfaces on the first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiVersion` if the API version is not a
    /// valid header value, or `HostingError::Client` if the HTTP client
    /// cannot be built.
    pub fn new(token: &str, api: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let version = HeaderValue::from_str(&api.version)
            .map_err(|_| ConfigError::InvalidApiVersion(api.version.clone()))?;
        headers.insert("x-github-api-version", version);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(None::<Duration>)
            .build()
            .map_err(HostingError::Client)?;

        Ok(Self {
            client,
            base: api.url.trim_end_matches('/').to_string(),
            token: Zeroizing::new(token.to_string()),
            keys: RefCell::new(HashMap::new()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn send(&self, method: &'static str, url: &str, request: RequestBuilder) -> Result<Response> {
        debug!(method, url, "sending request");

        let response = request
            .bearer_auth(self.token.as_str())
            .send()
            .map_err(|source| HostingError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            let message = response
                .json::<ApiMessage>()
                .map(|m| m.message)
                .unwrap_or_else(|_| reason.to_string());
            return Err(HostingError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Ok(response)
    }

    fn public_key(&self, repo: &Repository) -> Result<PublicKey> {
        let cache_key = repo.to_string();
        if let Some(key) = self.keys.borrow().get(&cache_key) {
            return Ok(key.clone());
        }

        let url = self.url(&format!(
            "/repos/{}/{}/actions/secrets/public-key",
            repo.owner(),
            repo.name()
        ));
        let response = self.send("GET", &url, self.client.get(&url))?;
        let key: PublicKey = response.json().map_err(|source| HostingError::Request {
            url: url.clone(),
            source,
        })?;

        debug!(repo = %repo, key_id = %key.key_id, "fetched repository public key");
        self.keys.borrow_mut().insert(cache_key, key.clone());
        Ok(key)
    }
}

impl Hosting for GitHub {
    fn create_repository(&self, repo: &NewRepository) -> Result<()> {
        let url = self.url("/user/repos");
        self.send("POST", &url, self.client.post(&url).json(repo))?;

        info!(name = %repo.name, "created repository");
        Ok(())
    }

    fn put_secret(&self, repo: &Repository, name: &str, value: &str) -> Result<()> {
        let key = self.public_key(repo)?;
        let encrypted_value = seal(name, &key.key, value)?;

        let url = self.url(&format!(
            "/repos/{}/{}/actions/secrets/{}",
            repo.owner(),
            repo.name(),
            name
        ));
        let body = SecretBody {
            encrypted_value: &encrypted_value,
            key_id: &key.key_id,
        };
        self.send("PUT", &url, self.client.put(&url).json(&body))?;

        info!(repo = %repo, secret = name, "uploaded secret");
        Ok(())
    }
}
