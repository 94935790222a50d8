//! pronouns.page API client and local profile persistence.
//!
//! Pure I/O: this crate fetches or loads a [`GlobalProfile`] and hands it to
//! the pipeline fully materialized. No normalization rules live here, and
//! nothing here is retried; a failed fetch is reported once and the caller
//! decides what to do.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

use std::path::Path;
use std::time::Duration;

use ppage_types::GlobalProfile;
use thiserror::Error;
use tracing::{debug, warn};

/// Profile endpoint; the username is appended directly.
pub const PROFILE_API_BASE: &str = "https://en.pronouns.page/api/profile/get/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the fetch/persistence boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile service answered with status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile document is malformed: {0}")]
    InvalidProfileData(#[from] serde_json::Error),
}

/// Client result type.
pub type ClientResult<T> = Result<T, ClientError>;

/// HTTP client for the pronouns.page profile API.
pub struct ProfileClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    /// Create a client against the public API.
    pub fn new() -> ClientResult<Self> {
        Self::with_base_url(PROFILE_API_BASE)
    }

    /// Create a client against a different endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch a user's profile document by username.
    pub async fn fetch_profile(&self, username: &str) -> ClientResult<GlobalProfile> {
        if username.trim().is_empty() {
            return Err(ClientError::EmptyUsername);
        }

        let url = format!("{}{}", self.base_url, username);
        debug!(%url, "fetching profile");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, username, "profile fetch rejected");
            return Err(ClientError::Status { status });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the raw bytes of an avatar image.
    ///
    /// Callers usually treat a failure here as "keep the default avatar"
    /// rather than failing the whole view.
    pub async fn fetch_avatar(&self, url: &str) -> ClientResult<Vec<u8>> {
        debug!(%url, "fetching avatar");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Read a previously saved profile document from disk.
pub fn load_profile(path: impl AsRef<Path>) -> ClientResult<GlobalProfile> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save a profile document to disk as pretty-printed JSON.
pub fn save_profile(path: impl AsRef<Path>, profile: &GlobalProfile) -> ClientResult<()> {
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, json)?;
    Ok(())
}
