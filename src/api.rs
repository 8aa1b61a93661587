// API client module: contains a small blocking HTTP client that talks to
// the backend's REST API. It is intentionally small and synchronous; the
// seeding sequence issues one call at a time.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Outcome of one HTTP call that reached the backend. Carries the status
/// and the body read as text so callers can decide how to interpret a
/// rejection. Network-level failures never produce a `CallOutcome`; they
/// surface as `Err` from [`ApiClient::post`].
#[derive(Debug)]
pub struct CallOutcome {
    pub status: StatusCode,
    pub body: String,
}

impl CallOutcome {
    pub fn succeeded(&self) -> bool {
        self.status.is_success()
    }
}

/// Simple API client that holds a reqwest blocking client and the base URL
/// of the backend instance.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8090`).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a JSON body to `path` (joined onto the base URL) and read the
    /// response body as text regardless of status. Returns `Err` only for
    /// failures below the HTTP layer (connect, send, body read).
    pub fn post(&self, path: &str, body: &serde_json::Value) -> Result<CallOutcome> {
        let url = format!("{}{}", &self.base_url, path);
        let res = self.client.post(&url)
            .json(body)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;
        let status = res.status();
        let body = res.text()
            .with_context(|| format!("Failed to read response body from {}", url))?;
        Ok(CallOutcome { status, body })
    }
}
