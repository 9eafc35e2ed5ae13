//! HTTP source for branch exports

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::info;

use super::SnapshotSource;
use crate::error::{Result, config_invalid, fetch_failed, request_failed};
use crate::progress::FetchSpinner;

/// Downloads `{base_url}{branch}` with a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| config_invalid(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, branch: &str) -> String {
        format!("{}{}", self.base_url, branch)
    }
}

impl SnapshotSource for HttpSource {
    fn fetch_raw(&self, branch: &str) -> Result<String> {
        let url = self.url_for(branch);
        let _spinner = FetchSpinner::start(branch);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| request_failed(branch, e))?;

        let status = response.status();
        info!(branch, status = status.as_u16(), "response");

        // The export only answers 200 with a full document
        if status != StatusCode::OK {
            return Err(fetch_failed(branch, status.as_u16()));
        }

        response.text().map_err(|e| request_failed(branch, e))
    }
}
