//! plagcheck-client
//!
//! HTTP client for the remote plagiarism-analysis service. One POST per
//! submission, JSON in and out; any transport failure or non-2xx status is
//! a plain error for the caller to surface.

use tracing::{debug, warn};

use plagcheck_core::config::Config;
use plagcheck_core::traits::AnalysisBackend;
use plagcheck_core::types::{AnalysisRequest, AnalysisResult};
use plagcheck_core::{Error, Result};

pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    /// Build a client for the given endpoint. No timeout is configured on
    /// purpose: a hanging request stays in flight until the connection
    /// resolves or drops.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let request = AnalysisRequest {
            text: text.to_string(),
        };
        debug!(endpoint = %self.endpoint, bytes = text.len(), "→ analysis request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("network error reaching analysis service: {e}");
                Error::Network(e.to_string())
            })?;

        let status = response.status();
        debug!(status = %status, "← analysis response");
        if !status.is_success() {
            warn!(status = %status, "analysis service rejected the request");
            return Err(Error::Http(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        let result: AnalysisResult = serde_json::from_slice(&bytes)?;
        Ok(result)
    }
}
