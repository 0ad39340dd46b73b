//! Remote analyzer client with local fallback
//!
//! Attempts the remote analyze endpoint within a bounded timeout; on timeout,
//! network failure, or a non-success response it falls back to the in-process
//! engine. Both paths return the same verdict shape, so callers never see
//! which one answered.

use std::time::Duration;
use tracing::{debug, warn};

use crate::config::RemoteConfig;
use crate::error::{Result, ShieldError};
use crate::scoring::{ScamScorer, Verdict};

/// Default bound on the remote round-trip before falling back
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(6);

/// Remote-first analyzer
pub struct RemoteAnalyzer {
    base_url: String,
    client: reqwest::Client,
    scorer: ScamScorer,
}

impl RemoteAnalyzer {
    /// Create a client for the given analyze endpoint base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_REMOTE_TIMEOUT)
    }

    /// Create a client with a custom round-trip bound
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
            scorer: ScamScorer::default(),
        }
    }

    /// Create a client from the `[remote]` config section
    ///
    /// Returns `None` when no endpoint is configured; callers then use the
    /// local engine directly.
    pub fn from_config(config: &RemoteConfig) -> Option<Self> {
        config.base_url.as_ref().map(|base_url| {
            Self::with_timeout(
                base_url.clone(),
                Duration::from_secs(config.timeout_seconds),
            )
        })
    }

    /// Endpoint base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Analyze a text, preferring the remote endpoint
    ///
    /// Input is validated before the remote attempt so `InvalidInput` is
    /// surfaced to the caller rather than "recovered" by the fallback. Any
    /// transport failure falls back to the local engine; no retries.
    pub async fn analyze(&self, text: &str) -> Result<Verdict> {
        if text.trim().is_empty() {
            return Err(ShieldError::InvalidInput(
                "no text to analyze".to_string(),
            ));
        }

        match self.analyze_remote(text).await {
            Ok(verdict) => Ok(verdict),
            Err(e) => {
                warn!("Remote analyze failed, falling back to local engine: {}", e);
                self.scorer.score(text)
            }
        }
    }

    /// The bare remote call, without fallback
    pub async fn analyze_remote(&self, text: &str) -> Result<Verdict> {
        let url = format!("{}/api/analyze", self.base_url.trim_end_matches('/'));
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| ShieldError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ShieldError::Transport(format!(
                "analyze endpoint returned {}",
                response.status()
            )));
        }

        response
            .json::<Verdict>()
            .await
            .map_err(|e| ShieldError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_endpoint() {
        let config = RemoteConfig {
            base_url: None,
            timeout_seconds: 6,
        };
        assert!(RemoteAnalyzer::from_config(&config).is_none());

        let config = RemoteConfig {
            base_url: Some("http://127.0.0.1:8787".to_string()),
            timeout_seconds: 6,
        };
        let analyzer = RemoteAnalyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.base_url(), "http://127.0.0.1:8787");
    }

    #[tokio::test]
    async fn test_empty_input_not_sent_anywhere() {
        let analyzer = RemoteAnalyzer::new("http://127.0.0.1:1");
        assert!(matches!(
            analyzer.analyze("   ").await,
            Err(ShieldError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_to_local() {
        // Nothing listens on this port; the connection is refused immediately.
        let analyzer =
            RemoteAnalyzer::with_timeout("http://127.0.0.1:1", Duration::from_millis(500));

        let text = "URGENT! Send gift cards now.";
        let verdict = analyzer.analyze(text).await.unwrap();
        let local = ScamScorer::default().score(text).unwrap();
        assert_eq!(verdict, local);
    }

    #[tokio::test]
    async fn test_analyze_remote_reports_transport_error() {
        let analyzer =
            RemoteAnalyzer::with_timeout("http://127.0.0.1:1", Duration::from_millis(500));

        let err = analyzer.analyze_remote("some harmless text").await;
        assert!(matches!(err, Err(ShieldError::Transport(_))));
    }
}
