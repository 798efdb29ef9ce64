use crate::config::app_config;
use crate::types::{HealthStatus, RecommendationOutcome, RecommendationRequest, RecommendationResponse};
use anyhow::Context;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info, warn};

const RECOMMENDATION_PATH: &str = "get_recommendation";
const HEALTH_PATH: &str = "health";

// ============================================
// Error Types
// ============================================

/// Failures that never produced a usable backend verdict.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response violates the recommendation contract: {0}")]
    Contract(&'static str),
    #[error("cannot build endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("client is not configured: {0}")]
    Config(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// Client
// ============================================

/// Client for the SPARS recommendation backend.
#[derive(Clone, Debug)]
pub struct RecommendationClient {
    client: reqwest::Client,
    base_url: Url,
}

impl RecommendationClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: with_trailing_slash(base_url),
        }
    }

    pub fn with_base_url(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let url = Url::parse(base_url.as_ref()).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        Ok(Self::new(url))
    }

    /// Client configured from `SPARS_API_BASE`.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = app_config().map_err(|err| anyhow::anyhow!("{err}"))?;
        Ok(Self::new(config.api_base.clone()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Posts `query` and classifies the reply.
    ///
    /// The body is decoded regardless of HTTP status: the backend reports
    /// validation and server failures as `{"success": false, "error": ...}`
    /// alongside 400 and 500.
    pub async fn get_recommendation(&self, query: &str) -> ApiResult<RecommendationOutcome> {
        let url = self
            .base_url
            .join(RECOMMENDATION_PATH)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        debug!(%url, query_len = query.len(), "requesting recommendation");

        let response = self
            .client
            .post(url)
            .json(&RecommendationRequest { query })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed: RecommendationResponse = serde_json::from_str(&body).inspect_err(|err| {
            warn!(%status, error = %err, "recommendation response is not valid JSON");
        })?;
        let outcome = classify(parsed)?;

        match &outcome {
            RecommendationOutcome::Answer(answer) => {
                info!(%status, answer_len = answer.len(), "recommendation received");
            }
            RecommendationOutcome::Rejected(error) => {
                warn!(%status, %error, "backend rejected recommendation request");
            }
        }
        Ok(outcome)
    }

    pub async fn health(&self) -> anyhow::Result<HealthStatus> {
        let url = self.base_url.join(HEALTH_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("health check request failed")?
            .error_for_status()
            .context("health check returned an error status")?;
        response
            .json::<HealthStatus>()
            .await
            .context("health check body is not valid JSON")
    }
}

fn classify(response: RecommendationResponse) -> ApiResult<RecommendationOutcome> {
    match response {
        RecommendationResponse {
            success: true,
            answer: Some(answer),
            ..
        } => Ok(RecommendationOutcome::Answer(answer)),
        RecommendationResponse { success: true, .. } => {
            Err(ApiError::Contract("success without an answer"))
        }
        RecommendationResponse {
            success: false,
            error: Some(error),
            ..
        } => Ok(RecommendationOutcome::Rejected(error)),
        RecommendationResponse { success: false, .. } => {
            Err(ApiError::Contract("failure without an error message"))
        }
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

// ============================================
// Public API Functions
// ============================================

/// One-shot recommendation request against the configured backend.
pub async fn get_recommendation(query: &str) -> ApiResult<RecommendationOutcome> {
    let client = RecommendationClient::from_env().map_err(|err| {
        warn!(error = %err, "recommendation client is not configured");
        ApiError::Config(format!("{err:#}"))
    })?;
    client.get_recommendation(query).await
}

/// Fire-and-forget health probe; the result is only logged.
pub async fn log_health() {
    let outcome = match RecommendationClient::from_env() {
        Ok(client) => client.health().await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(health) => info!(status = %health.status, "application health check"),
        Err(err) => warn!(error = %format!("{err:#}"), "health check failed"),
    }
}
