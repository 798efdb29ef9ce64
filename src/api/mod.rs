//! HTTP access to the SPARS backend.
//!
//! - `client` - `RecommendationClient` plus the one-shot helpers the UI calls
//!
//! ```rust,no_run
//! use spars::api::RecommendationClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecommendationClient::with_base_url("http://127.0.0.1:5000")?;
//! let outcome = client.get_recommendation("Empirical therapy for cystitis?").await?;
//! # Ok(())
//! # }
//! ```
mod client;

pub use client::{
    ApiError, ApiResult, RecommendationClient, get_recommendation, log_health,
};
