use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationRequest<'a> {
    pub query: &'a str,
}

/// Wire shape of the `/get_recommendation` response body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecommendationResponse {
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the backend decided about a query that reached it.
#[derive(Clone, Debug, PartialEq)]
pub enum RecommendationOutcome {
    Answer(String),
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
