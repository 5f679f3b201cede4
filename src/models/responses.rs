use crate::models::domain::MatchScore;
use serde::{Deserialize, Serialize};

/// Response for the single-job score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreJobResponse {
    #[serde(rename = "matchScore")]
    pub match_score: MatchScore,
}

/// Response for the average-score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageScoreResponse {
    #[serde(rename = "averageScore")]
    pub average_score: MatchScore,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
