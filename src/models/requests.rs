use crate::models::domain::JobDescriptor;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score a single candidate/job pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreJobRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    pub job: JobDescriptor,
}

/// Query parameters for the average-score endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AverageScoreQuery {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    #[serde(default)]
    pub limit: Option<u16>,
}
