use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response for the rank and top endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankMentorsResponse {
    pub request_id: String,
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    pub recommended_count: usize,
    pub perfect_match_count: usize,
}

impl RankMentorsResponse {
    pub fn new(matches: Vec<MatchResult>, total_candidates: usize) -> Self {
        let recommended_count = matches.iter().filter(|m| m.is_recommended).count();
        let perfect_match_count = matches.iter().filter(|m| m.is_perfect_match).count();

        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            matches,
            total_candidates,
            recommended_count,
            perfect_match_count,
        }
    }
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
