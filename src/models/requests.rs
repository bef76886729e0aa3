use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MatchingPreferences, MentorProfile, StudentProfile};

/// Request to rank a pool of mentors for one learner
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMentorsRequest {
    #[validate(nested)]
    pub student: StudentProfile,
    #[validate(nested)]
    pub mentors: Vec<MentorProfile>,
    #[serde(default)]
    pub preferences: Option<MatchingPreferences>,
}

/// Request for the best `limit` mentors out of a pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[validate(nested)]
    pub student: StudentProfile,
    #[validate(nested)]
    pub mentors: Vec<MentorProfile>,
    #[serde(default)]
    pub preferences: Option<MatchingPreferences>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single mentor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMentorRequest {
    #[validate(nested)]
    pub student: StudentProfile,
    #[validate(nested)]
    pub mentor: MentorProfile,
    #[serde(default)]
    pub preferences: Option<MatchingPreferences>,
}
