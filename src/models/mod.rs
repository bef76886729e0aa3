// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    MatchResult, MatchScore, MatchingPreferences, MentorProfile, PriceRange, ScoreBreakdown,
    ScoringWeights, SkillLevel, StudentProfile, TimeSlot, SKILL_LEVELS,
};
pub use requests::{RankMentorsRequest, ScoreMentorRequest, TopMatchesRequest};
pub use responses::{ErrorResponse, HealthResponse, RankMentorsResponse};
