//! Mentor Match - explainable mentor-student compatibility scoring
//!
//! This library scores candidate mentors against a learner's profile with a
//! transparent, rule-based formula and ranks them into recommendation tiers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, Matcher};
pub use models::{
    MatchResult, MatchScore, MatchingPreferences, MentorProfile, ScoreBreakdown, SkillLevel,
    StudentProfile, TimeSlot,
};
