// Core algorithm exports
pub mod factors;
pub mod matcher;
pub mod schedule;
pub mod scoring;

pub use factors::{
    genre_match, goal_alignment, price_compatibility, review_score, schedule_overlap,
    skill_level_match,
};
pub use matcher::{Matcher, PERFECT_MATCH_THRESHOLD, RECOMMENDED_THRESHOLD};
pub use schedule::{slot_overlap_hours, total_overlap_hours};
pub use scoring::{calculate_breakdown, calculate_match_score};
