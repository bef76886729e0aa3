use crate::core::schedule::total_overlap_hours;
use crate::models::{PriceRange, SkillLevel, TimeSlot};
use std::collections::BTreeSet;

pub const SKILL_LEVEL_CAP: u32 = 25;
pub const GOAL_ALIGNMENT_CAP: u32 = 20;
pub const SCHEDULE_OVERLAP_CAP: u32 = 20;
pub const PRICE_COMPATIBILITY_CAP: u32 = 15;
pub const REVIEW_SCORE_CAP: u32 = 10;
pub const GENRE_MATCH_CAP: u32 = 10;

/// Awarded when the learner has not stated any goals
const NEUTRAL_GOAL_SCORE: u32 = 10;
/// Awarded when the learner has not stated any genres
const NEUTRAL_GENRE_SCORE: u32 = 5;
/// Overlap hours that already earn the full schedule score
const FULL_SCHEDULE_HOURS: f64 = 2.0;
/// Review count at which ratings are fully trusted
const RELIABLE_REVIEW_COUNT: f64 = 10.0;

/// Skill-level fit (0-25)
///
/// A mentor exactly one level above the learner is ideal. Same level is next
/// best, then any one-step gap, then a two-step gap.
#[inline]
pub fn skill_level_match(student: SkillLevel, mentor: SkillLevel) -> u32 {
    let (Some(student_idx), Some(mentor_idx)) = (student.index(), mentor.index()) else {
        return 0;
    };

    if mentor_idx == student_idx + 1 {
        return SKILL_LEVEL_CAP;
    }

    match student_idx.abs_diff(mentor_idx) {
        0 => 20,
        1 => 15,
        2 => 8,
        _ => 0,
    }
}

/// Share of the learner's goals the mentor specializes in (0-20)
#[inline]
pub fn goal_alignment(goals: &BTreeSet<String>, specializations: &BTreeSet<String>) -> u32 {
    if goals.is_empty() {
        return NEUTRAL_GOAL_SCORE;
    }

    let matched = goals.intersection(specializations).count();
    proportional_points(matched, goals.len(), GOAL_ALIGNMENT_CAP)
}

/// Shared weekly availability (0-20)
pub fn schedule_overlap(student_slots: &[TimeSlot], mentor_slots: &[TimeSlot]) -> u32 {
    let hours = total_overlap_hours(student_slots, mentor_slots);
    let cap = f64::from(SCHEDULE_OVERLAP_CAP);

    (hours / FULL_SCHEDULE_HOURS * cap).min(cap).round() as u32
}

/// How well the hourly price fits the learner's budget (0-15)
///
/// Prices outside the budget decay in steps by distance from the budget
/// midpoint, measured in budget widths. A zero-width budget only accepts
/// its exact price.
#[inline]
pub fn price_compatibility(budget: &PriceRange, price_per_hour: f64) -> u32 {
    if budget.contains(price_per_hour) {
        return PRICE_COMPATIBILITY_CAP;
    }

    let width = budget.width();
    if width <= 0.0 {
        return 0;
    }

    let diff = (price_per_hour - budget.midpoint()).abs();
    if diff <= width * 0.5 {
        10
    } else if diff <= width {
        5
    } else {
        0
    }
}

/// Rating and responsiveness, damped by review volume (0-10)
#[inline]
pub fn review_score(rating: f64, total_reviews: u32, response_rate: f64) -> u32 {
    let reliability = (f64::from(total_reviews) / RELIABLE_REVIEW_COUNT).min(1.0);
    let rating_component = (rating / 5.0) * 6.0;
    let response_component = response_rate * 4.0;

    ((rating_component + response_component) * reliability)
        .round()
        .clamp(0.0, f64::from(REVIEW_SCORE_CAP)) as u32
}

/// Share of the learner's genres the mentor teaches (0-10)
#[inline]
pub fn genre_match(preferred: &BTreeSet<String>, taught: &BTreeSet<String>) -> u32 {
    if preferred.is_empty() {
        return NEUTRAL_GENRE_SCORE;
    }

    let matched = preferred.intersection(taught).count();
    proportional_points(matched, preferred.len(), GENRE_MATCH_CAP)
}

#[inline]
fn proportional_points(matched: usize, total: usize, cap: u32) -> u32 {
    (matched as f64 / total as f64 * f64::from(cap)).round() as u32
}
