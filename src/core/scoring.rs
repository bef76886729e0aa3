use crate::core::factors::{
    genre_match, goal_alignment, price_compatibility, review_score, schedule_overlap,
    skill_level_match,
};
use crate::models::{
    MatchScore, MatchingPreferences, MentorProfile, ScoreBreakdown, ScoringWeights, StudentProfile,
};

/// Highest total a mentor can reach, whatever the weights
pub const MAX_TOTAL_SCORE: u32 = 100;

/// Reasoning line for a mentor skipped because the learner already had lessons with them
pub const PREVIOUS_MENTOR_REASON: &str = "Already completed lessons with this mentor";

const SKILL_REASON_THRESHOLD: u32 = 20;
const SCHEDULE_REASON_THRESHOLD: u32 = 15;
const PRICE_REASON_THRESHOLD: u32 = 12;
const HIGH_RATING: f64 = 4.5;
const HIGH_RATING_MIN_REVIEWS: u32 = 10;

/// Calculate a match score (0-100) for a mentor against a learner's profile
///
/// Scoring formula:
/// total = min(round(
///     skill_level_match   * 1.0 +   # mentor one level ahead = best
///     goal_alignment      * 1.0 +   # share of goals covered
///     schedule_overlap    * w_s +   # 1.5 if schedule prioritized
///     price_compatibility * w_p +   # 1.5 if price prioritized
///     review_score        * w_r +   # 1.5 if experience prioritized
///     genre_match         * 1.0     # share of genres covered
/// ), 100)
///
/// If the learner asked to exclude previous mentors and this is one of them,
/// every factor is zero and no factor is evaluated.
pub fn calculate_match_score(
    student: &StudentProfile,
    mentor: &MentorProfile,
    preferences: Option<&MatchingPreferences>,
) -> MatchScore {
    let exclude_previous = preferences.is_some_and(|p| p.exclude_previous_mentors);
    if exclude_previous && student.has_worked_with(&mentor.id) {
        tracing::trace!("Mentor {} excluded as a previous mentor", mentor.id);
        return MatchScore {
            mentor_id: mentor.id.clone(),
            total_score: 0,
            breakdown: ScoreBreakdown::default(),
            reasoning: vec![PREVIOUS_MENTOR_REASON.to_string()],
        };
    }

    let breakdown = calculate_breakdown(student, mentor);
    let weights = ScoringWeights::from_preferences(preferences);

    // Clamp last: stacked 1.5x boosts on high sub-scores can pass 100
    let total_score = (breakdown.weighted_total(&weights).round() as u32).min(MAX_TOTAL_SCORE);

    MatchScore {
        mentor_id: mentor.id.clone(),
        total_score,
        breakdown,
        reasoning: generate_reasoning(student, mentor, &breakdown),
    }
}

/// Evaluate all six factors without weighting
pub fn calculate_breakdown(student: &StudentProfile, mentor: &MentorProfile) -> ScoreBreakdown {
    ScoreBreakdown {
        skill_level_match: skill_level_match(student.skill_level, mentor.skill_level),
        goal_alignment: goal_alignment(&student.learning_goals, &mentor.specializations),
        schedule_overlap: schedule_overlap(
            &student.available_time_slots,
            &mentor.available_time_slots,
        ),
        price_compatibility: price_compatibility(&student.price_range, mentor.price_per_hour),
        review_score: review_score(mentor.rating, mentor.total_reviews, mentor.response_rate),
        genre_match: genre_match(&student.preferred_genres, &mentor.genres),
    }
}

/// Build the human-readable reasons behind a score
///
/// Thresholds apply to the unweighted breakdown, so preferences never
/// change which reasons appear.
fn generate_reasoning(
    student: &StudentProfile,
    mentor: &MentorProfile,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if breakdown.skill_level_match >= SKILL_REASON_THRESHOLD {
        reasons.push(format!(
            "Skill level is a good fit (student: {}, mentor: {})",
            student.skill_level, mentor.skill_level
        ));
    }

    let matched_goals: Vec<&str> = student
        .learning_goals
        .intersection(&mentor.specializations)
        .map(String::as_str)
        .collect();
    if !matched_goals.is_empty() {
        reasons.push(format!("Specializes in: {}", matched_goals.join(", ")));
    }

    if breakdown.schedule_overlap >= SCHEDULE_REASON_THRESHOLD {
        reasons.push("Schedules overlap well".to_string());
    }

    if breakdown.price_compatibility >= PRICE_REASON_THRESHOLD {
        reasons.push("Price is within budget".to_string());
    }

    if mentor.rating >= HIGH_RATING && mentor.total_reviews >= HIGH_RATING_MIN_REVIEWS {
        reasons.push(format!(
            "Highly rated (★{:.1} from {} reviews)",
            mentor.rating, mentor.total_reviews
        ));
    }

    let matched_genres: Vec<&str> = student
        .preferred_genres
        .intersection(&mentor.genres)
        .map(String::as_str)
        .collect();
    if !matched_genres.is_empty() {
        reasons.push(format!("Teaches your genres: {}", matched_genres.join(", ")));
    }

    reasons
}
