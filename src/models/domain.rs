use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};

/// Learner or mentor proficiency
///
/// Strings outside the four known levels deserialize to `Unrecognized`,
/// which never matches anything during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
    #[serde(other)]
    Unrecognized,
}

/// Skill levels from least to most experienced
pub const SKILL_LEVELS: [SkillLevel; 4] = [
    SkillLevel::Beginner,
    SkillLevel::Intermediate,
    SkillLevel::Advanced,
    SkillLevel::Professional,
];

impl SkillLevel {
    /// Position of this level in [`SKILL_LEVELS`], `None` if unrecognized
    pub fn index(self) -> Option<usize> {
        SKILL_LEVELS.iter().position(|level| *level == self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Professional => "professional",
            SkillLevel::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weekly availability window, `[start_hour, end_hour)` on `day`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_time_slot"))]
pub struct TimeSlot {
    #[validate(length(min = 1))]
    pub day: String,
    #[serde(rename = "startHour")]
    #[validate(range(min = 0.0, max = 24.0))]
    pub start_hour: f64,
    #[serde(rename = "endHour")]
    #[validate(range(min = 0.0, max = 24.0))]
    pub end_hour: f64,
}

impl TimeSlot {
    pub fn new(day: impl Into<String>, start_hour: f64, end_hour: f64) -> Self {
        Self {
            day: day.into(),
            start_hour,
            end_hour,
        }
    }
}

fn validate_time_slot(slot: &TimeSlot) -> Result<(), ValidationError> {
    if slot.start_hour < slot.end_hour {
        Ok(())
    } else {
        Err(ValidationError::new("start_hour_not_before_end_hour"))
    }
}

/// Inclusive hourly budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_price_range"))]
pub struct PriceRange {
    #[validate(range(min = 0.0))]
    pub min: f64,
    #[validate(range(min = 0.0))]
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

fn validate_price_range(range: &PriceRange) -> Result<(), ValidationError> {
    if range.min <= range.max {
        Ok(())
    } else {
        Err(ValidationError::new("min_exceeds_max"))
    }
}

/// The learner's stated needs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub skill_level: SkillLevel,
    #[serde(default)]
    pub learning_goals: BTreeSet<String>,
    #[serde(default)]
    #[validate(nested)]
    pub available_time_slots: Vec<TimeSlot>,
    #[validate(nested)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub preferred_genres: BTreeSet<String>,
    #[serde(default)]
    pub previous_mentor_ids: Option<BTreeSet<String>>,
}

impl StudentProfile {
    /// Whether the learner has already worked with `mentor_id`
    pub fn has_worked_with(&self, mentor_id: &str) -> bool {
        self.previous_mentor_ids
            .as_ref()
            .is_some_and(|ids| ids.contains(mentor_id))
    }
}

/// A candidate mentor's offering
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    #[validate(length(min = 1))]
    pub id: String,
    pub skill_level: SkillLevel,
    #[serde(default)]
    pub specializations: BTreeSet<String>,
    #[serde(default)]
    #[validate(nested)]
    pub available_time_slots: Vec<TimeSlot>,
    #[validate(range(min = 0.0))]
    pub price_per_hour: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub response_rate: f64,
    #[serde(default)]
    pub genres: BTreeSet<String>,
}

/// Optional modifiers to the factor weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchingPreferences {
    pub exclude_previous_mentors: bool,
    pub prioritize_schedule: bool,
    pub prioritize_price: bool,
    pub prioritize_experience: bool,
}

/// Per-factor multipliers applied to the breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill_level: f64,
    pub goal_alignment: f64,
    pub schedule_overlap: f64,
    pub price_compatibility: f64,
    pub review_score: f64,
    pub genre_match: f64,
}

/// Multiplier given to a factor the learner prioritized
pub const PRIORITY_BOOST: f64 = 1.5;

impl ScoringWeights {
    pub fn from_preferences(preferences: Option<&MatchingPreferences>) -> Self {
        let mut weights = Self::default();
        let Some(prefs) = preferences else {
            return weights;
        };

        if prefs.prioritize_schedule {
            weights.schedule_overlap = PRIORITY_BOOST;
        }
        if prefs.prioritize_price {
            weights.price_compatibility = PRIORITY_BOOST;
        }
        if prefs.prioritize_experience {
            weights.review_score = PRIORITY_BOOST;
        }

        weights
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_level: 1.0,
            goal_alignment: 1.0,
            schedule_overlap: 1.0,
            price_compatibility: 1.0,
            review_score: 1.0,
            genre_match: 1.0,
        }
    }
}

/// The six factor sub-scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_level_match: u32,
    pub goal_alignment: u32,
    pub schedule_overlap: u32,
    pub price_compatibility: u32,
    pub review_score: u32,
    pub genre_match: u32,
}

impl ScoreBreakdown {
    /// Plain sum of the sub-scores, before any weighting
    pub fn unweighted_total(&self) -> u32 {
        self.skill_level_match
            + self.goal_alignment
            + self.schedule_overlap
            + self.price_compatibility
            + self.review_score
            + self.genre_match
    }

    pub fn weighted_total(&self, weights: &ScoringWeights) -> f64 {
        f64::from(self.skill_level_match) * weights.skill_level
            + f64::from(self.goal_alignment) * weights.goal_alignment
            + f64::from(self.schedule_overlap) * weights.schedule_overlap
            + f64::from(self.price_compatibility) * weights.price_compatibility
            + f64::from(self.review_score) * weights.review_score
            + f64::from(self.genre_match) * weights.genre_match
    }
}

/// Score of one mentor for one learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub mentor_id: String,
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
    pub reasoning: Vec<String>,
}

/// A ranked mentor with its score and recommendation tier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub mentor: MentorProfile,
    pub score: MatchScore,
    pub is_recommended: bool,
    pub is_perfect_match: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_order() {
        assert_eq!(SkillLevel::Beginner.index(), Some(0));
        assert_eq!(SkillLevel::Professional.index(), Some(3));
        assert_eq!(SkillLevel::Unrecognized.index(), None);
    }

    #[test]
    fn test_unknown_skill_level_deserializes() {
        let level: SkillLevel = serde_json::from_str("\"virtuoso\"").unwrap();
        assert_eq!(level, SkillLevel::Unrecognized);

        let level: SkillLevel = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(level, SkillLevel::Advanced);
    }

    #[test]
    fn test_weights_from_preferences() {
        let prefs = MatchingPreferences {
            prioritize_schedule: true,
            prioritize_price: true,
            ..Default::default()
        };
        let weights = ScoringWeights::from_preferences(Some(&prefs));

        assert_eq!(weights.schedule_overlap, 1.5);
        assert_eq!(weights.price_compatibility, 1.5);
        assert_eq!(weights.review_score, 1.0);
        assert_eq!(ScoringWeights::from_preferences(None), ScoringWeights::default());
    }

    #[test]
    fn test_slot_validation() {
        assert!(TimeSlot::new("monday", 18.0, 20.0).validate().is_ok());
        assert!(TimeSlot::new("monday", 20.0, 18.0).validate().is_err());
        assert!(TimeSlot::new("monday", 18.0, 25.0).validate().is_err());
    }

    #[test]
    fn test_price_range_validation() {
        assert!(PriceRange::new(2000.0, 4000.0).validate().is_ok());
        assert!(PriceRange::new(4000.0, 2000.0).validate().is_err());
    }

    #[test]
    fn test_previous_mentor_lookup() {
        let student = StudentProfile {
            skill_level: SkillLevel::Beginner,
            learning_goals: BTreeSet::new(),
            available_time_slots: vec![],
            price_range: PriceRange::new(0.0, 100.0),
            preferred_genres: BTreeSet::new(),
            previous_mentor_ids: Some(["m-1".to_string()].into_iter().collect()),
        };

        assert!(student.has_worked_with("m-1"));
        assert!(!student.has_worked_with("m-2"));
    }
}
