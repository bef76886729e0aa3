use crate::core::scoring::calculate_match_score;
use crate::models::{MatchResult, MatchingPreferences, MentorProfile, StudentProfile};
use rayon::prelude::*;

/// Total score at which a mentor is recommended
pub const RECOMMENDED_THRESHOLD: u32 = 80;
/// Total score at which a mentor is a perfect match
pub const PERFECT_MATCH_THRESHOLD: u32 = 90;
/// Pool size from which scoring fans out across the rayon thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Ranks a mentor pool for a learner
///
/// # Pipeline Stages
/// 1. Score every mentor (in parallel for large pools)
/// 2. Attach recommendation tiers
/// 3. Stable sort by total score, descending
#[derive(Debug, Clone)]
pub struct Matcher {
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Score and rank every mentor in the pool
    ///
    /// Mentors with equal totals keep their input order. The result is the
    /// same whether scoring ran sequentially or in parallel.
    ///
    /// # Arguments
    /// * `student` - The learner being matched
    /// * `mentors` - Candidate mentors, never mutated
    /// * `preferences` - Optional weighting and exclusion preferences
    pub fn rank(
        &self,
        student: &StudentProfile,
        mentors: &[MentorProfile],
        preferences: Option<&MatchingPreferences>,
    ) -> Vec<MatchResult> {
        let to_result = |mentor: &MentorProfile| build_result(student, mentor, preferences);

        // par_iter().collect() keeps input order, so the stable sort below
        // breaks ties identically on both paths
        let mut results: Vec<MatchResult> = if mentors.len() >= self.parallel_threshold {
            tracing::trace!("Scoring {} mentors in parallel", mentors.len());
            mentors.par_iter().map(to_result).collect()
        } else {
            mentors.iter().map(to_result).collect()
        };

        results.sort_by(|a, b| b.score.total_score.cmp(&a.score.total_score));

        results
    }

    /// The first `n` entries of [`Matcher::rank`]
    pub fn top_matches(
        &self,
        student: &StudentProfile,
        mentors: &[MentorProfile],
        n: usize,
        preferences: Option<&MatchingPreferences>,
    ) -> Vec<MatchResult> {
        let mut ranked = self.rank(student, mentors, preferences);
        ranked.truncate(n);
        ranked
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

fn build_result(
    student: &StudentProfile,
    mentor: &MentorProfile,
    preferences: Option<&MatchingPreferences>,
) -> MatchResult {
    let score = calculate_match_score(student, mentor, preferences);
    let total = score.total_score;

    MatchResult {
        mentor: mentor.clone(),
        score,
        is_recommended: total >= RECOMMENDED_THRESHOLD,
        is_perfect_match: total >= PERFECT_MATCH_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceRange, SkillLevel, TimeSlot};

    fn create_student() -> StudentProfile {
        StudentProfile {
            skill_level: SkillLevel::Intermediate,
            learning_goals: ["technique_improvement".to_string()].into_iter().collect(),
            available_time_slots: vec![TimeSlot::new("monday", 18.0, 21.0)],
            price_range: PriceRange::new(3000.0, 8000.0),
            preferred_genres: ["jazz".to_string()].into_iter().collect(),
            previous_mentor_ids: None,
        }
    }

    fn create_mentor(id: &str, skill_level: SkillLevel, price_per_hour: f64) -> MentorProfile {
        MentorProfile {
            id: id.to_string(),
            skill_level,
            specializations: ["technique_improvement".to_string()].into_iter().collect(),
            available_time_slots: vec![TimeSlot::new("monday", 17.0, 22.0)],
            price_per_hour,
            rating: 4.9,
            total_reviews: 50,
            response_rate: 0.98,
            genres: ["jazz".to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let matcher = Matcher::default();
        let mentors = vec![
            create_mentor("far-level", SkillLevel::Beginner, 5000.0),
            create_mentor("ideal", SkillLevel::Advanced, 5000.0),
            create_mentor("pricey", SkillLevel::Advanced, 20000.0),
        ];

        let results = matcher.rank(&create_student(), &mentors, None);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].mentor.id, "ideal");
        assert!(results
            .windows(2)
            .all(|w| w[0].score.total_score >= w[1].score.total_score));
    }

    #[test]
    fn test_tiers() {
        let matcher = Matcher::default();
        let mentors = vec![create_mentor("ideal", SkillLevel::Advanced, 5000.0)];

        let results = matcher.rank(&create_student(), &mentors, None);

        // 25 + 20 + 20 + 15 + 10 + 10
        assert_eq!(results[0].score.total_score, 100);
        assert!(results[0].is_recommended);
        assert!(results[0].is_perfect_match);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::default();
        let mentors: Vec<MentorProfile> = (0..5)
            .map(|i| create_mentor(&format!("m-{i}"), SkillLevel::Advanced, 5000.0))
            .collect();

        let results = matcher.rank(&create_student(), &mentors, None);
        let ids: Vec<&str> = results.iter().map(|r| r.mentor.id.as_str()).collect();

        assert_eq!(ids, vec!["m-0", "m-1", "m-2", "m-3", "m-4"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mentors: Vec<MentorProfile> = (0..200)
            .map(|i| {
                let level = [SkillLevel::Beginner, SkillLevel::Advanced, SkillLevel::Professional][i % 3];
                create_mentor(&i.to_string(), level, 2000.0 + (i as f64) * 75.0)
            })
            .collect();
        let student = create_student();

        let sequential = Matcher::new(usize::MAX).rank(&student, &mentors, None);
        let parallel = Matcher::new(1).rank(&student, &mentors, None);

        let seq_ids: Vec<_> = sequential.iter().map(|r| (&r.mentor.id, r.score.total_score)).collect();
        let par_ids: Vec<_> = parallel.iter().map(|r| (&r.mentor.id, r.score.total_score)).collect();
        assert_eq!(seq_ids, par_ids);
    }

    #[test]
    fn test_top_matches_respects_n() {
        let matcher = Matcher::default();
        let mentors: Vec<MentorProfile> = (0..20)
            .map(|i| create_mentor(&i.to_string(), SkillLevel::Advanced, 4000.0 + i as f64 * 500.0))
            .collect();

        assert_eq!(matcher.top_matches(&create_student(), &mentors, 5, None).len(), 5);
        assert_eq!(matcher.top_matches(&create_student(), &mentors, 50, None).len(), 20);
        assert!(matcher.top_matches(&create_student(), &mentors, 0, None).is_empty());
        assert!(matcher.top_matches(&create_student(), &[], 5, None).is_empty());
    }
}
