use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{calculate_match_score, Matcher};
use crate::models::{
    HealthResponse, MentorProfile, RankMentorsRequest, RankMentorsResponse, ScoreMentorRequest,
    TopMatchesRequest,
};
use crate::routes::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matching: MatchingSettings) -> Self {
        Self {
            matcher: Matcher::new(matching.parallel_threshold),
            matching,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_mentors))
        .route("/matches/top", web::post().to(top_matches))
        .route("/matches/score", web::post().to(score_mentor));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank mentors endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "student": { "skillLevel": "beginner", "priceRange": { "min": 2000, "max": 4000 }, ... },
///   "mentors": [{ "id": "m-1", "skillLevel": "intermediate", ... }],
///   "preferences": { "prioritizeSchedule": true }
/// }
/// ```
async fn rank_mentors(
    state: web::Data<AppState>,
    req: web::Json<RankMentorsRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    check_pool_size(&req.mentors, &state.matching)?;

    let RankMentorsRequest { student, mentors, preferences } = req.into_inner();
    let total_candidates = mentors.len();

    tracing::info!("Ranking {} mentors", total_candidates);

    let matcher = state.matcher.clone();
    // Large pools are CPU-bound; keep them off the async workers
    let matches = web::block(move || matcher.rank(&student, &mentors, preferences.as_ref())).await?;

    let response = RankMentorsResponse::new(matches, total_candidates);

    tracing::info!(
        "Ranked {} mentors ({} recommended, {} perfect) for request {}",
        total_candidates,
        response.recommended_count,
        response.perfect_match_count,
        response.request_id
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Top matches endpoint
///
/// POST /api/v1/matches/top
///
/// Same body as `/matches/rank` plus an optional `"limit"`, capped at the
/// configured maximum.
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    check_pool_size(&req.mentors, &state.matching)?;

    let TopMatchesRequest { student, mentors, preferences, limit } = req.into_inner();
    let total_candidates = mentors.len();
    let limit = limit
        .unwrap_or(state.matching.default_top_n)
        .min(state.matching.max_top_n) as usize;

    tracing::info!("Finding top {} of {} mentors", limit, total_candidates);

    let matcher = state.matcher.clone();
    let matches = web::block(move || {
        matcher.top_matches(&student, &mentors, limit, preferences.as_ref())
    })
    .await?;

    let response = RankMentorsResponse::new(matches, total_candidates);

    tracing::info!(
        "Returning {} of {} mentors for request {}",
        response.matches.len(),
        total_candidates,
        response.request_id
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Score a single mentor
///
/// POST /api/v1/matches/score
async fn score_mentor(req: web::Json<ScoreMentorRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let score = calculate_match_score(&req.student, &req.mentor, req.preferences.as_ref());

    tracing::debug!(
        "Scored mentor {}: {} (unweighted {}) {:?}",
        score.mentor_id,
        score.total_score,
        score.breakdown.unweighted_total(),
        score.breakdown
    );

    Ok(HttpResponse::Ok().json(score))
}

fn check_pool_size(mentors: &[MentorProfile], matching: &MatchingSettings) -> Result<(), ApiError> {
    if mentors.len() > matching.max_mentors {
        tracing::info!(
            "Rejecting pool of {} mentors (max {})",
            mentors.len(),
            matching.max_mentors
        );
        return Err(ApiError::TooManyMentors {
            count: mentors.len(),
            max: matching.max_mentors,
        });
    }
    Ok(())
}
