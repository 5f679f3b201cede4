use crate::core::{ScoreEngine, ScoreError};
use crate::models::{
    AverageScoreQuery, AverageScoreResponse, ErrorResponse, HealthResponse, ScoreJobRequest,
    ScoreJobResponse,
};
use crate::services::{GeminiClient, PostgresClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// The concrete engine wiring used in production
pub type Engine = ScoreEngine<PostgresClient, PostgresClient, GeminiClient>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Engine,
    pub postgres: Arc<PostgresClient>,
    pub max_limit: u16,
}

/// Configure all score-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/scores/job", web::post().to(score_job))
        .route("/scores/average", web::get().to(score_average));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single candidate/job pair
///
/// POST /api/v1/scores/job
///
/// Request body:
/// ```json
/// {
///   "userId": 42,
///   "job": { "title": "...", "description": "...", ... }
/// }
/// ```
async fn score_job(
    state: web::Data<AppState>,
    req: web::Json<ScoreJobRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Scoring user {} against job '{}'",
        req.user_id,
        req.job.title
    );

    match state.engine.score_single(req.user_id, &req.job).await {
        Ok(score) => HttpResponse::Ok().json(ScoreJobResponse { match_score: score }),
        Err(ScoreError::ProfileNotFound(user_id)) => {
            tracing::info!("No profile for user {}", user_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("No profile exists for user {}", user_id),
                status_code: 404,
            })
        }
    }
}

/// Average match score over recent published jobs
///
/// GET /api/v1/scores/average?userId={userId}&limit={limit}
async fn score_average(
    state: web::Data<AppState>,
    query: web::Query<AverageScoreQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap the job count so one request cannot fan out unbounded API calls
    let limit = query
        .limit
        .map(|l| l.min(state.max_limit) as usize);

    tracing::info!(
        "Computing average score for user {} (limit: {:?})",
        query.user_id,
        limit
    );

    match state.engine.score_average(query.user_id, limit).await {
        Ok(score) => HttpResponse::Ok().json(AverageScoreResponse {
            average_score: score,
        }),
        Err(ScoreError::ProfileNotFound(user_id)) => {
            tracing::info!("No profile for user {}", user_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("No profile exists for user {}", user_id),
                status_code: 404,
            })
        }
    }
}
