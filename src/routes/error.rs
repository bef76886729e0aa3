use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorResponse;

/// Errors returned by the HTTP facade
///
/// Scoring itself never fails; everything here is rejected input or a
/// worker that could not run.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Mentor pool of {count} exceeds the limit of {max}")]
    TooManyMentors { count: usize, max: usize },

    #[error("Scoring worker failed: {0}")]
    Worker(#[from] BlockingError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::Validation(_) => "validation_failed",
            ApiError::TooManyMentors { .. } => "too_many_mentors",
            ApiError::Worker(_) => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::Validation(_) | ApiError::TooManyMentors { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: actix_web::error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    #[test]
    fn test_too_many_mentors_response() {
        let err = ApiError::TooManyMentors { count: 2000, max: 1000 };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.error_response().into_body().try_into_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "too_many_mentors");
        assert_eq!(json["status_code"], 400);
        assert_eq!(json["message"], "Mentor pool of 2000 exceeds the limit of 1000");
    }
}
