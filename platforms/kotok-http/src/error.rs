use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use kotok_analyzer::AnalysisError;

use crate::api::ErrorBody;

/// Per-request failures. A failed request never yields a partial token list.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("analyzer timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("analyzer worker failed: {0}")]
    Worker(String),

    #[error("malformed request body: {0}")]
    MalformedRequest(serde_json::Error),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Analysis(_) | ServiceError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
