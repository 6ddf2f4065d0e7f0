//! Request handlers and route table.

use actix_web::rt::time::timeout;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use log::{debug, error, info};

use crate::api::{HealthResponse, TokenizeRequest, TokenizeResponse};
use crate::error::ServiceError;
use crate::state::AppState;

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(BODY_LIMIT))
        .route("/tokenize", web::post().to(tokenize))
        // Alias kept for manual testing tools
        .route("/analyze", web::post().to(tokenize))
        .route("/health", web::get().to(health));
}

/// Empty bodies and non-JSON content types read as a request with no text.
fn parse_request(req: &HttpRequest, body: &[u8]) -> Result<TokenizeRequest, ServiceError> {
    if body.is_empty() || !is_json(req) {
        debug!("tokenize: no JSON body, treating text as empty");
        return Ok(TokenizeRequest::default());
    }
    serde_json::from_slice(body).map_err(ServiceError::MalformedRequest)
}

fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.subtype().as_str() == "json" || mime.suffix().map(|s| s.as_str()) == Some("json")
        }
        _ => false,
    }
}

async fn tokenize(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ServiceError> {
    let text = parse_request(&req, &body)?.text;
    let chars = text.chars().count();

    // The analyzer call blocks; run it off the async workers.
    let tokenizer = state.tokenizer.clone();
    let job = web::block(move || tokenizer.tokenize(&text));

    let joined = match state.analyzer_timeout {
        Some(limit) => timeout(limit, job).await.map_err(|_| {
            error!("tokenize: analyzer exceeded {:?} (input length={})", limit, chars);
            ServiceError::Timeout(limit)
        })?,
        None => job.await,
    };

    let tokens = joined
        .map_err(|e| ServiceError::Worker(e.to_string()))?
        .map_err(|e| {
            error!("tokenize: {}", e);
            ServiceError::from(e)
        })?;

    info!("tokenize: input length={} -> {} tokens", chars, tokens.len());
    Ok(HttpResponse::Ok().json(TokenizeResponse { tokens }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { ok: true })
}
