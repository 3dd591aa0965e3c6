//! API routes and handlers
//!
//! Two endpoints: `POST /` runs the masking/classification pipeline over a
//! submitted email body, `GET /health` reports liveness. Error responses
//! carry a single `detail` field; invalid input maps to 400, everything
//! else to 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use mailsift_domain::{EmailRequest, EmailResult, MailsiftError};
use serde::Serialize;
use tracing::{debug, error};

use crate::state::AppState;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(process_email))
        .route("/health", get(health))
        .with_state(state)
}

/// Pipeline error carried out of a handler.
pub struct ApiError(MailsiftError);

/// Error response body.
#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            MailsiftError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                error!(error = %other, "email processing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Error processing email: {}", other))
            }
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

/// `POST /` — mask PII in the submitted email and classify it.
async fn process_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailResult>, ApiError> {
    debug!(chars = request.email_body.chars().count(), "processing email");
    let result = state.pipeline.process(&request.email_body).map_err(ApiError)?;
    Ok(Json(result))
}

/// `GET /health` — liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
