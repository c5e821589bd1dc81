use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::ErrorMode;
use crate::services::generate_insight;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    pub project_summary: String,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub insight: String,
}

#[derive(Debug, Serialize)]
pub struct InsightError {
    pub error: String,
}

/// `POST /insights`: relay a project summary to the completion provider and
/// return the generated insight.
///
/// Malformed bodies never reach this handler; the `Json` extractor rejects
/// them first (422 for a missing or mistyped field, 400 for invalid JSON).
#[tracing::instrument(skip(state, request))]
pub async fn get_insights(
    State(state): State<AppState>,
    Json(request): Json<InsightRequest>,
) -> Response {
    match generate_insight(state.provider.as_ref(), &request.project_summary).await {
        Ok(insight) => {
            tracing::info!(insight_len = insight.len(), "Insight generated");
            (StatusCode::OK, Json(InsightResponse { insight })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Provider call failed");
            match state.error_mode {
                // Historical behavior: the failure still comes back as 200
                // with an `error` body; callers switch on which key is
                // present, never on the status code.
                ErrorMode::Compat => (
                    StatusCode::OK,
                    Json(InsightError {
                        error: e.to_string(),
                    }),
                )
                    .into_response(),
                ErrorMode::Strict => AppError::from(e).into_response(),
            }
        }
    }
}
