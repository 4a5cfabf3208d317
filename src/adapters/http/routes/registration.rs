use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};

use crate::{
    adapters::http::app_state::AppState,
    application::{use_cases::registration::RegistrationResult, validators::RegistrationPayload},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// POST /api/register
/// Registers a student and answers `{success, userId?, error?}`. Failures are
/// carried in the body with a matching status instead of the generic error shape.
async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<RegistrationPayload>, JsonRejection>,
) -> (StatusCode, Json<RegistrationResult>) {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Malformed registration body");
            return (
                StatusCode::BAD_REQUEST,
                Json(RegistrationResult::failed("Invalid request body")),
            );
        }
    };

    match app_state.registration_use_cases.register(payload).await {
        Ok(registration) => (
            StatusCode::CREATED,
            Json(RegistrationResult::ok(registration.student().id)),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Registration failed");
            (
                err.status_code(),
                Json(RegistrationResult::failed(err.public_message())),
            )
        }
    }
}
