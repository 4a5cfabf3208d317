//! HTML routes: registration form and dashboard.

use axum::{
    Form, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::{
        app_state::AppState,
        views::{self, Notification},
    },
    app_error::AppError,
    application::validators::{FieldErrors, RegistrationPayload, validate_registration},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/register") }))
        .route("/register", get(show_form).post(submit_form))
        .route("/student-dashboard", get(dashboard))
}

async fn show_form() -> Html<String> {
    Html(views::register_page(
        &RegistrationPayload::default(),
        &FieldErrors::default(),
        None,
    ))
}

/// POST /register
/// Field errors re-render the form (422) without calling the use case. Use
/// case failures re-render it with a notification. Success redirects to the
/// dashboard.
async fn submit_form(
    State(app_state): State<AppState>,
    Form(payload): Form<RegistrationPayload>,
) -> Response {
    if let Err(errors) = validate_registration(payload.clone()) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::register_page(&payload, &errors, None)),
        )
            .into_response();
    }

    match app_state.registration_use_cases.register(payload.clone()).await {
        Ok(registration) => Redirect::to(&format!(
            "/student-dashboard?userId={}",
            registration.student().id
        ))
        .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Registration failed");
            let notification = Notification::registration_failed(err.public_message());
            Html(views::register_page(
                &payload,
                &FieldErrors::default(),
                Some(&notification),
            ))
            .into_response()
        }
    }
}

#[derive(Deserialize)]
struct DashboardQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

async fn dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let Some(id) = query
        .user_id
        .as_deref()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
    else {
        return not_found("No registration found for this link.");
    };

    match app_state.registration_use_cases.get_student(id).await {
        Ok(student) => {
            let check_in_url = app_state
                .registration_use_cases
                .check_in_url(&student.qr_code);
            Html(views::dashboard_page(&student, &check_in_url)).into_response()
        }
        Err(AppError::NotFound) => not_found("No registration found for this link."),
        Err(err) => {
            tracing::error!(error = ?err, "Failed to load dashboard");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::not_found_page(&err.public_message())),
            )
                .into_response()
        }
    }
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page(message))).into_response()
}
