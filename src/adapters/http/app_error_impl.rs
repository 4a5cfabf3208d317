use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::AlreadyRegistered => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Email(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        let status = self.status_code();
        let message = match &self {
            AppError::InvalidInput(_) | AppError::AlreadyRegistered => Some(self.public_message()),
            _ => None,
        };
        error_resp(status, self.code().as_str(), message)
    }
}

fn error_resp(status: StatusCode, code: &str, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code, "message": msg }),
        None => serde_json::json!({ "code": code }),
    };
    (status, Json(body)).into_response()
}
