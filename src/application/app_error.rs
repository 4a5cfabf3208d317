use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A student with this email is already registered")]
    AlreadyRegistered,

    #[error("Not found")]
    NotFound,

    #[error("Email delivery failed: {0}")]
    Email(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::AlreadyRegistered => ErrorCode::AlreadyRegistered,
            AppError::NotFound => ErrorCode::NotFound,
            AppError::Email(_) => ErrorCode::EmailError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Message that is safe to show to the person filling in the form.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::AlreadyRegistered | AppError::NotFound => self.to_string(),
            AppError::Database(_) | AppError::Email(_) | AppError::Internal(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    DatabaseError,
    InvalidInput,
    AlreadyRegistered,
    NotFound,
    EmailError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::EmailError => "EMAIL_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
