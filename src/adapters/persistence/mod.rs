use sqlx::PgPool;

use crate::app_error::AppError;

pub mod student;

const MAX_JSON_LOG_LEN: usize = 200;

/// Parse a JSON column into `T`, logging a warning and falling back to the
/// default when the stored value has the wrong shape. SQL NULL is treated as
/// the default without a warning.
pub fn parse_json_with_fallback<T: serde::de::DeserializeOwned + Default>(
    json: &serde_json::Value,
    field_name: &str,
    entity_type: &str,
    entity_id: &str,
) -> T {
    if json.is_null() {
        return T::default();
    }

    serde_json::from_value(json.clone()).unwrap_or_else(|err| {
        // Truncate raw JSON to prevent log bloat from large arrays
        let raw_str = json.to_string();
        let truncated = if raw_str.len() > MAX_JSON_LOG_LEN {
            let cut = raw_str
                .char_indices()
                .map(|(i, _)| i)
                .take_while(|i| *i <= MAX_JSON_LOG_LEN)
                .last()
                .unwrap_or(0);
            format!("{}...", &raw_str[..cut])
        } else {
            raw_str
        };

        tracing::warn!(
            field = field_name,
            entity_type = entity_type,
            entity_id = entity_id,
            raw_json = %truncated,
            error = %err,
            "Failed to parse JSON field, using default value"
        );
        T::default()
    })
}

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            // Only students carry unique indexes (email, qr_code).
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::AlreadyRegistered
            }
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
