use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

/// Failures reading the matchup snapshot. Either one fails the whole request.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        Self::internal(err)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    Port(String),

    #[error("unknown timezone {0:?}")]
    Timezone(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
