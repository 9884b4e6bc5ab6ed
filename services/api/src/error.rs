use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} required")]
    MissingFields(&'static str),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no token provided")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("forbidden")]
    Forbidden,
    #[error("location not found")]
    LocationNotFound,
    #[error("thread not found")]
    ThreadNotFound,
    #[error("email already in use")]
    EmailTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::InvalidPath(_) => "INVALID_PATH",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::LocationNotFound => "LOCATION_NOT_FOUND",
            Self::ThreadNotFound => "THREAD_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) | Self::MalformedBody(_) | Self::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::MissingToken | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::LocationNotFound | Self::ThreadNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
