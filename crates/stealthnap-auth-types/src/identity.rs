//! Authenticated principal attached to a request.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;
use serde_json::json;

use stealthnap_domain::user::UserRole;

/// Decoded bearer-token claims.
///
/// The API's auth middleware validates the token and stores an `Identity`
/// in request extensions. Handlers take it as an extractor; extraction
/// fails with 401 when no middleware ran for the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
}

/// The principal's role is not the one a route requires.
#[derive(Debug, thiserror::Error)]
#[error("role {required} required, principal has {actual}")]
pub struct RoleMismatch {
    pub required: UserRole,
    pub actual: UserRole,
}

impl Identity {
    pub fn require_role(&self, required: UserRole) -> Result<(), RoleMismatch> {
        if self.role == required {
            Ok(())
        } else {
            Err(RoleMismatch {
                required,
                actual: self.role,
            })
        }
    }
}

/// No `Identity` was attached to the request, so the caller presented no
/// token. Renders as 401 with the API's `{error, kind}` body.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no token provided")]
pub struct MissingIdentity;

impl IntoResponse for MissingIdentity {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string(), "kind": "MISSING_TOKEN" });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = MissingIdentity;

    // Read synchronously and hand back a 'static future; `async fn` here
    // trips E0195 against axum-core's `impl Future + Send` signature.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().cloned();
        async move { identity.ok_or(MissingIdentity) }
    }
}
