use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use axum_extra::typed_header::TypedHeaderRejection;

use stealthnap_auth_types::token::validate_access_token;

use crate::error::ApiError;
use crate::state::AppState;

/// Verify `Authorization: Bearer <jwt>` and attach the decoded
/// [`Identity`](stealthnap_auth_types::identity::Identity) to the request.
pub async fn require_auth(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        if rejection.is_missing() {
            ApiError::MissingToken
        } else {
            ApiError::InvalidToken
        }
    })?;

    let identity = validate_access_token(bearer.token(), &state.jwt_secret).map_err(|e| {
        tracing::debug!(reason = %e, "rejected bearer token");
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
