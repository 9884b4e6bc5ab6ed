use chrono::{DateTime, Duration, Utc};

use stealthnap_auth_types::identity::Identity;
use stealthnap_auth_types::token::{ACCESS_TOKEN_TTL_SECS, JwtClaims, encode_access_token};

use crate::domain::types::User;
use crate::error::ApiError;

/// Sign an access token for `user`, returning it with its expiry instant.
pub fn issue_access_token(
    user: &User,
    secret: &str,
) -> Result<(String, DateTime<Utc>), ApiError> {
    let expires_at = Utc::now() + Duration::seconds(ACCESS_TOKEN_TTL_SECS as i64);
    let identity = Identity {
        user_id: user.id,
        email: user.email.clone(),
        role: user.role,
    };
    let claims = JwtClaims::for_identity(&identity, expires_at.timestamp() as u64);
    let token =
        encode_access_token(&claims, secret).map_err(|e| ApiError::Internal(e.into()))?;
    Ok((token, expires_at))
}
