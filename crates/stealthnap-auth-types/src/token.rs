//! JWT access tokens.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use stealthnap_domain::user::UserRole;

use crate::identity::Identity;

/// Access-token lifetime in seconds (7 days).
pub const ACCESS_TOKEN_TTL_SECS: u64 = 604_800;

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user id, decimal string |
/// | `email` | custom | account email |
/// | `role` | custom | `"user"` or `"admin"` |
/// | `exp` | `exp` | seconds since UNIX epoch |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub exp: u64,
}

impl JwtClaims {
    pub fn for_identity(identity: &Identity, exp: u64) -> Self {
        Self {
            sub: identity.user_id.to_string(),
            email: identity.email.clone(),
            role: identity.role,
            exp,
        }
    }
}

/// Sign claims with HS256.
pub fn encode_access_token(
    claims: &JwtClaims,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decode and validate a JWT, returning raw claims.
///
/// HS256 only, `exp` and `sub` required, default 60s leeway on `exp`.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer token and return the identity it asserts.
pub fn validate_access_token(token: &str, secret: &str) -> Result<Identity, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims.sub.parse::<i32>().map_err(|_| AuthError::Malformed)?;
    Ok(Identity {
        user_id,
        email: claims.email,
        role: claims.role,
    })
}
