//! Mock auth helpers for integration tests.
//!
//! Mints HS256 bearer tokens the API's auth middleware accepts, so tests can
//! act as any user or role without going through signup and login.

use http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use stealthnap_auth_types::identity::Identity;
use stealthnap_auth_types::token::{ACCESS_TOKEN_TTL_SECS, JwtClaims, encode_access_token};
use stealthnap_domain::user::UserRole;

/// Configurable identity signed into test tokens.
pub struct MockAuth {
    pub identity: Identity,
    pub secret: String,
}

impl MockAuth {
    pub fn new(user_id: i32, email: &str, role: UserRole, secret: &str) -> Self {
        Self {
            identity: Identity {
                user_id,
                email: email.to_owned(),
                role,
            },
            secret: secret.to_owned(),
        }
    }

    pub fn admin(user_id: i32, secret: &str) -> Self {
        Self::new(user_id, "admin@example.com", UserRole::Admin, secret)
    }

    /// A token valid for the usual seven days.
    pub fn token(&self) -> String {
        self.token_expiring_at(now_secs() + ACCESS_TOKEN_TTL_SECS)
    }

    /// A token with an explicit `exp`, e.g. in the past.
    pub fn token_expiring_at(&self, exp: u64) -> String {
        encode_access_token(&JwtClaims::for_identity(&self.identity, exp), &self.secret)
            .expect("encode test token")
    }

    /// `Authorization: Bearer <token>` as a header pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        bearer_header(&self.token())
    }
}

pub fn bearer_header(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value");
    (AUTHORIZATION, value)
}

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}
