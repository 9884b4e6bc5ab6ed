pub mod auth;
pub mod gear;
pub mod location;
pub mod thread;

use serde::Serialize;

use stealthnap_auth_types::identity::Identity;

use crate::domain::types::UserSummary;

/// `{id, email}` embedded in locations, threads and comments.
#[derive(Serialize)]
pub struct UserSummaryResponse {
    pub id: i32,
    pub email: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

pub(crate) fn owner_of(identity: &Identity) -> UserSummary {
    UserSummary {
        id: identity.user_id,
        email: identity.email.clone(),
    }
}
