#![allow(async_fn_in_trait)]

use stealthnap_domain::geo::GeocodedPlace;

use crate::domain::types::{
    Comment, Gear, Location, NewComment, NewGear, NewLocation, NewThread, NewUser, Thread, User,
};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    /// Look up by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert a user. Fails with [`ApiError::EmailTaken`] when the email is
    /// already stored.
    async fn create(&self, user: &NewUser) -> Result<User, ApiError>;
}

pub trait GearRepository: Send + Sync {
    /// All gear, id ascending.
    async fn list(&self) -> Result<Vec<Gear>, ApiError>;
    async fn create(&self, gear: &NewGear) -> Result<Gear, ApiError>;
}

pub trait LocationRepository: Send + Sync {
    /// All locations with their owner, id ascending.
    async fn list(&self) -> Result<Vec<Location>, ApiError>;
    async fn create(&self, location: &NewLocation) -> Result<Location, ApiError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for forum threads and their comments.
pub trait ThreadRepository: Send + Sync {
    /// All threads with their author, id descending.
    async fn list_threads(&self) -> Result<Vec<Thread>, ApiError>;

    /// Comments belonging to any of `thread_ids`, with their author,
    /// ordered by creation time then id.
    async fn list_comments(&self, thread_ids: &[i32]) -> Result<Vec<Comment>, ApiError>;

    async fn create_thread(&self, thread: &NewThread) -> Result<Thread, ApiError>;
    async fn thread_exists(&self, id: i32) -> Result<bool, ApiError>;
    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError>;
}

/// Outbound port to a geocoding provider.
pub trait GeocodingPort: Send + Sync {
    /// Resolve a zip code (and optional street address) to a position.
    /// `Ok(None)` means the provider had no match.
    async fn lookup(
        &self,
        zip_code: &str,
        address: Option<&str>,
    ) -> Result<Option<GeocodedPlace>, ApiError>;
}
