use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbGearRepository, DbLocationRepository, DbThreadRepository, DbUserRepository,
};
use crate::infra::geocoding::HttpGeocoder;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub geocoder: HttpGeocoder,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn gear_repo(&self) -> DbGearRepository {
        DbGearRepository {
            db: self.db.clone(),
        }
    }

    pub fn location_repo(&self) -> DbLocationRepository {
        DbLocationRepository {
            db: self.db.clone(),
        }
    }

    pub fn thread_repo(&self) -> DbThreadRepository {
        DbThreadRepository {
            db: self.db.clone(),
        }
    }
}
