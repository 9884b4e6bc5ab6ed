use stealthnap_auth_types::identity::Identity;
use stealthnap_domain::geo::Coordinates;
use stealthnap_domain::user::UserRole;

use crate::domain::repository::{GeocodingPort, LocationRepository};
use crate::domain::types::{Location, NewLocation, UserSummary};
use crate::error::ApiError;
use crate::usecase::present;

// ── ListLocations ────────────────────────────────────────────────────────────

pub struct ListLocationsUseCase<R: LocationRepository> {
    pub repo: R,
}

impl<R: LocationRepository> ListLocationsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Location>, ApiError> {
        self.repo.list().await
    }
}

// ── CreateLocation ───────────────────────────────────────────────────────────

pub struct CreateLocationInput {
    pub name: Option<String>,
    pub zip_code: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
}

pub struct CreateLocationUseCase<R: LocationRepository, G: GeocodingPort> {
    pub repo: R,
    pub geocoder: G,
}

impl<R: LocationRepository, G: GeocodingPort> CreateLocationUseCase<R, G> {
    pub async fn execute(
        &self,
        owner: UserSummary,
        input: CreateLocationInput,
    ) -> Result<Location, ApiError> {
        let (Some(name), Some(zip_code)) = (present(input.name), present(input.zip_code)) else {
            return Err(ApiError::MissingFields("name and zipCode"));
        };
        let address = present(input.address);
        let mut country = present(input.country);

        let coordinates = match Coordinates::from_parts(input.latitude, input.longitude) {
            Some(given) => Some(given),
            None => match self.geocoder.lookup(&zip_code, address.as_deref()).await {
                Ok(Some(place)) => {
                    if country.is_none() {
                        country = place.country;
                    }
                    Some(place.coordinates)
                }
                Ok(None) => {
                    tracing::info!(%zip_code, "no geocoding match, storing without coordinates");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = ?e, %zip_code, "geocoding failed, storing without coordinates");
                    None
                }
            },
        };

        let mut location = self
            .repo
            .create(&NewLocation {
                name,
                zip_code,
                address,
                notes: present(input.notes),
                latitude: coordinates.map(|c| c.latitude),
                longitude: coordinates.map(|c| c.longitude),
                country,
                owner_id: owner.id,
            })
            .await?;
        location.user = Some(owner);
        Ok(location)
    }
}

// ── DeleteLocation ───────────────────────────────────────────────────────────

pub struct DeleteLocationUseCase<R: LocationRepository> {
    pub repo: R,
}

impl<R: LocationRepository> DeleteLocationUseCase<R> {
    pub async fn execute(&self, identity: &Identity, id: i32) -> Result<(), ApiError> {
        identity
            .require_role(UserRole::Admin)
            .map_err(|_| ApiError::Forbidden)?;
        if !self.repo.delete(id).await? {
            return Err(ApiError::LocationNotFound);
        }
        tracing::info!(location_id = id, admin_id = identity.user_id, "location deleted");
        Ok(())
    }
}
