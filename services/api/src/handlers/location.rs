use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stealthnap_auth_types::identity::Identity;

use crate::domain::types::Location;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::{UserSummaryResponse, owner_of};
use crate::state::AppState;
use crate::usecase::location::{
    CreateLocationInput, CreateLocationUseCase, DeleteLocationUseCase, ListLocationsUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
    pub zip_code: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub owner_id: i32,
    #[serde(serialize_with = "stealthnap_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub user: Option<UserSummaryResponse>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            zip_code: location.zip_code,
            address: location.address,
            notes: location.notes,
            latitude: location.latitude,
            longitude: location.longitude,
            country: location.country,
            owner_id: location.owner_id,
            created_at: location.created_at,
            user: location.user.map(Into::into),
        }
    }
}

// ── GET /api/locations ───────────────────────────────────────────────────────

pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationResponse>>, ApiError> {
    let usecase = ListLocationsUseCase {
        repo: state.location_repo(),
    };
    let locations = usecase.execute().await?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

// ── POST /api/locations ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub country: Option<String>,
}

pub async fn create_location(
    identity: Identity,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), ApiError> {
    let usecase = CreateLocationUseCase {
        repo: state.location_repo(),
        geocoder: state.geocoder.clone(),
    };
    let location = usecase
        .execute(
            owner_of(&identity),
            CreateLocationInput {
                name: body.name,
                zip_code: body.zip_code,
                address: body.address,
                notes: body.notes,
                latitude: body.latitude,
                longitude: body.longitude,
                country: body.country,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(location.into())))
}

// ── DELETE /api/locations/{id} ───────────────────────────────────────────────

pub async fn delete_location(
    identity: Identity,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteLocationUseCase {
        repo: state.location_repo(),
    };
    usecase.execute(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
