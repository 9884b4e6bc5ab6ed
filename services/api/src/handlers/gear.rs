use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stealthnap_auth_types::identity::Identity;

use crate::domain::types::Gear;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::usecase::gear::{CreateGearInput, CreateGearUseCase, ListGearUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GearResponse {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    #[serde(serialize_with = "stealthnap_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Gear> for GearResponse {
    fn from(gear: Gear) -> Self {
        Self {
            id: gear.id,
            name: gear.name,
            category: gear.category,
            description: gear.description,
            owner_id: gear.owner_id,
            created_at: gear.created_at,
        }
    }
}

// ── GET /api/gear ────────────────────────────────────────────────────────────

pub async fn list_gear(
    State(state): State<AppState>,
) -> Result<Json<Vec<GearResponse>>, ApiError> {
    let usecase = ListGearUseCase {
        repo: state.gear_repo(),
    };
    let gear = usecase.execute().await?;
    Ok(Json(gear.into_iter().map(Into::into).collect()))
}

// ── POST /api/gear ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateGearRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn create_gear(
    identity: Identity,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateGearRequest>,
) -> Result<(StatusCode, Json<GearResponse>), ApiError> {
    let usecase = CreateGearUseCase {
        repo: state.gear_repo(),
    };
    let gear = usecase
        .execute(
            identity.user_id,
            CreateGearInput {
                name: body.name,
                category: body.category,
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(gear.into())))
}
