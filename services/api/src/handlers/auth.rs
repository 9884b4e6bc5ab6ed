use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stealthnap_domain::user::UserRole;

use crate::domain::types::User;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::usecase::auth::{Credentials, LoginUseCase, SignupUseCase};

#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<CredentialsRequest> for Credentials {
    fn from(body: CredentialsRequest) -> Self {
        Self {
            email: body.email,
            password: body.password,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    #[serde(serialize_with = "stealthnap_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

// ── POST /api/signup ─────────────────────────────────────────────────────────

pub async fn signup(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let usecase = SignupUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /api/login ──────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(serialize_with = "stealthnap_core::serde::to_rfc3339_ms")]
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase.execute(body.into()).await?;
    Ok(Json(LoginResponse {
        token: output.token,
        expires_at: output.expires_at,
        user: output.user.into(),
    }))
}
