use chrono::{DateTime, Utc};

use stealthnap_domain::user::{UserRole, normalize_email};

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ApiError;
use crate::infra::password::{hash_password, verify_password};
use crate::usecase::present;
use crate::usecase::token::issue_access_token;

pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    fn require(self) -> Result<(String, String), ApiError> {
        match (present(self.email), present(self.password)) {
            (Some(email), Some(password)) => Ok((normalize_email(&email), password)),
            _ => Err(ApiError::MissingFields("email and password")),
        }
    }
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SignupUseCase<R> {
    pub async fn execute(&self, input: Credentials) -> Result<User, ApiError> {
        let (email, password) = input.require()?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }

        let password_hash = hash_password(&password)?;
        let user = self
            .repo
            .create(&NewUser {
                email,
                password_hash,
                role: UserRole::User,
            })
            .await?;

        tracing::info!(user_id = user.id, "user signed up");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: Credentials) -> Result<LoginOutput, ApiError> {
        let (email, password) = input.require()?;

        // Unknown email and wrong password are indistinguishable to the caller.
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        if !verify_password(&password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }

        let (token, expires_at) = issue_access_token(&user, &self.jwt_secret)?;
        tracing::debug!(user_id = user.id, "issued access token");
        Ok(LoginOutput {
            token,
            expires_at,
            user,
        })
    }
}
