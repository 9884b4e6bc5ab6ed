//! Maintenance operations run against the API database.

use anyhow::{Context as _, Result, bail};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter,
};

use stealthnap_api_schema::{gear, locations, users};
use stealthnap_domain::user::{UserRole, normalize_email};

/// Delete every gear row. Returns the number removed.
pub async fn clear_gear(db: &DatabaseConnection) -> Result<u64> {
    let result = gear::Entity::delete_many()
        .exec(db)
        .await
        .context("delete gear")?;
    tracing::info!(rows = result.rows_affected, "cleared gear");
    Ok(result.rows_affected)
}

/// Delete every location row. Returns the number removed.
pub async fn clear_locations(db: &DatabaseConnection) -> Result<u64> {
    let result = locations::Entity::delete_many()
        .exec(db)
        .await
        .context("delete locations")?;
    tracing::info!(rows = result.rows_affected, "cleared locations");
    Ok(result.rows_affected)
}

/// Grant the admin role to the account registered under `email`.
pub async fn promote(db: &DatabaseConnection, email: &str) -> Result<()> {
    let email = normalize_email(email);
    let Some(user) = users::Entity::find()
        .filter(users::Column::Email.eq(email.as_str()))
        .one(db)
        .await
        .context("find user by email")?
    else {
        bail!("no user registered with email {email}");
    };

    let user_id = user.id;
    let mut active = user.into_active_model();
    active.role = Set(UserRole::Admin.as_str().to_owned());
    active.update(db).await.context("update user role")?;
    tracing::info!(user_id, "promoted user to admin");
    Ok(())
}
