use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use stealthnap_api_schema::{comments, gear, locations, threads, users};
use stealthnap_domain::user::UserRole;

use crate::domain::repository::{
    GearRepository, LocationRepository, ThreadRepository, UserRepository,
};
use crate::domain::types::{
    Comment, Gear, Location, NewComment, NewGear, NewLocation, NewThread, NewUser, Thread, User,
    UserSummary,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let model = users::ActiveModel {
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::EmailTaken,
            _ => internal(e, "create user"),
        })?;
        user_from_model(model)
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiError> {
    let role = model
        .role
        .parse::<UserRole>()
        .with_context(|| format!("user {} has unreadable role", model.id))?;
    Ok(User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role,
        created_at: model.created_at,
    })
}

fn summary_from_model(model: users::Model) -> UserSummary {
    UserSummary {
        id: model.id,
        email: model.email,
    }
}

fn internal(e: DbErr, context: &'static str) -> ApiError {
    ApiError::Internal(anyhow::Error::new(e).context(context))
}

// ── Gear repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGearRepository {
    pub db: DatabaseConnection,
}

impl GearRepository for DbGearRepository {
    async fn list(&self) -> Result<Vec<Gear>, ApiError> {
        let models = gear::Entity::find()
            .order_by_asc(gear::Column::Id)
            .all(&self.db)
            .await
            .context("list gear")?;
        Ok(models.into_iter().map(gear_from_model).collect())
    }

    async fn create(&self, new: &NewGear) -> Result<Gear, ApiError> {
        let model = gear::ActiveModel {
            name: Set(new.name.clone()),
            category: Set(new.category.clone()),
            description: Set(new.description.clone()),
            owner_id: Set(Some(new.owner_id)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create gear")?;
        Ok(gear_from_model(model))
    }
}

fn gear_from_model(model: gear::Model) -> Gear {
    Gear {
        id: model.id,
        name: model.name,
        category: model.category,
        description: model.description,
        owner_id: model.owner_id,
        created_at: model.created_at,
    }
}

// ── Location repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLocationRepository {
    pub db: DatabaseConnection,
}

impl LocationRepository for DbLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, ApiError> {
        let rows = locations::Entity::find()
            .find_also_related(users::Entity)
            .order_by_asc(locations::Column::Id)
            .all(&self.db)
            .await
            .context("list locations")?;
        Ok(rows
            .into_iter()
            .map(|(model, owner)| location_from_model(model, owner.map(summary_from_model)))
            .collect())
    }

    async fn create(&self, new: &NewLocation) -> Result<Location, ApiError> {
        let model = locations::ActiveModel {
            name: Set(new.name.clone()),
            zip_code: Set(new.zip_code.clone()),
            address: Set(new.address.clone()),
            notes: Set(new.notes.clone()),
            latitude: Set(new.latitude),
            longitude: Set(new.longitude),
            country: Set(new.country.clone()),
            owner_id: Set(new.owner_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create location")?;
        Ok(location_from_model(model, None))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = locations::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete location")?;
        Ok(result.rows_affected > 0)
    }
}

fn location_from_model(model: locations::Model, user: Option<UserSummary>) -> Location {
    Location {
        id: model.id,
        name: model.name,
        zip_code: model.zip_code,
        address: model.address,
        notes: model.notes,
        latitude: model.latitude,
        longitude: model.longitude,
        country: model.country,
        owner_id: model.owner_id,
        created_at: model.created_at,
        user,
    }
}

// ── Thread repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbThreadRepository {
    pub db: DatabaseConnection,
}

impl ThreadRepository for DbThreadRepository {
    async fn list_threads(&self) -> Result<Vec<Thread>, ApiError> {
        let rows = threads::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(threads::Column::Id)
            .all(&self.db)
            .await
            .context("list threads")?;
        Ok(rows
            .into_iter()
            .map(|(model, owner)| thread_from_model(model, owner.map(summary_from_model)))
            .collect())
    }

    async fn list_comments(&self, thread_ids: &[i32]) -> Result<Vec<Comment>, ApiError> {
        if thread_ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = comments::Entity::find()
            .filter(comments::Column::ThreadId.is_in(thread_ids.iter().copied()))
            .find_also_related(users::Entity)
            .order_by_asc(comments::Column::CreatedAt)
            .order_by_asc(comments::Column::Id)
            .all(&self.db)
            .await
            .context("list comments")?;
        Ok(rows
            .into_iter()
            .map(|(model, owner)| comment_from_model(model, owner.map(summary_from_model)))
            .collect())
    }

    async fn create_thread(&self, new: &NewThread) -> Result<Thread, ApiError> {
        let model = threads::ActiveModel {
            title: Set(new.title.clone()),
            content: Set(new.content.clone()),
            owner_id: Set(new.owner_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create thread")?;
        Ok(thread_from_model(model, None))
    }

    async fn thread_exists(&self, id: i32) -> Result<bool, ApiError> {
        let model = threads::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find thread by id")?;
        Ok(model.is_some())
    }

    async fn create_comment(&self, new: &NewComment) -> Result<Comment, ApiError> {
        let model = comments::ActiveModel {
            content: Set(new.content.clone()),
            thread_id: Set(new.thread_id),
            owner_id: Set(new.owner_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create comment")?;
        Ok(comment_from_model(model, None))
    }
}

fn thread_from_model(model: threads::Model, user: Option<UserSummary>) -> Thread {
    Thread {
        id: model.id,
        title: model.title,
        content: model.content,
        owner_id: model.owner_id,
        created_at: model.created_at,
        user,
    }
}

fn comment_from_model(model: comments::Model, user: Option<UserSummary>) -> Comment {
    Comment {
        id: model.id,
        content: model.content,
        thread_id: model.thread_id,
        owner_id: model.owner_id,
        created_at: model.created_at,
        user,
    }
}
