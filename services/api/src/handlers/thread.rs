use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stealthnap_auth_types::identity::Identity;

use crate::domain::types::{Comment, Thread, ThreadWithComments};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::{UserSummaryResponse, owner_of};
use crate::state::AppState;
use crate::usecase::thread::{
    CreateCommentUseCase, CreateThreadInput, CreateThreadUseCase, ListThreadsUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i32,
    pub content: String,
    pub thread_id: i32,
    pub owner_id: i32,
    #[serde(serialize_with = "stealthnap_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub user: Option<UserSummaryResponse>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            thread_id: comment.thread_id,
            owner_id: comment.owner_id,
            created_at: comment.created_at,
            user: comment.user.map(Into::into),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub owner_id: i32,
    #[serde(serialize_with = "stealthnap_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub user: Option<UserSummaryResponse>,
    pub comments: Vec<CommentResponse>,
}

impl ThreadResponse {
    fn new(thread: Thread, comments: Vec<Comment>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            content: thread.content,
            owner_id: thread.owner_id,
            created_at: thread.created_at,
            user: thread.user.map(Into::into),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ThreadWithComments> for ThreadResponse {
    fn from(item: ThreadWithComments) -> Self {
        Self::new(item.thread, item.comments)
    }
}

// ── GET /api/threads ─────────────────────────────────────────────────────────

pub async fn list_threads(
    State(state): State<AppState>,
) -> Result<Json<Vec<ThreadResponse>>, ApiError> {
    let usecase = ListThreadsUseCase {
        repo: state.thread_repo(),
    };
    let threads = usecase.execute().await?;
    Ok(Json(threads.into_iter().map(Into::into).collect()))
}

// ── POST /api/threads ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateThreadRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

pub async fn create_thread(
    identity: Identity,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateThreadRequest>,
) -> Result<(StatusCode, Json<ThreadResponse>), ApiError> {
    let usecase = CreateThreadUseCase {
        repo: state.thread_repo(),
    };
    let thread = usecase
        .execute(
            owner_of(&identity),
            CreateThreadInput {
                title: body.title,
                content: body.content,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ThreadResponse::new(thread, vec![]))))
}

// ── POST /api/threads/{id}/comments ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: Option<String>,
}

pub async fn create_comment(
    identity: Identity,
    State(state): State<AppState>,
    ApiPath(thread_id): ApiPath<i32>,
    ApiJson(body): ApiJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let usecase = CreateCommentUseCase {
        repo: state.thread_repo(),
    };
    let comment = usecase
        .execute(owner_of(&identity), thread_id, body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}
