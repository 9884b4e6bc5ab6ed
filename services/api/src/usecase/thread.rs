use std::collections::HashMap;

use crate::domain::repository::ThreadRepository;
use crate::domain::types::{
    Comment, NewComment, NewThread, Thread, ThreadWithComments, UserSummary,
};
use crate::error::ApiError;
use crate::usecase::present;

// ── ListThreads ──────────────────────────────────────────────────────────────

pub struct ListThreadsUseCase<R: ThreadRepository> {
    pub repo: R,
}

impl<R: ThreadRepository> ListThreadsUseCase<R> {
    /// Threads newest first, each carrying its comments oldest first.
    pub async fn execute(&self) -> Result<Vec<ThreadWithComments>, ApiError> {
        let threads = self.repo.list_threads().await?;
        let ids: Vec<i32> = threads.iter().map(|t| t.id).collect();

        let mut by_thread: HashMap<i32, Vec<Comment>> = HashMap::new();
        for comment in self.repo.list_comments(&ids).await? {
            by_thread.entry(comment.thread_id).or_default().push(comment);
        }

        Ok(threads
            .into_iter()
            .map(|thread| {
                let comments = by_thread.remove(&thread.id).unwrap_or_default();
                ThreadWithComments { thread, comments }
            })
            .collect())
    }
}

// ── CreateThread ─────────────────────────────────────────────────────────────

pub struct CreateThreadInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub struct CreateThreadUseCase<R: ThreadRepository> {
    pub repo: R,
}

impl<R: ThreadRepository> CreateThreadUseCase<R> {
    pub async fn execute(
        &self,
        owner: UserSummary,
        input: CreateThreadInput,
    ) -> Result<Thread, ApiError> {
        let (Some(title), Some(content)) = (present(input.title), present(input.content)) else {
            return Err(ApiError::MissingFields("title and content"));
        };
        let mut thread = self
            .repo
            .create_thread(&NewThread {
                title,
                content,
                owner_id: owner.id,
            })
            .await?;
        thread.user = Some(owner);
        Ok(thread)
    }
}

// ── CreateComment ────────────────────────────────────────────────────────────

pub struct CreateCommentUseCase<R: ThreadRepository> {
    pub repo: R,
}

impl<R: ThreadRepository> CreateCommentUseCase<R> {
    pub async fn execute(
        &self,
        owner: UserSummary,
        thread_id: i32,
        content: Option<String>,
    ) -> Result<Comment, ApiError> {
        let Some(content) = present(content) else {
            return Err(ApiError::MissingFields("content"));
        };
        if !self.repo.thread_exists(thread_id).await? {
            return Err(ApiError::ThreadNotFound);
        }
        let mut comment = self
            .repo
            .create_comment(&NewComment {
                content,
                thread_id,
                owner_id: owner.id,
            })
            .await?;
        comment.user = Some(owner);
        Ok(comment)
    }
}
