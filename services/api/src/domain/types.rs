use chrono::{DateTime, Utc};

use stealthnap_domain::user::UserRole;

/// A registered account, including its stored password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// The public face of a user embedded in locations, threads and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i32,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Gear {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGear {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

#[derive(Debug, Clone)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub zip_code: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

/// A location ready for insertion, after geocoding.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub zip_code: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub owner_id: i32,
}

#[derive(Debug, Clone)]
pub struct Thread {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

#[derive(Debug, Clone)]
pub struct NewThread {
    pub title: String,
    pub content: String,
    pub owner_id: i32,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub thread_id: i32,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub thread_id: i32,
    pub owner_id: i32,
}

/// A thread with its comments in display order.
#[derive(Debug, Clone)]
pub struct ThreadWithComments {
    pub thread: Thread,
    pub comments: Vec<Comment>,
}
