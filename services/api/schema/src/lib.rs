//! sea-orm entities for the StealthNap API database.

pub mod comments;
pub mod gear;
pub mod locations;
pub mod threads;
pub mod users;
