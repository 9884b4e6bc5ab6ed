//! Service plumbing shared by StealthNap binaries.
//!
//! Nothing in here knows about users, gear, or locations.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
