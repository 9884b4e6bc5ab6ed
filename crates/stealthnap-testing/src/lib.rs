//! Test utilities for StealthNap services.
//!
//! Provides `MockAuth` for minting bearer tokens and an in-memory migrated
//! database. Import from dev-dependencies only; never in production code.

pub mod auth;
pub mod db;
