//! Domain types shared across StealthNap crates.
//!
//! Pure types only, no framework dependencies. Safe to import from any layer.

pub mod geo;
pub mod user;
