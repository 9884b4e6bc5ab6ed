//! Bearer-token types shared by the API service and its test helpers.
//!
//! Provides JWT encoding/validation and the `Identity` extractor.

pub mod identity;
pub mod token;
