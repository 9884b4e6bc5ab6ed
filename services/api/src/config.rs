use serde::Deserialize;

use stealthnap_core::config::Config;

pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// sea-orm connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Geocoding provider key. Unset disables geocoding.
    #[serde(default)]
    pub geocoding_api_key: Option<String>,
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// TCP port to listen on (default 4000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Config for ApiConfig {}

fn default_geocoding_url() -> String {
    DEFAULT_GEOCODING_URL.to_owned()
}

fn default_port() -> u16 {
    4000
}
