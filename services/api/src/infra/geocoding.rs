//! Geocoding over the Google Geocoding API wire format.
//!
//! `GET {base_url}?address=<address zip>&key=<key>` answers with
//! `{"status": "OK", "results": [{"geometry": {"location": {"lat", "lng"}},
//! "address_components": [...]}]}`. Only the first result is used.

use anyhow::Context as _;
use serde::Deserialize;
use url::Url;

use stealthnap_domain::geo::{Coordinates, GeocodedPlace};

use crate::domain::repository::GeocodingPort;
use crate::error::ApiError;

#[derive(Clone)]
pub struct HttpGeocoder {
    pub client: reqwest::Client,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl HttpGeocoder {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }
}

impl GeocodingPort for HttpGeocoder {
    async fn lookup(
        &self,
        zip_code: &str,
        address: Option<&str>,
    ) -> Result<Option<GeocodedPlace>, ApiError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("geocoding disabled: no api key configured");
            return Ok(None);
        };

        let query = match address {
            Some(address) => format!("{address} {zip_code}"),
            None => zip_code.to_owned(),
        };
        let url = Url::parse_with_params(
            &self.base_url,
            &[("address", query.as_str()), ("key", api_key)],
        )
        .context("build geocoding url")?;

        let response: GeocodeResponse = self
            .client
            .get(url)
            .send()
            .await
            .context("send geocoding request")?
            .error_for_status()
            .context("geocoding provider returned error status")?
            .json()
            .await
            .context("decode geocoding response")?;

        Ok(parse_response(response))
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// First result's position and country, or `None` for any status other
/// than `OK` (including `ZERO_RESULTS`).
pub fn parse_response(response: GeocodeResponse) -> Option<GeocodedPlace> {
    if response.status != "OK" {
        tracing::debug!(status = %response.status, "geocoding returned no match");
        return None;
    }
    let first = response.results.into_iter().next()?;
    let country = first
        .address_components
        .into_iter()
        .find(|c| c.types.iter().any(|t| t == "country"))
        .map(|c| c.long_name);
    Some(GeocodedPlace {
        coordinates: Coordinates {
            latitude: first.geometry.location.lat,
            longitude: first.geometry.location.lng,
        },
        country,
    })
}
