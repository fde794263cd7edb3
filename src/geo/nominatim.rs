//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API for geocoding.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::config::GeocoderConfig;
use crate::constants::api::{NOMINATIM_URL, USER_AGENT};
use crate::geo::{Geocoder, ResolutionOutcome, ResolvedLocation};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// Nominatim geocoding client
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    accept_language: String,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

impl NominatimClient {
    /// Create a client against the public Nominatim instance
    pub fn new() -> Self {
        Self::with_base_url(NOMINATIM_URL, "en-US,en;q=0.9", Duration::from_secs(10))
    }

    /// Create a client against a specific instance
    pub fn with_base_url(
        base_url: impl Into<String>,
        accept_language: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            accept_language: accept_language.into(),
        }
    }

    /// Create a client from the geocoder config section
    pub fn from_config(config: &GeocoderConfig) -> Self {
        Self::with_base_url(
            &config.base_url,
            &config.accept_language,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Parse Nominatim's string-encoded lat/lon pair to f64
    fn parse_coords(lat: &str, lon: &str) -> Result<(f64, f64), String> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| format!("Invalid latitude: {}", lat))?;
        let lon: f64 = lon
            .parse()
            .map_err(|_| format!("Invalid longitude: {}", lon))?;
        Ok((lat, lon))
    }

    async fn lookup(&self, query: &str) -> ResolutionOutcome {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = match self
            .client
            .get(&url)
            .header("accept-language", &self.accept_language)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return ResolutionOutcome::TransportFailure(format!("request failed: {}", e)),
        };

        if !response.status().is_success() {
            return ResolutionOutcome::TransportFailure(format!(
                "Nominatim returned status: {}",
                response.status()
            ));
        }

        let results: Vec<NominatimResult> = match response.json().await {
            Ok(results) => results,
            Err(e) => {
                return ResolutionOutcome::TransportFailure(format!(
                    "failed to parse response: {}",
                    e
                ))
            }
        };

        let Some(result) = results.into_iter().next() else {
            return ResolutionOutcome::NotFound;
        };

        match Self::parse_coords(&result.lat, &result.lon) {
            Ok((latitude, longitude)) => ResolutionOutcome::Resolved(ResolvedLocation {
                latitude,
                longitude,
                display_name: result.display_name,
            }),
            Err(reason) => ResolutionOutcome::TransportFailure(reason),
        }
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder for NominatimClient {
    async fn resolve(&self, query: &str) -> ResolutionOutcome {
        // Empty queries are rejected locally; no request is issued
        let query = query.trim();
        if query.is_empty() {
            return ResolutionOutcome::NotFound;
        }

        let outcome = self.lookup(query).await;
        if let ResolutionOutcome::TransportFailure(reason) = &outcome {
            warn!(query, reason = %reason, "geocoding transport failure");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords() {
        let (lat, lon) = NominatimClient::parse_coords("40.7128", "-74.0060").unwrap();
        assert!((lat - 40.7128).abs() < 0.0001);
        assert!((lon - (-74.0060)).abs() < 0.0001);
    }

    #[test]
    fn test_parse_coords_invalid() {
        assert!(NominatimClient::parse_coords("invalid", "0").is_err());
        assert!(NominatimClient::parse_coords("0", "invalid").is_err());
    }

    #[tokio::test]
    async fn test_empty_query_rejected_locally() {
        // Points at an unroutable host; an HTTP attempt would fail loudly,
        // so NotFound here proves no request was made
        let client = NominatimClient::with_base_url(
            "http://127.0.0.1:1",
            "en",
            Duration::from_millis(100),
        );
        assert_eq!(client.resolve("").await, ResolutionOutcome::NotFound);
        assert_eq!(client.resolve("   ").await, ResolutionOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_failure() {
        let client = NominatimClient::with_base_url(
            "http://127.0.0.1:1",
            "en",
            Duration::from_millis(100),
        );
        assert!(matches!(
            client.resolve("New York").await,
            ResolutionOutcome::TransportFailure(_)
        ));
    }
}
