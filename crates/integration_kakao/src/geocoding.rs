//! Kakao Local geocoding client
//!
//! Converts free-form place/address strings to coordinates using the
//! Kakao Local search API. Lookups run in two strictly sequential tiers:
//! address search first, keyword search only when the address tier
//! returns no documents. The first candidate of whichever tier answers
//! wins; no further ranking is applied.

use std::time::Duration;

use domain::GeoPoint;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::KakaoConfig;
use crate::error::KakaoError;
use crate::models::{LocalDocument, LocalSearchResponse};

const ADDRESS_SEARCH_PATH: &str = "/v2/local/search/address.json";
const KEYWORD_SEARCH_PATH: &str = "/v2/local/search/keyword.json";

/// Kakao Local geocoding client
#[derive(Debug)]
pub struct KakaoLocalClient {
    client: Client,
    config: KakaoConfig,
}

impl KakaoLocalClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &KakaoConfig) -> Result<Self, KakaoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.geocode_timeout_secs))
            .user_agent("RoadRest/0.1")
            .build()
            .map_err(|e| KakaoError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Resolve a place or address to a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns `PlaceNotFound` when neither tier yields a candidate, and
    /// connection/parse variants when the provider misbehaves.
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<GeoPoint, KakaoError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(KakaoError::PlaceNotFound(
                "query must not be empty".to_string(),
            ));
        }

        if let Some(document) = self.search_tier(ADDRESS_SEARCH_PATH, query).await? {
            debug!(%query, "Address tier resolved query");
            return document_to_point(&document);
        }

        if let Some(document) = self.search_tier(KEYWORD_SEARCH_PATH, query).await? {
            debug!(%query, "Keyword tier resolved query");
            return document_to_point(&document);
        }

        Err(KakaoError::PlaceNotFound(query.to_string()))
    }

    /// Run one lookup tier and return its first candidate, if any
    async fn search_tier(
        &self,
        path: &str,
        query: &str,
    ) -> Result<Option<LocalDocument>, KakaoError> {
        let url = format!("{}{}", self.config.local_base_url, path);

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("KakaoAK {}", self.config.api_key.expose_secret()),
            )
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| KakaoError::from_reqwest(&e, self.config.geocode_timeout_secs))?;

        if !response.status().is_success() {
            return Err(KakaoError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: LocalSearchResponse = response
            .json()
            .await
            .map_err(|e| KakaoError::ParseError(e.to_string()))?;

        Ok(parsed.documents.into_iter().next())
    }
}

/// Parse a candidate's string-encoded coordinates
fn document_to_point(document: &LocalDocument) -> Result<GeoPoint, KakaoError> {
    let longitude: f64 = document
        .x
        .parse()
        .map_err(|_| KakaoError::ParseError(format!("Invalid longitude: {}", document.x)))?;
    let latitude: f64 = document
        .y
        .parse()
        .map_err(|_| KakaoError::ParseError(format!("Invalid latitude: {}", document.y)))?;

    GeoPoint::new(longitude, latitude).map_err(|e| KakaoError::ParseError(e.to_string()))
}
