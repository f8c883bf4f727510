use crate::config::EbirdConfig;
use crate::errors::FetchError;
use serde_json::Value;
use url::Url;

/// Header carrying the eBird API token on upstream requests
pub const API_TOKEN_HEADER: &str = "X-eBirdApiToken";

/// Geographic observation query with defaults already applied
///
/// Values are kept as strings and interpolated into the upstream URL
/// verbatim; range and format checking is left to eBird.
#[derive(Clone, Debug, PartialEq)]
pub struct ObsQuery {
    pub lat: String,
    pub lng: String,
    pub dist: String,
    pub back: String,
}

/// Client for the eBird v2 REST API
///
/// Holds the credential injected at construction time; a missing or empty
/// key fails each fetch before any network traffic.
#[derive(Clone)]
pub struct EbirdClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl EbirdClient {
    pub fn new(config: EbirdConfig) -> Self {
        EbirdClient {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    /// Fetches recent observations near a point, returning the payload as
    /// opaque JSON.
    pub async fn recent_observations(&self, query: &ObsQuery) -> Result<Value, FetchError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(FetchError::MissingApiKey)?;

        let url = format!(
            "{}/data/obs/geo/recent?lat={}&lng={}&dist={}&back={}&sort=date",
            self.base_url.as_str().trim_end_matches('/'),
            query.lat,
            query.lng,
            query.dist,
            query.back,
        );

        let response = self
            .http
            .get(&url)
            .header(API_TOKEN_HEADER, api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus { status });
        }

        Ok(response.json::<Value>().await?)
    }
}
