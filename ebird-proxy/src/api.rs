use crate::ebird::{EbirdClient, ObsQuery};
use crate::errors::FetchError;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Radius and lookback window eBird is queried with when the caller does
// not supply one
const DEFAULT_DIST: &str = "30";
const DEFAULT_BACK: &str = "30";

pub fn router(client: EbirdClient) -> Router {
    Router::new()
        .route("/api/fetch-birds", get(fetch_birds))
        .route("/api/health", get(health))
        .with_state(client)
}

/// Query parameters for the fetch-birds endpoint
///
/// Every field is optional at the extractor level so presence checks
/// produce this API's own 400 envelope rather than a framework error.
#[derive(Deserialize, Debug)]
struct Params {
    lat: Option<String>,
    lng: Option<String>,
    dist: Option<String>,
    back: Option<String>,
}

impl Params {
    /// Empty values count as absent: `lat`/`lng` are then rejected, while
    /// `dist`/`back` fall back to their defaults.
    fn into_query(self) -> Result<ObsQuery, FetchError> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        let lat = present(self.lat).ok_or(FetchError::MissingParams)?;
        let lng = present(self.lng).ok_or(FetchError::MissingParams)?;

        Ok(ObsQuery {
            lat,
            lng,
            dist: present(self.dist).unwrap_or_else(|| DEFAULT_DIST.into()),
            back: present(self.back).unwrap_or_else(|| DEFAULT_BACK.into()),
        })
    }
}

async fn fetch_birds(
    State(client): State<EbirdClient>,
    Query(params): Query<Params>,
) -> Result<Observations, FetchError> {
    let query = params.into_query()?;
    let payload = client.recent_observations(&query).await?;
    Ok(Observations(payload))
}

/// Upstream payload relayed on the success path
struct Observations(Value);

impl IntoResponse for Observations {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::OK, Json(self.0)).into_response();
        // The CORS header is only set on successful relays
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        response
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        match self {
            FetchError::MissingParams => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Missing required parameters: lat, lng",
                    message: None,
                }),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "Failed to fetch bird data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Failed to fetch bird data",
                        message: Some(other.to_string()),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}
