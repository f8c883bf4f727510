use crate::api;
use crate::config::EbirdConfig;
use crate::ebird::{API_TOKEN_HEADER, EbirdClient};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use url::Url;

/// One request observed by the mock eBird server
#[derive(Debug)]
pub struct RecordedRequest {
    pub uri: String,
    pub api_token: Option<String>,
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Starts an in-process stand-in for the eBird API that records every
/// request and replies with a fixed status and body.
pub async fn start_mock_ebird(status: StatusCode, body: &'static str) -> (Url, Recorded) {
    let requests: Recorded = Arc::default();
    let recorded = requests.clone();

    let app = Router::new().fallback(move |request: Request<Body>| {
        let recorded = recorded.clone();
        async move {
            let api_token = request
                .headers()
                .get(API_TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(String::from);
            recorded.lock().unwrap().push(RecordedRequest {
                uri: request.uri().to_string(),
                api_token,
            });

            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    (base_url, requests)
}

/// Serves the proxy app on an ephemeral port, returning its base URL.
pub async fn start_proxy(ebird: EbirdConfig) -> String {
    let app = api::router(EbirdClient::new(ebird));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
