pub mod api;
pub mod config;
pub mod ebird;
pub mod errors;

#[cfg(test)]
mod testutils;

use crate::ebird::EbirdClient;
use crate::errors::ProxyError;
use tokio::net::TcpListener;

pub async fn run(config: config::Config) -> Result<(), ProxyError> {
    let client = EbirdClient::new(config.ebird);
    let app = api::router(client);

    let addr = format!("{}:{}", config.listener.host, config.listener.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening for fetch-birds requests");

    axum::serve(listener, app).await?;
    Ok(())
}
