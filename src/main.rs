use pdfchat_relay::config::RelayConfig;
use pdfchat_relay::extract::PdfExtractor;
use pdfchat_relay::llm::GroqClient;
use pdfchat_relay::relay::Relay;
use pdfchat_relay::routes::configure_routes;
use pdfchat_relay::session::InMemorySessionStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pdfchat_relay=info,warp=info")),
        )
        .init();

    let config = RelayConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        e
    })?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let client = GroqClient::new(config.gateway.clone())?;
    tracing::info!(
        model = client.model(),
        endpoint = %config.gateway.endpoint,
        retries = config.gateway.retry.max_retries,
        "upstream configured"
    );

    let relay = Arc::new(Relay::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(client),
        Arc::new(PdfExtractor),
        config.upload_dir.clone(),
    ));

    let routes = configure_routes(relay, config.max_upload_bytes);

    let addr = config.socket_addr();
    tracing::info!("Backend running on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
