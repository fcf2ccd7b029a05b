use anyhow::Result;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();
    info!("Starting Ludoteca server v{}...", env!("CARGO_PKG_VERSION"));

    // Connect, create the schema, and seed the demo account. Fatal if the
    // storage medium stays unreachable after the configured retries.
    ludoteca::domain::init_database_with_retry_from_env().await?;

    let app = ludoteca::create_router()?;

    // Get optional bind endpoint from environment
    let endpoint = env::var("LUDOTECA_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    info!("Listening at endpoint:{}", endpoint);

    let listener = tokio::net::TcpListener::bind(&endpoint).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
