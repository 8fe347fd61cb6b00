//! reverse-service - Entry point
//!
//! Serves the name form at `GET /use` and reverses submissions at `POST /user`.

use pdf2image_tools::web::{serve, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pdf2image_tools::init_tracing("pdf2image_tools=info,reverse_service=info,tower_http=debug");

    let config = ServiceConfig::from_env();
    tracing::info!(asset = %config.asset_path.display(), "Starting reverse service");

    serve(config).await?;
    Ok(())
}
