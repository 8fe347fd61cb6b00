//! Reverse service
//!
//! - `GET /use`: the HTML form, served unchanged
//! - `POST /user`: the `first_name` field, reversed

mod config;
mod reverse;

pub use config::ServiceConfig;
pub use reverse::{reverse, reverse_name, EchoForm, EchoRequest};

use crate::error::Result;
use axum::{
    routing::{get_service, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

/// Build the service router.
pub fn router(config: &ServiceConfig) -> Router {
    Router::new()
        .route("/use", get_service(ServeFile::new(&config.asset_path)))
        .route("/user", post(reverse_name))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    serve_on(listener, config).await
}

/// Serve on an already bound listener.
pub async fn serve_on(listener: TcpListener, config: ServiceConfig) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("listening at http://{}:{}", addr.ip(), addr.port());

    axum::serve(listener, router(&config)).await?;
    Ok(())
}
