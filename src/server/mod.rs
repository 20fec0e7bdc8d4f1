pub mod handlers;
pub mod types;

use crate::{Result, analysis::Analyzer, config::Config};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn app(analyzer: Analyzer) -> Router {
    let app_state = handlers::AppState {
        analyzer: Arc::new(analyzer),
    };

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let analyzer = Analyzer::new(&config);
    let app = app(analyzer);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
