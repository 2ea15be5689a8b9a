pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, ServerConfig, ServerMode},
    relay::Relay,
};
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::post,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::info;

pub fn router(state: handlers::AppState, mode: ServerMode) -> Router {
    // Any origin, echoed back so credentials stay allowed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::POST, Method::OPTIONS, Method::GET, Method::PUT])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(mode == ServerMode::Debug));

    Router::new()
        .route("/info", post(handlers::submit_birth_info))
        .layer(cors)
        .layer(trace)
        .with_state(state)
}

/// Binds the listener. `host` may be an IP literal or a resolvable hostname.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    Ok(listener)
}

pub async fn run(config: Config) -> Result<()> {
    let relay = Relay::from_config(&config)?;

    // Create application state
    let app_state = handlers::AppState {
        relay: Arc::new(relay),
    };

    let app = router(app_state, config.server.mode);

    // Start server
    let listener = bind(&config.server).await?;

    info!(
        "Starting server on {} ({:?} mode)",
        listener.local_addr()?,
        config.server.mode
    );

    axum::serve(listener, app).await?;

    Ok(())
}
