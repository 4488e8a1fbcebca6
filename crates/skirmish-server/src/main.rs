//! Binary entrypoint for the skirmish HTTP server.
//!
//! Reads configuration from environment variables:
//! - `SKIRMISH_PORT`: server listen port (default: "8000")
//! - `SKIRMISH_QRNG_URL`: quantum collaborator base URL (optional)
//! - `SKIRMISH_QRNG_TIMEOUT_MS`: collaborator timeout (default: "2000")

use skirmish_server::config::ServerConfig;
use skirmish_server::router::build_router;
use skirmish_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!("skirmish server starting on {}", addr);
    if config.qrng.is_none() {
        tracing::info!("no quantum collaborator configured; /seed uses the local prng");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
