mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let state = state::AppState::from_catalog()?;

    let app = routes::app(state, &config.assets_dir);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), "members-area listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)?;
    Ok(())
}
