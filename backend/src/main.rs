//! Backend entry-point: loads settings, prepares persistence and serves the
//! REST API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use atelier::inbound::http::health::HealthState;
use atelier::inbound::http::session_config::{BuildMode, SessionSettings};
use atelier::outbound::persistence::{DbPool, run_pending_migrations};
use atelier::settings::AppSettings;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let session = SessionSettings::from_env(&DefaultEnv::new(), BuildMode::current())
        .map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let public_base_url = settings.public_base_url().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(
        session,
        bind_addr,
        settings.storage_root(),
        public_base_url,
        settings.max_upload_bytes(),
    );
    if let Some(pool_config) = settings.pool_config() {
        run_pending_migrations(pool_config.database_url())
            .await
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    info!(%bind_addr, "starting server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
