//! Build HTTP state over PostgreSQL or in-memory repositories.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use atelier::inbound::http::state::{Adapters, HttpState};
use atelier::outbound::memory::InMemoryStore;
use atelier::outbound::persistence::{
    DieselBrandAssetRepository, DieselBrandMannequinRepository, DieselBrandRepository,
    DieselMannequinRepository,
};
use atelier::outbound::storage::FilesystemStorage;

use super::ServerConfig;

/// Wire the domain services, choosing Diesel repositories when a pool is
/// configured and the shared in-memory store otherwise.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the storage root cannot be opened.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let storage = Arc::new(
        FilesystemStorage::open(&config.storage_root, config.public_base_url.clone())
            .map_err(|err| std::io::Error::other(format!("object storage: {err}")))?,
    );
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            HttpState::from_adapters(
                Adapters {
                    brands: Arc::new(DieselBrandRepository::new(pool.clone())),
                    mannequins: Arc::new(DieselMannequinRepository::new(pool.clone())),
                    links: Arc::new(DieselBrandMannequinRepository::new(pool.clone())),
                    assets: Arc::new(DieselBrandAssetRepository::new(pool.clone())),
                    storage,
                },
                clock,
            )
        }
        None => {
            warn!("no database configured; data is kept in memory and lost on restart");
            let store = Arc::new(InMemoryStore::new());
            HttpState::from_adapters(
                Adapters {
                    brands: Arc::clone(&store),
                    mannequins: Arc::clone(&store),
                    links: Arc::clone(&store),
                    assets: store,
                    storage,
                },
                clock,
            )
        }
    };
    Ok(state)
}
