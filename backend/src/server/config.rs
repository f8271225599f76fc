//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use atelier::inbound::http::session_config::SessionSettings;
use atelier::outbound::persistence::DbPool;
use url::Url;

/// Everything [`super::create_server`] needs, resolved up front.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage_root: PathBuf,
    pub(crate) public_base_url: Url,
    pub(crate) max_upload_bytes: usize,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        storage_root: PathBuf,
        public_base_url: Url,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            session,
            bind_addr,
            storage_root,
            public_base_url,
            max_upload_bytes,
            db_pool: None,
        }
    }

    /// Attach a database pool. Without one the in-memory adapter is used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
