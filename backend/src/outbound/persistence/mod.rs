//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel rows and domain
//! types; no business rules live here. Connections come from a `bb8` pool
//! via `diesel-async`, and every Diesel failure is mapped onto the port's
//! `Connection`/`Query` error variants.
//!
//! # Example
//!
//! ```ignore
//! use atelier::outbound::persistence::{DbPool, DieselBrandRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/atelier")).await?;
//! let brands = DieselBrandRepository::new(pool);
//! ```

mod diesel_brand_asset_repository;
mod diesel_brand_mannequin_repository;
mod diesel_brand_repository;
mod diesel_error_mapping;
mod diesel_mannequin_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_brand_asset_repository::DieselBrandAssetRepository;
pub use diesel_brand_mannequin_repository::DieselBrandMannequinRepository;
pub use diesel_brand_repository::DieselBrandRepository;
pub use diesel_mannequin_repository::DieselMannequinRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
