//! PostgreSQL-backed `BrandMannequinRepository` implementation.
//!
//! The junction table carries a `(brand_id, mannequin_id)` unique
//! constraint; inserts use `ON CONFLICT DO NOTHING` against it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BrandMannequinRepository, BrandMannequinRepositoryError};
use crate::domain::{BrandId, BrandMannequinLink, MannequinId};

use super::diesel_error_mapping;
use super::models::BrandMannequinRow;
use super::pool::{DbPool, PoolError};
use super::schema::brand_mannequins;

/// Diesel-backed implementation of the junction repository port.
#[derive(Clone)]
pub struct DieselBrandMannequinRepository {
    pool: DbPool,
}

impl DieselBrandMannequinRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BrandMannequinRepositoryError {
    diesel_error_mapping::map_pool_error(error, BrandMannequinRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BrandMannequinRepositoryError {
    diesel_error_mapping::map_diesel_error(
        error,
        BrandMannequinRepositoryError::query,
        BrandMannequinRepositoryError::connection,
    )
}

fn to_links(rows: Vec<BrandMannequinRow>) -> Vec<BrandMannequinLink> {
    rows.into_iter().map(BrandMannequinLink::from).collect()
}

#[async_trait]
impl BrandMannequinRepository for DieselBrandMannequinRepository {
    async fn links_for_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<Vec<BrandMannequinLink>, BrandMannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BrandMannequinRow> = brand_mannequins::table
            .filter(brand_mannequins::brand_id.eq(brand_id.as_uuid()))
            .order((brand_mannequins::created_at.asc(), brand_mannequins::id.asc()))
            .select(BrandMannequinRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(to_links(rows))
    }

    async fn links_for_mannequins(
        &self,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<BrandMannequinLink>, BrandMannequinRepositoryError> {
        if mannequin_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let ids: Vec<Uuid> = mannequin_ids.iter().map(|id| *id.as_uuid()).collect();

        let rows: Vec<BrandMannequinRow> = brand_mannequins::table
            .filter(brand_mannequins::mannequin_id.eq_any(ids))
            .order((brand_mannequins::created_at.asc(), brand_mannequins::id.asc()))
            .select(BrandMannequinRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(to_links(rows))
    }

    async fn find_link(
        &self,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<Option<BrandMannequinLink>, BrandMannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BrandMannequinRow> = brand_mannequins::table
            .filter(brand_mannequins::brand_id.eq(brand_id.as_uuid()))
            .filter(brand_mannequins::mannequin_id.eq(mannequin_id.as_uuid()))
            .select(BrandMannequinRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(BrandMannequinLink::from))
    }

    async fn insert_links(
        &self,
        links: &[BrandMannequinLink],
    ) -> Result<(), BrandMannequinRepositoryError> {
        if links.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BrandMannequinRow> = links.iter().map(BrandMannequinRow::from).collect();

        diesel::insert_into(brand_mannequins::table)
            .values(&rows)
            .on_conflict((brand_mannequins::brand_id, brand_mannequins::mannequin_id))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn delete_for_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<usize, BrandMannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(
            brand_mannequins::table.filter(brand_mannequins::brand_id.eq(brand_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn delete_for_mannequin(
        &self,
        mannequin_id: &MannequinId,
    ) -> Result<usize, BrandMannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(
            brand_mannequins::table
                .filter(brand_mannequins::mannequin_id.eq(mannequin_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn delete_link(
        &self,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<usize, BrandMannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(
            brand_mannequins::table
                .filter(brand_mannequins::brand_id.eq(brand_id.as_uuid()))
                .filter(brand_mannequins::mannequin_id.eq(mannequin_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)
    }
}
