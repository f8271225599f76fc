//! PostgreSQL-backed `BrandAssetRepository` implementation.
//!
//! Asset type and category are stored as text guarded by CHECK
//! constraints; rows that fail to decode surface as query errors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BrandAssetRepository, BrandAssetRepositoryError};
use crate::domain::{AssetCategory, AssetId, BrandAsset, BrandId};

use super::diesel_error_mapping;
use super::models::BrandAssetRow;
use super::pool::{DbPool, PoolError};
use super::schema::brand_assets;

/// Diesel-backed implementation of the brand asset repository port.
#[derive(Clone)]
pub struct DieselBrandAssetRepository {
    pool: DbPool,
}

impl DieselBrandAssetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BrandAssetRepositoryError {
    diesel_error_mapping::map_pool_error(error, BrandAssetRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BrandAssetRepositoryError {
    diesel_error_mapping::map_diesel_error(
        error,
        BrandAssetRepositoryError::query,
        BrandAssetRepositoryError::connection,
    )
}

fn row_to_asset(row: BrandAssetRow) -> Result<BrandAsset, BrandAssetRepositoryError> {
    BrandAsset::try_from(row).map_err(|err| BrandAssetRepositoryError::query(err.to_string()))
}

#[async_trait]
impl BrandAssetRepository for DieselBrandAssetRepository {
    async fn list_for_brand(
        &self,
        brand_id: &BrandId,
        category: Option<AssetCategory>,
    ) -> Result<Vec<BrandAsset>, BrandAssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = brand_assets::table
            .filter(brand_assets::brand_id.eq(brand_id.as_uuid()))
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(brand_assets::category.eq(category.as_str()));
        }

        let rows: Vec<BrandAssetRow> = query
            .order((brand_assets::created_at.asc(), brand_assets::id.asc()))
            .select(BrandAssetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_asset).collect()
    }

    async fn find(
        &self,
        asset_id: &AssetId,
    ) -> Result<Option<BrandAsset>, BrandAssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BrandAssetRow> = brand_assets::table
            .filter(brand_assets::id.eq(asset_id.as_uuid()))
            .select(BrandAssetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_asset).transpose()
    }

    async fn insert(&self, asset: &BrandAsset) -> Result<(), BrandAssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(brand_assets::table)
            .values(BrandAssetRow::from(asset))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn delete(&self, asset_id: &AssetId) -> Result<bool, BrandAssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted =
            diesel::delete(brand_assets::table.filter(brand_assets::id.eq(asset_id.as_uuid())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn delete_for_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<usize, BrandAssetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(brand_assets::table.filter(brand_assets::brand_id.eq(brand_id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
