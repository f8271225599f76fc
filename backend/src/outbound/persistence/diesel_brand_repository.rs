//! PostgreSQL-backed `BrandRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BrandRepository, BrandRepositoryError};
use crate::domain::{Brand, BrandId, UserId};

use super::diesel_error_mapping;
use super::models::{BrandRow, BrandUpdate, NewBrandRow};
use super::pool::{DbPool, PoolError};
use super::schema::brands;

/// Diesel-backed implementation of the brand repository port.
#[derive(Clone)]
pub struct DieselBrandRepository {
    pool: DbPool,
}

impl DieselBrandRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BrandRepositoryError {
    diesel_error_mapping::map_pool_error(error, BrandRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BrandRepositoryError {
    diesel_error_mapping::map_diesel_error(
        error,
        BrandRepositoryError::query,
        BrandRepositoryError::connection,
    )
}

#[async_trait]
impl BrandRepository for DieselBrandRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Brand>, BrandRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BrandRow> = brands::table
            .filter(brands::user_id.eq(user_id.as_uuid()))
            .order((brands::created_at.asc(), brands::id.asc()))
            .select(BrandRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Brand::from).collect())
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<Option<Brand>, BrandRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BrandRow> = brands::table
            .filter(brands::id.eq(brand_id.as_uuid()))
            .filter(brands::user_id.eq(user_id.as_uuid()))
            .select(BrandRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Brand::from))
    }

    async fn find_many_for_user(
        &self,
        user_id: &UserId,
        brand_ids: &[BrandId],
    ) -> Result<Vec<Brand>, BrandRepositoryError> {
        if brand_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let ids: Vec<Uuid> = brand_ids.iter().map(|id| *id.as_uuid()).collect();

        let rows: Vec<BrandRow> = brands::table
            .filter(brands::id.eq_any(ids))
            .filter(brands::user_id.eq(user_id.as_uuid()))
            .order((brands::created_at.asc(), brands::id.asc()))
            .select(BrandRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Brand::from).collect())
    }

    async fn insert(&self, brand: &Brand) -> Result<(), BrandRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(brands::table)
            .values(NewBrandRow::from(brand))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn update(&self, brand: &Brand) -> Result<bool, BrandRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            brands::table
                .filter(brands::id.eq(brand.id.as_uuid()))
                .filter(brands::user_id.eq(brand.user_id.as_uuid())),
        )
        .set(BrandUpdate::from(brand))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete_for_user(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<bool, BrandRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Junction rows and assets cascade at the foreign keys.
        let deleted = diesel::delete(
            brands::table
                .filter(brands::id.eq(brand_id.as_uuid()))
                .filter(brands::user_id.eq(user_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
