//! PostgreSQL-backed `MannequinRepository` implementation using Diesel ORM.
//!
//! Mannequins and their photos live in separate tables; photo reads are
//! batched with `eq_any` so list endpoints issue one query per table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{MannequinRepository, MannequinRepositoryError};
use crate::domain::{Mannequin, MannequinId, MannequinPhoto, PhotoId, UserId};

use super::diesel_error_mapping;
use super::models::{MannequinPhotoRow, MannequinRow, MannequinUpdate, NewMannequinRow};
use super::pool::{DbPool, PoolError};
use super::schema::{mannequin_photos, mannequins};

/// Diesel-backed implementation of the mannequin repository port.
#[derive(Clone)]
pub struct DieselMannequinRepository {
    pool: DbPool,
}

impl DieselMannequinRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MannequinRepositoryError {
    diesel_error_mapping::map_pool_error(error, MannequinRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MannequinRepositoryError {
    diesel_error_mapping::map_diesel_error(
        error,
        MannequinRepositoryError::query,
        MannequinRepositoryError::connection,
    )
}

fn uuids(ids: &[MannequinId]) -> Vec<Uuid> {
    ids.iter().map(|id| *id.as_uuid()).collect()
}

#[async_trait]
impl MannequinRepository for DieselMannequinRepository {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Mannequin>, MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MannequinRow> = mannequins::table
            .filter(mannequins::user_id.eq(user_id.as_uuid()))
            .order((mannequins::created_at.asc(), mannequins::id.asc()))
            .select(MannequinRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Mannequin::from).collect())
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<Option<Mannequin>, MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MannequinRow> = mannequins::table
            .filter(mannequins::id.eq(mannequin_id.as_uuid()))
            .filter(mannequins::user_id.eq(user_id.as_uuid()))
            .select(MannequinRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Mannequin::from))
    }

    async fn find_many_for_user(
        &self,
        user_id: &UserId,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<Mannequin>, MannequinRepositoryError> {
        if mannequin_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MannequinRow> = mannequins::table
            .filter(mannequins::id.eq_any(uuids(mannequin_ids)))
            .filter(mannequins::user_id.eq(user_id.as_uuid()))
            .order((mannequins::created_at.asc(), mannequins::id.asc()))
            .select(MannequinRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Mannequin::from).collect())
    }

    async fn insert(&self, mannequin: &Mannequin) -> Result<(), MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(mannequins::table)
            .values(NewMannequinRow::from(mannequin))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn update(&self, mannequin: &Mannequin) -> Result<bool, MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            mannequins::table
                .filter(mannequins::id.eq(mannequin.id.as_uuid()))
                .filter(mannequins::user_id.eq(mannequin.user_id.as_uuid())),
        )
        .set(MannequinUpdate::from(mannequin))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete_for_user(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<bool, MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            mannequins::table
                .filter(mannequins::id.eq(mannequin_id.as_uuid()))
                .filter(mannequins::user_id.eq(user_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn photos_for(
        &self,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<MannequinPhoto>, MannequinRepositoryError> {
        if mannequin_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MannequinPhotoRow> = mannequin_photos::table
            .filter(mannequin_photos::mannequin_id.eq_any(uuids(mannequin_ids)))
            .order((mannequin_photos::created_at.asc(), mannequin_photos::id.asc()))
            .select(MannequinPhotoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(MannequinPhoto::from).collect())
    }

    async fn insert_photos(&self, photos: &[MannequinPhoto]) -> Result<(), MannequinRepositoryError> {
        if photos.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MannequinPhotoRow> = photos.iter().map(MannequinPhotoRow::from).collect();

        diesel::insert_into(mannequin_photos::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn delete_photo(
        &self,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<Option<MannequinPhoto>, MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MannequinPhotoRow> = diesel::delete(
            mannequin_photos::table
                .filter(mannequin_photos::id.eq(photo_id.as_uuid()))
                .filter(mannequin_photos::mannequin_id.eq(mannequin_id.as_uuid())),
        )
        .returning(MannequinPhotoRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        Ok(row.map(MannequinPhoto::from))
    }

    async fn clear_primary(
        &self,
        mannequin_id: &MannequinId,
    ) -> Result<(), MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(
            mannequin_photos::table
                .filter(mannequin_photos::mannequin_id.eq(mannequin_id.as_uuid()))
                .filter(mannequin_photos::is_primary.eq(true)),
        )
        .set(mannequin_photos::is_primary.eq(false))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn mark_primary(
        &self,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<bool, MannequinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            mannequin_photos::table
                .filter(mannequin_photos::id.eq(photo_id.as_uuid()))
                .filter(mannequin_photos::mannequin_id.eq(mannequin_id.as_uuid())),
        )
        .set(mannequin_photos::is_primary.eq(true))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }
}
