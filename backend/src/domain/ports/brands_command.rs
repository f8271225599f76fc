//! Driving port for brand mutations.

use async_trait::async_trait;

use crate::domain::{Brand, BrandChanges, BrandDraft, BrandId, Error, UserId};

/// Write operations over the signed-in user's brands.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandsCommand: Send + Sync {
    async fn create_brand(&self, user_id: &UserId, draft: BrandDraft) -> Result<Brand, Error>;

    /// Apply a partial update and stamp `updated_at`.
    async fn update_brand(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        changes: BrandChanges,
    ) -> Result<Brand, Error>;

    /// Delete a brand with its assets and mannequin links. Stored asset
    /// files are removed on a best-effort basis.
    async fn delete_brand(&self, user_id: &UserId, brand_id: &BrandId) -> Result<(), Error>;
}
