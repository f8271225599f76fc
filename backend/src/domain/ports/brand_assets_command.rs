//! Driving port for brand asset mutations.

use async_trait::async_trait;

use crate::domain::{AssetDraft, AssetId, BrandAsset, BrandId, Error, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandAssetsCommand: Send + Sync {
    async fn create_asset(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        draft: AssetDraft,
    ) -> Result<BrandAsset, Error>;

    /// Delete one asset and, best effort, its stored file.
    async fn delete_asset(&self, user_id: &UserId, asset_id: &AssetId) -> Result<(), Error>;

    /// Delete every asset of a brand, returning how many rows went.
    async fn delete_assets_for_brand(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<usize, Error>;
}
