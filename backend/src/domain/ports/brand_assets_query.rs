//! Driving port for brand asset reads.

use async_trait::async_trait;

use crate::domain::{AssetCategory, AssetId, BrandAsset, BrandId, Error, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandAssetsQuery: Send + Sync {
    /// Assets of an owned brand by creation time, optionally one category.
    async fn list_assets(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        category: Option<AssetCategory>,
    ) -> Result<Vec<BrandAsset>, Error>;

    async fn get_asset(&self, user_id: &UserId, asset_id: &AssetId) -> Result<BrandAsset, Error>;
}
