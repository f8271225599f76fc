//! Port for brand asset persistence.

use async_trait::async_trait;

use crate::domain::{AssetCategory, AssetId, BrandAsset, BrandId};

use super::repository_error;

repository_error!(BrandAssetRepositoryError, "brand asset repository");

/// Raw asset row access. Ownership is enforced through the owning brand.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandAssetRepository: Send + Sync {
    /// Assets of a brand ordered by creation time, optionally narrowed to
    /// one category.
    async fn list_for_brand(
        &self,
        brand_id: &BrandId,
        category: Option<AssetCategory>,
    ) -> Result<Vec<BrandAsset>, BrandAssetRepositoryError>;

    async fn find(&self, asset_id: &AssetId)
    -> Result<Option<BrandAsset>, BrandAssetRepositoryError>;

    async fn insert(&self, asset: &BrandAsset) -> Result<(), BrandAssetRepositoryError>;

    async fn delete(&self, asset_id: &AssetId) -> Result<bool, BrandAssetRepositoryError>;

    async fn delete_for_brand(&self, brand_id: &BrandId)
    -> Result<usize, BrandAssetRepositoryError>;
}

