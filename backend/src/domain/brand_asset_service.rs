//! Brand asset service.
//!
//! Assets carry no owner column; access is granted through ownership of the
//! brand they belong to.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::brand_service::brand_not_found;
use crate::domain::media_cleanup::discard_stored_objects;
use crate::domain::ports::{
    BrandAssetRepository, BrandAssetsCommand, BrandAssetsQuery, BrandRepository, ObjectStorage,
};
use crate::domain::{
    AssetCategory, AssetDraft, AssetId, BrandAsset, BrandId, Error, UserId,
};

fn asset_not_found(asset_id: &AssetId) -> Error {
    Error::resource_not_found("asset", asset_id)
}

/// Service implementing [`BrandAssetsQuery`] and [`BrandAssetsCommand`].
#[derive(Clone)]
pub struct BrandAssetService<A, B, S> {
    assets: Arc<A>,
    brands: Arc<B>,
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<A, B, S> BrandAssetService<A, B, S> {
    pub fn new(assets: Arc<A>, brands: Arc<B>, storage: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            assets,
            brands,
            storage,
            clock,
        }
    }
}

impl<A, B, S> BrandAssetService<A, B, S>
where
    A: BrandAssetRepository,
    B: BrandRepository,
{
    async fn ensure_brand_owned(&self, user_id: &UserId, brand_id: &BrandId) -> Result<(), Error> {
        match self.brands.find_for_user(user_id, brand_id).await? {
            Some(_) => Ok(()),
            None => Err(brand_not_found(brand_id)),
        }
    }

    /// Load an asset whose brand the user owns.
    async fn owned_asset(&self, user_id: &UserId, asset_id: &AssetId) -> Result<BrandAsset, Error> {
        let asset = self
            .assets
            .find(asset_id)
            .await?
            .ok_or_else(|| asset_not_found(asset_id))?;
        match self.brands.find_for_user(user_id, &asset.brand_id).await? {
            Some(_) => Ok(asset),
            None => Err(asset_not_found(asset_id)),
        }
    }
}

#[async_trait]
impl<A, B, S> BrandAssetsQuery for BrandAssetService<A, B, S>
where
    A: BrandAssetRepository,
    B: BrandRepository,
    S: Send + Sync,
{
    async fn list_assets(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        category: Option<AssetCategory>,
    ) -> Result<Vec<BrandAsset>, Error> {
        self.ensure_brand_owned(user_id, brand_id).await?;
        Ok(self.assets.list_for_brand(brand_id, category).await?)
    }

    async fn get_asset(&self, user_id: &UserId, asset_id: &AssetId) -> Result<BrandAsset, Error> {
        self.owned_asset(user_id, asset_id).await
    }
}

#[async_trait]
impl<A, B, S> BrandAssetsCommand for BrandAssetService<A, B, S>
where
    A: BrandAssetRepository,
    B: BrandRepository,
    S: ObjectStorage,
{
    async fn create_asset(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        draft: AssetDraft,
    ) -> Result<BrandAsset, Error> {
        self.ensure_brand_owned(user_id, brand_id).await?;
        let asset = BrandAsset {
            id: AssetId::random(),
            brand_id: *brand_id,
            name: draft.name,
            asset_type: draft.asset_type,
            category: draft.category,
            url: draft.url,
            external_id: draft.external_id,
            width: draft.width,
            height: draft.height,
            file_size: draft.file_size,
            mime_type: draft.mime_type,
            created_at: self.clock.utc(),
        };
        self.assets.insert(&asset).await?;
        debug!(asset_id = %asset.id, %brand_id, category = %asset.category, "asset created");
        Ok(asset)
    }

    async fn delete_asset(&self, user_id: &UserId, asset_id: &AssetId) -> Result<(), Error> {
        let asset = self.owned_asset(user_id, asset_id).await?;
        if !self.assets.delete(asset_id).await? {
            return Err(asset_not_found(asset_id));
        }
        discard_stored_objects(self.storage.as_ref(), asset.external_id).await;
        Ok(())
    }

    async fn delete_assets_for_brand(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<usize, Error> {
        self.ensure_brand_owned(user_id, brand_id).await?;
        let assets = self.assets.list_for_brand(brand_id, None).await?;
        let removed = self.assets.delete_for_brand(brand_id).await?;
        discard_stored_objects(
            self.storage.as_ref(),
            assets.into_iter().filter_map(|asset| asset.external_id),
        )
        .await;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockBrandAssetRepository, MockBrandRepository, MockObjectStorage};
    use crate::domain::{AssetType, ErrorCode};
    use crate::test_support::{SteppingClock, brand_for, fixture_time};

    type Service = BrandAssetService<MockBrandAssetRepository, MockBrandRepository, MockObjectStorage>;

    fn service(
        assets: MockBrandAssetRepository,
        brands: MockBrandRepository,
        storage: MockObjectStorage,
    ) -> Service {
        BrandAssetService::new(
            Arc::new(assets),
            Arc::new(brands),
            Arc::new(storage),
            Arc::new(SteppingClock::default()),
        )
    }

    fn brands_owned_by(user_id: UserId) -> MockBrandRepository {
        let mut brands = MockBrandRepository::new();
        brands
            .expect_find_for_user()
            .returning(move |owner, brand_id| {
                if *owner != user_id {
                    return Ok(None);
                }
                let mut brand = brand_for(user_id, "Acme");
                brand.id = *brand_id;
                Ok(Some(brand))
            });
        brands
    }

    fn stored_asset(brand_id: BrandId) -> BrandAsset {
        BrandAsset {
            id: AssetId::random(),
            brand_id,
            name: "Hero".to_owned(),
            asset_type: AssetType::Image,
            category: AssetCategory::Product,
            url: "https://cdn.example/hero.png".to_owned(),
            external_id: Some("brand-assets/hero".to_owned()),
            width: Some(800),
            height: Some(600),
            file_size: None,
            mime_type: None,
            created_at: fixture_time(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn list_passes_category_filter_through() {
        let user_id = UserId::random();
        let brand_id = BrandId::random();
        let mut assets = MockBrandAssetRepository::new();
        assets
            .expect_list_for_brand()
            .withf(|_, category| *category == Some(AssetCategory::Logo))
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));

        let listed = service(assets, brands_owned_by(user_id), MockObjectStorage::new())
            .list_assets(&user_id, &brand_id, Some(AssetCategory::Logo))
            .await
            .expect("list succeeds");

        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn assets_of_foreign_brands_are_not_found() {
        let owner = UserId::random();
        let asset = stored_asset(BrandId::random());
        let asset_id = asset.id;
        let mut assets = MockBrandAssetRepository::new();
        assets.expect_find().return_once(move |_| Ok(Some(asset)));
        assets.expect_delete().never();

        let error = service(assets, brands_owned_by(owner), MockObjectStorage::new())
            .delete_asset(&UserId::random(), &asset_id)
            .await
            .expect_err("foreign asset");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn create_records_draft_fields() {
        let user_id = UserId::random();
        let brand_id = BrandId::random();
        let mut assets = MockBrandAssetRepository::new();
        assets
            .expect_insert()
            .withf(move |asset| asset.brand_id == brand_id && asset.category == AssetCategory::Social)
            .times(1)
            .return_once(|_| Ok(()));

        let draft = AssetDraft::new(
            "Story",
            AssetType::Video,
            AssetCategory::Social,
            "https://cdn.example/story.mp4",
        )
        .expect("valid draft")
        .with_mime_type(Some("video/mp4"));
        let asset = service(assets, brands_owned_by(user_id), MockObjectStorage::new())
            .create_asset(&user_id, &brand_id, draft)
            .await
            .expect("create succeeds");

        assert_eq!(asset.mime_type.as_deref(), Some("video/mp4"));
        assert_eq!(asset.created_at, fixture_time());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_for_brand_removes_rows_and_files() {
        let user_id = UserId::random();
        let brand_id = BrandId::random();
        let mut assets = MockBrandAssetRepository::new();
        assets
            .expect_list_for_brand()
            .return_once(move |_, _| Ok(vec![stored_asset(brand_id), stored_asset(brand_id)]));
        assets
            .expect_delete_for_brand()
            .times(1)
            .return_once(|_| Ok(2));
        let mut storage = MockObjectStorage::new();
        storage.expect_delete().times(2).returning(|_| Ok(()));

        let removed = service(assets, brands_owned_by(user_id), storage)
            .delete_assets_for_brand(&user_id, &brand_id)
            .await
            .expect("delete succeeds");

        assert_eq!(removed, 2);
    }
}
