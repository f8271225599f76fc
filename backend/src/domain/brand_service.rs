//! Brand domain service.
//!
//! Implements the brand driving ports over the brand, mannequin, junction
//! and asset repositories. Every operation is scoped to the acting user.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::media_cleanup::discard_stored_objects;
use crate::domain::ports::{
    BrandAssetRepository, BrandMannequinRepository, BrandRepository, BrandsCommand, BrandsQuery,
    MannequinRepository, ObjectStorage,
};
use crate::domain::{
    Brand, BrandChanges, BrandDraft, BrandId, BrandSummary, BrandWithMannequins, Error, UserId,
    compose_brand_with_mannequins,
};

pub(crate) fn brand_not_found(brand_id: &BrandId) -> Error {
    Error::resource_not_found("brand", brand_id)
}

/// Brand service implementing [`BrandsQuery`] and [`BrandsCommand`].
#[derive(Clone)]
pub struct BrandService<B, M, L, A, S> {
    brands: Arc<B>,
    mannequins: Arc<M>,
    links: Arc<L>,
    assets: Arc<A>,
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<B, M, L, A, S> BrandService<B, M, L, A, S> {
    pub fn new(
        brands: Arc<B>,
        mannequins: Arc<M>,
        links: Arc<L>,
        assets: Arc<A>,
        storage: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            brands,
            mannequins,
            links,
            assets,
            storage,
            clock,
        }
    }
}

impl<B, M, L, A, S> BrandService<B, M, L, A, S>
where
    B: BrandRepository,
{
    async fn owned_brand(&self, user_id: &UserId, brand_id: &BrandId) -> Result<Brand, Error> {
        self.brands
            .find_for_user(user_id, brand_id)
            .await?
            .ok_or_else(|| brand_not_found(brand_id))
    }
}

#[async_trait]
impl<B, M, L, A, S> BrandsQuery for BrandService<B, M, L, A, S>
where
    B: BrandRepository,
    M: MannequinRepository,
    L: BrandMannequinRepository,
    A: Send + Sync,
    S: Send + Sync,
{
    async fn list_brands(&self, user_id: &UserId) -> Result<Vec<Brand>, Error> {
        Ok(self.brands.list_for_user(user_id).await?)
    }

    async fn list_brand_summaries(&self, user_id: &UserId) -> Result<Vec<BrandSummary>, Error> {
        let brands = self.brands.list_for_user(user_id).await?;
        Ok(brands.iter().map(Brand::summary).collect())
    }

    async fn get_brand(&self, user_id: &UserId, brand_id: &BrandId) -> Result<Brand, Error> {
        self.owned_brand(user_id, brand_id).await
    }

    async fn get_brand_with_mannequins(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<BrandWithMannequins, Error> {
        let brand = self.owned_brand(user_id, brand_id).await?;
        let links = self.links.links_for_brand(brand_id).await?;
        if links.is_empty() {
            return Ok(compose_brand_with_mannequins(brand, &links, Vec::new(), Vec::new()));
        }

        let mannequin_ids: Vec<_> = links.iter().map(|link| link.mannequin_id).collect();
        let mannequins = self
            .mannequins
            .find_many_for_user(user_id, &mannequin_ids)
            .await?;
        let visible_ids: Vec<_> = mannequins.iter().map(|m| m.id).collect();
        let photos = if visible_ids.is_empty() {
            Vec::new()
        } else {
            self.mannequins.photos_for(&visible_ids).await?
        };

        Ok(compose_brand_with_mannequins(brand, &links, mannequins, photos))
    }
}

#[async_trait]
impl<B, M, L, A, S> BrandsCommand for BrandService<B, M, L, A, S>
where
    B: BrandRepository,
    M: Send + Sync,
    L: Send + Sync,
    A: BrandAssetRepository,
    S: ObjectStorage,
{
    async fn create_brand(&self, user_id: &UserId, draft: BrandDraft) -> Result<Brand, Error> {
        let now = self.clock.utc();
        let brand = Brand {
            id: BrandId::random(),
            user_id: *user_id,
            name: draft.name.into(),
            description: draft.description,
            logo_url: None,
            style_guide: None,
            created_at: now,
            updated_at: now,
        };
        self.brands.insert(&brand).await?;
        debug!(brand_id = %brand.id, "brand created");
        Ok(brand)
    }

    async fn update_brand(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        changes: BrandChanges,
    ) -> Result<Brand, Error> {
        let mut brand = self.owned_brand(user_id, brand_id).await?;
        changes.apply_to(&mut brand, self.clock.utc());
        if !self.brands.update(&brand).await? {
            return Err(brand_not_found(brand_id));
        }
        Ok(brand)
    }

    async fn delete_brand(&self, user_id: &UserId, brand_id: &BrandId) -> Result<(), Error> {
        self.owned_brand(user_id, brand_id).await?;
        let assets = self.assets.list_for_brand(brand_id, None).await?;
        if !self.brands.delete_for_user(user_id, brand_id).await? {
            return Err(brand_not_found(brand_id));
        }
        debug!(%brand_id, assets = assets.len(), "brand deleted");
        discard_stored_objects(
            self.storage.as_ref(),
            assets.into_iter().filter_map(|asset| asset.external_id),
        )
        .await;
        Ok(())
    }
}

#[cfg(test)]
#[path = "brand_service_tests.rs"]
mod tests;
