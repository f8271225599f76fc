//! Brand/mannequin association service.
//!
//! Replacement operations delete every existing link on one side and then
//! insert the desired set. The two steps are separate repository calls; a
//! failure between them leaves the side with no links. Both ends of every
//! new link must belong to the acting user; ownership is checked before any
//! row is touched.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::brand_service::brand_not_found;
use crate::domain::mannequin_service::mannequin_not_found;
use crate::domain::ports::{
    AssociationsCommand, BrandMannequinRepository, BrandRepository, MannequinRepository,
};
use crate::domain::{
    BrandId, BrandMannequinLink, Error, MannequinId, UserId, dedupe_preserving_order,
};

/// Service implementing [`AssociationsCommand`].
#[derive(Clone)]
pub struct AssociationService<B, M, L> {
    brands: Arc<B>,
    mannequins: Arc<M>,
    links: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<B, M, L> AssociationService<B, M, L> {
    pub fn new(brands: Arc<B>, mannequins: Arc<M>, links: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self {
            brands,
            mannequins,
            links,
            clock,
        }
    }
}

impl<B, M, L> AssociationService<B, M, L>
where
    B: BrandRepository,
    M: MannequinRepository,
    L: BrandMannequinRepository,
{
    async fn ensure_brand_owned(&self, user_id: &UserId, brand_id: &BrandId) -> Result<(), Error> {
        match self.brands.find_for_user(user_id, brand_id).await? {
            Some(_) => Ok(()),
            None => Err(brand_not_found(brand_id)),
        }
    }

    async fn ensure_mannequin_owned(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<(), Error> {
        match self.mannequins.find_for_user(user_id, mannequin_id).await? {
            Some(_) => Ok(()),
            None => Err(mannequin_not_found(mannequin_id)),
        }
    }

    /// Every id in `mannequin_ids` must name a mannequin `user_id` owns.
    async fn ensure_mannequins_owned(
        &self,
        user_id: &UserId,
        mannequin_ids: &[MannequinId],
    ) -> Result<(), Error> {
        if mannequin_ids.is_empty() {
            return Ok(());
        }
        let owned = self
            .mannequins
            .find_many_for_user(user_id, mannequin_ids)
            .await?;
        match mannequin_ids
            .iter()
            .find(|id| !owned.iter().any(|m| m.id == **id))
        {
            Some(missing) => Err(mannequin_not_found(missing)),
            None => Ok(()),
        }
    }

    /// Every id in `brand_ids` must name a brand `user_id` owns.
    async fn ensure_brands_owned(&self, user_id: &UserId, brand_ids: &[BrandId]) -> Result<(), Error> {
        if brand_ids.is_empty() {
            return Ok(());
        }
        let owned = self.brands.find_many_for_user(user_id, brand_ids).await?;
        match brand_ids
            .iter()
            .find(|id| !owned.iter().any(|b| b.id == **id))
        {
            Some(missing) => Err(brand_not_found(missing)),
            None => Ok(()),
        }
    }

    async fn replace_links(&self, links: Vec<BrandMannequinLink>) -> Result<Vec<BrandMannequinLink>, Error> {
        if !links.is_empty() {
            self.links.insert_links(&links).await?;
        }
        Ok(links)
    }
}

#[async_trait]
impl<B, M, L> AssociationsCommand for AssociationService<B, M, L>
where
    B: BrandRepository,
    M: MannequinRepository,
    L: BrandMannequinRepository,
{
    async fn set_mannequins_for_brand(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        mannequin_ids: Vec<MannequinId>,
    ) -> Result<Vec<BrandMannequinLink>, Error> {
        self.ensure_brand_owned(user_id, brand_id).await?;
        let mannequin_ids = dedupe_preserving_order(mannequin_ids);
        self.ensure_mannequins_owned(user_id, &mannequin_ids).await?;
        let removed = self.links.delete_for_brand(brand_id).await?;
        let now = self.clock.utc();
        let links = mannequin_ids
            .into_iter()
            .map(|mannequin_id| BrandMannequinLink::new(*brand_id, mannequin_id, now))
            .collect();
        let links = self.replace_links(links).await?;
        debug!(%brand_id, removed, inserted = links.len(), "brand mannequins replaced");
        Ok(links)
    }

    async fn set_brands_for_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        brand_ids: Vec<BrandId>,
    ) -> Result<Vec<BrandMannequinLink>, Error> {
        self.ensure_mannequin_owned(user_id, mannequin_id).await?;
        let brand_ids = dedupe_preserving_order(brand_ids);
        self.ensure_brands_owned(user_id, &brand_ids).await?;
        let removed = self.links.delete_for_mannequin(mannequin_id).await?;
        let now = self.clock.utc();
        let links = brand_ids
            .into_iter()
            .map(|brand_id| BrandMannequinLink::new(brand_id, *mannequin_id, now))
            .collect();
        let links = self.replace_links(links).await?;
        debug!(%mannequin_id, removed, inserted = links.len(), "mannequin brands replaced");
        Ok(links)
    }

    async fn add_link(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<BrandMannequinLink, Error> {
        self.ensure_brand_owned(user_id, brand_id).await?;
        self.ensure_mannequin_owned(user_id, mannequin_id).await?;
        if let Some(existing) = self.links.find_link(brand_id, mannequin_id).await? {
            return Ok(existing);
        }
        let link = BrandMannequinLink::new(*brand_id, *mannequin_id, self.clock.utc());
        self.links.insert_links(std::slice::from_ref(&link)).await?;
        // A concurrent add may have won; report the stored row.
        Ok(self
            .links
            .find_link(brand_id, mannequin_id)
            .await?
            .unwrap_or(link))
    }

    async fn remove_link(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<(), Error> {
        self.ensure_brand_owned(user_id, brand_id).await?;
        let removed = self.links.delete_link(brand_id, mannequin_id).await?;
        debug!(%brand_id, %mannequin_id, removed, "brand mannequin link removed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "association_service_tests.rs"]
mod tests;
