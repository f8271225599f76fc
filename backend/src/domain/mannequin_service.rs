//! Mannequin domain service.
//!
//! Implements mannequin reads and writes, including photo management and the
//! batched list composition used by the dashboard.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::media_cleanup::discard_stored_objects;
use crate::domain::ports::{
    BrandMannequinRepository, BrandRepository, MannequinRepository, MannequinsCommand,
    MannequinsQuery, ObjectStorage,
};
use crate::domain::{
    Brand, Error, Mannequin, MannequinChanges, MannequinDraft, MannequinId, MannequinListItem,
    MannequinPhoto, MannequinSelectItem, MannequinWithBrands, MannequinWithPhotos, PhotoDraft,
    PhotoId, UserId, compose_mannequin_list, compose_select_items,
};

pub(crate) fn mannequin_not_found(mannequin_id: &MannequinId) -> Error {
    Error::resource_not_found("mannequin", mannequin_id)
}

fn photo_not_found(photo_id: &PhotoId) -> Error {
    Error::resource_not_found("photo", photo_id)
}

/// Mannequin service implementing [`MannequinsQuery`] and
/// [`MannequinsCommand`].
#[derive(Clone)]
pub struct MannequinService<M, L, B, S> {
    mannequins: Arc<M>,
    links: Arc<L>,
    brands: Arc<B>,
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<M, L, B, S> MannequinService<M, L, B, S> {
    pub fn new(
        mannequins: Arc<M>,
        links: Arc<L>,
        brands: Arc<B>,
        storage: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            mannequins,
            links,
            brands,
            storage,
            clock,
        }
    }

    fn build_photo(&self, mannequin_id: MannequinId, draft: PhotoDraft) -> MannequinPhoto {
        MannequinPhoto {
            id: PhotoId::random(),
            mannequin_id,
            url: draft.url,
            external_id: draft.external_id,
            width: draft.width,
            height: draft.height,
            is_primary: draft.is_primary,
            created_at: self.clock.utc(),
        }
    }
}

impl<M, L, B, S> MannequinService<M, L, B, S>
where
    M: MannequinRepository,
{
    async fn owned_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<Mannequin, Error> {
        self.mannequins
            .find_for_user(user_id, mannequin_id)
            .await?
            .ok_or_else(|| mannequin_not_found(mannequin_id))
    }

    async fn photos_of(&self, mannequin_id: &MannequinId) -> Result<Vec<MannequinPhoto>, Error> {
        Ok(self
            .mannequins
            .photos_for(std::slice::from_ref(mannequin_id))
            .await?)
    }
}

#[async_trait]
impl<M, L, B, S> MannequinsQuery for MannequinService<M, L, B, S>
where
    M: MannequinRepository,
    L: BrandMannequinRepository,
    B: BrandRepository,
    S: Send + Sync,
{
    async fn list_mannequins(&self, user_id: &UserId) -> Result<Vec<MannequinListItem>, Error> {
        let mannequins = self.mannequins.list_for_user(user_id).await?;
        if mannequins.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<_> = mannequins.iter().map(|m| m.id).collect();
        let photos = self.mannequins.photos_for(&ids).await?;
        let links = self.links.links_for_mannequins(&ids).await?;
        Ok(compose_mannequin_list(mannequins, photos, &links))
    }

    async fn list_for_select(&self, user_id: &UserId) -> Result<Vec<MannequinSelectItem>, Error> {
        let mannequins = self.mannequins.list_for_user(user_id).await?;
        if mannequins.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<_> = mannequins.iter().map(|m| m.id).collect();
        let photos = self.mannequins.photos_for(&ids).await?;
        Ok(compose_select_items(mannequins, photos))
    }

    async fn get_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<MannequinWithPhotos, Error> {
        let mannequin = self.owned_mannequin(user_id, mannequin_id).await?;
        let photos = self.photos_of(mannequin_id).await?;
        Ok(MannequinWithPhotos { mannequin, photos })
    }

    async fn get_mannequin_with_brands(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<MannequinWithBrands, Error> {
        let mannequin = self.owned_mannequin(user_id, mannequin_id).await?;
        let photos = self.photos_of(mannequin_id).await?;
        let links = self
            .links
            .links_for_mannequins(std::slice::from_ref(mannequin_id))
            .await?;
        let brands = if links.is_empty() {
            Vec::new()
        } else {
            let brand_ids: Vec<_> = links.iter().map(|link| link.brand_id).collect();
            self.brands
                .find_many_for_user(user_id, &brand_ids)
                .await?
                .iter()
                .map(Brand::summary)
                .collect()
        };
        Ok(MannequinWithBrands {
            mannequin,
            photos,
            brands,
        })
    }
}

#[async_trait]
impl<M, L, B, S> MannequinsCommand for MannequinService<M, L, B, S>
where
    M: MannequinRepository,
    L: Send + Sync,
    B: Send + Sync,
    S: ObjectStorage,
{
    async fn create_mannequin(
        &self,
        user_id: &UserId,
        draft: MannequinDraft,
        photos: Vec<PhotoDraft>,
    ) -> Result<MannequinWithPhotos, Error> {
        let now = self.clock.utc();
        let mannequin = Mannequin {
            id: MannequinId::random(),
            user_id: *user_id,
            name: draft.name,
            birth_year: draft.birth_year,
            height_cm: draft.height_cm,
            created_at: now,
            updated_at: now,
        };
        self.mannequins.insert(&mannequin).await?;

        // First flagged photo wins; otherwise the first photo.
        let primary_index = photos
            .iter()
            .position(|photo| photo.is_primary)
            .unwrap_or(0);
        let photos: Vec<_> = photos
            .into_iter()
            .enumerate()
            .map(|(index, photo)| {
                self.build_photo(mannequin.id, photo.primary(index == primary_index))
            })
            .collect();
        if !photos.is_empty() {
            self.mannequins.insert_photos(&photos).await?;
        }
        debug!(mannequin_id = %mannequin.id, photos = photos.len(), "mannequin created");
        Ok(MannequinWithPhotos { mannequin, photos })
    }

    async fn update_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        changes: MannequinChanges,
    ) -> Result<Mannequin, Error> {
        let mut mannequin = self.owned_mannequin(user_id, mannequin_id).await?;
        changes.apply_to(&mut mannequin, self.clock.utc());
        if !self.mannequins.update(&mannequin).await? {
            return Err(mannequin_not_found(mannequin_id));
        }
        Ok(mannequin)
    }

    async fn delete_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<(), Error> {
        self.owned_mannequin(user_id, mannequin_id).await?;
        let photos = self.photos_of(mannequin_id).await?;
        if !self.mannequins.delete_for_user(user_id, mannequin_id).await? {
            return Err(mannequin_not_found(mannequin_id));
        }
        discard_stored_objects(
            self.storage.as_ref(),
            photos.into_iter().filter_map(|photo| photo.external_id),
        )
        .await;
        Ok(())
    }

    async fn add_photo(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        photo: PhotoDraft,
    ) -> Result<MannequinPhoto, Error> {
        self.owned_mannequin(user_id, mannequin_id).await?;
        let photo = self.build_photo(*mannequin_id, photo);
        if photo.is_primary {
            self.mannequins.clear_primary(mannequin_id).await?;
        }
        self.mannequins
            .insert_photos(std::slice::from_ref(&photo))
            .await?;
        Ok(photo)
    }

    async fn delete_photo(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<(), Error> {
        self.owned_mannequin(user_id, mannequin_id).await?;
        let removed = self
            .mannequins
            .delete_photo(mannequin_id, photo_id)
            .await?
            .ok_or_else(|| photo_not_found(photo_id))?;
        discard_stored_objects(self.storage.as_ref(), removed.external_id).await;
        Ok(())
    }

    async fn set_primary_photo(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<(), Error> {
        self.owned_mannequin(user_id, mannequin_id).await?;
        let photos = self.photos_of(mannequin_id).await?;
        if !photos.iter().any(|photo| photo.id == *photo_id) {
            return Err(photo_not_found(photo_id));
        }
        self.mannequins.clear_primary(mannequin_id).await?;
        if !self.mannequins.mark_primary(mannequin_id, photo_id).await? {
            return Err(photo_not_found(photo_id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mannequin_service_tests.rs"]
mod tests;
