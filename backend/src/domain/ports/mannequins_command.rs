//! Driving port for mannequin and photo mutations.

use async_trait::async_trait;

use crate::domain::{
    Error, Mannequin, MannequinChanges, MannequinDraft, MannequinId, MannequinPhoto,
    MannequinWithPhotos, PhotoDraft, PhotoId, UserId,
};

/// Write operations over the signed-in user's mannequins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MannequinsCommand: Send + Sync {
    /// Create a mannequin with its initial photos. The first photo becomes
    /// primary.
    async fn create_mannequin(
        &self,
        user_id: &UserId,
        draft: MannequinDraft,
        photos: Vec<PhotoDraft>,
    ) -> Result<MannequinWithPhotos, Error>;

    async fn update_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        changes: MannequinChanges,
    ) -> Result<Mannequin, Error>;

    async fn delete_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<(), Error>;

    async fn add_photo(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        photo: PhotoDraft,
    ) -> Result<MannequinPhoto, Error>;

    async fn delete_photo(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<(), Error>;

    /// Make `photo_id` the only primary photo of the mannequin.
    async fn set_primary_photo(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<(), Error>;
}
