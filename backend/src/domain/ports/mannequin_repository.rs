//! Port for mannequin and mannequin photo persistence.

use async_trait::async_trait;

use crate::domain::{Mannequin, MannequinId, MannequinPhoto, PhotoId, UserId};

use super::repository_error;

repository_error!(MannequinRepositoryError, "mannequin repository");

/// Access to mannequins and their photos.
///
/// Mannequin lookups are owner-scoped. Photo operations take a mannequin id
/// the caller has already verified.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MannequinRepository: Send + Sync {
    /// Mannequins owned by `user_id`, oldest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Mannequin>, MannequinRepositoryError>;

    async fn find_for_user(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<Option<Mannequin>, MannequinRepositoryError>;

    /// Mannequins among `mannequin_ids` that `user_id` owns.
    async fn find_many_for_user(
        &self,
        user_id: &UserId,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<Mannequin>, MannequinRepositoryError>;

    async fn insert(&self, mannequin: &Mannequin) -> Result<(), MannequinRepositoryError>;

    async fn update(&self, mannequin: &Mannequin) -> Result<bool, MannequinRepositoryError>;

    /// Delete the mannequin together with its photos and junction rows.
    async fn delete_for_user(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<bool, MannequinRepositoryError>;

    /// Photos of every listed mannequin in one batch, oldest first.
    async fn photos_for(
        &self,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<MannequinPhoto>, MannequinRepositoryError>;

    async fn insert_photos(&self, photos: &[MannequinPhoto]) -> Result<(), MannequinRepositoryError>;

    /// Delete one photo, returning the removed row.
    async fn delete_photo(
        &self,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<Option<MannequinPhoto>, MannequinRepositoryError>;

    /// Clear the primary flag on every photo of the mannequin.
    async fn clear_primary(&self, mannequin_id: &MannequinId)
    -> Result<(), MannequinRepositoryError>;

    /// Flag one photo as primary. Returns `false` when the photo is not
    /// attached to the mannequin.
    async fn mark_primary(
        &self,
        mannequin_id: &MannequinId,
        photo_id: &PhotoId,
    ) -> Result<bool, MannequinRepositoryError>;
}

