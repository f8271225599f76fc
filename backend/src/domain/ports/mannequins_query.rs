//! Driving port for mannequin reads.

use async_trait::async_trait;

use crate::domain::{
    Error, MannequinId, MannequinListItem, MannequinSelectItem, MannequinWithBrands,
    MannequinWithPhotos, UserId,
};

/// Read operations over the signed-in user's mannequins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MannequinsQuery: Send + Sync {
    /// Mannequins with primary photo and linked brand ids.
    async fn list_mannequins(&self, user_id: &UserId) -> Result<Vec<MannequinListItem>, Error>;

    /// Id, name and primary photo url for pickers.
    async fn list_for_select(&self, user_id: &UserId) -> Result<Vec<MannequinSelectItem>, Error>;

    async fn get_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<MannequinWithPhotos, Error>;

    async fn get_mannequin_with_brands(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
    ) -> Result<MannequinWithBrands, Error>;
}
