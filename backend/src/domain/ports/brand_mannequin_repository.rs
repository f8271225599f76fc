//! Port for the brand/mannequin junction table.

use async_trait::async_trait;

use crate::domain::{BrandId, BrandMannequinLink, MannequinId};

use super::repository_error;

repository_error!(BrandMannequinRepositoryError, "brand mannequin repository");

/// Raw junction row access. Ownership is enforced by the calling service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandMannequinRepository: Send + Sync {
    /// Links of one brand, oldest first.
    async fn links_for_brand(
        &self,
        brand_id: &BrandId,
    ) -> Result<Vec<BrandMannequinLink>, BrandMannequinRepositoryError>;

    /// Links of every listed mannequin in one batch.
    async fn links_for_mannequins(
        &self,
        mannequin_ids: &[MannequinId],
    ) -> Result<Vec<BrandMannequinLink>, BrandMannequinRepositoryError>;

    async fn find_link(
        &self,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<Option<BrandMannequinLink>, BrandMannequinRepositoryError>;

    /// Insert rows in one statement. Pairs that already exist are skipped.
    async fn insert_links(
        &self,
        links: &[BrandMannequinLink],
    ) -> Result<(), BrandMannequinRepositoryError>;

    async fn delete_for_brand(&self, brand_id: &BrandId)
    -> Result<usize, BrandMannequinRepositoryError>;

    async fn delete_for_mannequin(
        &self,
        mannequin_id: &MannequinId,
    ) -> Result<usize, BrandMannequinRepositoryError>;

    async fn delete_link(
        &self,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<usize, BrandMannequinRepositoryError>;
}

