//! Port for brand persistence.

use async_trait::async_trait;

use crate::domain::{Brand, BrandId, UserId};

use super::repository_error;

repository_error!(BrandRepositoryError, "brand repository");

/// Owner-scoped access to brand rows.
///
/// Every lookup takes the owning user; a brand owned by someone else is
/// indistinguishable from one that does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Brands owned by `user_id`, oldest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Brand>, BrandRepositoryError>;

    async fn find_for_user(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<Option<Brand>, BrandRepositoryError>;

    /// Brands among `brand_ids` that `user_id` owns. Unknown ids are skipped.
    async fn find_many_for_user(
        &self,
        user_id: &UserId,
        brand_ids: &[BrandId],
    ) -> Result<Vec<Brand>, BrandRepositoryError>;

    async fn insert(&self, brand: &Brand) -> Result<(), BrandRepositoryError>;

    /// Persist the mutable columns of `brand`. Returns `false` when no row
    /// matched the id and owner.
    async fn update(&self, brand: &Brand) -> Result<bool, BrandRepositoryError>;

    /// Delete the brand; junction rows and assets go with it.
    async fn delete_for_user(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<bool, BrandRepositoryError>;
}
