//! Driving port for brand reads.

use async_trait::async_trait;

use crate::domain::{Brand, BrandId, BrandSummary, BrandWithMannequins, Error, UserId};

/// Read operations over the signed-in user's brands.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandsQuery: Send + Sync {
    /// Every brand the user owns, oldest first.
    async fn list_brands(&self, user_id: &UserId) -> Result<Vec<Brand>, Error>;

    /// Id/name pairs for the brand switcher, in the same order as
    /// [`BrandsQuery::list_brands`].
    async fn list_brand_summaries(&self, user_id: &UserId) -> Result<Vec<BrandSummary>, Error>;

    /// Returns `not_found` for unknown and foreign brands alike.
    async fn get_brand(&self, user_id: &UserId, brand_id: &BrandId) -> Result<Brand, Error>;

    /// Brand detail with linked mannequins and their primary photos.
    async fn get_brand_with_mannequins(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
    ) -> Result<BrandWithMannequins, Error>;
}
