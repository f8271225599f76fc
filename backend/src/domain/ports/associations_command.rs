//! Driving port for brand/mannequin association edits.

use async_trait::async_trait;

use crate::domain::{BrandId, BrandMannequinLink, Error, MannequinId, UserId};

/// Edits to the many-to-many relation between brands and mannequins.
///
/// Brand-side operations require the user to own the brand; the
/// mannequin-side replacement requires ownership of the mannequin. Failing
/// either check reports `not_found`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssociationsCommand: Send + Sync {
    /// Replace every link of `brand_id` with `mannequin_ids`. Repeated ids
    /// are collapsed.
    async fn set_mannequins_for_brand(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        mannequin_ids: Vec<MannequinId>,
    ) -> Result<Vec<BrandMannequinLink>, Error>;

    /// Replace every link of `mannequin_id` with `brand_ids`.
    async fn set_brands_for_mannequin(
        &self,
        user_id: &UserId,
        mannequin_id: &MannequinId,
        brand_ids: Vec<BrandId>,
    ) -> Result<Vec<BrandMannequinLink>, Error>;

    /// Link a mannequin to a brand, returning the existing row if present.
    async fn add_link(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<BrandMannequinLink, Error>;

    /// Unlink a mannequin from a brand. Absent links are not an error.
    async fn remove_link(
        &self,
        user_id: &UserId,
        brand_id: &BrandId,
        mannequin_id: &MannequinId,
    ) -> Result<(), Error>;
}
