//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live next to
//! each row.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    AssetCategory, AssetType, AssetValidationError, Brand, BrandAsset, BrandMannequinLink,
    Mannequin, MannequinPhoto, UserId,
};

use super::schema::{brand_assets, brand_mannequins, brands, mannequin_photos, mannequins};

// ---------------------------------------------------------------------------
// Brands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = brands)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BrandRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub style_guide: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BrandRow> for Brand {
    fn from(row: BrandRow) -> Self {
        Self {
            id: row.id.into(),
            user_id: UserId::from_uuid(row.user_id),
            name: row.name,
            description: row.description,
            logo_url: row.logo_url,
            style_guide: row.style_guide,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = brands)]
pub(crate) struct NewBrandRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub style_guide: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Brand> for NewBrandRow<'a> {
    fn from(brand: &'a Brand) -> Self {
        Self {
            id: *brand.id.as_uuid(),
            user_id: *brand.user_id.as_uuid(),
            name: &brand.name,
            description: brand.description.as_deref(),
            logo_url: brand.logo_url.as_deref(),
            style_guide: brand.style_guide.as_deref(),
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        }
    }
}

/// Mutable brand columns. `None` is written as SQL `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = brands)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct BrandUpdate<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub style_guide: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Brand> for BrandUpdate<'a> {
    fn from(brand: &'a Brand) -> Self {
        Self {
            name: &brand.name,
            description: brand.description.as_deref(),
            logo_url: brand.logo_url.as_deref(),
            style_guide: brand.style_guide.as_deref(),
            updated_at: brand.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Mannequins and photos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = mannequins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MannequinRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MannequinRow> for Mannequin {
    fn from(row: MannequinRow) -> Self {
        Self {
            id: row.id.into(),
            user_id: UserId::from_uuid(row.user_id),
            name: row.name,
            birth_year: row.birth_year,
            height_cm: row.height_cm,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = mannequins)]
pub(crate) struct NewMannequinRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: &'a str,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Mannequin> for NewMannequinRow<'a> {
    fn from(mannequin: &'a Mannequin) -> Self {
        Self {
            id: *mannequin.id.as_uuid(),
            user_id: *mannequin.user_id.as_uuid(),
            name: &mannequin.name,
            birth_year: mannequin.birth_year,
            height_cm: mannequin.height_cm,
            created_at: mannequin.created_at,
            updated_at: mannequin.updated_at,
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = mannequins)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct MannequinUpdate<'a> {
    pub name: &'a str,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Mannequin> for MannequinUpdate<'a> {
    fn from(mannequin: &'a Mannequin) -> Self {
        Self {
            name: &mannequin.name,
            birth_year: mannequin.birth_year,
            height_cm: mannequin.height_cm,
            updated_at: mannequin.updated_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = mannequin_photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MannequinPhotoRow {
    pub id: Uuid,
    pub mannequin_id: Uuid,
    pub url: String,
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MannequinPhotoRow> for MannequinPhoto {
    fn from(row: MannequinPhotoRow) -> Self {
        Self {
            id: row.id.into(),
            mannequin_id: row.mannequin_id.into(),
            url: row.url,
            external_id: row.external_id,
            width: row.width,
            height: row.height,
            is_primary: row.is_primary,
            created_at: row.created_at,
        }
    }
}

impl From<&MannequinPhoto> for MannequinPhotoRow {
    fn from(photo: &MannequinPhoto) -> Self {
        Self {
            id: *photo.id.as_uuid(),
            mannequin_id: *photo.mannequin_id.as_uuid(),
            url: photo.url.clone(),
            external_id: photo.external_id.clone(),
            width: photo.width,
            height: photo.height,
            is_primary: photo.is_primary,
            created_at: photo.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Brand assets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = brand_assets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BrandAssetRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub name: String,
    pub asset_type: String,
    pub category: String,
    pub url: String,
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BrandAssetRow> for BrandAsset {
    type Error = AssetValidationError;

    fn try_from(row: BrandAssetRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.into(),
            brand_id: row.brand_id.into(),
            name: row.name,
            asset_type: row.asset_type.parse::<AssetType>()?,
            category: row.category.parse::<AssetCategory>()?,
            url: row.url,
            external_id: row.external_id,
            width: row.width,
            height: row.height,
            file_size: row.file_size,
            mime_type: row.mime_type,
            created_at: row.created_at,
        })
    }
}

impl From<&BrandAsset> for BrandAssetRow {
    fn from(asset: &BrandAsset) -> Self {
        Self {
            id: *asset.id.as_uuid(),
            brand_id: *asset.brand_id.as_uuid(),
            name: asset.name.clone(),
            asset_type: asset.asset_type.as_str().to_owned(),
            category: asset.category.as_str().to_owned(),
            url: asset.url.clone(),
            external_id: asset.external_id.clone(),
            width: asset.width,
            height: asset.height,
            file_size: asset.file_size,
            mime_type: asset.mime_type.clone(),
            created_at: asset.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Brand/mannequin junction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = brand_mannequins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BrandMannequinRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub mannequin_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<BrandMannequinRow> for BrandMannequinLink {
    fn from(row: BrandMannequinRow) -> Self {
        Self {
            id: row.id.into(),
            brand_id: row.brand_id.into(),
            mannequin_id: row.mannequin_id.into(),
            created_at: row.created_at,
        }
    }
}

impl From<&BrandMannequinLink> for BrandMannequinRow {
    fn from(link: &BrandMannequinLink) -> Self {
        Self {
            id: *link.id.as_uuid(),
            brand_id: *link.brand_id.as_uuid(),
            mannequin_id: *link.mannequin_id.as_uuid(),
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::{AssetId, BrandId};

    fn asset_row(asset_type: &str, category: &str) -> BrandAssetRow {
        BrandAssetRow {
            id: Uuid::new_v4(),
            brand_id: Uuid::new_v4(),
            name: "Logo".to_owned(),
            asset_type: asset_type.to_owned(),
            category: category.to_owned(),
            url: "https://cdn.example/logo.png".to_owned(),
            external_id: None,
            width: None,
            height: None,
            file_size: None,
            mime_type: None,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn asset_row_decodes_closed_enums() {
        let asset = BrandAsset::try_from(asset_row("font", "reference")).expect("valid row");
        assert_eq!(asset.asset_type, AssetType::Font);
        assert_eq!(asset.category, AssetCategory::Reference);
    }

    #[rstest]
    fn asset_row_with_unknown_category_is_rejected() {
        let result = BrandAsset::try_from(asset_row("image", "banner"));
        assert_eq!(
            result,
            Err(AssetValidationError::UnknownCategory("banner".to_owned()))
        );
    }

    #[rstest]
    fn asset_encodes_wire_names() {
        let asset = BrandAsset {
            id: AssetId::random(),
            brand_id: BrandId::random(),
            name: "Hero".to_owned(),
            asset_type: AssetType::Document,
            category: AssetCategory::Other,
            url: "u".to_owned(),
            external_id: None,
            width: None,
            height: None,
            file_size: Some(10),
            mime_type: None,
            created_at: Utc::now(),
        };
        let row = BrandAssetRow::from(&asset);
        assert_eq!(row.asset_type, "document");
        assert_eq!(row.category, "other");
    }
}
