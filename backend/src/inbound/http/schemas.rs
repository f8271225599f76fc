//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`; these mirrors describe their JSON
//! shape (camelCase, ids as UUID strings, timestamps as RFC 3339) and are
//! registered under the domain names.

#![expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode, rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    InvalidRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    ServiceUnavailable,
    InternalError,
}

/// API error payload.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "brand name must not be empty")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    trace_id: Option<String>,
    /// Usually `{ "field": ..., "code": ... }` for validation failures.
    details: Option<serde_json::Value>,
}

#[derive(ToSchema)]
#[schema(as = Brand, rename_all = "camelCase")]
pub struct BrandSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: String,
    #[schema(example = "Acme")]
    name: String,
    description: Option<String>,
    logo_url: Option<String>,
    /// Opaque style guide document.
    style_guide: Option<String>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
}

/// Brand list entry with the active-brand highlight.
#[derive(ToSchema)]
#[schema(as = BrandListItem, rename_all = "camelCase")]
pub struct BrandListItemSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: String,
    name: String,
    description: Option<String>,
    logo_url: Option<String>,
    style_guide: Option<String>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    is_active: bool,
}

/// Id and name, used by the brand switcher and linked-brand lists.
#[derive(ToSchema)]
#[schema(as = BrandSummary)]
pub struct BrandSummarySchema {
    #[schema(format = Uuid)]
    id: String,
    name: String,
}

#[derive(ToSchema)]
#[schema(as = Mannequin, rename_all = "camelCase")]
pub struct MannequinSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: String,
    #[schema(example = "Lena")]
    name: String,
    birth_year: Option<i32>,
    height_cm: Option<i32>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
}

#[derive(ToSchema)]
#[schema(as = MannequinPhoto, rename_all = "camelCase")]
pub struct MannequinPhotoSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    mannequin_id: String,
    url: String,
    external_id: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
    is_primary: bool,
    #[schema(format = DateTime)]
    created_at: String,
}

/// Mannequin list entry: mannequin fields plus thumbnail, brand ids and
/// the active-brand highlight.
#[derive(ToSchema)]
#[schema(as = MannequinListItem, rename_all = "camelCase")]
pub struct MannequinListItemSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: String,
    name: String,
    birth_year: Option<i32>,
    height_cm: Option<i32>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    primary_photo: Option<MannequinPhotoSchema>,
    brand_ids: Vec<String>,
    in_active_brand: bool,
}

#[derive(ToSchema)]
#[schema(as = MannequinSelectItem, rename_all = "camelCase")]
pub struct MannequinSelectItemSchema {
    #[schema(format = Uuid)]
    id: String,
    name: String,
    primary_photo_url: Option<String>,
}

/// Mannequin fields plus every attached photo.
#[derive(ToSchema)]
#[schema(as = MannequinWithPhotos, rename_all = "camelCase")]
pub struct MannequinWithPhotosSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: String,
    name: String,
    birth_year: Option<i32>,
    height_cm: Option<i32>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    photos: Vec<MannequinPhotoSchema>,
}

#[derive(ToSchema)]
#[schema(as = MannequinWithBrands, rename_all = "camelCase")]
pub struct MannequinWithBrandsSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: String,
    name: String,
    birth_year: Option<i32>,
    height_cm: Option<i32>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    photos: Vec<MannequinPhotoSchema>,
    brands: Vec<BrandSummarySchema>,
}

/// Mannequin linked to a brand, with its thumbnail.
#[derive(ToSchema)]
#[schema(as = BrandMannequinItem, rename_all = "camelCase")]
pub struct BrandMannequinItemSchema {
    #[schema(format = Uuid)]
    id: String,
    name: String,
    birth_year: Option<i32>,
    height_cm: Option<i32>,
    primary_photo: Option<MannequinPhotoSchema>,
}

/// Brand fields plus its linked mannequins in link order.
#[derive(ToSchema)]
#[schema(as = BrandWithMannequins, rename_all = "camelCase")]
pub struct BrandWithMannequinsSchema {
    #[schema(format = Uuid)]
    id: String,
    name: String,
    description: Option<String>,
    logo_url: Option<String>,
    style_guide: Option<String>,
    mannequins: Vec<BrandMannequinItemSchema>,
}

#[derive(ToSchema)]
#[schema(as = BrandMannequinLink, rename_all = "camelCase")]
pub struct BrandMannequinLinkSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    brand_id: String,
    #[schema(format = Uuid)]
    mannequin_id: String,
    #[schema(format = DateTime)]
    created_at: String,
}

#[derive(ToSchema)]
#[schema(as = BrandAsset, rename_all = "camelCase")]
pub struct BrandAssetSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    brand_id: String,
    name: String,
    #[schema(rename = "type", example = "image")]
    asset_type: String,
    #[schema(example = "logo")]
    category: String,
    url: String,
    external_id: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
    file_size: Option<i64>,
    mime_type: Option<String>,
    #[schema(format = DateTime)]
    created_at: String,
}

/// Result of an upload.
#[derive(ToSchema)]
#[schema(as = StoredObject, rename_all = "camelCase")]
pub struct StoredObjectSchema {
    url: String,
    #[schema(example = "mannequins/9f86d081884c7d659a2feaa0c55ad015")]
    external_id: String,
    width: Option<i32>,
    height: Option<i32>,
}
