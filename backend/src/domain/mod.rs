//! Domain primitives, aggregates and services.
//!
//! Purpose: define the brand, mannequin and asset model, the read-path
//! composition rules, and the services that implement the driving ports.
//! Nothing here knows about HTTP or SQL; adapters reach the domain through
//! [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error payload with stable codes.
//! - Brand / Mannequin / BrandAsset: persisted aggregates and their drafts.
//! - select_primary_photo: the single thumbnail rule for every read path.
//! - active_brand: selection policy plus list ordering and highlighting.
//! - *Service: implementations of the driving ports.

pub mod active_brand;
pub mod association;
mod association_service;
pub mod brand;
pub mod brand_asset;
mod brand_asset_service;
mod brand_service;
pub mod error;
pub mod ids;
pub mod listing;
pub mod mannequin;
mod mannequin_service;
mod media_cleanup;
pub mod ports;
pub mod trace_id;
mod upload_service;
pub mod user;

pub use self::active_brand::{
    ACTIVE_BRAND_COOKIE, ACTIVE_BRAND_MAX_AGE_SECS, ActiveBrandStore, BrandListItem,
    HighlightedMannequin, order_brands_active_first, order_mannequins_active_first, resolve,
    set_active_brand,
};
pub use self::association::{BrandMannequinLink, dedupe_preserving_order};
pub use self::association_service::AssociationService;
pub use self::brand::{
    Brand, BrandChanges, BrandDraft, BrandName, BrandSummary, BrandValidationError,
};
pub use self::brand_asset::{
    AssetCategory, AssetDraft, AssetType, AssetValidationError, BrandAsset,
};
pub use self::brand_asset_service::BrandAssetService;
pub use self::brand_service::BrandService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{AssetId, BrandId, LinkId, MannequinId, PhotoId};
pub use self::listing::{
    BrandMannequinItem, BrandWithMannequins, MannequinListItem, MannequinSelectItem,
    compose_brand_with_mannequins, compose_mannequin_list, compose_select_items,
    select_primary_photo,
};
pub use self::mannequin::{
    BIRTH_YEAR_MIN, Mannequin, MannequinChanges, MannequinDraft, MannequinPhoto,
    MannequinValidationError, MannequinWithBrands, MannequinWithPhotos, PhotoDraft,
};
pub use self::mannequin_service::MannequinService;
pub use self::trace_id::TraceId;
pub use self::upload_service::{DEFAULT_UPLOAD_FOLDER, UploadService, validate_upload_folder};
pub use self::user::{UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use atelier::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such brand"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
