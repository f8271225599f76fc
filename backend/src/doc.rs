//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api/v1` handler and the health probes, the
//! schema mirrors from [`crate::inbound::http::schemas`], and the session
//! cookie security scheme. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::active_brand::{ActiveBrandResponse, SetActiveBrandRequest};
use crate::inbound::http::assets::{AssetCategoryOption, CreateAssetRequest, DeletedAssetsResponse};
use crate::inbound::http::brands::{
    CreateBrandRequest, SetBrandMannequinsRequest, UpdateBrandRequest,
};
use crate::inbound::http::mannequins::{
    CreateMannequinRequest, PhotoRequest, SetMannequinBrandsRequest, UpdateMannequinRequest,
};
use crate::inbound::http::schemas::{
    BrandAssetSchema, BrandListItemSchema, BrandMannequinItemSchema, BrandMannequinLinkSchema,
    BrandSchema, BrandSummarySchema, BrandWithMannequinsSchema, ErrorCodeSchema, ErrorSchema,
    MannequinListItemSchema, MannequinPhotoSchema, MannequinSchema, MannequinSelectItemSchema,
    MannequinWithBrandsSchema, MannequinWithPhotosSchema, StoredObjectSchema,
};
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Signed session cookie issued by the sign-in service.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Atelier backend API",
        description = "Brands, mannequins, their associations and brand assets for one signed-in user.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::active_brand::get_active_brand,
        crate::inbound::http::active_brand::put_active_brand,
        crate::inbound::http::brands::list_brands,
        crate::inbound::http::brands::brand_switcher,
        crate::inbound::http::brands::create_brand,
        crate::inbound::http::brands::get_brand,
        crate::inbound::http::brands::update_brand,
        crate::inbound::http::brands::delete_brand,
        crate::inbound::http::brands::get_brand_mannequins,
        crate::inbound::http::brands::set_brand_mannequins,
        crate::inbound::http::brands::add_brand_mannequin,
        crate::inbound::http::brands::remove_brand_mannequin,
        crate::inbound::http::assets::list_brand_assets,
        crate::inbound::http::assets::create_brand_asset,
        crate::inbound::http::assets::delete_brand_assets,
        crate::inbound::http::assets::get_asset,
        crate::inbound::http::assets::delete_asset,
        crate::inbound::http::assets::asset_categories,
        crate::inbound::http::mannequins::list_mannequins,
        crate::inbound::http::mannequins::select_mannequins,
        crate::inbound::http::mannequins::create_mannequin,
        crate::inbound::http::mannequins::get_mannequin,
        crate::inbound::http::mannequins::update_mannequin,
        crate::inbound::http::mannequins::delete_mannequin,
        crate::inbound::http::mannequins::set_mannequin_brands,
        crate::inbound::http::mannequins::add_photo,
        crate::inbound::http::mannequins::delete_photo,
        crate::inbound::http::mannequins::set_primary_photo,
        crate::inbound::http::uploads::upload_media,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        BrandSchema,
        BrandListItemSchema,
        BrandSummarySchema,
        BrandWithMannequinsSchema,
        BrandMannequinItemSchema,
        BrandMannequinLinkSchema,
        MannequinSchema,
        MannequinPhotoSchema,
        MannequinListItemSchema,
        MannequinSelectItemSchema,
        MannequinWithPhotosSchema,
        MannequinWithBrandsSchema,
        BrandAssetSchema,
        StoredObjectSchema,
        ActiveBrandResponse,
        SetActiveBrandRequest,
        CreateBrandRequest,
        UpdateBrandRequest,
        SetBrandMannequinsRequest,
        CreateMannequinRequest,
        UpdateMannequinRequest,
        PhotoRequest,
        SetMannequinBrandsRequest,
        CreateAssetRequest,
        DeletedAssetsResponse,
        AssetCategoryOption,
    )),
    tags(
        (name = "health", description = "Endpoints for health checks"),
        (name = "active-brand", description = "Per-browser active brand selection"),
        (name = "brands", description = "Brands and their mannequin links"),
        (name = "mannequins", description = "Mannequins, photos and their brand links"),
        (name = "assets", description = "Brand media assets"),
        (name = "uploads", description = "Raw media uploads")
    )
)]
pub struct ApiDoc;
