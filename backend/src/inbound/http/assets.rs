//! Brand asset HTTP handlers.
//!
//! ```text
//! GET    /api/v1/brands/{id}/assets?category=
//! POST   /api/v1/brands/{id}/assets
//! DELETE /api/v1/brands/{id}/assets
//! GET    /api/v1/assets/{id}
//! DELETE /api/v1/assets/{id}
//! GET    /api/v1/asset-categories
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    ApiResult, AssetCategory, AssetDraft, AssetId, AssetType, BrandAsset, BrandId, Error,
};
use crate::inbound::http::schemas::{BrandAssetSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, asset_error, missing_field_error, parse_id};

const BRAND_ID: FieldName = FieldName::new("id");
const ASSET_ID: FieldName = FieldName::new("id");

/// Optional category filter for asset listings.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssetListQuery {
    /// One of `logo`, `product`, `social`, `background`, `reference`, `other`.
    pub category: Option<String>,
}

/// Request payload recording an uploaded asset.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "image")]
    pub asset_type: Option<String>,
    #[schema(example = "logo")]
    pub category: Option<String>,
    pub url: Option<String>,
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
}

/// Number of assets removed by a bulk delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedAssetsResponse {
    pub deleted: usize,
}

/// Category value and its display label.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssetCategoryOption {
    #[schema(example = "social")]
    pub value: String,
    #[schema(example = "Social Media")]
    pub label: String,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(FieldName::new(field)))
}

fn parse_create_request(payload: CreateAssetRequest) -> Result<AssetDraft, Error> {
    let name = required(payload.name, "name")?;
    let asset_type: AssetType = required(payload.asset_type, "type")?
        .parse()
        .map_err(asset_error)?;
    let category: AssetCategory = required(payload.category, "category")?
        .parse()
        .map_err(asset_error)?;
    let url = required(payload.url, "url")?;

    AssetDraft::new(name, asset_type, category, url)
        .map_err(asset_error)?
        .with_external_id(payload.external_id.as_deref())
        .with_dimensions(payload.width, payload.height)
        .with_mime_type(payload.mime_type.as_deref())
        .with_file_size(payload.file_size)
        .map_err(asset_error)
}

fn parse_category(query: AssetListQuery) -> Result<Option<AssetCategory>, Error> {
    query
        .category
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.parse::<AssetCategory>().map_err(asset_error))
        .transpose()
}

/// List a brand's assets, optionally restricted to one category.
#[utoipa::path(
    get,
    path = "/api/v1/brands/{id}/assets",
    params(("id" = String, Path, description = "Brand id"), AssetListQuery),
    responses(
        (status = 200, description = "Assets", body = Vec<BrandAssetSchema>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Brand not found", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "listBrandAssets"
)]
#[get("/brands/{id}/assets")]
pub async fn list_brand_assets(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    query: web::Query<AssetListQuery>,
) -> ApiResult<web::Json<Vec<BrandAsset>>> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    let category = parse_category(query.into_inner())?;
    let assets = state
        .assets
        .list_assets(&user_id, &brand_id, category)
        .await?;
    Ok(web::Json(assets))
}

#[utoipa::path(
    post,
    path = "/api/v1/brands/{id}/assets",
    params(("id" = String, Path, description = "Brand id")),
    request_body = CreateAssetRequest,
    responses(
        (status = 201, description = "Asset recorded", body = BrandAssetSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Brand not found", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "createBrandAsset"
)]
#[post("/brands/{id}/assets")]
pub async fn create_brand_asset(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<CreateAssetRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    let draft = parse_create_request(payload.into_inner())?;
    let asset = state
        .assets_command
        .create_asset(&user_id, &brand_id, draft)
        .await?;
    Ok(HttpResponse::Created().json(asset))
}

/// Delete every asset of a brand and their stored objects.
#[utoipa::path(
    delete,
    path = "/api/v1/brands/{id}/assets",
    params(("id" = String, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Assets deleted", body = DeletedAssetsResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Brand not found", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "deleteBrandAssets"
)]
#[delete("/brands/{id}/assets")]
pub async fn delete_brand_assets(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedAssetsResponse>> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    let deleted = state
        .assets_command
        .delete_assets_for_brand(&user_id, &brand_id)
        .await?;
    Ok(web::Json(DeletedAssetsResponse { deleted }))
}

#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}",
    params(("id" = String, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset", body = BrandAssetSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "getAsset"
)]
#[get("/assets/{id}")]
pub async fn get_asset(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<BrandAsset>> {
    let user_id = session.require_user_id()?;
    let asset_id: AssetId = parse_id(&path, ASSET_ID)?;
    Ok(web::Json(state.assets.get_asset(&user_id, &asset_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/assets/{id}",
    params(("id" = String, Path, description = "Asset id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "deleteAsset"
)]
#[delete("/assets/{id}")]
pub async fn delete_asset(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let asset_id: AssetId = parse_id(&path, ASSET_ID)?;
    state.assets_command.delete_asset(&user_id, &asset_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Every asset category with its display label.
#[utoipa::path(
    get,
    path = "/api/v1/asset-categories",
    responses(
        (status = 200, description = "Categories", body = Vec<AssetCategoryOption>),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "listAssetCategories"
)]
#[get("/asset-categories")]
pub async fn asset_categories(
    session: SessionContext,
) -> ApiResult<web::Json<Vec<AssetCategoryOption>>> {
    session.require_user_id()?;
    let options = AssetCategory::ALL
        .into_iter()
        .map(|category| AssetCategoryOption {
            value: category.as_str().to_owned(),
            label: category.label().to_owned(),
        })
        .collect();
    Ok(web::Json(options))
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
