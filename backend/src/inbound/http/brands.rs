//! Brand HTTP handlers.
//!
//! ```text
//! GET    /api/v1/brands
//! GET    /api/v1/brands/switcher
//! POST   /api/v1/brands
//! GET    /api/v1/brands/{id}
//! PATCH  /api/v1/brands/{id}
//! DELETE /api/v1/brands/{id}
//! GET    /api/v1/brands/{id}/mannequins
//! PUT    /api/v1/brands/{id}/mannequins
//! PUT    /api/v1/brands/{id}/mannequins/{mannequinId}
//! DELETE /api/v1/brands/{id}/mannequins/{mannequinId}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, Brand, BrandChanges, BrandDraft, BrandId, BrandMannequinLink, BrandName,
    BrandSummary, BrandWithMannequins, Error, MannequinId, order_brands_active_first, resolve,
};
use crate::inbound::http::active_brand::ActiveBrandCookie;
use crate::inbound::http::schemas::{
    BrandListItemSchema, BrandMannequinLinkSchema, BrandSchema, BrandSummarySchema,
    BrandWithMannequinsSchema, ErrorSchema,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, brand_error, missing_field_error, parse_id, parse_id_list,
};

const BRAND_ID: FieldName = FieldName::new("id");
const MANNEQUIN_ID: FieldName = FieldName::new("mannequinId");

/// Request payload for creating a brand.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    #[schema(example = "Acme")]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Partial brand update. Omitted fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub style_guide: Option<String>,
}

/// Complete desired set of mannequins for a brand.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetBrandMannequinsRequest {
    pub mannequin_ids: Option<Vec<String>>,
}

fn parse_create_request(payload: CreateBrandRequest) -> Result<BrandDraft, Error> {
    let name = payload
        .name
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
    BrandDraft::new(name, payload.description.as_deref()).map_err(brand_error)
}

fn parse_update_request(payload: UpdateBrandRequest) -> Result<BrandChanges, Error> {
    Ok(BrandChanges {
        name: payload
            .name
            .map(BrandName::new)
            .transpose()
            .map_err(brand_error)?,
        description: payload.description,
        logo_url: payload.logo_url,
        style_guide: payload.style_guide,
    })
}

/// List the caller's brands, active brand first.
#[utoipa::path(
    get,
    path = "/api/v1/brands",
    description = "Resolves the active brand (possibly setting the cookie) and floats it to the top.",
    responses(
        (status = 200, description = "Brands", body = Vec<BrandListItemSchema>),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "listBrands"
)]
#[get("/brands")]
pub async fn list_brands(
    state: web::Data<HttpState>,
    session: SessionContext,
    mut active: ActiveBrandCookie,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let brands = state.brands.list_brands(&user_id).await?;
    let summaries: Vec<BrandSummary> = brands.iter().map(Brand::summary).collect();
    let active_id = resolve(&mut active, &summaries);

    let mut response = HttpResponse::Ok();
    active.attach(&mut response);
    Ok(response.json(order_brands_active_first(brands, active_id)))
}

/// Id and name of every brand, for the brand switcher.
#[utoipa::path(
    get,
    path = "/api/v1/brands/switcher",
    responses(
        (status = 200, description = "Brand summaries", body = Vec<BrandSummarySchema>),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "listBrandSummaries"
)]
#[get("/brands/switcher")]
pub async fn brand_switcher(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<BrandSummary>>> {
    let user_id = session.require_user_id()?;
    Ok(web::Json(state.brands.list_brand_summaries(&user_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 201, description = "Brand created", body = BrandSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "createBrand"
)]
#[post("/brands")]
pub async fn create_brand(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateBrandRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let draft = parse_create_request(payload.into_inner())?;
    let brand = state.brands_command.create_brand(&user_id, draft).await?;
    Ok(HttpResponse::Created().json(brand))
}

#[utoipa::path(
    get,
    path = "/api/v1/brands/{id}",
    params(("id" = String, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand", body = BrandSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "getBrand"
)]
#[get("/brands/{id}")]
pub async fn get_brand(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Brand>> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    Ok(web::Json(state.brands.get_brand(&user_id, &brand_id).await?))
}

#[utoipa::path(
    patch,
    path = "/api/v1/brands/{id}",
    params(("id" = String, Path, description = "Brand id")),
    request_body = UpdateBrandRequest,
    responses(
        (status = 200, description = "Updated brand", body = BrandSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "updateBrand"
)]
#[patch("/brands/{id}")]
pub async fn update_brand(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateBrandRequest>,
) -> ApiResult<web::Json<Brand>> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    let changes = parse_update_request(payload.into_inner())?;
    let brand = state
        .brands_command
        .update_brand(&user_id, &brand_id, changes)
        .await?;
    Ok(web::Json(brand))
}

/// Delete a brand with its links and assets.
#[utoipa::path(
    delete,
    path = "/api/v1/brands/{id}",
    params(("id" = String, Path, description = "Brand id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "deleteBrand"
)]
#[delete("/brands/{id}")]
pub async fn delete_brand(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    state.brands_command.delete_brand(&user_id, &brand_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Brand with its linked mannequins and their thumbnails.
#[utoipa::path(
    get,
    path = "/api/v1/brands/{id}/mannequins",
    params(("id" = String, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand with mannequins", body = BrandWithMannequinsSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "getBrandMannequins"
)]
#[get("/brands/{id}/mannequins")]
pub async fn get_brand_mannequins(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<BrandWithMannequins>> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    let view = state
        .brands
        .get_brand_with_mannequins(&user_id, &brand_id)
        .await?;
    Ok(web::Json(view))
}

/// Replace the brand's mannequins with exactly the given set.
#[utoipa::path(
    put,
    path = "/api/v1/brands/{id}/mannequins",
    params(("id" = String, Path, description = "Brand id")),
    request_body = SetBrandMannequinsRequest,
    responses(
        (status = 200, description = "Resulting links", body = Vec<BrandMannequinLinkSchema>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "setBrandMannequins"
)]
#[put("/brands/{id}/mannequins")]
pub async fn set_brand_mannequins(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<SetBrandMannequinsRequest>,
) -> ApiResult<web::Json<Vec<BrandMannequinLink>>> {
    let user_id = session.require_user_id()?;
    let brand_id: BrandId = parse_id(&path, BRAND_ID)?;
    let field = FieldName::new("mannequinIds");
    let raw = payload
        .into_inner()
        .mannequin_ids
        .ok_or_else(|| missing_field_error(field))?;
    let mannequin_ids: Vec<MannequinId> = parse_id_list(&raw, field)?;
    let links = state
        .associations
        .set_mannequins_for_brand(&user_id, &brand_id, mannequin_ids)
        .await?;
    Ok(web::Json(links))
}

/// Link one mannequin. Linking twice returns the existing link.
#[utoipa::path(
    put,
    path = "/api/v1/brands/{id}/mannequins/{mannequinId}",
    params(
        ("id" = String, Path, description = "Brand id"),
        ("mannequinId" = String, Path, description = "Mannequin id")
    ),
    responses(
        (status = 200, description = "Link", body = BrandMannequinLinkSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "addBrandMannequin"
)]
#[put("/brands/{id}/mannequins/{mannequin_id}")]
pub async fn add_brand_mannequin(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<BrandMannequinLink>> {
    let user_id = session.require_user_id()?;
    let (raw_brand, raw_mannequin) = path.into_inner();
    let brand_id: BrandId = parse_id(&raw_brand, BRAND_ID)?;
    let mannequin_id: MannequinId = parse_id(&raw_mannequin, MANNEQUIN_ID)?;
    let link = state
        .associations
        .add_link(&user_id, &brand_id, &mannequin_id)
        .await?;
    Ok(web::Json(link))
}

/// Unlink one mannequin. Unlinking an absent pair succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/brands/{id}/mannequins/{mannequinId}",
    params(
        ("id" = String, Path, description = "Brand id"),
        ("mannequinId" = String, Path, description = "Mannequin id")
    ),
    responses(
        (status = 204, description = "Unlinked"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["brands"],
    operation_id = "removeBrandMannequin"
)]
#[delete("/brands/{id}/mannequins/{mannequin_id}")]
pub async fn remove_brand_mannequin(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let (raw_brand, raw_mannequin) = path.into_inner();
    let brand_id: BrandId = parse_id(&raw_brand, BRAND_ID)?;
    let mannequin_id: MannequinId = parse_id(&raw_mannequin, MANNEQUIN_ID)?;
    state
        .associations
        .remove_link(&user_id, &brand_id, &mannequin_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "brands_tests.rs"]
mod tests;
