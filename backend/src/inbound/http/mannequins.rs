//! Mannequin and photo HTTP handlers.
//!
//! ```text
//! GET    /api/v1/mannequins
//! GET    /api/v1/mannequins/select
//! POST   /api/v1/mannequins
//! GET    /api/v1/mannequins/{id}
//! PATCH  /api/v1/mannequins/{id}
//! DELETE /api/v1/mannequins/{id}
//! PUT    /api/v1/mannequins/{id}/brands
//! POST   /api/v1/mannequins/{id}/photos
//! DELETE /api/v1/mannequins/{id}/photos/{photoId}
//! PUT    /api/v1/mannequins/{id}/photos/{photoId}/primary
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, BrandId, BrandMannequinLink, Error, Mannequin, MannequinChanges, MannequinDraft,
    MannequinId, MannequinSelectItem, MannequinWithBrands, PhotoDraft, PhotoId,
    order_mannequins_active_first, resolve,
};
use crate::inbound::http::active_brand::ActiveBrandCookie;
use crate::inbound::http::schemas::{
    BrandMannequinLinkSchema, ErrorSchema, MannequinListItemSchema, MannequinPhotoSchema,
    MannequinSchema, MannequinSelectItemSchema, MannequinWithBrandsSchema,
    MannequinWithPhotosSchema,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, mannequin_error, missing_field_error, parse_id, parse_id_list,
};

const MANNEQUIN_ID: FieldName = FieldName::new("id");
const PHOTO_ID: FieldName = FieldName::new("photoId");

/// Photo reference, typically the result of an upload.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRequest {
    pub url: Option<String>,
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_primary: Option<bool>,
}

/// Request payload for creating a mannequin with its initial photos.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMannequinRequest {
    #[schema(example = "Lena")]
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
    #[serde(default)]
    pub photos: Vec<PhotoRequest>,
}

/// Partial mannequin update. Omitted fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMannequinRequest {
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
}

/// Complete desired set of brands for a mannequin.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetMannequinBrandsRequest {
    pub brand_ids: Option<Vec<String>>,
}

fn parse_photo(photo: PhotoRequest) -> Result<PhotoDraft, Error> {
    let url = photo
        .url
        .ok_or_else(|| missing_field_error(FieldName::new("url")))?;
    Ok(PhotoDraft::new(url)
        .map_err(mannequin_error)?
        .with_external_id(photo.external_id.as_deref())
        .with_dimensions(photo.width, photo.height)
        .primary(photo.is_primary.unwrap_or(false)))
}

fn parse_create_request(
    payload: CreateMannequinRequest,
) -> Result<(MannequinDraft, Vec<PhotoDraft>), Error> {
    let name = payload
        .name
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
    let draft = MannequinDraft::new(name, payload.birth_year, payload.height_cm)
        .map_err(mannequin_error)?;
    let photos = payload
        .photos
        .into_iter()
        .map(parse_photo)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((draft, photos))
}

fn parse_update_request(payload: UpdateMannequinRequest) -> Result<MannequinChanges, Error> {
    MannequinChanges::new(payload.name.as_deref(), payload.birth_year, payload.height_cm)
        .map_err(mannequin_error)
}

fn parse_photo_path(path: (String, String)) -> Result<(MannequinId, PhotoId), Error> {
    let (raw_mannequin, raw_photo) = path;
    Ok((
        parse_id(&raw_mannequin, MANNEQUIN_ID)?,
        parse_id(&raw_photo, PHOTO_ID)?,
    ))
}

/// List mannequins, those linked to the active brand first.
#[utoipa::path(
    get,
    path = "/api/v1/mannequins",
    description = "Every mannequin of the caller with thumbnail and brand ids. \
                   The active brand reorders and highlights; it never filters.",
    responses(
        (status = 200, description = "Mannequins", body = Vec<MannequinListItemSchema>),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "listMannequins"
)]
#[get("/mannequins")]
pub async fn list_mannequins(
    state: web::Data<HttpState>,
    session: SessionContext,
    mut active: ActiveBrandCookie,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let brands = state.brands.list_brand_summaries(&user_id).await?;
    let active_id = resolve(&mut active, &brands);
    let items = state.mannequins.list_mannequins(&user_id).await?;

    let mut response = HttpResponse::Ok();
    active.attach(&mut response);
    Ok(response.json(order_mannequins_active_first(items, active_id)))
}

/// Compact list for mannequin pickers.
#[utoipa::path(
    get,
    path = "/api/v1/mannequins/select",
    responses(
        (status = 200, description = "Select entries", body = Vec<MannequinSelectItemSchema>),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "listMannequinsForSelect"
)]
#[get("/mannequins/select")]
pub async fn select_mannequins(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<MannequinSelectItem>>> {
    let user_id = session.require_user_id()?;
    Ok(web::Json(state.mannequins.list_for_select(&user_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/mannequins",
    request_body = CreateMannequinRequest,
    responses(
        (status = 201, description = "Mannequin created", body = MannequinWithPhotosSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "createMannequin"
)]
#[post("/mannequins")]
pub async fn create_mannequin(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateMannequinRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let (draft, photos) = parse_create_request(payload.into_inner())?;
    let created = state
        .mannequins_command
        .create_mannequin(&user_id, draft, photos)
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// Mannequin with every photo and its linked brands.
#[utoipa::path(
    get,
    path = "/api/v1/mannequins/{id}",
    params(("id" = String, Path, description = "Mannequin id")),
    responses(
        (status = 200, description = "Mannequin", body = MannequinWithBrandsSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "getMannequin"
)]
#[get("/mannequins/{id}")]
pub async fn get_mannequin(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<MannequinWithBrands>> {
    let user_id = session.require_user_id()?;
    let mannequin_id: MannequinId = parse_id(&path, MANNEQUIN_ID)?;
    let view = state
        .mannequins
        .get_mannequin_with_brands(&user_id, &mannequin_id)
        .await?;
    Ok(web::Json(view))
}

#[utoipa::path(
    patch,
    path = "/api/v1/mannequins/{id}",
    params(("id" = String, Path, description = "Mannequin id")),
    request_body = UpdateMannequinRequest,
    responses(
        (status = 200, description = "Updated mannequin", body = MannequinSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "updateMannequin"
)]
#[patch("/mannequins/{id}")]
pub async fn update_mannequin(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateMannequinRequest>,
) -> ApiResult<web::Json<Mannequin>> {
    let user_id = session.require_user_id()?;
    let mannequin_id: MannequinId = parse_id(&path, MANNEQUIN_ID)?;
    let changes = parse_update_request(payload.into_inner())?;
    let mannequin = state
        .mannequins_command
        .update_mannequin(&user_id, &mannequin_id, changes)
        .await?;
    Ok(web::Json(mannequin))
}

/// Delete a mannequin with its photos and links.
#[utoipa::path(
    delete,
    path = "/api/v1/mannequins/{id}",
    params(("id" = String, Path, description = "Mannequin id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "deleteMannequin"
)]
#[delete("/mannequins/{id}")]
pub async fn delete_mannequin(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let mannequin_id: MannequinId = parse_id(&path, MANNEQUIN_ID)?;
    state
        .mannequins_command
        .delete_mannequin(&user_id, &mannequin_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Replace the mannequin's brands with exactly the given set.
#[utoipa::path(
    put,
    path = "/api/v1/mannequins/{id}/brands",
    params(("id" = String, Path, description = "Mannequin id")),
    request_body = SetMannequinBrandsRequest,
    responses(
        (status = 200, description = "Resulting links", body = Vec<BrandMannequinLinkSchema>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "setMannequinBrands"
)]
#[put("/mannequins/{id}/brands")]
pub async fn set_mannequin_brands(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<SetMannequinBrandsRequest>,
) -> ApiResult<web::Json<Vec<BrandMannequinLink>>> {
    let user_id = session.require_user_id()?;
    let mannequin_id: MannequinId = parse_id(&path, MANNEQUIN_ID)?;
    let field = FieldName::new("brandIds");
    let raw = payload
        .into_inner()
        .brand_ids
        .ok_or_else(|| missing_field_error(field))?;
    let brand_ids: Vec<BrandId> = parse_id_list(&raw, field)?;
    let links = state
        .associations
        .set_brands_for_mannequin(&user_id, &mannequin_id, brand_ids)
        .await?;
    Ok(web::Json(links))
}

/// Record an uploaded photo. A primary photo demotes the others.
#[utoipa::path(
    post,
    path = "/api/v1/mannequins/{id}/photos",
    params(("id" = String, Path, description = "Mannequin id")),
    request_body = PhotoRequest,
    responses(
        (status = 201, description = "Photo added", body = MannequinPhotoSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "addMannequinPhoto"
)]
#[post("/mannequins/{id}/photos")]
pub async fn add_photo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<PhotoRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let mannequin_id: MannequinId = parse_id(&path, MANNEQUIN_ID)?;
    let draft = parse_photo(payload.into_inner())?;
    let photo = state
        .mannequins_command
        .add_photo(&user_id, &mannequin_id, draft)
        .await?;
    Ok(HttpResponse::Created().json(photo))
}

/// Delete a photo and its stored object.
#[utoipa::path(
    delete,
    path = "/api/v1/mannequins/{id}/photos/{photoId}",
    params(
        ("id" = String, Path, description = "Mannequin id"),
        ("photoId" = String, Path, description = "Photo id")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "deleteMannequinPhoto"
)]
#[delete("/mannequins/{id}/photos/{photo_id}")]
pub async fn delete_photo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let (mannequin_id, photo_id) = parse_photo_path(path.into_inner())?;
    state
        .mannequins_command
        .delete_photo(&user_id, &mannequin_id, &photo_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Make one photo the primary photo of its mannequin.
#[utoipa::path(
    put,
    path = "/api/v1/mannequins/{id}/photos/{photoId}/primary",
    params(
        ("id" = String, Path, description = "Mannequin id"),
        ("photoId" = String, Path, description = "Photo id")
    ),
    responses(
        (status = 204, description = "Primary photo set"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["mannequins"],
    operation_id = "setPrimaryMannequinPhoto"
)]
#[put("/mannequins/{id}/photos/{photo_id}/primary")]
pub async fn set_primary_photo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let (mannequin_id, photo_id) = parse_photo_path(path.into_inner())?;
    state
        .mannequins_command
        .set_primary_photo(&user_id, &mannequin_id, &photo_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "mannequins_tests.rs"]
mod tests;
