//! Cookie-backed active-brand selection.
//!
//! ```text
//! GET /api/v1/active-brand
//! PUT /api/v1/active-brand
//! ```
//!
//! [`ActiveBrandCookie`] is the only [`ActiveBrandStore`] backend. It reads
//! `current_brand` from the request and records writes so handlers can
//! attach the updated cookie to whatever response they build.

use std::future::{Ready, ready};

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, HttpResponseBuilder, get, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    ACTIVE_BRAND_COOKIE, ACTIVE_BRAND_MAX_AGE_SECS, ActiveBrandStore, ApiResult, BrandId,
    resolve, set_active_brand,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_id};

/// Per-request view of the `current_brand` cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveBrandCookie {
    current: Option<BrandId>,
    pending: Option<BrandId>,
}

impl ActiveBrandCookie {
    /// Read the cookie from `req`. A value that is not a UUID counts as
    /// no selection.
    pub fn from_http_request(req: &HttpRequest) -> Self {
        let current = req.cookie(ACTIVE_BRAND_COOKIE).and_then(|cookie| {
            cookie
                .value()
                .parse::<BrandId>()
                .inspect_err(|error| debug!(%error, "ignoring malformed active-brand cookie"))
                .ok()
        });
        Self {
            current,
            pending: None,
        }
    }

    /// Cookie to send back, present only after a write.
    pub fn pending_cookie(&self) -> Option<Cookie<'static>> {
        self.pending.map(|brand_id| {
            Cookie::build(ACTIVE_BRAND_COOKIE, brand_id.to_string())
                .path("/")
                .max_age(Duration::seconds(ACTIVE_BRAND_MAX_AGE_SECS))
                .finish()
        })
    }

    /// Attach the pending cookie, if any, to `response`.
    pub fn attach(&self, response: &mut HttpResponseBuilder) {
        if let Some(cookie) = self.pending_cookie() {
            response.cookie(cookie);
        }
    }
}

impl ActiveBrandStore for ActiveBrandCookie {
    fn read(&self) -> Option<BrandId> {
        self.pending.or(self.current)
    }

    fn write(&mut self, brand_id: BrandId) {
        self.pending = Some(brand_id);
    }
}

impl FromRequest for ActiveBrandCookie {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}

/// Active brand selection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBrandResponse {
    /// `null` when the user has no brands and nothing is stored.
    #[schema(format = Uuid)]
    pub brand_id: Option<String>,
}

/// Request payload selecting the active brand.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveBrandRequest {
    #[schema(format = Uuid)]
    pub brand_id: Option<String>,
}

/// Resolve the active brand, defaulting to the first brand.
#[utoipa::path(
    get,
    path = "/api/v1/active-brand",
    description = "Return the stored selection, or select and store the user's first brand.",
    responses(
        (status = 200, description = "Active brand", body = ActiveBrandResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["active-brand"],
    operation_id = "getActiveBrand"
)]
#[get("/active-brand")]
pub async fn get_active_brand(
    state: web::Data<HttpState>,
    session: SessionContext,
    mut active: ActiveBrandCookie,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let brands = state.brands.list_brand_summaries(&user_id).await?;
    let brand_id = resolve(&mut active, &brands);

    let mut response = HttpResponse::Ok();
    active.attach(&mut response);
    Ok(response.json(ActiveBrandResponse {
        brand_id: brand_id.map(|id| id.to_string()),
    }))
}

/// Select the active brand. The brand must belong to the caller.
#[utoipa::path(
    put,
    path = "/api/v1/active-brand",
    request_body = SetActiveBrandRequest,
    responses(
        (status = 200, description = "Selection stored", body = ActiveBrandResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Brand not found", body = ErrorSchema)
    ),
    tags = ["active-brand"],
    operation_id = "setActiveBrand"
)]
#[put("/active-brand")]
pub async fn put_active_brand(
    state: web::Data<HttpState>,
    session: SessionContext,
    mut active: ActiveBrandCookie,
    payload: web::Json<SetActiveBrandRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let field = FieldName::new("brandId");
    let raw = payload
        .into_inner()
        .brand_id
        .ok_or_else(|| missing_field_error(field))?;
    let brand_id: BrandId = parse_id(&raw, field)?;
    let brand = state.brands.get_brand(&user_id, &brand_id).await?;
    set_active_brand(&mut active, brand.id);

    let mut response = HttpResponse::Ok();
    active.attach(&mut response);
    Ok(response.json(ActiveBrandResponse {
        brand_id: Some(brand.id.to_string()),
    }))
}

#[cfg(test)]
#[path = "active_brand_tests.rs"]
mod tests;
