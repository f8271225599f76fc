//! Raw media uploads.
//!
//! ```text
//! POST /api/v1/uploads?folder=
//! ```
//!
//! The request body is stored as-is. The returned `url` and `externalId`
//! are what clients then record as a mannequin photo or brand asset.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{ApiResult, DEFAULT_UPLOAD_FOLDER};
use crate::inbound::http::schemas::{ErrorSchema, StoredObjectSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Target folder for an upload.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadQuery {
    /// Lowercase slug; defaults to `mannequins`.
    pub folder: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/uploads",
    params(UploadQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Object stored", body = StoredObjectSchema),
        (status = 400, description = "Empty body or invalid folder", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 413, description = "Body too large"),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["uploads"],
    operation_id = "uploadMedia"
)]
#[post("/uploads")]
pub async fn upload_media(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let folder = query
        .into_inner()
        .folder
        .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_owned());
    let stored = state
        .uploads
        .upload(&user_id, body.to_vec(), &folder)
        .await?;
    Ok(HttpResponse::Created().json(stored))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::StoredObject;
    use crate::inbound::http::test_utils::{MockPorts, session_cookie_for, test_app};

    #[rstest]
    #[case::default_folder("/api/v1/uploads", "mannequins")]
    #[case::explicit_folder("/api/v1/uploads?folder=brand-assets", "brand-assets")]
    #[actix_web::test]
    async fn forwards_body_to_folder(#[case] uri: &str, #[case] folder: &'static str) {
        let user = UserId::random();
        let mut ports = MockPorts::default();
        ports
            .uploads
            .expect_upload()
            .withf(move |id, data, target| *id == user && data == b"jpeg" && target == folder)
            .return_once(move |_, _, target| {
                Ok(StoredObject {
                    url: format!("https://media.example/{target}/abc"),
                    external_id: format!("{target}/abc"),
                    width: None,
                    height: None,
                })
            });

        let app = actix_test::init_service(test_app(ports.into_state())).await;
        let session = session_cookie_for(&app, &user).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(uri)
                .cookie(session)
                .set_payload(&b"jpeg"[..])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["externalId"], json!(format!("{folder}/abc")));
    }

    #[rstest]
    #[actix_web::test]
    async fn requires_session() {
        let app = actix_test::init_service(test_app(MockPorts::default().into_state())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/uploads")
                .set_payload(&b"jpeg"[..])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
