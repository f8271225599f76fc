//! Tests for brand asset HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::UserId;
use crate::inbound::http::test_utils::{MockPorts, session_cookie_for, test_app};
use crate::test_support::fixture_time;

fn asset_for(brand_id: BrandId, category: AssetCategory) -> BrandAsset {
    BrandAsset {
        id: AssetId::random(),
        brand_id,
        name: "Wordmark".to_owned(),
        asset_type: AssetType::Image,
        category,
        url: "https://cdn.example/wordmark.svg".to_owned(),
        external_id: Some("brand-assets/wordmark".to_owned()),
        width: None,
        height: None,
        file_size: Some(2048),
        mime_type: Some("image/svg+xml".to_owned()),
        created_at: fixture_time(),
    }
}

fn complete_request() -> CreateAssetRequest {
    CreateAssetRequest {
        name: Some("Wordmark".to_owned()),
        asset_type: Some("image".to_owned()),
        category: Some("logo".to_owned()),
        url: Some("https://cdn.example/wordmark.svg".to_owned()),
        ..CreateAssetRequest::default()
    }
}

#[rstest]
#[case::unknown_type(CreateAssetRequest { asset_type: Some("gif".to_owned()), ..complete_request() }, "type", "unknown_type")]
#[case::unknown_category(CreateAssetRequest { category: Some("banner".to_owned()), ..complete_request() }, "category", "unknown_category")]
#[case::missing_url(CreateAssetRequest { url: None, ..complete_request() }, "url", "missing_field")]
#[case::negative_size(CreateAssetRequest { file_size: Some(-1), ..complete_request() }, "fileSize", "negative_file_size")]
fn create_request_rejects_invalid_fields(
    #[case] request: CreateAssetRequest,
    #[case] field: &str,
    #[case] code: &str,
) {
    let err = parse_create_request(request).expect_err("invalid asset");
    let details = err.details().expect("details");
    assert_eq!(details["field"], json!(field));
    assert_eq!(details["code"], json!(code));
}

#[rstest]
#[case::absent(None, None)]
#[case::empty(Some(""), None)]
#[case::known(Some("social"), Some(AssetCategory::Social))]
fn category_filter_parses(#[case] raw: Option<&str>, #[case] expected: Option<AssetCategory>) {
    let parsed = parse_category(AssetListQuery {
        category: raw.map(str::to_owned),
    })
    .expect("valid filter");
    assert_eq!(parsed, expected);
}

#[rstest]
#[actix_web::test]
async fn list_forwards_category_filter() {
    let user = UserId::random();
    let brand_id = BrandId::random();
    let asset = asset_for(brand_id, AssetCategory::Logo);

    let mut ports = MockPorts::default();
    ports
        .assets
        .expect_list_assets()
        .withf(move |id, brand, category| {
            *id == user && *brand == brand_id && *category == Some(AssetCategory::Logo)
        })
        .return_once(move |_, _, _| Ok(vec![asset]));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/brands/{brand_id}/assets?category=logo"))
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body[0]["type"], json!("image"));
    assert_eq!(body[0]["category"], json!("logo"));
    assert_eq!(body[0]["fileSize"], json!(2048));
}

#[rstest]
#[actix_web::test]
async fn list_rejects_unknown_category() {
    let user = UserId::random();
    let app = actix_test::init_service(test_app(MockPorts::default().into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/brands/{}/assets?category=banner", BrandId::random()))
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn bulk_delete_reports_count() {
    let user = UserId::random();
    let brand_id = BrandId::random();
    let mut ports = MockPorts::default();
    ports
        .assets_command
        .expect_delete_assets_for_brand()
        .withf(move |id, brand| *id == user && *brand == brand_id)
        .return_once(|_, _| Ok(3));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/brands/{brand_id}/assets"))
            .cookie(session)
            .to_request(),
    )
    .await;

    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({ "deleted": 3 }));
}

#[rstest]
#[actix_web::test]
async fn categories_are_labelled() {
    let user = UserId::random();
    let app = actix_test::init_service(test_app(MockPorts::default().into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/asset-categories")
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    let options = body.as_array().expect("array");
    assert_eq!(options.len(), AssetCategory::ALL.len());
    assert!(options.contains(&json!({ "value": "social", "label": "Social Media" })));
}
