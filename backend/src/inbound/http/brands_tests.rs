//! Tests for brand HTTP handlers.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{ACTIVE_BRAND_COOKIE, LinkId, UserId};
use crate::inbound::http::test_utils::{MockPorts, session_cookie_for, test_app};
use crate::test_support::{brand_for, fixture_time};

#[rstest]
fn update_request_validates_only_present_name() {
    let changes = parse_update_request(UpdateBrandRequest {
        logo_url: Some("https://cdn.example/logo.png".to_owned()),
        ..UpdateBrandRequest::default()
    })
    .expect("valid changes");
    assert!(changes.name.is_none());
    assert_eq!(changes.logo_url.as_deref(), Some("https://cdn.example/logo.png"));

    let err = parse_update_request(UpdateBrandRequest {
        name: Some("   ".to_owned()),
        ..UpdateBrandRequest::default()
    })
    .expect_err("blank name");
    assert_eq!(
        err.details().and_then(|d| d.get("field")),
        Some(&json!("name"))
    );
}

#[rstest]
#[actix_web::test]
async fn list_puts_active_brand_first() {
    let user = UserId::random();
    let first = brand_for(user, "X");
    let second = brand_for(user, "Y");
    let second_id = second.id;
    let brands = vec![first.clone(), second.clone()];

    let mut ports = MockPorts::default();
    ports
        .brands
        .expect_list_brands()
        .withf(move |id| *id == user)
        .return_once(move |_| Ok(brands));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/brands")
            .cookie(session)
            .cookie(Cookie::new(ACTIVE_BRAND_COOKIE, second_id.to_string()))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    let items = body.as_array().expect("array body");
    assert_eq!(items[0]["id"], json!(second_id.to_string()));
    assert_eq!(items[0]["isActive"], json!(true));
    assert_eq!(items[1]["name"], json!("X"));
    assert_eq!(items[1]["isActive"], json!(false));
}

#[rstest]
#[actix_web::test]
async fn list_without_session_is_unauthorised() {
    let app = actix_test::init_service(test_app(MockPorts::default().into_state())).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/brands").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], json!("unauthorized"));
}

#[rstest]
#[actix_web::test]
async fn create_returns_created_brand() {
    let user = UserId::random();
    let brand = brand_for(user, "Acme");
    let expected_id = brand.id;

    let mut ports = MockPorts::default();
    ports
        .brands_command
        .expect_create_brand()
        .withf(move |id, draft| *id == user && draft.name.as_ref() == "Acme")
        .return_once(move |_, _| Ok(brand));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/brands")
            .cookie(session)
            .set_json(json!({ "name": "  Acme  " }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"], json!(expected_id.to_string()));
}

#[rstest]
#[case::missing(json!({}), "missing_field")]
#[case::blank(json!({ "name": " " }), "empty_name")]
#[actix_web::test]
async fn create_rejects_bad_names(#[case] payload: Value, #[case] code: &str) {
    let user = UserId::random();
    let app = actix_test::init_service(test_app(MockPorts::default().into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/brands")
            .cookie(session)
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], json!("name"));
    assert_eq!(body["details"]["code"], json!(code));
}

#[rstest]
#[actix_web::test]
async fn foreign_brand_is_not_found() {
    let user = UserId::random();
    let brand_id = BrandId::random();
    let mut ports = MockPorts::default();
    ports
        .brands
        .expect_get_brand()
        .return_once(|_, _| Err(Error::not_found("brand not found")));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/brands/{brand_id}"))
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn set_mannequins_passes_parsed_ids_in_order() {
    let user = UserId::random();
    let brand_id = BrandId::random();
    let first = MannequinId::random();
    let second = MannequinId::random();
    let expected = vec![first, second];
    let links: Vec<BrandMannequinLink> = expected
        .iter()
        .map(|mannequin_id| BrandMannequinLink {
            id: LinkId::random(),
            brand_id,
            mannequin_id: *mannequin_id,
            created_at: fixture_time(),
        })
        .collect();

    let mut ports = MockPorts::default();
    ports
        .associations
        .expect_set_mannequins_for_brand()
        .withf(move |id, brand, ids| *id == user && *brand == brand_id && *ids == expected)
        .return_once(move |_, _, _| Ok(links));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/brands/{brand_id}/mannequins"))
            .cookie(session)
            .set_json(json!({ "mannequinIds": [first.to_string(), second.to_string()] }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[1]["mannequinId"], json!(second.to_string()));
}

#[rstest]
#[actix_web::test]
async fn set_mannequins_reports_bad_id_index() {
    let user = UserId::random();
    let app = actix_test::init_service(test_app(MockPorts::default().into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/brands/{}/mannequins", BrandId::random()))
            .cookie(session)
            .set_json(json!({ "mannequinIds": [MannequinId::random().to_string(), "oops"] }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], json!("mannequinIds"));
    assert_eq!(body["details"]["index"], json!(1));
}

#[rstest]
#[actix_web::test]
async fn remove_link_returns_no_content() {
    let user = UserId::random();
    let brand_id = BrandId::random();
    let mannequin_id = MannequinId::random();
    let mut ports = MockPorts::default();
    ports
        .associations
        .expect_remove_link()
        .withf(move |id, brand, mannequin| {
            *id == user && *brand == brand_id && *mannequin == mannequin_id
        })
        .times(1)
        .return_once(|_, _, _| Ok(()));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/brands/{brand_id}/mannequins/{mannequin_id}"))
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
