//! Tests for mannequin HTTP handlers.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{
    ACTIVE_BRAND_COOKIE, MannequinListItem, MannequinValidationError, MannequinWithPhotos, UserId,
};
use crate::inbound::http::test_utils::{MockPorts, session_cookie_for, test_app};
use crate::test_support::{brand_for, mannequin_for, photo_for};

#[rstest]
fn create_request_builds_photo_drafts() {
    let (draft, photos) = parse_create_request(CreateMannequinRequest {
        name: Some(" Lena ".to_owned()),
        height_cm: Some(176),
        photos: vec![
            PhotoRequest {
                url: Some("https://cdn.example/a.jpg".to_owned()),
                ..PhotoRequest::default()
            },
            PhotoRequest {
                url: Some("https://cdn.example/b.jpg".to_owned()),
                external_id: Some("mannequins/b".to_owned()),
                is_primary: Some(true),
                ..PhotoRequest::default()
            },
        ],
        ..CreateMannequinRequest::default()
    })
    .expect("valid request");

    assert_eq!(draft.name, "Lena");
    assert_eq!(draft.height_cm, Some(176));
    assert!(!photos[0].is_primary);
    assert!(photos[1].is_primary);
    assert_eq!(photos[1].external_id.as_deref(), Some("mannequins/b"));
}

#[rstest]
#[case::early_year(
    CreateMannequinRequest { name: Some("Lena".to_owned()), birth_year: Some(1899), ..CreateMannequinRequest::default() },
    "birthYear"
)]
#[case::zero_height(
    CreateMannequinRequest { name: Some("Lena".to_owned()), height_cm: Some(0), ..CreateMannequinRequest::default() },
    "heightCm"
)]
#[case::photo_without_url(
    CreateMannequinRequest {
        name: Some("Lena".to_owned()),
        photos: vec![PhotoRequest::default()],
        ..CreateMannequinRequest::default()
    },
    "url"
)]
fn create_request_names_offending_field(
    #[case] request: CreateMannequinRequest,
    #[case] field: &str,
) {
    let err = parse_create_request(request).expect_err("invalid request");
    assert_eq!(
        err.details().and_then(|d| d.get("field")),
        Some(&json!(field))
    );
}

#[rstest]
fn update_request_rejects_blank_name() {
    let err = parse_update_request(UpdateMannequinRequest {
        name: Some(" ".to_owned()),
        ..UpdateMannequinRequest::default()
    })
    .expect_err("blank name");
    assert_eq!(
        err.message(),
        MannequinValidationError::EmptyName.to_string()
    );
}

#[rstest]
#[actix_web::test]
async fn list_floats_active_brand_mannequins() {
    let user = UserId::random();
    let brand = brand_for(user, "Acme");
    let brand_id = brand.id;
    let loose = mannequin_for(user, "Ana");
    let linked = mannequin_for(user, "Bea");
    let linked_id = linked.id;
    let summaries = vec![brand.summary()];
    let items = vec![
        MannequinListItem {
            mannequin: loose,
            primary_photo: None,
            brand_ids: Vec::new(),
        },
        MannequinListItem {
            primary_photo: Some(photo_for(linked.id, "https://cdn.example/b.jpg", false)),
            mannequin: linked,
            brand_ids: vec![brand_id],
        },
    ];

    let mut ports = MockPorts::default();
    ports
        .brands
        .expect_list_brand_summaries()
        .return_once(move |_| Ok(summaries));
    ports
        .mannequins
        .expect_list_mannequins()
        .withf(move |id| *id == user)
        .return_once(move |_| Ok(items));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/mannequins")
            .cookie(session)
            .cookie(Cookie::new(ACTIVE_BRAND_COOKIE, brand_id.to_string()))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body[0]["id"], json!(linked_id.to_string()));
    assert_eq!(body[0]["inActiveBrand"], json!(true));
    assert_eq!(body[0]["primaryPhoto"]["url"], json!("https://cdn.example/b.jpg"));
    assert_eq!(body[1]["name"], json!("Ana"));
    assert_eq!(body[1]["inActiveBrand"], json!(false));
}

#[rstest]
#[actix_web::test]
async fn create_forwards_photos_and_returns_created() {
    let user = UserId::random();
    let mannequin = mannequin_for(user, "Lena");
    let photo = photo_for(mannequin.id, "https://cdn.example/a.jpg", true);
    let created = MannequinWithPhotos {
        mannequin,
        photos: vec![photo],
    };

    let mut ports = MockPorts::default();
    ports
        .mannequins_command
        .expect_create_mannequin()
        .withf(move |id, draft, photos| {
            *id == user && draft.name == "Lena" && photos.len() == 1 && photos[0].is_primary
        })
        .return_once(move |_, _, _| Ok(created));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/mannequins")
            .cookie(session)
            .set_json(json!({
                "name": "Lena",
                "photos": [{ "url": "https://cdn.example/a.jpg", "isPrimary": true }]
            }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["name"], json!("Lena"));
    assert!(body.get("mannequin").is_none());
    assert_eq!(body["photos"][0]["isPrimary"], json!(true));
}

#[rstest]
#[actix_web::test]
async fn set_primary_photo_parses_both_ids() {
    let user = UserId::random();
    let mannequin_id = MannequinId::random();
    let photo_id = PhotoId::random();

    let mut ports = MockPorts::default();
    ports
        .mannequins_command
        .expect_set_primary_photo()
        .withf(move |id, mannequin, photo| {
            *id == user && *mannequin == mannequin_id && *photo == photo_id
        })
        .times(1)
        .return_once(|_, _, _| Ok(()));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!(
                "/api/v1/mannequins/{mannequin_id}/photos/{photo_id}/primary"
            ))
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[rstest]
#[actix_web::test]
async fn delete_photo_rejects_malformed_photo_id() {
    let user = UserId::random();
    let app = actix_test::init_service(test_app(MockPorts::default().into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!(
                "/api/v1/mannequins/{}/photos/not-a-photo",
                MannequinId::random()
            ))
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], json!("photoId"));
}

#[rstest]
#[actix_web::test]
async fn select_route_is_not_shadowed_by_id_route() {
    let user = UserId::random();
    let mut ports = MockPorts::default();
    ports
        .mannequins
        .expect_list_for_select()
        .return_once(|_| Ok(Vec::new()));

    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let session = session_cookie_for(&app, &user).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/mannequins/select")
            .cookie(session)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!([]));
}
