//! Tests for the brand service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{
    BrandRepositoryError, MockBrandAssetRepository, MockBrandMannequinRepository,
    MockBrandRepository, MockMannequinRepository, MockObjectStorage, ObjectStorageError,
};
use crate::domain::{
    AssetCategory, AssetId, AssetType, BrandAsset, BrandMannequinLink, BrandName, ErrorCode,
};
use crate::test_support::{
    SteppingClock, brand_for, fixture_time, mannequin_for, photo_for,
};

type Service = BrandService<
    MockBrandRepository,
    MockMannequinRepository,
    MockBrandMannequinRepository,
    MockBrandAssetRepository,
    MockObjectStorage,
>;

#[derive(Default)]
struct Mocks {
    brands: MockBrandRepository,
    mannequins: MockMannequinRepository,
    links: MockBrandMannequinRepository,
    assets: MockBrandAssetRepository,
    storage: MockObjectStorage,
}

impl Mocks {
    fn into_service(self, clock: Arc<SteppingClock>) -> Service {
        BrandService::new(
            Arc::new(self.brands),
            Arc::new(self.mannequins),
            Arc::new(self.links),
            Arc::new(self.assets),
            Arc::new(self.storage),
            clock,
        )
    }
}

fn asset_with_file(brand_id: BrandId, external_id: &str) -> BrandAsset {
    BrandAsset {
        id: AssetId::random(),
        brand_id,
        name: "Logo".to_owned(),
        asset_type: AssetType::Image,
        category: AssetCategory::Logo,
        url: format!("https://cdn.example/{external_id}"),
        external_id: Some(external_id.to_owned()),
        width: None,
        height: None,
        file_size: None,
        mime_type: None,
        created_at: fixture_time(),
    }
}

#[rstest]
#[tokio::test]
async fn create_brand_stamps_owner_and_times() {
    let user_id = UserId::random();
    let mut mocks = Mocks::default();
    mocks
        .brands
        .expect_insert()
        .withf(move |brand| brand.user_id == user_id && brand.name == "Acme")
        .times(1)
        .return_once(|_| Ok(()));
    let service = mocks.into_service(Arc::new(SteppingClock::default()));

    let draft = BrandDraft::new(" Acme ", Some(" Outdoor ")).expect("valid draft");
    let brand = service
        .create_brand(&user_id, draft)
        .await
        .expect("create succeeds");

    assert_eq!(brand.description.as_deref(), Some("Outdoor"));
    assert_eq!(brand.created_at, fixture_time());
    assert_eq!(brand.updated_at, fixture_time());
}

#[rstest]
#[tokio::test]
async fn get_brand_hides_foreign_brands_as_not_found() {
    let mut mocks = Mocks::default();
    mocks
        .brands
        .expect_find_for_user()
        .times(1)
        .return_once(|_, _| Ok(None));
    let service = mocks.into_service(Arc::new(SteppingClock::default()));

    let error = service
        .get_brand(&UserId::random(), &BrandId::random())
        .await
        .expect_err("brand is not visible");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn connection_failures_surface_as_service_unavailable() {
    let mut mocks = Mocks::default();
    mocks
        .brands
        .expect_list_for_user()
        .return_once(|_| Err(BrandRepositoryError::connection("pool timed out")));
    let service = mocks.into_service(Arc::new(SteppingClock::default()));

    let error = service
        .list_brands(&UserId::random())
        .await
        .expect_err("repository down");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn update_brand_applies_changes_and_bumps_updated_at() {
    let user_id = UserId::random();
    let existing = brand_for(user_id, "Acme");
    let brand_id = existing.id;
    let clock = Arc::new(SteppingClock::default());
    clock.advance_seconds(60);

    let mut mocks = Mocks::default();
    mocks
        .brands
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(existing)));
    mocks
        .brands
        .expect_update()
        .withf(|brand| brand.name == "Acme Studio")
        .times(1)
        .return_once(|_| Ok(true));
    let service = mocks.into_service(clock);

    let changes = BrandChanges {
        name: Some(BrandName::new("Acme Studio").expect("valid name")),
        ..BrandChanges::default()
    };
    let updated = service
        .update_brand(&user_id, &brand_id, changes)
        .await
        .expect("update succeeds");

    assert_eq!(updated.created_at, fixture_time());
    assert_eq!(updated.updated_at, fixture_time() + chrono::TimeDelta::seconds(60));
}

#[rstest]
#[tokio::test]
async fn brand_with_mannequins_batches_mannequins_and_photos() {
    let user_id = UserId::random();
    let brand = brand_for(user_id, "Acme");
    let brand_id = brand.id;
    let lena = mannequin_for(user_id, "Lena");
    let lena_id = lena.id;
    let links = vec![BrandMannequinLink::new(brand_id, lena_id, fixture_time())];

    let mut mocks = Mocks::default();
    mocks
        .brands
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(brand)));
    mocks
        .links
        .expect_links_for_brand()
        .return_once(move |_| Ok(links));
    mocks
        .mannequins
        .expect_find_many_for_user()
        .withf(move |_, ids| ids.to_vec() == vec![lena_id])
        .times(1)
        .return_once(move |_, _| Ok(vec![lena]));
    mocks
        .mannequins
        .expect_photos_for()
        .times(1)
        .return_once(move |_| {
            Ok(vec![
                photo_for(lena_id, "a.jpg", false),
                photo_for(lena_id, "b.jpg", true),
            ])
        });
    let service = mocks.into_service(Arc::new(SteppingClock::default()));

    let view = service
        .get_brand_with_mannequins(&user_id, &brand_id)
        .await
        .expect("view loads");

    assert_eq!(view.mannequins.len(), 1);
    let primary = view.mannequins[0].primary_photo.as_ref().expect("has photo");
    assert_eq!(primary.url, "b.jpg");
}

#[rstest]
#[tokio::test]
async fn brand_without_links_skips_mannequin_queries() {
    let user_id = UserId::random();
    let brand = brand_for(user_id, "Acme");
    let brand_id = brand.id;

    let mut mocks = Mocks::default();
    mocks
        .brands
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(brand)));
    mocks
        .links
        .expect_links_for_brand()
        .return_once(|_| Ok(Vec::new()));
    mocks.mannequins.expect_find_many_for_user().never();
    mocks.mannequins.expect_photos_for().never();
    let service = mocks.into_service(Arc::new(SteppingClock::default()));

    let view = service
        .get_brand_with_mannequins(&user_id, &brand_id)
        .await
        .expect("view loads");

    assert!(view.mannequins.is_empty());
}

#[rstest]
#[tokio::test]
async fn delete_brand_removes_row_before_stored_files() {
    let user_id = UserId::random();
    let brand = brand_for(user_id, "Acme");
    let brand_id = brand.id;
    let assets = vec![asset_with_file(brand_id, "brands/logo")];

    let mut mocks = Mocks::default();
    let mut sequence = mockall::Sequence::new();
    mocks
        .brands
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(brand)));
    mocks
        .assets
        .expect_list_for_brand()
        .return_once(move |_, _| Ok(assets));
    mocks
        .brands
        .expect_delete_for_user()
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_, _| Ok(true));
    mocks
        .storage
        .expect_delete()
        .withf(|id| id == "brands/logo")
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_| Err(ObjectStorageError::unavailable("offline")));
    let service = mocks.into_service(Arc::new(SteppingClock::default()));

    service
        .delete_brand(&user_id, &brand_id)
        .await
        .expect("storage failure does not fail the delete");
}
