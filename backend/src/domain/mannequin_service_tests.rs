//! Tests for the mannequin service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{
    MockBrandMannequinRepository, MockBrandRepository, MockMannequinRepository, MockObjectStorage,
};
use crate::domain::{BrandId, BrandMannequinLink, ErrorCode};
use crate::test_support::{SteppingClock, brand_for, fixture_time, mannequin_for, photo_for};

type Service = MannequinService<
    MockMannequinRepository,
    MockBrandMannequinRepository,
    MockBrandRepository,
    MockObjectStorage,
>;

#[derive(Default)]
struct Mocks {
    mannequins: MockMannequinRepository,
    links: MockBrandMannequinRepository,
    brands: MockBrandRepository,
    storage: MockObjectStorage,
}

impl Mocks {
    fn into_service(self) -> Service {
        MannequinService::new(
            Arc::new(self.mannequins),
            Arc::new(self.links),
            Arc::new(self.brands),
            Arc::new(self.storage),
            Arc::new(SteppingClock::default()),
        )
    }
}

#[rstest]
#[tokio::test]
async fn empty_list_skips_batch_queries() {
    let mut mocks = Mocks::default();
    mocks
        .mannequins
        .expect_list_for_user()
        .return_once(|_| Ok(Vec::new()));
    mocks.mannequins.expect_photos_for().never();
    mocks.links.expect_links_for_mannequins().never();

    let items = mocks
        .into_service()
        .list_mannequins(&UserId::random())
        .await
        .expect("list succeeds");

    assert!(items.is_empty());
}

#[rstest]
#[tokio::test]
async fn list_uses_one_photo_batch_and_one_link_batch() {
    let user_id = UserId::random();
    let lena = mannequin_for(user_id, "Lena");
    let noor = mannequin_for(user_id, "Noor");
    let (lena_id, noor_id) = (lena.id, noor.id);
    let brand_id = BrandId::random();

    let mut mocks = Mocks::default();
    mocks
        .mannequins
        .expect_list_for_user()
        .return_once(move |_| Ok(vec![lena, noor]));
    mocks
        .mannequins
        .expect_photos_for()
        .withf(move |ids| ids.to_vec() == vec![lena_id, noor_id])
        .times(1)
        .return_once(move |_| Ok(vec![photo_for(noor_id, "noor.jpg", false)]));
    mocks
        .links
        .expect_links_for_mannequins()
        .times(1)
        .return_once(move |_| Ok(vec![BrandMannequinLink::new(brand_id, lena_id, fixture_time())]));

    let items = mocks
        .into_service()
        .list_mannequins(&user_id)
        .await
        .expect("list succeeds");

    assert_eq!(items[0].brand_ids, vec![brand_id]);
    assert!(items[0].primary_photo.is_none());
    assert_eq!(
        items[1].primary_photo.as_ref().map(|p| p.url.as_str()),
        Some("noor.jpg")
    );
}

#[rstest]
#[case::none_flagged(&[false, false, false], 0)]
#[case::second_flagged(&[false, true, false], 1)]
#[case::several_flagged(&[false, true, true], 1)]
#[tokio::test]
async fn create_keeps_exactly_one_primary_photo(#[case] flags: &[bool], #[case] expected: usize) {
    let mut mocks = Mocks::default();
    mocks.mannequins.expect_insert().return_once(|_| Ok(()));
    mocks
        .mannequins
        .expect_insert_photos()
        .times(1)
        .return_once(|_| Ok(()));

    let draft = MannequinDraft::new("Lena", Some(1998), Some(176)).expect("valid draft");
    let photos = flags
        .iter()
        .enumerate()
        .map(|(index, flag)| {
            PhotoDraft::new(format!("https://cdn.example/{index}.jpg"))
                .expect("valid photo")
                .primary(*flag)
        })
        .collect();
    let created = mocks
        .into_service()
        .create_mannequin(&UserId::random(), draft, photos)
        .await
        .expect("create succeeds");

    let primaries: Vec<_> = created
        .photos
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_primary)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(primaries, vec![expected]);
    assert!(created.photos.iter().all(|p| p.mannequin_id == created.mannequin.id));
}

#[rstest]
#[tokio::test]
async fn adding_a_primary_photo_clears_the_previous_primary() {
    let user_id = UserId::random();
    let lena = mannequin_for(user_id, "Lena");
    let lena_id = lena.id;

    let mut mocks = Mocks::default();
    let mut sequence = mockall::Sequence::new();
    mocks
        .mannequins
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(lena)));
    mocks
        .mannequins
        .expect_clear_primary()
        .withf(move |id| *id == lena_id)
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_| Ok(()));
    mocks
        .mannequins
        .expect_insert_photos()
        .withf(|photos| photos.len() == 1 && photos[0].is_primary)
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_| Ok(()));

    let photo = PhotoDraft::new("https://cdn.example/b.jpg")
        .expect("valid photo")
        .primary(true);
    let added = mocks
        .into_service()
        .add_photo(&user_id, &lena_id, photo)
        .await
        .expect("photo added");

    assert!(added.is_primary);
}

#[rstest]
#[tokio::test]
async fn adding_a_plain_photo_keeps_the_current_primary() {
    let user_id = UserId::random();
    let lena = mannequin_for(user_id, "Lena");
    let lena_id = lena.id;

    let mut mocks = Mocks::default();
    mocks
        .mannequins
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(lena)));
    mocks.mannequins.expect_clear_primary().never();
    mocks
        .mannequins
        .expect_insert_photos()
        .times(1)
        .return_once(|_| Ok(()));

    let photo = PhotoDraft::new("https://cdn.example/c.jpg").expect("valid photo");
    let added = mocks
        .into_service()
        .add_photo(&user_id, &lena_id, photo)
        .await
        .expect("photo added");

    assert!(!added.is_primary);
}

#[rstest]
#[tokio::test]
async fn create_without_photos_skips_photo_insert() {
    let mut mocks = Mocks::default();
    mocks.mannequins.expect_insert().return_once(|_| Ok(()));
    mocks.mannequins.expect_insert_photos().never();

    let draft = MannequinDraft::new("Lena", None, None).expect("valid draft");
    let created = mocks
        .into_service()
        .create_mannequin(&UserId::random(), draft, Vec::new())
        .await
        .expect("create succeeds");

    assert!(created.photos.is_empty());
}

#[rstest]
#[tokio::test]
async fn set_primary_clears_before_marking() {
    let user_id = UserId::random();
    let lena = mannequin_for(user_id, "Lena");
    let lena_id = lena.id;
    let target = photo_for(lena_id, "b.jpg", false);
    let target_id = target.id;

    let mut mocks = Mocks::default();
    let mut sequence = mockall::Sequence::new();
    mocks
        .mannequins
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(lena)));
    mocks
        .mannequins
        .expect_photos_for()
        .return_once(move |_| Ok(vec![photo_for(lena_id, "a.jpg", true), target]));
    mocks
        .mannequins
        .expect_clear_primary()
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_| Ok(()));
    mocks
        .mannequins
        .expect_mark_primary()
        .withf(move |_, photo_id| *photo_id == target_id)
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_, _| Ok(true));

    mocks
        .into_service()
        .set_primary_photo(&user_id, &lena_id, &target_id)
        .await
        .expect("primary set");
}

#[rstest]
#[tokio::test]
async fn set_primary_rejects_photo_of_another_mannequin() {
    let user_id = UserId::random();
    let lena = mannequin_for(user_id, "Lena");
    let lena_id = lena.id;

    let mut mocks = Mocks::default();
    mocks
        .mannequins
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(lena)));
    mocks
        .mannequins
        .expect_photos_for()
        .return_once(|_| Ok(Vec::new()));
    mocks.mannequins.expect_clear_primary().never();

    let error = mocks
        .into_service()
        .set_primary_photo(&user_id, &lena_id, &PhotoId::random())
        .await
        .expect_err("photo is not attached");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_photo_discards_stored_file() {
    let user_id = UserId::random();
    let lena = mannequin_for(user_id, "Lena");
    let lena_id = lena.id;
    let mut photo = photo_for(lena_id, "a.jpg", true);
    photo.external_id = Some("mannequins/abc".to_owned());
    let photo_id = photo.id;

    let mut mocks = Mocks::default();
    mocks
        .mannequins
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(lena)));
    mocks
        .mannequins
        .expect_delete_photo()
        .return_once(move |_, _| Ok(Some(photo)));
    mocks
        .storage
        .expect_delete()
        .withf(|id| id == "mannequins/abc")
        .times(1)
        .return_once(|_| Ok(()));

    mocks
        .into_service()
        .delete_photo(&user_id, &lena_id, &photo_id)
        .await
        .expect("photo deleted");
}

#[rstest]
#[tokio::test]
async fn with_brands_resolves_owned_brand_names() {
    let user_id = UserId::random();
    let lena = mannequin_for(user_id, "Lena");
    let lena_id = lena.id;
    let acme = brand_for(user_id, "Acme");
    let acme_id = acme.id;

    let mut mocks = Mocks::default();
    mocks
        .mannequins
        .expect_find_for_user()
        .return_once(move |_, _| Ok(Some(lena)));
    mocks
        .mannequins
        .expect_photos_for()
        .return_once(|_| Ok(Vec::new()));
    mocks
        .links
        .expect_links_for_mannequins()
        .return_once(move |_| Ok(vec![BrandMannequinLink::new(acme_id, lena_id, fixture_time())]));
    mocks
        .brands
        .expect_find_many_for_user()
        .return_once(move |_, _| Ok(vec![acme]));

    let view = mocks
        .into_service()
        .get_mannequin_with_brands(&user_id, &lena_id)
        .await
        .expect("view loads");

    assert_eq!(view.brands.len(), 1);
    assert_eq!(view.brands[0].name, "Acme");
}
