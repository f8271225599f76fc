//! Read-path composition for mannequin and brand listings.
//!
//! Repositories return flat rows; these functions fold photos and junction
//! rows onto their owners. Every view that shows a mannequin thumbnail picks
//! it through [`select_primary_photo`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Brand, BrandId, BrandMannequinLink, Mannequin, MannequinId, MannequinPhoto};

/// Pick the photo that represents a mannequin.
///
/// The first photo flagged primary wins; otherwise the first photo in the
/// order given. Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use atelier::domain::select_primary_photo;
///
/// assert!(select_primary_photo(&[]).is_none());
/// ```
#[must_use]
pub fn select_primary_photo(photos: &[MannequinPhoto]) -> Option<&MannequinPhoto> {
    photos
        .iter()
        .find(|photo| photo.is_primary)
        .or_else(|| photos.first())
}

/// Mannequin row in the dashboard list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MannequinListItem {
    #[serde(flatten)]
    pub mannequin: Mannequin,
    pub primary_photo: Option<MannequinPhoto>,
    pub brand_ids: Vec<BrandId>,
}

/// Compact mannequin entry for pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MannequinSelectItem {
    pub id: MannequinId,
    pub name: String,
    pub primary_photo_url: Option<String>,
}

/// Mannequin shown inside a brand detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMannequinItem {
    #[serde(flatten)]
    pub mannequin: Mannequin,
    pub primary_photo: Option<MannequinPhoto>,
}

/// Brand detail view with its linked mannequins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandWithMannequins {
    #[serde(flatten)]
    pub brand: Brand,
    pub mannequins: Vec<BrandMannequinItem>,
}

fn group_photos(photos: Vec<MannequinPhoto>) -> HashMap<MannequinId, Vec<MannequinPhoto>> {
    let mut grouped: HashMap<MannequinId, Vec<MannequinPhoto>> = HashMap::new();
    for photo in photos {
        grouped.entry(photo.mannequin_id).or_default().push(photo);
    }
    grouped
}

fn primary_of(
    grouped: &HashMap<MannequinId, Vec<MannequinPhoto>>,
    mannequin_id: MannequinId,
) -> Option<MannequinPhoto> {
    grouped
        .get(&mannequin_id)
        .and_then(|photos| select_primary_photo(photos))
        .cloned()
}

/// Attach primary photos and brand ids to each mannequin, keeping the
/// mannequin order.
#[must_use]
pub fn compose_mannequin_list(
    mannequins: Vec<Mannequin>,
    photos: Vec<MannequinPhoto>,
    links: &[BrandMannequinLink],
) -> Vec<MannequinListItem> {
    let photos = group_photos(photos);
    let mut brand_ids: HashMap<MannequinId, Vec<BrandId>> = HashMap::new();
    for link in links {
        brand_ids
            .entry(link.mannequin_id)
            .or_default()
            .push(link.brand_id);
    }

    mannequins
        .into_iter()
        .map(|mannequin| MannequinListItem {
            primary_photo: primary_of(&photos, mannequin.id),
            brand_ids: brand_ids.remove(&mannequin.id).unwrap_or_default(),
            mannequin,
        })
        .collect()
}

#[must_use]
pub fn compose_select_items(
    mannequins: Vec<Mannequin>,
    photos: Vec<MannequinPhoto>,
) -> Vec<MannequinSelectItem> {
    let photos = group_photos(photos);
    mannequins
        .into_iter()
        .map(|mannequin| MannequinSelectItem {
            primary_photo_url: primary_of(&photos, mannequin.id).map(|photo| photo.url),
            id: mannequin.id,
            name: mannequin.name,
        })
        .collect()
}

/// Build the brand detail view. Mannequins follow the order of `links`;
/// links whose mannequin is missing from `mannequins` are skipped.
#[must_use]
pub fn compose_brand_with_mannequins(
    brand: Brand,
    links: &[BrandMannequinLink],
    mannequins: Vec<Mannequin>,
    photos: Vec<MannequinPhoto>,
) -> BrandWithMannequins {
    let photos = group_photos(photos);
    let mut by_id: HashMap<MannequinId, Mannequin> = mannequins
        .into_iter()
        .map(|mannequin| (mannequin.id, mannequin))
        .collect();

    let mannequins = links
        .iter()
        .filter_map(|link| by_id.remove(&link.mannequin_id))
        .map(|mannequin| BrandMannequinItem {
            primary_photo: primary_of(&photos, mannequin.id),
            mannequin,
        })
        .collect();

    BrandWithMannequins { brand, mannequins }
}
