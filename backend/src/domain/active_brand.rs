//! Active-brand selection.
//!
//! The active brand is a per-browser preference. It never narrows what a
//! query returns; it only decides which entries float to the top of lists
//! and which are highlighted. Storage is abstracted behind
//! [`ActiveBrandStore`] so the policy here stays independent of cookies.

use serde::{Deserialize, Serialize};

use super::{Brand, BrandId, BrandSummary, MannequinListItem};

/// Cookie that carries the active brand id.
pub const ACTIVE_BRAND_COOKIE: &str = "current_brand";

/// Lifetime of the active-brand selection, in seconds (one year).
pub const ACTIVE_BRAND_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// Read/write access to the stored active-brand selection.
#[cfg_attr(test, mockall::automock)]
pub trait ActiveBrandStore {
    /// Currently stored selection, if any.
    fn read(&self) -> Option<BrandId>;

    /// Replace the stored selection.
    fn write(&mut self, brand_id: BrandId);
}

/// Resolve the active brand for a request.
///
/// A stored selection is returned untouched, even when it names a brand not
/// in `brands`. Without one, the first listed brand is selected and written
/// back so later requests agree.
pub fn resolve<S>(store: &mut S, brands: &[BrandSummary]) -> Option<BrandId>
where
    S: ActiveBrandStore + ?Sized,
{
    if let Some(current) = store.read() {
        return Some(current);
    }
    let first = brands.first()?.id;
    store.write(first);
    Some(first)
}

/// Overwrite the active brand. Ownership is checked by callers that need it.
pub fn set_active_brand<S>(store: &mut S, brand_id: BrandId)
where
    S: ActiveBrandStore + ?Sized,
{
    store.write(brand_id);
}

/// Brand list entry with its highlight flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandListItem {
    #[serde(flatten)]
    pub brand: Brand,
    pub is_active: bool,
}

/// Mannequin list entry flagged when linked to the active brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedMannequin {
    #[serde(flatten)]
    pub item: MannequinListItem,
    pub in_active_brand: bool,
}

fn stable_front<T>(items: Vec<T>, is_front: impl Fn(&T) -> bool) -> Vec<T> {
    let (mut front, back): (Vec<T>, Vec<T>) = items.into_iter().partition(|item| is_front(item));
    front.extend(back);
    front
}

/// Move the active brand to the front and flag it. Other brands keep their
/// relative order.
///
/// # Examples
/// ```
/// use atelier::domain::order_brands_active_first;
///
/// assert!(order_brands_active_first(Vec::new(), None).is_empty());
/// ```
#[must_use]
pub fn order_brands_active_first(brands: Vec<Brand>, active: Option<BrandId>) -> Vec<BrandListItem> {
    let items = brands
        .into_iter()
        .map(|brand| BrandListItem {
            is_active: Some(brand.id) == active,
            brand,
        })
        .collect();
    stable_front(items, |item| item.is_active)
}

/// Move mannequins linked to the active brand to the front and flag them.
#[must_use]
pub fn order_mannequins_active_first(
    items: Vec<MannequinListItem>,
    active: Option<BrandId>,
) -> Vec<HighlightedMannequin> {
    let highlighted = items
        .into_iter()
        .map(|item| HighlightedMannequin {
            in_active_brand: active.is_some_and(|id| item.brand_ids.contains(&id)),
            item,
        })
        .collect();
    stable_front(highlighted, |entry| entry.in_active_brand)
}
