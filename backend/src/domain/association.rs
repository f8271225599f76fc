//! Brand/mannequin junction rows.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BrandId, LinkId, MannequinId};

/// One row of the many-to-many relation between brands and mannequins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMannequinLink {
    pub id: LinkId,
    pub brand_id: BrandId,
    pub mannequin_id: MannequinId,
    pub created_at: DateTime<Utc>,
}

impl BrandMannequinLink {
    #[must_use]
    pub fn new(brand_id: BrandId, mannequin_id: MannequinId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: LinkId::random(),
            brand_id,
            mannequin_id,
            created_at,
        }
    }
}

/// Collapse repeated ids, keeping the first occurrence of each.
///
/// # Examples
/// ```
/// use atelier::domain::dedupe_preserving_order;
///
/// assert_eq!(dedupe_preserving_order(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
#[must_use]
pub fn dedupe_preserving_order<T>(ids: Vec<T>) -> Vec<T>
where
    T: Copy + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
