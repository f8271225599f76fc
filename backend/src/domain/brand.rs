//! Brand aggregate and its input types.
//!
//! A brand is a user-owned marketing identity: a name, optional description
//! and logo, plus an opaque style guide string the content pipeline reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BrandId, UserId};

/// Validation failures for brand input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrandValidationError {
    #[error("brand name must not be empty")]
    EmptyName,
}

/// Trimmed, non-empty brand name.
///
/// # Examples
/// ```
/// use atelier::domain::BrandName;
///
/// let name = BrandName::new("  Acme ").unwrap();
/// assert_eq!(name.as_ref(), "Acme");
/// assert!(BrandName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandName(String);

impl BrandName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, BrandValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BrandValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for BrandName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<BrandName> for String {
    fn from(value: BrandName) -> Self {
        value.0
    }
}

impl TryFrom<String> for BrandName {
    type Error = BrandValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted brand record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    /// Free-form style guide (colours, tone); stored verbatim.
    pub style_guide: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// Project the brand onto the id/name pair used by the brand switcher.
    #[must_use]
    pub fn summary(&self) -> BrandSummary {
        BrandSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Minimal brand projection for pickers and joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSummary {
    pub id: BrandId,
    pub name: String,
}

/// Input for creating a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandDraft {
    pub name: BrandName,
    pub description: Option<String>,
}

impl BrandDraft {
    /// Build a draft, trimming the description and dropping it when blank.
    pub fn new(
        name: impl AsRef<str>,
        description: Option<&str>,
    ) -> Result<Self, BrandValidationError> {
        Ok(Self {
            name: BrandName::new(name)?,
            description: trimmed_optional(description),
        })
    }
}

/// Partial update for a brand; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandChanges {
    pub name: Option<BrandName>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub style_guide: Option<String>,
}

impl BrandChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.logo_url.is_none()
            && self.style_guide.is_none()
    }

    /// Apply the changes to `brand`, stamping `now` as the update time.
    pub fn apply_to(self, brand: &mut Brand, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            brand.name = name.into();
        }
        if let Some(description) = self.description {
            brand.description = Some(description);
        }
        if let Some(logo_url) = self.logo_url {
            brand.logo_url = Some(logo_url);
        }
        if let Some(style_guide) = self.style_guide {
            brand.style_guide = Some(style_guide);
        }
        brand.updated_at = now;
    }
}

pub(crate) fn trimmed_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
