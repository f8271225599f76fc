//! Mannequin aggregate, its photos, and their input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::brand::trimmed_optional;
use super::{BrandSummary, MannequinId, PhotoId, UserId};

/// Earliest birth year accepted for a mannequin profile.
pub const BIRTH_YEAR_MIN: i32 = 1900;

/// Validation failures for mannequin and photo input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MannequinValidationError {
    #[error("mannequin name must not be empty")]
    EmptyName,
    #[error("birth year must be {min} or later")]
    BirthYearTooEarly { min: i32 },
    #[error("height must be a positive number of centimetres")]
    NonPositiveHeight,
    #[error("photo url must not be empty")]
    EmptyPhotoUrl,
}

/// Persisted mannequin record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mannequin {
    pub id: MannequinId,
    pub user_id: UserId,
    pub name: String,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored photo belonging to a mannequin.
///
/// At most one photo per mannequin carries `is_primary`; the mannequin
/// service maintains that when a primary is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MannequinPhoto {
    pub id: PhotoId,
    pub mannequin_id: MannequinId,
    pub url: String,
    /// Object storage reference used to delete the stored file.
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

/// Mannequin with every photo attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MannequinWithPhotos {
    #[serde(flatten)]
    pub mannequin: Mannequin,
    pub photos: Vec<MannequinPhoto>,
}

/// Mannequin detail view: photos plus the brands it is linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MannequinWithBrands {
    #[serde(flatten)]
    pub mannequin: Mannequin,
    pub photos: Vec<MannequinPhoto>,
    pub brands: Vec<BrandSummary>,
}

fn validate_name(raw: &str) -> Result<String, MannequinValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MannequinValidationError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

fn validate_birth_year(year: Option<i32>) -> Result<Option<i32>, MannequinValidationError> {
    match year {
        Some(value) if value < BIRTH_YEAR_MIN => Err(MannequinValidationError::BirthYearTooEarly {
            min: BIRTH_YEAR_MIN,
        }),
        other => Ok(other),
    }
}

fn validate_height(height: Option<i32>) -> Result<Option<i32>, MannequinValidationError> {
    match height {
        Some(value) if value <= 0 => Err(MannequinValidationError::NonPositiveHeight),
        other => Ok(other),
    }
}

/// Input for creating a mannequin.
///
/// # Examples
/// ```
/// use atelier::domain::MannequinDraft;
///
/// let draft = MannequinDraft::new(" Lena ", Some(1998), Some(176)).unwrap();
/// assert_eq!(draft.name, "Lena");
/// assert!(MannequinDraft::new("Lena", None, Some(0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MannequinDraft {
    pub name: String,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
}

impl MannequinDraft {
    pub fn new(
        name: impl AsRef<str>,
        birth_year: Option<i32>,
        height_cm: Option<i32>,
    ) -> Result<Self, MannequinValidationError> {
        Ok(Self {
            name: validate_name(name.as_ref())?,
            birth_year: validate_birth_year(birth_year)?,
            height_cm: validate_height(height_cm)?,
        })
    }
}

/// Partial update for a mannequin; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MannequinChanges {
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    pub height_cm: Option<i32>,
}

impl MannequinChanges {
    pub fn new(
        name: Option<&str>,
        birth_year: Option<i32>,
        height_cm: Option<i32>,
    ) -> Result<Self, MannequinValidationError> {
        Ok(Self {
            name: name.map(validate_name).transpose()?,
            birth_year: validate_birth_year(birth_year)?,
            height_cm: validate_height(height_cm)?,
        })
    }

    pub fn apply_to(self, mannequin: &mut Mannequin, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            mannequin.name = name;
        }
        if let Some(birth_year) = self.birth_year {
            mannequin.birth_year = Some(birth_year);
        }
        if let Some(height_cm) = self.height_cm {
            mannequin.height_cm = Some(height_cm);
        }
        mannequin.updated_at = now;
    }
}

/// Input for recording an uploaded photo against a mannequin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDraft {
    pub url: String,
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_primary: bool,
}

impl PhotoDraft {
    pub fn new(url: impl AsRef<str>) -> Result<Self, MannequinValidationError> {
        let url = url.as_ref().trim();
        if url.is_empty() {
            return Err(MannequinValidationError::EmptyPhotoUrl);
        }
        Ok(Self {
            url: url.to_owned(),
            external_id: None,
            width: None,
            height: None,
            is_primary: false,
        })
    }

    #[must_use]
    pub fn with_external_id(mut self, external_id: Option<&str>) -> Self {
        self.external_id = trimmed_optional(external_id);
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: Option<i32>, height: Option<i32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::blank_name("  ", None, None, MannequinValidationError::EmptyName)]
    #[case::ancient("Lena", Some(1850), None, MannequinValidationError::BirthYearTooEarly { min: BIRTH_YEAR_MIN })]
    #[case::negative_height("Lena", None, Some(-3), MannequinValidationError::NonPositiveHeight)]
    fn draft_rejects_invalid_input(
        #[case] name: &str,
        #[case] birth_year: Option<i32>,
        #[case] height_cm: Option<i32>,
        #[case] expected: MannequinValidationError,
    ) {
        assert_eq!(MannequinDraft::new(name, birth_year, height_cm), Err(expected));
    }

    #[rstest]
    fn changes_keep_untouched_fields() {
        let now = Utc::now();
        let mut mannequin = Mannequin {
            id: MannequinId::random(),
            user_id: UserId::random(),
            name: "Lena".to_owned(),
            birth_year: Some(1998),
            height_cm: Some(176),
            created_at: now,
            updated_at: now,
        };

        let changes = MannequinChanges::new(None, None, Some(178)).expect("valid changes");
        changes.apply_to(&mut mannequin, now);

        assert_eq!(mannequin.name, "Lena");
        assert_eq!(mannequin.birth_year, Some(1998));
        assert_eq!(mannequin.height_cm, Some(178));
    }

    #[rstest]
    fn photo_draft_requires_url_and_trims_external_id() {
        assert_eq!(PhotoDraft::new(" "), Err(MannequinValidationError::EmptyPhotoUrl));

        let draft = PhotoDraft::new("https://cdn.example/a.jpg")
            .expect("valid url")
            .with_external_id(Some("  "))
            .primary(true);
        assert!(draft.external_id.is_none());
        assert!(draft.is_primary);
    }
}
