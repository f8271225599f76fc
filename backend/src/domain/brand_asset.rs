//! Brand media assets and their closed classification enums.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::brand::trimmed_optional;
use super::{AssetId, BrandId};

/// Validation failures for asset input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetValidationError {
    #[error("asset name must not be empty")]
    EmptyName,
    #[error("asset url must not be empty")]
    EmptyUrl,
    #[error("unknown asset type: {0}")]
    UnknownType(String),
    #[error("unknown asset category: {0}")]
    UnknownCategory(String),
    #[error("file size must not be negative")]
    NegativeFileSize,
}

/// Media kind of a brand asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Image,
    Video,
    Document,
    Font,
}

impl AssetType {
    pub const ALL: [Self; 4] = [Self::Image, Self::Video, Self::Document, Self::Font];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
            Self::Font => "font",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = AssetValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AssetValidationError::UnknownType(s.to_owned()))
    }
}

/// Purpose an asset serves for its brand.
///
/// # Examples
/// ```
/// use atelier::domain::AssetCategory;
///
/// let category: AssetCategory = "social".parse().unwrap();
/// assert_eq!(category.label(), "Social Media");
/// assert!("banner".parse::<AssetCategory>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Logo,
    Product,
    Social,
    Background,
    Reference,
    Other,
}

impl AssetCategory {
    pub const ALL: [Self; 6] = [
        Self::Logo,
        Self::Product,
        Self::Social,
        Self::Background,
        Self::Reference,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Product => "product",
            Self::Social => "social",
            Self::Background => "background",
            Self::Reference => "reference",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown in category pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Logo => "Logo",
            Self::Product => "Product",
            Self::Social => "Social Media",
            Self::Background => "Background",
            Self::Reference => "Reference",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = AssetValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AssetValidationError::UnknownCategory(s.to_owned()))
    }
}

/// Persisted brand asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandAsset {
    pub id: AssetId,
    pub brand_id: BrandId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub category: AssetCategory,
    pub url: String,
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording an asset against a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDraft {
    pub name: String,
    pub asset_type: AssetType,
    pub category: AssetCategory,
    pub url: String,
    pub external_id: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
}

impl AssetDraft {
    pub fn new(
        name: impl AsRef<str>,
        asset_type: AssetType,
        category: AssetCategory,
        url: impl AsRef<str>,
    ) -> Result<Self, AssetValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(AssetValidationError::EmptyName);
        }
        let url = url.as_ref().trim();
        if url.is_empty() {
            return Err(AssetValidationError::EmptyUrl);
        }
        Ok(Self {
            name: name.to_owned(),
            asset_type,
            category,
            url: url.to_owned(),
            external_id: None,
            width: None,
            height: None,
            file_size: None,
            mime_type: None,
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
    pub fn with_mime_type(mut self, mime_type: Option<&str>) -> Self {
        self.mime_type = trimmed_optional(mime_type);
        self
    }

    pub fn with_file_size(mut self, file_size: Option<i64>) -> Result<Self, AssetValidationError> {
        if file_size.is_some_and(|size| size < 0) {
            return Err(AssetValidationError::NegativeFileSize);
        }
        self.file_size = file_size;
        Ok(self)
    }
}
