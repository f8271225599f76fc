//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every validation failure becomes `400 invalid_request` with
//! `details.field` naming the offending JSON field and `details.code`
//! naming the rule.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    AssetValidationError, BrandValidationError, Error, MannequinValidationError,
};

/// HTTP field name as it appears in the request (camelCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

/// Build the standard invalid-request error for `field`.
pub(crate) fn field_error(field: FieldName, code: &'static str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        "missing_field",
        format!("missing required field: {}", field.as_str()),
    )
}

fn invalid_uuid_error(field: FieldName, value: &str, index: Option<usize>) -> Error {
    let mut details = json!({
        "field": field.as_str(),
        "code": "invalid_uuid",
        "value": value,
    });
    if let Some(index) = index {
        details["index"] = json!(index);
    }
    Error::invalid_request(format!("{} must be a valid UUID", field.as_str())).with_details(details)
}

/// Parse one identifier from a path segment or body field.
pub(crate) fn parse_id<T: From<Uuid>>(value: &str, field: FieldName) -> Result<T, Error> {
    Uuid::parse_str(value)
        .map(T::from)
        .map_err(|_| invalid_uuid_error(field, value, None))
}

/// Parse a list of identifiers, reporting the index of the first bad one.
pub(crate) fn parse_id_list<T: From<Uuid>>(
    values: &[String],
    field: FieldName,
) -> Result<Vec<T>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Uuid::parse_str(value)
                .map(T::from)
                .map_err(|_| invalid_uuid_error(field, value, Some(index)))
        })
        .collect()
}

pub(crate) fn brand_error(err: BrandValidationError) -> Error {
    match err {
        BrandValidationError::EmptyName => {
            field_error(FieldName::new("name"), "empty_name", err.to_string())
        }
    }
}

pub(crate) fn mannequin_error(err: MannequinValidationError) -> Error {
    let (field, code) = match &err {
        MannequinValidationError::EmptyName => ("name", "empty_name"),
        MannequinValidationError::BirthYearTooEarly { .. } => ("birthYear", "birth_year_too_early"),
        MannequinValidationError::NonPositiveHeight => ("heightCm", "non_positive_height"),
        MannequinValidationError::EmptyPhotoUrl => ("url", "empty_url"),
    };
    field_error(FieldName::new(field), code, err.to_string())
}

pub(crate) fn asset_error(err: AssetValidationError) -> Error {
    let (field, code) = match &err {
        AssetValidationError::EmptyName => ("name", "empty_name"),
        AssetValidationError::EmptyUrl => ("url", "empty_url"),
        AssetValidationError::UnknownType(_) => ("type", "unknown_type"),
        AssetValidationError::UnknownCategory(_) => ("category", "unknown_category"),
        AssetValidationError::NegativeFileSize => ("fileSize", "negative_file_size"),
    };
    field_error(FieldName::new(field), code, err.to_string())
}
