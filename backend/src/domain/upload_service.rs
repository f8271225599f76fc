//! Media upload service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{MediaUpload, ObjectStorage, StoredObject};
use crate::domain::{Error, UserId};

/// Folder used when the client names none.
pub const DEFAULT_UPLOAD_FOLDER: &str = "mannequins";

const MAX_FOLDER_LEN: usize = 64;

/// Validate an upload folder name.
///
/// Folders are a single path segment of lowercase ASCII letters, digits,
/// `-` or `_`.
///
/// # Examples
/// ```
/// use atelier::domain::validate_upload_folder;
///
/// assert!(validate_upload_folder("brand-assets").is_ok());
/// assert!(validate_upload_folder("../etc").is_err());
/// ```
pub fn validate_upload_folder(folder: &str) -> Result<(), Error> {
    let valid = !folder.is_empty()
        && folder.len() <= MAX_FOLDER_LEN
        && folder
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_request("folder must be a short lowercase slug")
            .with_details(json!({ "field": "folder", "code": "invalid_folder" })))
    }
}

/// Service implementing [`MediaUpload`] over an [`ObjectStorage`].
#[derive(Clone)]
pub struct UploadService<S> {
    storage: Arc<S>,
}

impl<S> UploadService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> MediaUpload for UploadService<S>
where
    S: ObjectStorage,
{
    async fn upload(
        &self,
        user_id: &UserId,
        data: Vec<u8>,
        folder: &str,
    ) -> Result<StoredObject, Error> {
        validate_upload_folder(folder)?;
        if data.is_empty() {
            return Err(Error::invalid_request("upload body must not be empty")
                .with_details(json!({ "field": "body", "code": "empty_upload" })));
        }
        let size = data.len();
        let stored = self.storage.upload(data, folder).await?;
        debug!(%user_id, folder, size, external_id = %stored.external_id, "media uploaded");
        Ok(stored)
    }
}
