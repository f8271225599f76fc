//! Port for binary media storage.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Errors raised by object storage adapters.
    pub enum ObjectStorageError {
        /// Backing store could not be reached.
        Unavailable { message: String } =>
            "object storage unavailable: {message}",
        /// Reference or folder name is not acceptable to the store.
        InvalidKey { key: String } =>
            "object storage rejected key: {key}",
        /// Read or write failed after the store was reached.
        Write { message: String } =>
            "object storage write failed: {message}",
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Public URL clients use to fetch the object.
    pub url: String,
    /// Store-specific reference passed back to [`ObjectStorage::delete`].
    pub external_id: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Store and remove media objects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `data` under `folder`.
    async fn upload(&self, data: Vec<u8>, folder: &str)
    -> Result<StoredObject, ObjectStorageError>;

    /// Remove an object. Deleting an absent object succeeds.
    async fn delete(&self, external_id: &str) -> Result<(), ObjectStorageError>;
}

impl From<ObjectStorageError> for Error {
    fn from(err: ObjectStorageError) -> Self {
        match err {
            ObjectStorageError::Unavailable { message } => {
                Error::service_unavailable(format!("object storage unavailable: {message}"))
            }
            ObjectStorageError::InvalidKey { key } => {
                Error::invalid_request(format!("invalid storage key: {key}"))
            }
            ObjectStorageError::Write { message } => {
                Error::internal(format!("object storage error: {message}"))
            }
        }
    }
}
