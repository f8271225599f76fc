//! Driving port for media uploads.

use async_trait::async_trait;

use super::StoredObject;
use crate::domain::{Error, UserId};

/// Accept raw media bytes from a signed-in user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaUpload: Send + Sync {
    /// Store `data` under the named folder and return its public location.
    async fn upload(
        &self,
        user_id: &UserId,
        data: Vec<u8>,
        folder: &str,
    ) -> Result<StoredObject, Error>;
}
