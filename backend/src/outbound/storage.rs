//! Filesystem-backed object storage.
//!
//! Objects are written beneath a capability-scoped root directory as
//! `<folder>/<sha256-hex>`. The same relative path is the object's
//! external id and, joined onto the public base URL, its fetch URL.
//! Identical bytes in the same folder share one file.

use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

use crate::domain::ports::{ObjectStorage, ObjectStorageError, StoredObject};

/// [`ObjectStorage`] implementation over a local directory.
#[derive(Clone)]
pub struct FilesystemStorage {
    root: Arc<Dir>,
    public_base: Url,
}

impl FilesystemStorage {
    /// Open (creating if needed) `root` and serve objects from
    /// `public_base`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStorageError::Unavailable`] when the directory cannot
    /// be created or opened.
    pub fn open(root: &Path, public_base: Url) -> Result<Self, ObjectStorageError> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(|err| ObjectStorageError::unavailable(format!("{}: {err}", root.display())))?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())
            .map_err(|err| ObjectStorageError::unavailable(format!("{}: {err}", root.display())))?;
        Ok(Self::from_dir(dir, public_base))
    }

    /// Wrap an already opened directory.
    pub fn from_dir(root: Dir, public_base: Url) -> Self {
        Self {
            root: Arc::new(root),
            public_base: with_trailing_slash(public_base),
        }
    }

    fn public_url(&self, key: &str) -> Result<String, ObjectStorageError> {
        self.public_base
            .join(key)
            .map(String::from)
            .map_err(|_| ObjectStorageError::invalid_key(key))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn is_segment(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Split an external id into `(folder, name)` when both are plain segments.
fn parse_key(external_id: &str) -> Option<(&str, &str)> {
    let (folder, name) = external_id.split_once('/')?;
    (is_segment(folder) && is_segment(name)).then_some((folder, name))
}

fn content_name(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn write_object(root: &Dir, folder: &str, name: &str, data: &[u8]) -> io::Result<()> {
    root.create_dir_all(folder)?;
    let path = Path::new(folder).join(name);
    if root.exists(&path) {
        return Ok(());
    }
    root.write(&path, data)
}

fn remove_object(root: &Dir, folder: &str, name: &str) -> io::Result<()> {
    match root.remove_file(Path::new(folder).join(name)) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error),
    }
}

#[async_trait]
impl ObjectStorage for FilesystemStorage {
    async fn upload(
        &self,
        data: Vec<u8>,
        folder: &str,
    ) -> Result<StoredObject, ObjectStorageError> {
        if !is_segment(folder) {
            return Err(ObjectStorageError::invalid_key(folder));
        }
        let name = content_name(&data);
        let key = format!("{folder}/{name}");
        let url = self.public_url(&key)?;

        let root = Arc::clone(&self.root);
        let folder_owned = folder.to_owned();
        let name_owned = name.clone();
        tokio::task::spawn_blocking(move || write_object(&root, &folder_owned, &name_owned, &data))
            .await
            .map_err(|err| ObjectStorageError::unavailable(err.to_string()))?
            .map_err(|err| ObjectStorageError::write(err.to_string()))?;

        debug!(%key, "stored object");
        Ok(StoredObject {
            url,
            external_id: key,
            width: None,
            height: None,
        })
    }

    async fn delete(&self, external_id: &str) -> Result<(), ObjectStorageError> {
        let (folder, name) =
            parse_key(external_id).ok_or_else(|| ObjectStorageError::invalid_key(external_id))?;

        let root = Arc::clone(&self.root);
        let folder = folder.to_owned();
        let name = name.to_owned();
        tokio::task::spawn_blocking(move || remove_object(&root, &folder, &name))
            .await
            .map_err(|err| ObjectStorageError::unavailable(err.to_string()))?
            .map_err(|err| ObjectStorageError::write(err.to_string()))
    }
}
