//! Filesystem-backed profile picture storage
//!
//! Every image lives at `<root>/users/<owner>/images/<uuid>`. The store only
//! knows about the filesystem; recording the returned path against the user
//! is the caller's job.

use crate::{ImageBlob, Result as StorageResult, StorageError};

use dash_core::{Identity, StoredImagePath};

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use dash_core::ErrorLocation;
use log::{debug, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const TEMP_EXTENSION: &str = "tmp";

/// Profile picture store rooted at a configured directory
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage root if needed
    pub async fn initialize(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::io(&self.root, e))?;
        log::info!("Image store initialized at: {}", self.root.display());
        Ok(())
    }

    /// Absolute location of a stored image
    pub fn resolve(&self, path: &StoredImagePath) -> PathBuf {
        path.segments()
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    /// Write a new image for `owner` and return its relative path.
    ///
    /// A fresh random name is generated on every call, so an existing image is
    /// never overwritten. The bytes go to a temporary sibling first and are
    /// renamed into place once fully flushed.
    pub async fn write(&self, owner: &Identity, bytes: &[u8]) -> StorageResult<StoredImagePath> {
        if bytes.is_empty() {
            return Err(StorageError::EmptyBlob {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let stored = StoredImagePath::for_new_image(owner, Uuid::new_v4());
        let target = self.resolve(&stored);

        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::io(dir, e))?;
        }

        let temp = target.with_extension(TEMP_EXTENSION);
        if let Err(e) = write_synced(&temp, bytes).await {
            discard(&temp).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp, &target).await {
            discard(&temp).await;
            return Err(StorageError::io(&target, e));
        }

        debug!(
            "Stored image for {}: {} ({} bytes)",
            owner,
            stored,
            bytes.len()
        );

        Ok(stored)
    }

    /// Open a stored image for streaming.
    ///
    /// Returns `NotFound` when nothing is present at the resolved location,
    /// including when the file was removed out-of-band.
    pub async fn open(&self, path: &StoredImagePath) -> StorageResult<ImageBlob> {
        let full = self.resolve(path);

        let metadata = match fs::metadata(&full).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::not_found(path.as_str()));
            }
            Err(e) => return Err(StorageError::io(&full, e)),
        };

        if !metadata.is_file() {
            return Err(StorageError::not_found(path.as_str()));
        }

        let file = match fs::File::open(&full).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::not_found(path.as_str()));
            }
            Err(e) => return Err(StorageError::io(&full, e)),
        };

        debug!("Opened image {} ({} bytes)", path, metadata.len());

        Ok(ImageBlob::new(file, metadata.len()))
    }

    /// Whether an image is present on disk
    /// Whether the storage root is present and is a directory
    pub async fn is_available(&self) -> bool {
        match fs::metadata(&self.root).await {
            Ok(metadata) => metadata.is_dir(),
            Err(e) => {
                debug!("Storage root {} unavailable: {}", self.root.display(), e);
                false
            }
        }
    }

    /// Delete a stored image. Returns `false` if it was already gone.
    pub async fn remove(&self, path: &StoredImagePath) -> StorageResult<bool> {
        let full = self.resolve(path);
        match fs::remove_file(&full).await {
            Ok(()) => {
                debug!("Removed image {}", path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::io(&full, e)),
        }
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let mut file = fs::File::create(path)
        .await
        .map_err(|e| StorageError::io(path, e))?;
    file.write_all(bytes)
        .await
        .map_err(|e| StorageError::io(path, e))?;
    file.sync_all()
        .await
        .map_err(|e| StorageError::io(path, e))?;
    Ok(())
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await
        && e.kind() != ErrorKind::NotFound
    {
        warn!("Failed to clean up {}: {}", path.display(), e);
    }
}
