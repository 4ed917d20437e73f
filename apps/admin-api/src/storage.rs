//! # Media Store
//!
//! The blob-storage collaborator for image uploads.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Public Blob Area                                 │
//! │                                                                         │
//! │  <media root>/                      (e.g. ./storage/public)            │
//! │  └── products/                      ← storage category                 │
//! │      ├── 550e8400-…-446655440000.png                                   │
//! │      └── 7c9e6679-…-9b3f9f0b4b5a.jpg                                   │
//! │                                                                         │
//! │  The returned path is RELATIVE ("products/550e….png"): the serving     │
//! │  layer decides how it becomes a URL.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What It Never Does
//! Delete. Removing a product (or replacing its image) leaves the old file
//! in place; cleanup is an external garbage-collection responsibility.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use catalog_core::types::StoredImage;

/// Longest extension carried over from an upload filename.
const MAX_EXTENSION_LEN: usize = 10;

/// File storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to store file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Writes uploads into the public blob area.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Creates a store rooted at the public blob directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MediaStore { root: root.into() }
    }

    /// The root directory uploads land below.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Moves a received upload into the blob area.
    ///
    /// ## Arguments
    /// * `source` - Where the upload currently sits (a request temp file)
    /// * `category` - Storage category label ("products")
    /// * `original_name` - Filename as submitted, kept for display/audit
    ///
    /// ## Returns
    /// The relative path under the root plus the original name, ready to be
    /// recorded on the product.
    pub async fn store(
        &self,
        source: &Path,
        category: &str,
        original_name: &str,
    ) -> StorageResult<StoredImage> {
        let dir = self.root.join(category);
        fs::create_dir_all(&dir).await?;

        let filename = unique_filename(original_name);
        let destination = dir.join(&filename);

        // Copy rather than rename: the source may live on another filesystem
        // (request temp dir).
        fs::copy(source, &destination).await?;

        debug!(
            original_name = original_name,
            destination = %destination.display(),
            "Stored upload"
        );

        Ok(StoredImage {
            path: format!("{category}/{filename}"),
            original_name: original_name.to_string(),
        })
    }
}

/// A collision-free stored filename: UUID stem plus the sanitized extension.
fn unique_filename(original_name: &str) -> String {
    let stem = Uuid::new_v4().to_string();
    match sanitized_extension(original_name) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

/// Extracts a safe lowercase extension from an upload filename.
///
/// Only short, purely alphanumeric extensions survive; anything else (path
/// tricks, odd characters, absurd lengths) is dropped.
fn sanitized_extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?;

    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

// =============================================================================
// Unit Tests
// =============================================================================
