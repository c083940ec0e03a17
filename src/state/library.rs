use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::data::{Asset, AssetId, AssetPage, AssetsOptions, MediaType, PermissionStatus};
use crate::error::{Error, Result};

/// Photo file extensions recognised by the library (lowercase)
const PHOTO_EXTENSIONS: [&str; 11] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "heic", "heif", "avif",
];

/// Access to the device photo library.
///
/// Both calls block; callers run them off the UI thread.
pub trait PhotoLibrary: Send + Sync {
    /// Ask for read access to the library
    fn request_permission(&self) -> PermissionStatus;

    /// Fetch the first page of assets
    fn get_assets(&self, options: AssetsOptions) -> Result<AssetPage>;
}

/// A directory on disk acting as the photo library
#[derive(Debug, Clone)]
pub struct DirectoryLibrary {
    root: PathBuf,
}

impl DirectoryLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build an asset record for a photo file found under the root
    fn asset_for(&self, path: &Path, modified: DateTime<Utc>) -> Asset {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        // Header-only read; unsupported formats simply have no size
        let (width, height) = match image::image_dimensions(path) {
            Ok((w, h)) => (Some(w), Some(h)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Could not probe image size");
                (None, None)
            }
        };

        Asset {
            id: AssetId::from_relative_path(relative),
            filename,
            uri: path.to_path_buf(),
            width,
            height,
            modification_time: modified,
        }
    }
}

/// Check if a path has the extension of the requested media type
fn has_media_type(path: &Path, media_type: MediaType) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy().to_lowercase();

    match media_type {
        MediaType::Photo => PHOTO_EXTENSIONS.contains(&ext.as_str()),
    }
}

impl PhotoLibrary for DirectoryLibrary {
    fn request_permission(&self) -> PermissionStatus {
        if !self.root.exists() {
            return PermissionStatus::Undetermined;
        }
        if !self.root.is_dir() {
            return PermissionStatus::Denied;
        }

        match std::fs::read_dir(&self.root) {
            Ok(_) => PermissionStatus::Granted,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => PermissionStatus::Denied,
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "Photo library is unreadable");
                PermissionStatus::Denied
            }
        }
    }

    fn get_assets(&self, options: AssetsOptions) -> Result<AssetPage> {
        let mut found: Vec<(PathBuf, DateTime<Utc>)> = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself failing is fatal; anything deeper is skipped
                Err(e) if e.depth() == 0 => return Err(Error::Walk(e)),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable library entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !has_media_type(entry.path(), options.media_type) {
                continue;
            }

            let modified = match entry.metadata() {
                Ok(meta) => meta
                    .modified()
                    .map(DateTime::<Utc>::from)
                    .unwrap_or_default(),
                Err(e) => {
                    warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "Skipping photo without metadata"
                    );
                    continue;
                }
            };

            found.push((entry.into_path(), modified));
        }

        // Newest first, path keeps the order deterministic
        found.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let total_count = found.len();
        let assets: Vec<Asset> = found
            .iter()
            .take(options.first)
            .map(|(path, modified)| self.asset_for(path, *modified))
            .collect();

        Ok(AssetPage {
            end_cursor: assets.last().map(|a| a.id),
            has_next_page: total_count > assets.len(),
            total_count,
            assets,
        })
    }
}

/// Result of the one-shot mount load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Access was not granted; the gallery stays empty
    NotGranted(PermissionStatus),
    Loaded(AssetPage),
    /// Fetch failed after permission was granted
    Failed(String),
}

/// Request permission and fetch the first page of assets.
///
/// Runs in a background thread to avoid blocking the UI.
pub async fn load_library(
    library: Arc<dyn PhotoLibrary>,
    options: AssetsOptions,
) -> LoadOutcome {
    let outcome =
        tokio::task::spawn_blocking(move || load_library_blocking(&*library, options))
            .await
            .map_err(|e| Error::Join(e.to_string()));

    match outcome {
        Ok(outcome) => outcome,
        Err(e) => LoadOutcome::Failed(e.to_string()),
    }
}

/// Blocking version of the mount load
pub fn load_library_blocking(library: &dyn PhotoLibrary, options: AssetsOptions) -> LoadOutcome {
    let status = library.request_permission();
    if !status.is_granted() {
        info!(?status, "Photo library access not granted");
        return LoadOutcome::NotGranted(status);
    }

    match library.get_assets(options) {
        Ok(page) => {
            info!(
                loaded = page.assets.len(),
                total = page.total_count,
                has_next_page = page.has_next_page,
                end_cursor = ?page.end_cursor,
                "Loaded photo library"
            );
            LoadOutcome::Loaded(page)
        }
        Err(e) => LoadOutcome::Failed(e.to_string()),
    }
}
