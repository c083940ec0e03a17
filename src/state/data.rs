//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the photo library and the UI layer.
use chrono::{DateTime, Utc};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Stable identifier of an asset within one library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub u64);

impl AssetId {
    /// Fingerprint a path relative to the library root
    pub fn from_relative_path(relative: &Path) -> Self {
        let mut hasher = DefaultHasher::new();
        relative.hash(&mut hasher);
        AssetId(hasher.finish())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Photo,
}

/// Represents a single photo in the library
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    /// Filename only (e.g., "IMG_0001.jpg")
    pub filename: String,
    /// Absolute path, used as the image handle
    pub uri: PathBuf,
    /// Pixel size, if the header could be probed
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub modification_time: DateTime<Utc>,
}

/// Outcome of a photo-library permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// Parameters of an asset fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetsOptions {
    /// Maximum number of assets to return
    pub first: usize,
    pub media_type: MediaType,
}

impl Default for AssetsOptions {
    fn default() -> Self {
        Self {
            first: crate::config::DEFAULT_PAGE_SIZE,
            media_type: MediaType::Photo,
        }
    }
}

/// One page of assets as returned by the library
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetPage {
    pub assets: Vec<Asset>,
    /// Id of the last asset in this page
    pub end_cursor: Option<AssetId>,
    pub has_next_page: bool,
    /// Number of matching assets in the whole library
    pub total_count: usize,
}
