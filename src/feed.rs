// src/feed.rs

//! Release feed data model
//!
//! Serde types for the `full.json` document published alongside server
//! releases. Only the fields needed for repository generation are mapped;
//! unknown keys in the feed are ignored.

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level feed document
#[derive(Debug, Deserialize)]
pub struct ReleaseFeed {
    /// Released versions, newest first in the published feed
    pub versions: Vec<ReleaseVersion>,
}

/// One released (or release-candidate) server version
#[derive(Debug, Deserialize)]
pub struct ReleaseVersion {
    /// Dotted version string, e.g. "3.4.1"
    pub version: String,
    pub release_candidate: bool,
    /// Per-platform download groups; absent for versions without artifacts
    #[serde(default)]
    pub downloads: Vec<DownloadGroup>,
}

/// Download artifacts for one platform/packaging combination
#[derive(Debug, Deserialize)]
pub struct DownloadGroup {
    /// Package file URLs; the first entry is the representative package
    #[serde(default)]
    pub packages: Vec<String>,
}

impl ReleaseFeed {
    /// Load a feed from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let feed = serde_json::from_str(&raw)?;
        Ok(feed)
    }
}
