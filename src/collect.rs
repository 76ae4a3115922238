// src/collect.rs

//! Feed scanning and package URL collection
//!
//! A single pass over the feed yields everything the emitters need: the
//! current release branch and the deduplicated list of package directory
//! URLs from shipped versions.

use crate::error::Result;
use crate::feed::ReleaseFeed;
use crate::train::ReleaseTrain;
use tracing::debug;

/// What a feed scan produces
#[derive(Debug)]
pub struct FeedSummary {
    /// Highest release train seen anywhere in the feed, floor 3.0.
    /// Release candidates and versions without downloads count here: an RC
    /// on a new development train makes that train current.
    pub current_branch: ReleaseTrain,
    /// Package directory URLs (download URLs with the filename stripped),
    /// in order of first appearance, without duplicates
    pub package_dirs: Vec<String>,
}

/// Scan the feed for the current release branch and package directories
///
/// Release candidates contribute to the current branch but never to the
/// URL list. A download group only contributes its first package URL.
pub fn scan(feed: &ReleaseFeed) -> Result<FeedSummary> {
    let mut current_branch = ReleaseTrain::FIRST;
    let mut package_dirs: Vec<String> = Vec::new();

    for release in &feed.versions {
        let train = ReleaseTrain::from_version(&release.version)?;
        if train > current_branch {
            current_branch = train;
        }

        if release.release_candidate {
            continue;
        }
        for group in &release.downloads {
            let Some(package) = group.packages.first() else {
                continue;
            };
            let dir = parent_dir(package);
            if !package_dirs.iter().any(|seen| seen == dir) {
                package_dirs.push(dir.to_string());
            }
        }
    }

    debug!(
        "Scanned {} feed versions: current branch {}, {} package directories",
        feed.versions.len(),
        current_branch,
        package_dirs.len()
    );
    Ok(FeedSummary {
        current_branch,
        package_dirs,
    })
}

/// Strip the trailing filename segment from a download URL
fn parent_dir(url: &str) -> &str {
    url.rsplit_once('/').map_or("", |(dir, _)| dir)
}
