// src/lib.rs

//! MongoDB release feed to repository definitions
//!
//! Converts the `full.json` feed published alongside server releases into
//! package manager configuration for RPM and Debian based distributions:
//!
//! - `mongodb.repo` - YUM/Zypper repository stanzas
//! - `mongodb.list` - APT sources-list entries
//! - `versions.txt` - stable release trains, one per line
//!
//! # Architecture
//!
//! - Feed model: serde types mirroring the parts of the feed we consume
//! - Collection: one pass over the feed yields the current release branch
//!   and a deduplicated list of package directory URLs
//! - Emitters: positional URL parsing into typed records, release train
//!   classification, and plain text output

pub mod collect;
mod error;
pub mod feed;
pub mod repofile;
pub mod train;

pub use collect::{FeedSummary, scan};
pub use error::{Error, Result};
pub use feed::{DownloadGroup, ReleaseFeed, ReleaseVersion};
pub use repofile::generate;
pub use train::ReleaseTrain;
