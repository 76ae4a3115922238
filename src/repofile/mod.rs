// src/repofile/mod.rs

//! Repository definition file generation
//!
//! Turns collected package directory URLs into package manager
//! configuration: YUM/Zypper stanzas, APT sources-list entries, and the
//! stable versions list used to fetch signing keys.

pub mod apt;
pub mod yum;

use crate::collect::FeedSummary;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// File name for YUM/Zypper repository stanzas
pub const YUM_REPO_FILE: &str = "mongodb.repo";
/// File name for APT sources-list entries
pub const APT_LIST_FILE: &str = "mongodb.list";
/// File name for the stable release train list
pub const VERSIONS_FILE: &str = "versions.txt";

/// Write all three repository definition files into `out_dir`
///
/// Existing files are truncated. Output written before a malformed URL is
/// encountered stays on disk; any error aborts the whole run.
pub fn generate(summary: &FeedSummary, out_dir: &Path) -> Result<()> {
    let repo_path = out_dir.join(YUM_REPO_FILE);
    let mut repo = BufWriter::new(File::create(&repo_path)?);
    let stanzas = yum::write_repo(&mut repo, &summary.package_dirs, summary.current_branch)?;
    repo.flush()?;
    info!("Wrote {} YUM stanzas to {}", stanzas, repo_path.display());

    let list_path = out_dir.join(APT_LIST_FILE);
    let mut list = BufWriter::new(File::create(&list_path)?);
    let entries = apt::write_list(&mut list, &summary.package_dirs, summary.current_branch)?;
    list.flush()?;
    info!("Wrote {} APT entries to {}", entries, list_path.display());

    let versions_path = out_dir.join(VERSIONS_FILE);
    let mut versions = BufWriter::new(File::create(&versions_path)?);
    apt::write_stable_versions(&mut versions, summary.current_branch)?;
    versions.flush()?;
    info!("Wrote stable train list to {}", versions_path.display());

    Ok(())
}

/// Capitalize the first character and lowercase the rest ("org" -> "Org")
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
