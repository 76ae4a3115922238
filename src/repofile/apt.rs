// src/repofile/apt.rs

//! APT sources-list entries and the stable versions list
//!
//! Package directory URLs for Debian based distributions look like
//!
//! `http://repo.mongodb.org/apt/ubuntu/dists/xenial/mongodb-org/3.4/multiverse/binary-amd64`
//!
//! Every URL that survives release train classification becomes one `deb`
//! line. The stable versions list is written alongside so signing keys for
//! every stable train can be fetched separately.

use crate::error::{Error, Result};
use crate::train::ReleaseTrain;
use std::io::Write;
use tracing::debug;
use url::Url;

use super::capitalize;

/// A package directory URL parsed into its APT repository fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AptSource {
    /// Repository host, e.g. "repo.mongodb.org"
    pub host: String,
    /// Distribution family: "debian" or "ubuntu"
    pub distro: String,
    /// Distribution release codename, e.g. "xenial"
    pub codename: String,
    /// Product path segment, e.g. "mongodb-org"
    pub product: String,
    /// Edition label from the product segment, e.g. "org" or "enterprise"
    pub edition: String,
    /// Release train encoded in the URL path
    pub train: ReleaseTrain,
    /// Repository component, e.g. "multiverse" or "main"
    pub component: String,
    /// CPU architecture from the binary segment, e.g. "amd64"
    pub arch: String,
}

impl AptSource {
    /// Whether a directory URL belongs to a Debian based ecosystem
    pub fn matches(url: &str) -> bool {
        url.contains("debian") || url.contains("ubuntu")
    }

    /// Parse a package directory URL into its repository fields
    ///
    /// Path layout:
    /// `apt/<distro>/dists/<codename>/<product>/<train>/<component>/binary-<arch>`
    pub fn parse(dir_url: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedUrl {
            url: dir_url.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(dir_url).map_err(|e| malformed(&e.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| malformed("URL has no host"))?;
        let segments: Vec<&str> = parsed
            .path_segments()
            .ok_or_else(|| malformed("URL has no path"))?
            .collect();
        if segments.len() < 8 {
            return Err(malformed("expected at least 8 path segments"));
        }

        let edition = segments[4]
            .split('-')
            .nth(1)
            .ok_or_else(|| malformed("product segment has no edition suffix"))?;
        let train: ReleaseTrain = segments[5]
            .parse()
            .map_err(|_| malformed("release train segment is not a major.minor decimal"))?;
        let arch = segments[7]
            .split('-')
            .nth(1)
            .ok_or_else(|| malformed("binary segment has no architecture suffix"))?;

        Ok(Self {
            host: host.to_string(),
            distro: segments[1].to_string(),
            codename: segments[3].to_string(),
            product: segments[4].to_string(),
            edition: edition.to_string(),
            train,
            component: segments[6].to_string(),
            arch: arch.to_string(),
        })
    }

    /// Write one sources-list entry with its comment header
    fn write_entry<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "# {} {} {} {} {}",
            capitalize(&self.edition),
            self.train,
            self.distro,
            self.codename,
            self.arch
        )?;
        writeln!(
            out,
            "deb [ arch={} ] http://{}/apt/{} {}/{}/{} {}",
            self.arch,
            self.host,
            self.distro,
            self.codename,
            self.product,
            self.train,
            self.component
        )?;
        writeln!(out)
    }
}

/// Write a sources-list entry for every Debian package directory on a
/// published release train. Returns the number of entries written.
pub fn write_list<W: Write>(
    out: &mut W,
    package_dirs: &[String],
    current_branch: ReleaseTrain,
) -> Result<usize> {
    let mut written = 0;
    for dir_url in package_dirs {
        if !AptSource::matches(dir_url) {
            continue;
        }
        let source = AptSource::parse(dir_url)?;
        if source.train.signing_key(current_branch).is_none() {
            debug!("Skipping stale development train {}: {}", source.train, dir_url);
            continue;
        }
        source.write_entry(out)?;
        written += 1;
    }
    Ok(written)
}

/// Write the stable release trains, one per line, from the first supported
/// train through the current branch
///
/// Not filtered per URL: this is the arithmetic sequence consumers use to
/// fetch signing keys, and with a current development branch it already
/// names the stable train that will follow it.
pub fn write_stable_versions<W: Write>(out: &mut W, current_branch: ReleaseTrain) -> Result<()> {
    for train in ReleaseTrain::stable_through(current_branch) {
        writeln!(out, "{train}")?;
    }
    Ok(())
}
