// src/repofile/yum.rs

//! YUM/Zypper repository stanzas
//!
//! Package directory URLs for RPM based distributions look like
//!
//! `https://repo.mongodb.org/yum/redhat/7/mongodb-org/3.4/x86_64/RPMS`
//!
//! with the distribution, distribution version, product, release train and
//! architecture at fixed path positions. Every URL that survives release
//! train classification becomes one `.repo` stanza.

use crate::error::{Error, Result};
use crate::train::ReleaseTrain;
use std::io::Write;
use tracing::debug;
use url::Url;

use super::capitalize;

/// A package directory URL parsed into its YUM repository fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YumSource {
    /// Distribution family, e.g. "redhat" or "suse"
    pub distro: String,
    /// Distribution version, e.g. "7"
    pub distro_version: String,
    /// Edition label from the product segment, e.g. "org" or "enterprise"
    pub edition: String,
    /// Release train encoded in the URL path
    pub train: ReleaseTrain,
    /// CPU architecture, e.g. "x86_64"
    pub arch: String,
    /// Stanza base URL: the directory URL with its final segment removed
    pub base_url: String,
}

impl YumSource {
    /// Whether a directory URL belongs to an RPM based ecosystem
    pub fn matches(url: &str) -> bool {
        url.contains("yum") || url.contains("zypper")
    }

    /// Parse a package directory URL into its repository fields
    ///
    /// Path layout: `<ecosystem>/<distro>/<distro_ver>/<product>/<train>/<arch>/...`
    pub fn parse(dir_url: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedUrl {
            url: dir_url.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(dir_url).map_err(|e| malformed(&e.to_string()))?;
        let segments: Vec<&str> = parsed
            .path_segments()
            .ok_or_else(|| malformed("URL has no path"))?
            .collect();
        if segments.len() < 6 {
            return Err(malformed("expected at least 6 path segments"));
        }

        let edition = segments[3]
            .split('-')
            .nth(1)
            .ok_or_else(|| malformed("product segment has no edition suffix"))?;
        let train: ReleaseTrain = segments[4]
            .parse()
            .map_err(|_| malformed("release train segment is not a major.minor decimal"))?;
        let base_url = dir_url
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .ok_or_else(|| malformed("URL has no directory component"))?;

        Ok(Self {
            distro: segments[1].to_string(),
            distro_version: segments[2].to_string(),
            edition: edition.to_string(),
            train,
            arch: segments[5].to_string(),
            base_url: base_url.to_string(),
        })
    }

    /// Write one `.repo` stanza; `key` selects the gpg key file
    fn write_stanza<W: Write>(&self, out: &mut W, key: ReleaseTrain) -> std::io::Result<()> {
        writeln!(
            out,
            "[mongodb-{}-{}{}-{}-{}]",
            self.edition, self.distro, self.distro_version, self.arch, self.train
        )?;
        writeln!(
            out,
            "name=MongoDB {} {}{} {} Repository {}",
            capitalize(&self.edition),
            self.distro,
            self.distro_version,
            self.arch,
            self.train
        )?;
        writeln!(out, "baseurl={}", self.base_url)?;
        writeln!(out, "gpgcheck=1")?;
        writeln!(out, "enabled=1")?;
        writeln!(
            out,
            "gpgkey=https://www.mongodb.org/static/pgp/server-{}.asc",
            key
        )?;
        writeln!(out)
    }
}

/// Write a `.repo` stanza for every RPM package directory on a published
/// release train. Returns the number of stanzas written.
pub fn write_repo<W: Write>(
    out: &mut W,
    package_dirs: &[String],
    current_branch: ReleaseTrain,
) -> Result<usize> {
    let mut written = 0;
    for dir_url in package_dirs {
        if !YumSource::matches(dir_url) {
            continue;
        }
        let source = YumSource::parse(dir_url)?;
        let Some(key) = source.train.signing_key(current_branch) else {
            debug!("Skipping stale development train {}: {}", source.train, dir_url);
            continue;
        };
        source.write_stanza(out, key)?;
        written += 1;
    }
    Ok(written)
}
