// src/train.rs

//! Release train arithmetic
//!
//! A release train is the major.minor pair grouping patch releases: 3.4.1
//! and 3.4.2 both belong to train 3.4. Trains are exact base-10 decimals
//! with a single fractional digit, stored in tenths so parity checks and
//! 0.2 stepping never drift the way floating point would.
//!
//! Even-parity trains (3.0, 3.2, 3.4, ...) are stable releases. Odd-parity
//! trains (3.3, 3.5, ...) are development releases: they are published only
//! while they are the newest train in the feed, and their packages are
//! signed with the key of the stable train that will follow them.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A major.minor release train, stored in tenths (3.4 == 34)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseTrain {
    tenths: u32,
}

impl ReleaseTrain {
    /// The oldest train repository definitions are generated for (3.0)
    pub const FIRST: ReleaseTrain = ReleaseTrain { tenths: 30 };

    /// Derive the train from a dotted version string
    ///
    /// Only the first two components are considered: "3.5.2" and
    /// "3.5.0-rc1" both belong to train 3.5, a bare "3" reads as 3.0.
    pub fn from_version(version: &str) -> Result<Self> {
        let mut parts = version.split('.');
        let major = parts.next().unwrap_or("");
        let minor = parts.next();
        Self::from_parts(major, minor).ok_or_else(|| Error::InvalidTrain(version.to_string()))
    }

    /// Whether this is a stable (even-parity) train
    pub fn is_stable(self) -> bool {
        self.tenths % 2 == 0
    }

    /// Decide whether packages on this train are published, and which
    /// train's signing key they use.
    ///
    /// Stable trains are always published under their own key. A
    /// development train is published only while it is the current branch,
    /// and borrows the key of the stable train that follows it (3.5 signs
    /// with the 3.6 key). Any other development train is excluded.
    pub fn signing_key(self, current_branch: ReleaseTrain) -> Option<ReleaseTrain> {
        if self.is_stable() {
            Some(self)
        } else if self == current_branch {
            Some(ReleaseTrain {
                tenths: self.tenths + 1,
            })
        } else {
            None
        }
    }

    /// Enumerate stable trains from [`ReleaseTrain::FIRST`] while below
    /// `current_branch + 0.2`
    ///
    /// A current development branch therefore includes the stable train
    /// that will succeed it: with current branch 3.5 the sequence is
    /// 3.0, 3.2, 3.4, 3.6.
    pub fn stable_through(current_branch: ReleaseTrain) -> impl Iterator<Item = ReleaseTrain> {
        (Self::FIRST.tenths..current_branch.tenths + 2)
            .step_by(2)
            .map(|tenths| ReleaseTrain { tenths })
    }

    /// Build a train from its dotted components; the minor component must
    /// be a single digit to stay exact under the tenths representation
    fn from_parts(major: &str, minor: Option<&str>) -> Option<Self> {
        let major: u32 = major.parse().ok()?;
        let minor: u32 = match minor {
            Some(m) if m.len() == 1 => m.parse().ok()?,
            Some(_) => return None,
            None => 0,
        };
        Some(Self {
            tenths: major * 10 + minor,
        })
    }
}

impl fmt::Display for ReleaseTrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl FromStr for ReleaseTrain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('.') {
            Some((major, minor)) => Self::from_parts(major, Some(minor)),
            None => Self::from_parts(s, None),
        }
        .ok_or_else(|| Error::InvalidTrain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(s: &str) -> ReleaseTrain {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_version_takes_major_minor() {
        assert_eq!(ReleaseTrain::from_version("3.5.2").unwrap(), train("3.5"));
        assert_eq!(
            ReleaseTrain::from_version("3.6.0-rc1").unwrap(),
            train("3.6")
        );
        assert_eq!(ReleaseTrain::from_version("3").unwrap(), train("3.0"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ReleaseTrain::from_version("latest").is_err());
        assert!("3.".parse::<ReleaseTrain>().is_err());
        assert!("3.x".parse::<ReleaseTrain>().is_err());
        assert!("3.4.1".parse::<ReleaseTrain>().is_err());
        assert!("".parse::<ReleaseTrain>().is_err());
    }

    #[test]
    fn test_display_keeps_trailing_zero() {
        assert_eq!(train("3.0").to_string(), "3.0");
        assert_eq!(train("4.0").to_string(), "4.0");
        assert_eq!(train("3.5").to_string(), "3.5");
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(train("3.2") < train("3.4"));
        assert!(train("3.4") < train("3.5"));
        assert!(train("3.6") < train("4.0"));
        assert_eq!(train("3.4"), train("3.4"));
    }

    #[test]
    fn test_parity() {
        assert!(train("3.0").is_stable());
        assert!(train("3.4").is_stable());
        assert!(!train("3.3").is_stable());
        assert!(!train("3.5").is_stable());
    }

    #[test]
    fn test_stable_train_keeps_own_key() {
        assert_eq!(
            train("3.4").signing_key(train("3.5")),
            Some(train("3.4"))
        );
        assert_eq!(
            train("3.4").signing_key(train("3.4")),
            Some(train("3.4"))
        );
    }

    #[test]
    fn test_current_dev_train_borrows_next_key() {
        assert_eq!(
            train("3.5").signing_key(train("3.5")),
            Some(train("3.6"))
        );
    }

    #[test]
    fn test_stale_dev_train_is_excluded() {
        assert_eq!(train("3.3").signing_key(train("3.5")), None);
        assert_eq!(train("3.5").signing_key(train("3.6")), None);
    }

    #[test]
    fn test_stable_through_stable_branch() {
        let trains: Vec<String> = ReleaseTrain::stable_through(train("3.4"))
            .map(|t| t.to_string())
            .collect();
        assert_eq!(trains, ["3.0", "3.2", "3.4"]);
    }

    #[test]
    fn test_stable_through_dev_branch_includes_successor() {
        let trains: Vec<String> = ReleaseTrain::stable_through(train("3.5"))
            .map(|t| t.to_string())
            .collect();
        assert_eq!(trains, ["3.0", "3.2", "3.4", "3.6"]);
    }

    #[test]
    fn test_stable_through_first_branch() {
        let trains: Vec<String> = ReleaseTrain::stable_through(ReleaseTrain::FIRST)
            .map(|t| t.to_string())
            .collect();
        assert_eq!(trains, ["3.0"]);
    }
}
