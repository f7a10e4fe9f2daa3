use crate::error::VersionError;
use itertools::{EitherOrBoth, Itertools};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

mod parsing;
pub mod upgrade;

pub use upgrade::check_upgrade;

/// The prerelease stage of a version. Declaration order is the sort order,
/// which matches the literal ordering of the tokens `a < b < rc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrereleaseTag {
    Alpha,
    Beta,
    ReleaseCandidate,
}

impl PrereleaseTag {
    /// The literal token used in version strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrereleaseTag::Alpha => "a",
            PrereleaseTag::Beta => "b",
            PrereleaseTag::ReleaseCandidate => "rc",
        }
    }
}

impl fmt::Display for PrereleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prerelease marker such as `rc2`. Orders by tag, then by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prerelease {
    pub tag: PrereleaseTag,
    pub number: u64,
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.number)
    }
}

/// A parsed version number: dot separated segments plus an optional prerelease.
///
/// Values with different segment counts compare as if the shorter one were
/// padded with zeros, so `1.0 == 1.0.0`. A prerelease sorts before the final
/// release it belongs to. When `reverse_order` is set on the left-hand value,
/// the result of [`Version::compare`] is inverted.
///
/// `Version` deliberately does not implement `Ord`: two values with different
/// `reverse_order` flags do not form a total order. Use [`sort_versions`] to
/// sort a collection.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<u64>,
    prerelease: Option<Prerelease>,
    reverse_order: bool,
}

impl Version {
    /// Parses a version string such as `1.2.3` or `1.0rc2`.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let parsed = parsing::parse_version(text)?;
        Ok(Self {
            segments: parsed.segments,
            prerelease: parsed.prerelease,
            reverse_order: false,
        })
    }

    pub fn with_reverse_order(mut self, reverse_order: bool) -> Self {
        self.reverse_order = reverse_order;
        self
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    pub fn prerelease(&self) -> Option<Prerelease> {
        self.prerelease
    }

    pub fn is_reverse_order(&self) -> bool {
        self.reverse_order
    }

    /// Three-way comparison. Only `self`'s `reverse_order` flag is consulted.
    pub fn compare(&self, other: &Version) -> Ordering {
        let ordering = self
            .segments
            .iter()
            .zip_longest(other.segments.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a.cmp(b),
                EitherOrBoth::Left(a) => a.cmp(&0),
                EitherOrBoth::Right(b) => 0.cmp(b),
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            });

        if self.reverse_order {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Compares against a version that has not been parsed yet.
    pub fn compare_str(&self, other: &str) -> Result<Ordering, VersionError> {
        Ok(self.compare(&Version::parse(other)?))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.iter().join("."))?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "{}", prerelease)?;
        }
        Ok(())
    }
}

/// Sorts versions in place using [`Version::compare`].
///
/// Every element must share the same `reverse_order` flag, otherwise the
/// comparator is not a total order and `MixedSortDirection` is returned with
/// the slice left untouched.
pub fn sort_versions(versions: &mut [Version]) -> Result<(), VersionError> {
    if !versions.iter().map(Version::is_reverse_order).all_equal() {
        return Err(VersionError::MixedSortDirection);
    }
    versions.sort_by(Version::compare);
    Ok(())
}
