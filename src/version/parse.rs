//! `major.minor` version parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{BootError, Result};

/// Parse the `(major, minor)` pair out of an installed version string.
///
/// A local version label (`+cu118`) is dropped first, then the first two
/// dot-separated components are read as integers. Anything after the minor
/// component is ignored, so `"2.2.0+cu118"` and `"2.2.post1"` both give
/// `(2, 2)`.
pub fn parse_major_minor(version: &str) -> Result<(u32, u32)> {
    let public = version.trim().split('+').next().unwrap_or_default();
    let mut parts = public.split('.');

    let major = parse_component(version, parts.next(), "major")?;
    let minor = parse_component(version, parts.next(), "minor")?;

    Ok((major, minor))
}

fn parse_component(version: &str, part: Option<&str>, which: &str) -> Result<u32> {
    let part = part.filter(|p| !p.is_empty()).ok_or_else(|| BootError::VersionParse {
        version: version.to_string(),
        message: format!("missing {} component", which),
    })?;

    part.parse().map_err(|_| BootError::VersionParse {
        version: version.to_string(),
        message: format!("{} component '{}' is not an integer", which, part),
    })
}

/// A `(major, minor)` lower bound.
///
/// Ordering is lexicographic on `(major, minor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinimumVersion {
    pub major: u32,
    pub minor: u32,
}

impl MinimumVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Whether `(major, minor)` meets this bound.
    pub fn is_satisfied_by(&self, found: (u32, u32)) -> bool {
        found >= (self.major, self.minor)
    }
}

impl fmt::Display for MinimumVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for MinimumVersion {
    type Err = BootError;

    fn from_str(s: &str) -> Result<Self> {
        let (major, minor) = parse_major_minor(s)?;
        Ok(Self { major, minor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_versions() {
        assert_eq!(parse_major_minor("2.3.1").unwrap(), (2, 3));
        assert_eq!(parse_major_minor("10.4").unwrap(), (10, 4));
    }

    #[test]
    fn ignores_local_label_and_trailing_components() {
        assert_eq!(parse_major_minor("2.2.0+cu118").unwrap(), (2, 2));
        assert_eq!(parse_major_minor("2.2.post1").unwrap(), (2, 2));
        assert_eq!(parse_major_minor("1.26.4.dev0").unwrap(), (1, 26));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_major_minor(" 2.2.0\n").unwrap(), (2, 2));
    }

    #[test]
    fn single_component_is_an_error() {
        let err = parse_major_minor("2").unwrap_err();
        assert!(matches!(err, BootError::VersionParse { .. }));
        assert!(err.to_string().contains("missing minor"));
    }

    #[test]
    fn non_numeric_minor_is_an_error() {
        let err = parse_major_minor("2.2rc1").unwrap_err();
        assert!(err.to_string().contains("'2rc1'"));
    }

    #[test]
    fn empty_string_is_an_error() {
        assert!(parse_major_minor("").is_err());
    }

    #[test]
    fn minimum_from_str() {
        let min: MinimumVersion = "2.2".parse().unwrap();
        assert_eq!(min, MinimumVersion::new(2, 2));
        assert_eq!(min.to_string(), "2.2");
    }

    #[test]
    fn minimum_is_lexicographic() {
        let min = MinimumVersion::new(2, 2);
        assert!(min.is_satisfied_by((2, 2)));
        assert!(min.is_satisfied_by((2, 3)));
        assert!(min.is_satisfied_by((3, 0)));
        assert!(!min.is_satisfied_by((2, 1)));
        assert!(!min.is_satisfied_by((1, 9)));
    }

    #[test]
    fn minimum_ordering() {
        assert!(MinimumVersion::new(1, 9) < MinimumVersion::new(2, 0));
        assert!(MinimumVersion::new(2, 10) > MinimumVersion::new(2, 9));
    }
}
