//! Social platforms that deliver webhooks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A platform that sends webhook callbacks to this receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Facebook (Graph API webhooks, signed with `X-Hub-Signature`).
    Facebook,
    /// Instagram.
    Instagram,
    /// Threads.
    Threads,
}

impl Platform {
    /// All platforms in route order.
    pub const ALL: [Self; 3] = [Self::Facebook, Self::Instagram, Self::Threads];

    /// Lowercase name, also used as the route path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Threads => "threads",
        }
    }

    /// Whether deliveries from this platform must carry a valid signature.
    ///
    /// Only Facebook deliveries are authenticated; Instagram and Threads
    /// payloads are accepted as-is.
    #[must_use]
    pub const fn requires_signature(self) -> bool {
        matches!(self, Self::Facebook)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Self::Facebook),
            "instagram" => Ok(Self::Instagram),
            "threads" => Ok(Self::Threads),
            _ => Err(CoreError::UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Facebook".parse::<Platform>().unwrap(), Platform::Facebook);
        assert_eq!(" threads ".parse::<Platform>().unwrap(), Platform::Threads);
        assert_eq!("INSTAGRAM".parse::<Platform>().unwrap(), Platform::Instagram);
    }

    #[test]
    fn rejects_unknown_platform() {
        assert_eq!(
            "myspace".parse::<Platform>(),
            Err(CoreError::UnknownPlatform("myspace".into()))
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Instagram).unwrap();
        assert_eq!(json, "\"instagram\"");
    }

    #[test]
    fn only_facebook_requires_signature() {
        assert!(Platform::Facebook.requires_signature());
        assert!(!Platform::Instagram.requires_signature());
        assert!(!Platform::Threads.requires_signature());
    }

    #[test]
    fn display_matches_route_segment() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string(), platform.as_str());
        }
    }
}
