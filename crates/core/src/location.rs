//! Location resolution
//!
//! Classifies a path string as either a local filesystem path or a remote
//! object reference. Remote references use the reserved marker `a:` followed
//! by `container/key`; anything else is a local path, used verbatim.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Marker that tags a string as a remote object reference
pub const REMOTE_PREFIX: &str = "a:";

/// A resolved, typed reference to either end of a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Local filesystem path
    Local(PathBuf),
    /// Remote object: container plus key
    Remote { container: String, key: String },
}

impl Location {
    /// Build a remote location
    pub fn remote(container: impl Into<String>, key: impl Into<String>) -> Self {
        Location::Remote {
            container: container.into(),
            key: key.into(),
        }
    }

    /// Build a local location
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Location::Local(path.into())
    }

    /// Check if this is a remote location
    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Remote { .. })
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Local(path) => write!(f, "{}", path.display()),
            Location::Remote { container, key } => {
                write!(f, "{REMOTE_PREFIX}{container}/{key}")
            }
        }
    }
}

/// Parse a path string into a Location
///
/// A string beginning with `a:` is remote; the remainder is split on the
/// first `/` into container and key. No container/key syntax validation
/// happens here: invalid names surface later as backend errors. A remote
/// string with no separator is rejected outright rather than propagated as
/// an empty-key lookup.
pub fn resolve(s: &str) -> Result<Location> {
    let Some(rest) = s.strip_prefix(REMOTE_PREFIX) else {
        return Ok(Location::Local(PathBuf::from(s)));
    };

    let Some((container, key)) = rest.split_once('/') else {
        return Err(Error::Resolution(format!(
            "'{s}' is missing a '/' separator. Use format: {REMOTE_PREFIX}container/key"
        )));
    };

    if container.is_empty() {
        return Err(Error::Resolution(format!(
            "'{s}' has an empty container name"
        )));
    }

    Ok(Location::remote(container, key))
}
