//! Core type definitions for the dual-pane split view
//!
//! This module contains the identifier types, the pane side enum and the
//! navigable `Location` used throughout the split view system.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{SplitError, SplitResult};

/// One of the two regions a split view arranges side by side.
///
/// The left pane is always present; the right pane exists only while
/// split mode is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneSide {
    /// The primary pane, always visible.
    #[default]
    Left,
    /// The secondary pane, visible only while split.
    Right,
}

impl PaneSide {
    /// Maps the boolean "is right pane" flag used by notifications.
    #[must_use]
    pub const fn from_is_right(is_right: bool) -> Self {
        if is_right { Self::Right } else { Self::Left }
    }

    /// Returns true for the right pane.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Returns the opposite pane.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Both sides, left first.
    #[must_use]
    pub const fn both() -> [Self; 2] {
        [Self::Left, Self::Right]
    }
}

impl fmt::Display for PaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Unique identifier for a content slot.
///
/// Used for log correlation only; slot identity inside a split view is
/// decided by the slot's own equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub Uuid);

impl SlotId {
    /// Creates a new random slot ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a slot ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SlotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A navigable location, identified by its URI.
///
/// Local directories use the `file://` scheme; virtual locations such as
/// `trash:///` or `smb://host/share` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location {
    uri: String,
}

const FILE_SCHEME: &str = "file://";

impl Location {
    /// Parses a URI into a location.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidLocation`] if the string is empty or
    /// does not start with a `scheme:` prefix.
    pub fn parse(uri: &str) -> SplitResult<Self> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(SplitError::InvalidLocation("empty URI".to_string()));
        }

        let scheme_ok = uri.split_once(':').is_some_and(|(scheme, _)| {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        });
        if !scheme_ok {
            return Err(SplitError::InvalidLocation(format!(
                "missing URI scheme: {uri}"
            )));
        }

        Ok(Self {
            uri: uri.to_string(),
        })
    }

    /// Creates a `file://` location from an absolute local path.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidLocation`] for relative paths.
    pub fn from_path(path: &Path) -> SplitResult<Self> {
        if !path.is_absolute() {
            return Err(SplitError::InvalidLocation(format!(
                "relative path: {}",
                path.display()
            )));
        }
        Ok(Self {
            uri: format!("{FILE_SCHEME}{}", path.display()),
        })
    }

    /// Returns the full URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the URI scheme without the trailing colon.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.uri.split_once(':').map_or("", |(scheme, _)| scheme)
    }

    /// Returns the local path for `file://` locations.
    #[must_use]
    pub fn as_path(&self) -> Option<PathBuf> {
        self.uri.strip_prefix(FILE_SCHEME).map(PathBuf::from)
    }

    /// Returns a short display name: the last path segment, or the URI
    /// itself for scheme roots like `trash:///`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let trimmed = self.uri.trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some((_, last)) if !last.is_empty() && !last.ends_with(':') => last,
            _ => &self.uri,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl TryFrom<String> for Location {
    type Error = SplitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.uri
    }
}

/// Flags forwarded to [`ContentSlot::open_location`](super::ContentSlot::open_location).
///
/// The split view itself always navigates with [`OpenFlags::NONE`]; the
/// other flags exist so window code can reuse the same contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OpenFlags(u8);

impl OpenFlags {
    /// Navigate in place.
    pub const NONE: Self = Self(0);
    /// Open in a new tab of the same window.
    pub const NEW_TAB: Self = Self(1);
    /// Open in a new window.
    pub const NEW_WINDOW: Self = Self(1 << 1);
    /// Do not focus the slot after navigating.
    pub const DONT_MAKE_ACTIVE: Self = Self(1 << 2);

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for OpenFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}
