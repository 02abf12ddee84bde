//! Persisted split view settings
//!
//! Provides [`SplitViewSettings`], the user-facing preferences and the last
//! saved split state stored in `settings.toml`.

use serde::{Deserialize, Serialize};

use crate::split::SplitSnapshot;

/// Split view preferences and persisted geometry.
///
/// Unknown or missing keys fall back to defaults so older files keep
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitViewSettings {
    /// Seed the divider position from `divider_position` on startup.
    pub remember_divider_position: bool,
    /// Last persisted divider offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider_position: Option<i32>,
    /// Re-enable split mode on startup when it was active at last save.
    pub restore_split_on_startup: bool,
    /// Whether split mode was active at last save.
    pub split_active: bool,
}

impl Default for SplitViewSettings {
    fn default() -> Self {
        Self {
            remember_divider_position: true,
            divider_position: None,
            restore_split_on_startup: false,
            split_active: false,
        }
    }
}

impl SplitViewSettings {
    /// Records the state of a split view for saving.
    ///
    /// A missing or non-positive divider position keeps the previously
    /// stored one.
    pub fn capture(&mut self, snapshot: &SplitSnapshot) {
        self.split_active = snapshot.split_active;
        if let Some(position) = snapshot.divider_position.filter(|p| *p > 0) {
            self.divider_position = Some(position);
        }
    }

    /// Divider position to seed a new split view with, if any.
    #[must_use]
    pub fn initial_divider_position(&self) -> Option<i32> {
        if self.remember_divider_position {
            self.divider_position.filter(|p| *p > 0)
        } else {
            None
        }
    }

    /// Returns true if a new window should start split.
    #[must_use]
    pub fn should_restore_split(&self) -> bool {
        self.restore_split_on_startup && self.split_active
    }
}
