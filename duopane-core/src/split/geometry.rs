//! Divider geometry and the container contract
//!
//! The split view owns a divider container with two regions. This module
//! defines what the view needs from that container and the single piece of
//! layout arithmetic the view performs: where to put the divider when the
//! right pane is revealed.

use super::types::PaneSide;

/// The divider container the split view arranges its panes in.
///
/// Toolkit adapters implement this over their paned widget. All calls are
/// synchronous and happen on the UI thread.
pub trait SplitContainer {
    /// Slot type hosted in the regions.
    type Slot;

    /// Current allocated width of the container, `0` before the first
    /// layout pass.
    fn width(&self) -> i32;

    /// Current divider offset.
    fn divider_position(&self) -> i32;

    /// Moves the divider.
    fn set_divider_position(&mut self, position: i32);

    /// Shows or hides the right region.
    fn set_right_visible(&mut self, visible: bool);

    /// Marks `active` as the active region and clears the mark from the
    /// other one.
    fn apply_active_style(&mut self, active: PaneSide);

    /// Appends a slot to a region's display area. For the right region the
    /// slot goes after the close-control header.
    fn attach_slot(&mut self, side: PaneSide, slot: &Self::Slot);

    /// Removes a slot from a region's display area.
    fn detach_slot(&mut self, side: PaneSide, slot: &Self::Slot);
}

/// Where the divider goes when the split is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerPlacement {
    /// Restore a previously saved offset.
    Restore(i32),
    /// Split the current width in half.
    Halve(i32),
    /// The container has no width yet; halve on the first resize.
    Deferred,
}

impl DividerPlacement {
    /// Returns the offset to apply now, if any.
    #[must_use]
    pub const fn position(self) -> Option<i32> {
        match self {
            Self::Restore(position) | Self::Halve(position) => Some(position),
            Self::Deferred => None,
        }
    }
}

/// Decides where the divider goes on enable.
///
/// A saved offset wins when it is strictly positive. Otherwise the divider
/// splits the container width in half, rounding down. Without a valid width
/// the decision is deferred so a meaningless half of zero is never applied.
#[must_use]
pub fn resolve_divider_position(saved: Option<i32>, width: i32) -> DividerPlacement {
    match saved {
        Some(position) if position > 0 => DividerPlacement::Restore(position),
        _ if width > 0 => DividerPlacement::Halve(width / 2),
        _ => DividerPlacement::Deferred,
    }
}
