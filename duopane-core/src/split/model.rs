//! Dual-pane state machine
//!
//! This module provides the `DualPaneModel` struct which owns the divider
//! container, the two slot holders and the split state record. Every
//! mutating operation returns the notifications it produced instead of
//! delivering them, so callers that keep the model behind a `RefCell` can
//! release their borrow before observers run.
//!
//! # States
//!
//! - **Inactive** (initial): only the left pane is visible
//! - **Active**: both panes are visible, separated by a divider
//!
//! The active pane flag is valid in both states but only influences
//! [`DualPaneModel::active_slot`] while the split is active.
//!
//! # Example
//!
//! ```
//! use duopane_core::split::{DualPaneModel, Location, PaneSide, SplitContainer, SplitEvent};
//! use duopane_core::testing::{RecordingContainer, RecordingSlot};
//!
//! let mut model = DualPaneModel::new(RecordingContainer::with_width(800));
//! let right = RecordingSlot::new();
//! model.set_right_slot(Some(right.clone()));
//!
//! let home = Location::parse("file:///home").unwrap();
//! let events = model.enable(Some(&home));
//! assert!(events.contains(&SplitEvent::SplitEnabled));
//! assert_eq!(model.container().divider_position(), 400);
//! assert_eq!(right.opened(), vec![home]);
//!
//! model.focus_entered(PaneSide::Right);
//! assert_eq!(model.active_slot(), Some(&right));
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::{DividerPlacement, SplitContainer, resolve_divider_position};
use super::signals::{SplitEvent, SplitProperty};
use super::slot::{ContentSlot, SlotChange, SlotHolder};
use super::types::{Location, OpenFlags, PaneSide};

/// Persistable view of the split state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSnapshot {
    /// Whether split mode was active.
    pub split_active: bool,
    /// Which pane had logical focus.
    pub active_pane: PaneSide,
    /// Divider offset to restore: the live offset while split, otherwise
    /// the last saved one.
    pub divider_position: Option<i32>,
}

/// Owns the split container, both slot holders and the split state.
///
/// The model is the single mutation path: programmatic callers, focus
/// observers and the close control all go through the same methods.
#[derive(Debug)]
pub struct DualPaneModel<C: SplitContainer> {
    container: C,
    left: SlotHolder<C::Slot>,
    right: SlotHolder<C::Slot>,
    split_active: bool,
    active_pane: PaneSide,
    /// Recorded on disable; never cleared once set.
    saved_divider_position: Option<i32>,
    /// Enable happened before the container had a width.
    pending_halve: bool,
}

impl<C> DualPaneModel<C>
where
    C: SplitContainer,
    C::Slot: ContentSlot,
{
    /// Creates an inactive model with the left pane active.
    ///
    /// The right region is hidden and the left region styled active
    /// straight away so the container never shows a half-initialized state.
    pub fn new(mut container: C) -> Self {
        container.set_right_visible(false);
        container.apply_active_style(PaneSide::Left);
        Self {
            container,
            left: SlotHolder::new(),
            right: SlotHolder::new(),
            split_active: false,
            active_pane: PaneSide::Left,
            saved_divider_position: None,
            pending_halve: false,
        }
    }

    /// Seeds the saved divider position, e.g. from persisted settings.
    ///
    /// Non-positive values are ignored; they would never be restored.
    #[must_use]
    pub fn with_saved_divider_position(mut self, position: Option<i32>) -> Self {
        if let Some(position) = position.filter(|p| *p > 0) {
            self.saved_divider_position = Some(position);
        }
        self
    }

    /// Returns the container.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Returns the container mutably, for adapter code that needs to
    /// reach toolkit widgets.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// Returns true while both panes are shown.
    pub fn is_active(&self) -> bool {
        self.split_active
    }

    /// Returns the pane with logical focus.
    pub fn active_pane(&self) -> PaneSide {
        self.active_pane
    }

    /// Returns the divider offset recorded by the last disable.
    pub fn saved_divider_position(&self) -> Option<i32> {
        self.saved_divider_position
    }

    /// Returns true if an enable is waiting for the first layout pass.
    pub fn has_pending_layout(&self) -> bool {
        self.pending_halve
    }

    /// Sets the active pane.
    ///
    /// Emits a property change and `active-pane-changed` only when the
    /// value actually changes.
    pub fn set_active_pane(&mut self, is_right: bool) -> Vec<SplitEvent> {
        let side = PaneSide::from_is_right(is_right);
        if self.active_pane == side {
            tracing::trace!(pane = %side, "Active pane unchanged");
            return Vec::new();
        }

        self.active_pane = side;
        self.container.apply_active_style(side);
        tracing::debug!(pane = %side, "Active pane changed");

        vec![
            SplitEvent::PropertyChanged(SplitProperty::ActivePane),
            SplitEvent::ActivePaneChanged { is_right },
        ]
    }

    /// Focus entered one of the regions.
    pub fn focus_entered(&mut self, side: PaneSide) -> Vec<SplitEvent> {
        self.set_active_pane(side.is_right())
    }

    /// Binds the left slot. See [`Self::set_slot`].
    pub fn set_left_slot(&mut self, slot: Option<C::Slot>) -> SlotChange<C::Slot> {
        self.set_slot(PaneSide::Left, slot)
    }

    /// Binds the right slot. See [`Self::set_slot`].
    pub fn set_right_slot(&mut self, slot: Option<C::Slot>) -> SlotChange<C::Slot> {
        self.set_slot(PaneSide::Right, slot)
    }

    /// Replaces the slot bound to `side`.
    ///
    /// The previous occupant is detached from the region and handed back;
    /// the new slot, if any, is appended to the region. Binding works the
    /// same whether or not the split is active.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is currently bound to the other pane. A slot has
    /// one holder at a time; move it by clearing the other side first.
    pub fn set_slot(&mut self, side: PaneSide, slot: Option<C::Slot>) -> SlotChange<C::Slot> {
        let (holder, other) = match side {
            PaneSide::Left => (&mut self.left, &self.right),
            PaneSide::Right => (&mut self.right, &self.left),
        };
        if let Some(slot) = &slot {
            assert!(
                !other.holds(slot),
                "{} is already bound to the {} pane",
                slot.slot_id(),
                side.other()
            );
        }

        let change = holder.replace(slot);
        if let SlotChange::Replaced { previous } = &change {
            if let Some(previous) = previous {
                tracing::debug!(pane = %side, slot = %previous.slot_id(), "Releasing slot");
                self.container.detach_slot(side, previous);
            }
            if let Some(current) = holder.get() {
                tracing::debug!(pane = %side, slot = %current.slot_id(), "Binding slot");
                self.container.attach_slot(side, current);
            }
        }
        change
    }

    /// Returns the left slot.
    pub fn left_slot(&self) -> Option<&C::Slot> {
        self.left.get()
    }

    /// Returns the right slot.
    pub fn right_slot(&self) -> Option<&C::Slot> {
        self.right.get()
    }

    /// Returns the slot navigation commands should target.
    ///
    /// While the split is inactive this is always the left slot, whatever
    /// the active pane flag says.
    pub fn active_slot(&self) -> Option<&C::Slot> {
        if !self.split_active {
            return self.left.get();
        }
        match self.active_pane {
            PaneSide::Left => self.left.get(),
            PaneSide::Right => self.right.get(),
        }
    }

    /// Reveals the right pane, or only navigates it when already active.
    ///
    /// On the transition the divider is restored from the saved offset or
    /// set to half the container width, and the right slot (if bound) is
    /// sent to `location` (if given).
    pub fn enable(&mut self, location: Option<&Location>) -> Vec<SplitEvent> {
        if self.split_active {
            tracing::trace!("Split already active, navigating only");
            self.navigate_right(location);
            return Vec::new();
        }

        self.split_active = true;
        self.container.set_right_visible(true);

        let width = self.container.width();
        let placement = resolve_divider_position(self.saved_divider_position, width);
        match placement {
            DividerPlacement::Restore(position) | DividerPlacement::Halve(position) => {
                self.container.set_divider_position(position);
            }
            DividerPlacement::Deferred => self.pending_halve = true,
        }
        tracing::debug!(width, ?placement, "Split enabled");

        self.navigate_right(location);

        vec![
            SplitEvent::PropertyChanged(SplitProperty::IsSplitActive),
            SplitEvent::SplitEnabled,
        ]
    }

    /// Hides the right pane, saving the divider offset and resetting the
    /// active pane to the left one.
    ///
    /// The active pane reset does not emit its own notifications. When the
    /// split is already inactive nothing is emitted either, but a right
    /// pane selected in the meantime is still reset to the left one.
    pub fn disable(&mut self) -> Vec<SplitEvent> {
        if !self.split_active {
            tracing::trace!("Split already inactive");
            if self.active_pane == PaneSide::Right {
                self.active_pane = PaneSide::Left;
                self.container.apply_active_style(PaneSide::Left);
            }
            return Vec::new();
        }

        self.split_active = false;
        self.pending_halve = false;

        let position = self.container.divider_position();
        self.saved_divider_position = Some(position);

        self.container.set_right_visible(false);
        self.active_pane = PaneSide::Left;
        self.container.apply_active_style(PaneSide::Left);
        tracing::debug!(saved_position = position, "Split disabled");

        vec![
            SplitEvent::PropertyChanged(SplitProperty::IsSplitActive),
            SplitEvent::SplitDisabled,
        ]
    }

    /// Closes the right pane. Currently identical to [`Self::disable`].
    pub fn close_pane(&mut self) -> Vec<SplitEvent> {
        self.disable()
    }

    /// The right pane's close control was activated.
    pub fn close_requested(&mut self) -> Vec<SplitEvent> {
        self.close_pane()
    }

    /// Disables when active, enables with `location` otherwise.
    pub fn toggle(&mut self, location: Option<&Location>) -> Vec<SplitEvent> {
        if self.split_active {
            self.disable()
        } else {
            self.enable(location)
        }
    }

    /// The container received a new allocation.
    ///
    /// Applies a deferred half-width divider once a real width is known.
    pub fn container_resized(&mut self, width: i32) {
        if !self.pending_halve || width <= 0 {
            return;
        }
        self.pending_halve = false;
        if self.split_active {
            tracing::debug!(width, position = width / 2, "Applying deferred divider position");
            self.container.set_divider_position(width / 2);
        }
    }

    /// Captures the persistable state.
    pub fn snapshot(&self) -> SplitSnapshot {
        let divider_position = if self.split_active && !self.pending_halve {
            Some(self.container.divider_position())
        } else {
            self.saved_divider_position
        };
        SplitSnapshot {
            split_active: self.split_active,
            active_pane: self.active_pane,
            divider_position,
        }
    }

    fn navigate_right(&self, location: Option<&Location>) {
        let (Some(slot), Some(location)) = (self.right.get(), location) else {
            return;
        };
        tracing::debug!(slot = %slot.slot_id(), uri = %location, "Navigating right pane");
        slot.open_location(location, OpenFlags::NONE);
    }
}
