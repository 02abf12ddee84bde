//! Content slot contract and slot holders
//!
//! A content slot is the externally owned unit that displays navigable
//! content inside one pane. The split view never creates or destroys
//! slots; it holds a reference while a slot is bound and hands navigation
//! requests to it.

use super::types::{Location, OpenFlags, SlotId};

/// Contract required of anything the split view can host in a pane.
///
/// Implementations are expected to be cheap handles (reference-counted
/// widgets, `Rc` wrappers) so that cloning shares the same slot.
/// Equality must be identity: two handles are equal when they refer to the
/// same slot.
pub trait ContentSlot: Clone + PartialEq {
    /// Identifier used in log output.
    fn slot_id(&self) -> SlotId;

    /// Requests navigation to `location`.
    ///
    /// Fire-and-forget: the split view does not inspect the outcome.
    fn open_location(&self, location: &Location, flags: OpenFlags);
}

/// Outcome of replacing the occupant of a slot holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotChange<S> {
    /// The same slot was already bound; nothing changed.
    Unchanged,
    /// The holder changed occupant.
    Replaced {
        /// The slot that was released, if any.
        previous: Option<S>,
    },
}

impl<S> SlotChange<S> {
    /// Returns true if the holder changed occupant.
    #[must_use]
    pub const fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Holds at most one content slot for a pane.
#[derive(Debug, Clone)]
pub struct SlotHolder<S> {
    occupant: Option<S>,
}

impl<S> Default for SlotHolder<S> {
    fn default() -> Self {
        Self { occupant: None }
    }
}

impl<S: ContentSlot> SlotHolder<S> {
    /// Creates an empty holder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current occupant.
    #[must_use]
    pub fn get(&self) -> Option<&S> {
        self.occupant.as_ref()
    }

    /// Returns true if `slot` is the current occupant.
    #[must_use]
    pub fn holds(&self, slot: &S) -> bool {
        self.occupant.as_ref() == Some(slot)
    }

    /// Returns true if a slot is bound.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Replaces the occupant.
    ///
    /// Binding the slot that is already held reports
    /// [`SlotChange::Unchanged`]. Otherwise the previous occupant is moved
    /// out and returned so the caller can detach it from the display.
    pub fn replace(&mut self, slot: Option<S>) -> SlotChange<S> {
        if self.occupant == slot {
            return SlotChange::Unchanged;
        }
        let previous = std::mem::replace(&mut self.occupant, slot);
        SlotChange::Replaced { previous }
    }
}
