//! Split view with synchronous change notifications
//!
//! `SplitView` pairs a [`DualPaneModel`] with a [`SignalHub`] and delivers
//! every notification the model produces before the triggering call
//! returns. Handlers only receive the event; they cannot re-enter the view
//! while it is being mutated.

use std::fmt;
use std::rc::Rc;

use super::geometry::SplitContainer;
use super::model::{DualPaneModel, SplitSnapshot};
use super::signals::{HandlerId, SignalHub, SplitEvent};
use super::slot::{ContentSlot, SlotChange};
use super::types::{Location, PaneSide};

/// A dual-pane split view for one window.
pub struct SplitView<C: SplitContainer> {
    model: DualPaneModel<C>,
    signals: Rc<SignalHub>,
}

impl<C> fmt::Debug for SplitView<C>
where
    C: SplitContainer + fmt::Debug,
    C::Slot: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitView")
            .field("model", &self.model)
            .field("signals", &self.signals)
            .finish()
    }
}

impl<C> SplitView<C>
where
    C: SplitContainer,
    C::Slot: ContentSlot,
{
    /// Creates an inactive split view around `container`.
    pub fn new(container: C) -> Self {
        Self {
            model: DualPaneModel::new(container),
            signals: Rc::new(SignalHub::new()),
        }
    }

    /// Seeds the saved divider position, e.g. from persisted settings.
    #[must_use]
    pub fn with_saved_divider_position(mut self, position: Option<i32>) -> Self {
        self.model = self.model.with_saved_divider_position(position);
        self
    }

    /// Registers an observer for all split view notifications.
    pub fn connect<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&SplitEvent) + 'static,
    {
        self.signals.connect(handler)
    }

    /// Removes an observer.
    pub fn disconnect(&self, id: HandlerId) -> bool {
        self.signals.disconnect(id)
    }

    /// Returns the shared signal hub.
    pub fn signals(&self) -> Rc<SignalHub> {
        Rc::clone(&self.signals)
    }

    /// Returns the underlying model.
    pub fn model(&self) -> &DualPaneModel<C> {
        &self.model
    }

    /// Returns the container.
    pub fn container(&self) -> &C {
        self.model.container()
    }

    /// Returns the container mutably. User-driven changes such as divider
    /// drags and new allocations happen here, outside the state machine.
    pub fn container_mut(&mut self) -> &mut C {
        self.model.container_mut()
    }

    /// Sets the active pane (`true` = right).
    pub fn set_active_pane(&mut self, is_right: bool) {
        let events = self.model.set_active_pane(is_right);
        self.signals.emit_all(&events);
    }

    /// Returns true when the right pane is active.
    pub fn active_pane(&self) -> bool {
        self.model.active_pane().is_right()
    }

    /// Returns the active pane as a side.
    pub fn active_side(&self) -> PaneSide {
        self.model.active_pane()
    }

    /// Binds (or clears) the left slot.
    pub fn set_left_slot(&mut self, slot: Option<C::Slot>) -> SlotChange<C::Slot> {
        self.model.set_left_slot(slot)
    }

    /// Binds (or clears) the right slot.
    pub fn set_right_slot(&mut self, slot: Option<C::Slot>) -> SlotChange<C::Slot> {
        self.model.set_right_slot(slot)
    }

    /// Returns the left slot.
    pub fn left_slot(&self) -> Option<&C::Slot> {
        self.model.left_slot()
    }

    /// Returns the right slot.
    pub fn right_slot(&self) -> Option<&C::Slot> {
        self.model.right_slot()
    }

    /// Returns the slot navigation should target.
    pub fn active_slot(&self) -> Option<&C::Slot> {
        self.model.active_slot()
    }

    /// Returns true while split mode is active.
    pub fn is_active(&self) -> bool {
        self.model.is_active()
    }

    /// Enables split mode, or navigates the right pane when already active.
    pub fn enable(&mut self, location: Option<&Location>) {
        let events = self.model.enable(location);
        self.signals.emit_all(&events);
    }

    /// Disables split mode.
    pub fn disable(&mut self) {
        let events = self.model.disable();
        self.signals.emit_all(&events);
    }

    /// Closes the right pane.
    pub fn close_pane(&mut self) {
        let events = self.model.close_pane();
        self.signals.emit_all(&events);
    }

    /// Toggles split mode.
    pub fn toggle(&mut self, location: Option<&Location>) {
        let events = self.model.toggle(location);
        self.signals.emit_all(&events);
    }

    /// Focus entered a region.
    pub fn focus_entered(&mut self, side: PaneSide) {
        let events = self.model.focus_entered(side);
        self.signals.emit_all(&events);
    }

    /// The right pane's close control was activated.
    pub fn close_requested(&mut self) {
        let events = self.model.close_requested();
        self.signals.emit_all(&events);
    }

    /// The container received a new allocation.
    pub fn container_resized(&mut self, width: i32) {
        self.model.container_resized(width);
    }

    /// Returns the divider offset recorded by the last disable.
    pub fn saved_divider_position(&self) -> Option<i32> {
        self.model.saved_divider_position()
    }

    /// Captures the persistable state.
    pub fn snapshot(&self) -> SplitSnapshot {
        self.model.snapshot()
    }
}
