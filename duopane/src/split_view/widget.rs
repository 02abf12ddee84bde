//! Split view widget wiring the core model to GTK
//!
//! `SplitViewWidget` keeps the [`DualPaneModel`] behind `Rc<RefCell<..>>` so
//! focus controllers and the close button can reach it. Every entry point
//! runs the model operation, releases the borrow, and only then delivers
//! notifications, so observers are free to query the widget.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, EventControllerFocus, Orientation};

use duopane_core::split::{
    DualPaneModel, HandlerId, Location, PaneSide, SignalHub, SplitEvent, SplitSnapshot,
};

use super::container::PanedContainer;
use super::slot::WindowSlot;

type SharedModel = Rc<RefCell<DualPaneModel<PanedContainer>>>;

/// Dual-pane split view for a window.
///
/// Cloning is cheap and yields another handle to the same view.
#[derive(Debug, Clone)]
pub struct SplitViewWidget {
    root: GtkBox,
    model: SharedModel,
    signals: Rc<SignalHub>,
}

/// Non-owning handle to a [`SplitViewWidget`], for use in observers that
/// would otherwise keep the view alive.
#[derive(Clone)]
pub struct WeakSplitViewWidget {
    root: glib::WeakRef<GtkBox>,
    model: Weak<RefCell<DualPaneModel<PanedContainer>>>,
    signals: Weak<SignalHub>,
}

impl std::fmt::Debug for WeakSplitViewWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakSplitViewWidget")
            .field("alive", &(self.model.strong_count() > 0))
            .finish()
    }
}

impl WeakSplitViewWidget {
    /// Returns the view if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<SplitViewWidget> {
        Some(SplitViewWidget {
            root: self.root.upgrade()?,
            model: self.model.upgrade()?,
            signals: self.signals.upgrade()?,
        })
    }
}

impl SplitViewWidget {
    /// Creates an inactive split view.
    ///
    /// `saved_divider_position` seeds the divider for the first enable,
    /// typically from persisted settings.
    #[must_use]
    pub fn new(saved_divider_position: Option<i32>) -> Self {
        let container = PanedContainer::new();
        let root = GtkBox::new(Orientation::Horizontal, 0);
        root.set_hexpand(true);
        root.set_vexpand(true);
        root.append(container.paned());

        let model = Rc::new(RefCell::new(
            DualPaneModel::new(container).with_saved_divider_position(saved_divider_position),
        ));
        let widget = Self {
            root,
            model,
            signals: Rc::new(SignalHub::new()),
        };

        widget.setup_focus_tracking();
        widget.setup_close_button();
        widget.setup_layout_tracking();
        widget
    }

    /// Returns the root widget for embedding in a window.
    #[must_use]
    pub fn widget(&self) -> &GtkBox {
        &self.root
    }

    /// Returns a weak handle.
    #[must_use]
    pub fn downgrade(&self) -> WeakSplitViewWidget {
        WeakSplitViewWidget {
            root: self.root.downgrade(),
            model: Rc::downgrade(&self.model),
            signals: Rc::downgrade(&self.signals),
        }
    }

    /// Registers an observer for split view notifications.
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

    /// Sets the active pane (`true` = right).
    pub fn set_active_pane(&self, is_right: bool) {
        self.dispatch(|model| model.set_active_pane(is_right));
    }

    /// Returns true when the right pane is active.
    #[must_use]
    pub fn active_pane(&self) -> bool {
        self.model.borrow().active_pane().is_right()
    }

    /// Binds (or clears) the left slot.
    pub fn set_left_slot(&self, slot: Option<WindowSlot>) {
        self.model.borrow_mut().set_left_slot(slot);
    }

    /// Binds (or clears) the right slot.
    pub fn set_right_slot(&self, slot: Option<WindowSlot>) {
        self.model.borrow_mut().set_right_slot(slot);
    }

    /// Returns the left slot.
    #[must_use]
    pub fn left_slot(&self) -> Option<WindowSlot> {
        self.model.borrow().left_slot().cloned()
    }

    /// Returns the right slot.
    #[must_use]
    pub fn right_slot(&self) -> Option<WindowSlot> {
        self.model.borrow().right_slot().cloned()
    }

    /// Returns the slot navigation should target.
    #[must_use]
    pub fn active_slot(&self) -> Option<WindowSlot> {
        self.model.borrow().active_slot().cloned()
    }

    /// Returns true while split mode is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.model.borrow().is_active()
    }

    /// Enables split mode, or navigates the right pane when already active.
    pub fn enable(&self, location: Option<&Location>) {
        self.dispatch(|model| model.enable(location));
    }

    /// Disables split mode.
    pub fn disable(&self) {
        self.dispatch(|model| model.disable());
    }

    /// Closes the right pane.
    pub fn close_pane(&self) {
        self.dispatch(|model| model.close_pane());
    }

    /// Toggles split mode.
    pub fn toggle(&self, location: Option<&Location>) {
        self.dispatch(|model| model.toggle(location));
    }

    /// Captures the persistable state.
    #[must_use]
    pub fn snapshot(&self) -> SplitSnapshot {
        self.model.borrow().snapshot()
    }

    /// Returns the divider offset recorded by the last disable.
    #[must_use]
    pub fn saved_divider_position(&self) -> Option<i32> {
        self.model.borrow().saved_divider_position()
    }

    fn dispatch<F>(&self, operation: F)
    where
        F: FnOnce(&mut DualPaneModel<PanedContainer>) -> Vec<SplitEvent>,
    {
        let events = operation(&mut self.model.borrow_mut());
        self.signals.emit_all(&events);
    }

    /// Focus-enter on a region makes it the active pane. Focus-leave is
    /// not observed.
    fn setup_focus_tracking(&self) {
        for side in PaneSide::both() {
            let controller = EventControllerFocus::new();
            let weak = self.downgrade();
            controller.connect_enter(move |_| {
                if let Some(view) = weak.upgrade() {
                    view.focus_entered(side);
                }
            });
            self.model
                .borrow()
                .container()
                .region(side)
                .add_controller(controller);
        }
    }

    fn focus_entered(&self, side: PaneSide) {
        // Hiding the right region during disable moves focus while the
        // model is borrowed; retry once the current operation finished
        let Ok(mut model) = self.model.try_borrow_mut() else {
            tracing::trace!(pane = %side, "Deferring focus change");
            let weak = self.downgrade();
            glib::idle_add_local_once(move || {
                if let Some(view) = weak.upgrade() {
                    view.focus_entered(side);
                }
            });
            return;
        };
        let events = model.focus_entered(side);
        drop(model);
        self.signals.emit_all(&events);
    }

    fn setup_close_button(&self) {
        let weak = self.downgrade();
        self.model
            .borrow()
            .container()
            .close_button()
            .connect_clicked(move |_| {
                if let Some(view) = weak.upgrade() {
                    tracing::debug!("Split view close button clicked");
                    view.dispatch(|model| model.close_requested());
                }
            });
    }

    /// Applies a deferred half-width divider once the paned has a size.
    fn setup_layout_tracking(&self) {
        let weak = self.downgrade();
        let model = self.model.borrow();
        model.container().paned().connect_map(move |_| {
            let weak = weak.clone();
            // Allocation is complete only after the map cycle
            glib::idle_add_local_once(move || {
                if let Some(view) = weak.upgrade() {
                    let mut model = view.model.borrow_mut();
                    let width = model.container().paned().width();
                    model.container_resized(width);
                }
            });
        });
    }
}
