//! Change notifications emitted by the split view
//!
//! Observers register callbacks on a [`SignalHub`] and receive every
//! [`SplitEvent`] synchronously, in emission order, before the triggering
//! call returns.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Observable properties of a split view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitProperty {
    /// Which pane is active (`false` = left, `true` = right).
    ActivePane,
    /// Whether split mode is active.
    IsSplitActive,
}

impl SplitProperty {
    /// Returns the canonical property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ActivePane => "active-pane",
            Self::IsSplitActive => "is-split-active",
        }
    }
}

impl fmt::Display for SplitProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A notification emitted by the split view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitEvent {
    /// A property value changed.
    PropertyChanged(SplitProperty),
    /// The right pane was revealed.
    SplitEnabled,
    /// The right pane was hidden.
    SplitDisabled,
    /// The active pane changed; carries the new "is right" value.
    ActivePaneChanged {
        /// True when the right pane became active.
        is_right: bool,
    },
}

impl SplitEvent {
    /// Returns the signal name for discrete events, or `notify::<property>`
    /// for property changes.
    #[must_use]
    pub fn signal_name(&self) -> String {
        match self {
            Self::PropertyChanged(property) => format!("notify::{}", property.name()),
            Self::SplitEnabled => "split-enabled".to_string(),
            Self::SplitDisabled => "split-disabled".to_string(),
            Self::ActivePaneChanged { .. } => "active-pane-changed".to_string(),
        }
    }
}

/// Handle returned by [`SignalHub::connect`], used to disconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Callback type for split view observers.
pub type SplitEventHandler = Rc<dyn Fn(&SplitEvent)>;

/// Registry of observers for split view events.
///
/// The hub uses interior mutability so it can be shared through `Rc` and
/// handlers may connect or disconnect other handlers while an event is
/// being delivered. Changes made during delivery take effect for the next
/// event.
#[derive(Default)]
pub struct SignalHub {
    handlers: RefCell<Vec<(HandlerId, SplitEventHandler)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalHub")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl SignalHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler and returns its id.
    pub fn connect<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&SplitEvent) + 'static,
    {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    /// Removes a handler. Returns false if the id was not connected.
    pub fn disconnect(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    /// Returns the number of connected handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Delivers a single event to every handler.
    pub fn emit(&self, event: &SplitEvent) {
        // Snapshot so handlers can (dis)connect without a borrow conflict
        let handlers: Vec<SplitEventHandler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        tracing::trace!(signal = %event.signal_name(), handlers = handlers.len(), "Emitting");
        for handler in handlers {
            handler(event);
        }
    }

    /// Delivers events in order.
    pub fn emit_all(&self, events: &[SplitEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}
