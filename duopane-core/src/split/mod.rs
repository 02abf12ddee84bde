//! Dual-pane split view module
//!
//! This module provides the toolkit-independent core of the split view: two
//! regions side by side, which one has logical focus, and showing or hiding
//! the second region while remembering where the divider was.
//!
//! # Architecture
//!
//! - **Container contract**: the toolkit adapter implements [`SplitContainer`]
//! - **Single mutation path**: [`DualPaneModel`] owns all state; focus
//!   observers and the close control call the same methods as the window
//! - **Notifications**: [`SplitView`] delivers [`SplitEvent`]s through a
//!   [`SignalHub`] synchronously
//!
//! # Module Structure
//!
//! - `types` - `PaneSide`, `Location`, `OpenFlags`, `SlotId`
//! - `slot` - `ContentSlot` contract and `SlotHolder`
//! - `geometry` - `SplitContainer` contract and divider placement
//! - `signals` - `SplitEvent`, `SplitProperty`, `SignalHub`
//! - `model` - `DualPaneModel` state machine
//! - `view` - `SplitView`, the model plus notification delivery
//! - `error` - `SplitError`
//!
//! # Example
//!
//! ```
//! use duopane_core::split::{Location, SplitView};
//! use duopane_core::testing::{EventLog, RecordingContainer, RecordingSlot};
//!
//! let mut view = SplitView::new(RecordingContainer::with_width(1200));
//! let log = EventLog::attach(&view.signals());
//!
//! let left = RecordingSlot::new();
//! view.set_left_slot(Some(left.clone()));
//!
//! // Inactive: the left slot is always the active one
//! view.set_active_pane(true);
//! assert_eq!(view.active_slot(), Some(&left));
//!
//! view.enable(Some(&Location::parse("file:///srv").unwrap()));
//! assert!(view.is_active());
//! assert!(view.active_slot().is_none()); // right pane active, no right slot
//!
//! view.close_pane();
//! assert!(!view.active_pane());
//! assert_eq!(log.events().len(), 6);
//! ```

mod error;
mod geometry;
mod model;
mod signals;
mod slot;
mod types;
mod view;

pub use error::{SplitError, SplitResult};
pub use geometry::{DividerPlacement, SplitContainer, resolve_divider_position};
pub use model::{DualPaneModel, SplitSnapshot};
pub use signals::{HandlerId, SignalHub, SplitEvent, SplitEventHandler, SplitProperty};
pub use slot::{ContentSlot, SlotChange, SlotHolder};
pub use types::{Location, OpenFlags, PaneSide, SlotId};
pub use view::SplitView;
