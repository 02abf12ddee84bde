//! Split view module for the GTK front end
//!
//! This module bridges the core state machine from `duopane-core::split`
//! with GTK4/libadwaita widgets.
//!
//! # Architecture
//!
//! - **`duopane-core::split`**: state machine, slot holders, notifications
//! - **`duopane::split_view`**: `GtkPaned` container, focus controllers,
//!   close button and the GTK content slot
//!
//! This separation keeps the behavior testable without a display.
//!
//! # Module Structure
//!
//! - `container` - `PanedContainer`, the `SplitContainer` over `GtkPaned`
//! - `slot` - `WindowSlot`, the GTK `ContentSlot`
//! - `widget` - `SplitViewWidget`, the shared handle used by windows

mod container;
mod slot;
mod widget;

pub use container::PanedContainer;
pub use slot::WindowSlot;
pub use widget::{SplitViewWidget, WeakSplitViewWidget};
