//! GTK content slot
//!
//! `WindowSlot` is the window-owned unit shown inside a pane. It displays
//! the location it was last sent to; listing the location's contents is
//! the job of the file view that a full browser window would embed here.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation};
use libadwaita as adw;

use duopane_core::split::{ContentSlot, Location, OpenFlags, SlotId};

/// A pane occupant backed by a GTK box.
///
/// Clones share the same widget; two slots are equal when they wrap the
/// same widget.
#[derive(Debug, Clone)]
pub struct WindowSlot {
    id: SlotId,
    root: GtkBox,
    status: adw::StatusPage,
    location: Rc<RefCell<Option<Location>>>,
}

impl WindowSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        let root = GtkBox::new(Orientation::Vertical, 0);
        root.set_hexpand(true);
        root.set_vexpand(true);
        root.set_focusable(true);
        root.add_css_class("window-slot");

        let status = adw::StatusPage::builder()
            .icon_name("folder-symbolic")
            .title("No Location")
            .hexpand(true)
            .vexpand(true)
            .build();
        root.append(&status);

        Self {
            id: SlotId::new(),
            root,
            status,
            location: Rc::new(RefCell::new(None)),
        }
    }

    /// Returns the widget placed in the pane.
    #[must_use]
    pub fn widget(&self) -> &GtkBox {
        &self.root
    }

    /// Returns the location this slot currently shows.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.location.borrow().clone()
    }
}

impl Default for WindowSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for WindowSlot {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl ContentSlot for WindowSlot {
    fn slot_id(&self) -> SlotId {
        self.id
    }

    fn open_location(&self, location: &Location, flags: OpenFlags) {
        if flags.contains(OpenFlags::NEW_TAB) || flags.contains(OpenFlags::NEW_WINDOW) {
            // Tabs and windows belong to the window, not to a single slot
            tracing::warn!(slot = %self.id, uri = %location, "Slot cannot open new tabs or windows");
            return;
        }

        tracing::debug!(slot = %self.id, uri = %location, "Opening location");
        self.status.set_title(location.display_name());
        self.status.set_description(Some(location.uri()));
        *self.location.borrow_mut() = Some(location.clone());

        if !flags.contains(OpenFlags::DONT_MAKE_ACTIVE) && self.root.is_mapped() {
            self.root.grab_focus();
        }
    }
}
