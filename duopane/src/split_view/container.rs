//! `GtkPaned`-backed divider container
//!
//! Builds the widget tree for the two regions:
//!
//! ```text
//! Paned
//! ├── left region (GtkBox, .split-pane)
//! │   └── slot
//! └── right region (GtkBox, .split-pane, hidden until split)
//!     ├── header (.split-pane-header): spacer + close button
//!     └── slot
//! ```

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Orientation, Paned};

use duopane_core::split::{ContentSlot, PaneSide, SplitContainer};

use super::slot::WindowSlot;

/// CSS class marking the region with logical focus
const ACTIVE_PANE_CLASS: &str = "active-pane";

/// Divider container over a horizontal `GtkPaned`.
#[derive(Debug)]
pub struct PanedContainer {
    paned: Paned,
    left_region: GtkBox,
    right_region: GtkBox,
    close_button: Button,
}

impl PanedContainer {
    /// Creates the paned widget, both regions and the close header.
    #[must_use]
    pub fn new() -> Self {
        let paned = Paned::new(Orientation::Horizontal);
        paned.set_hexpand(true);
        paned.set_vexpand(true);
        paned.set_resize_start_child(true);
        paned.set_resize_end_child(true);
        paned.set_shrink_start_child(false);
        paned.set_shrink_end_child(false);

        let left_region = Self::create_region();
        paned.set_start_child(Some(&left_region));

        let right_region = Self::create_region();
        let header = GtkBox::new(Orientation::Horizontal, 6);
        header.add_css_class("split-pane-header");

        // Spacer pushes the close button to the end
        let spacer = GtkBox::new(Orientation::Horizontal, 0);
        spacer.set_hexpand(true);
        header.append(&spacer);

        let close_button = Button::builder()
            .icon_name("window-close-symbolic")
            .tooltip_text("Close split view")
            .build();
        close_button.add_css_class("flat");
        header.append(&close_button);

        right_region.append(&header);
        paned.set_end_child(Some(&right_region));

        Self {
            paned,
            left_region,
            right_region,
            close_button,
        }
    }

    fn create_region() -> GtkBox {
        let region = GtkBox::new(Orientation::Vertical, 0);
        region.set_hexpand(true);
        region.set_vexpand(true);
        region.add_css_class("split-pane");
        region
    }

    /// Returns the paned widget.
    #[must_use]
    pub fn paned(&self) -> &Paned {
        &self.paned
    }

    /// Returns the region widget for a side.
    #[must_use]
    pub fn region(&self, side: PaneSide) -> &GtkBox {
        match side {
            PaneSide::Left => &self.left_region,
            PaneSide::Right => &self.right_region,
        }
    }

    /// Returns the right region's close button.
    #[must_use]
    pub fn close_button(&self) -> &Button {
        &self.close_button
    }
}

impl Default for PanedContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitContainer for PanedContainer {
    type Slot = WindowSlot;

    fn width(&self) -> i32 {
        self.paned.width()
    }

    fn divider_position(&self) -> i32 {
        self.paned.position()
    }

    fn set_divider_position(&mut self, position: i32) {
        self.paned.set_position(position);
    }

    fn set_right_visible(&mut self, visible: bool) {
        self.right_region.set_visible(visible);
    }

    fn apply_active_style(&mut self, active: PaneSide) {
        for side in PaneSide::both() {
            let region = self.region(side);
            if side == active {
                region.add_css_class(ACTIVE_PANE_CLASS);
            } else {
                region.remove_css_class(ACTIVE_PANE_CLASS);
            }
        }
    }

    fn attach_slot(&mut self, side: PaneSide, slot: &WindowSlot) {
        let widget = slot.widget();
        if let Some(parent) = widget.parent() {
            tracing::warn!(slot = %slot.slot_id(), pane = %side, "Slot widget already has a parent");
            if let Some(parent_box) = parent.downcast_ref::<GtkBox>() {
                parent_box.remove(widget);
            }
        }
        // The right region's header is its first child, so appending keeps
        // the slot below it
        self.region(side).append(widget);
    }

    fn detach_slot(&mut self, side: PaneSide, slot: &WindowSlot) {
        let region = self.region(side);
        let widget = slot.widget();
        let is_child = widget
            .parent()
            .is_some_and(|parent| &parent == region.upcast_ref::<gtk4::Widget>());
        if is_child {
            region.remove(widget);
        }
    }
}
