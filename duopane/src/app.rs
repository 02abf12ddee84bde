//! GTK application setup
//!
//! Builds the browser window: a header bar with the split toggle and a
//! [`SplitViewWidget`] as content. Split state is saved when the window
//! closes.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gio, glib};
use libadwaita as adw;

use duopane_core::config::{AppSettings, ConfigManager};
use duopane_core::split::{ContentSlot, Location, OpenFlags, SplitEvent};

use crate::split_view::{SplitViewWidget, WindowSlot};

/// Application ID
pub const APP_ID: &str = "io.github.duopane.Duopane";

/// Fallback window title when the active slot shows nothing
const DEFAULT_TITLE: &str = "Duopane";

type SharedSettings = Rc<RefCell<AppSettings>>;

/// Runs the GTK application until its last window closes
///
/// Returns `glib::ExitCode::FAILURE` if libadwaita cannot be initialized.
pub fn run(settings: AppSettings) -> glib::ExitCode {
    if let Err(e) = adw::init() {
        tracing::error!(%e, "Failed to initialize libadwaita");
        return glib::ExitCode::FAILURE;
    }

    let app = create_application(settings);
    app.run()
}

/// Creates and configures the GTK application
#[must_use]
pub fn create_application(settings: AppSettings) -> adw::Application {
    let app = adw::Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::default())
        .build();

    let settings: SharedSettings = Rc::new(RefCell::new(settings));
    app.connect_startup(|_| load_css_styles());
    app.connect_activate(move |app| {
        build_ui(app, &settings);
    });

    app
}

/// Builds the main window when the application is activated
fn build_ui(app: &adw::Application, settings: &SharedSettings) {
    let split_settings = settings.borrow().split_view.clone();
    let split_view = SplitViewWidget::new(split_settings.initial_divider_position());

    let left = WindowSlot::new();
    let right = WindowSlot::new();
    split_view.set_left_slot(Some(left.clone()));
    split_view.set_right_slot(Some(right));

    match Location::from_path(&glib::home_dir()) {
        Ok(home) => left.open_location(&home, OpenFlags::NONE),
        Err(e) => tracing::warn!(%e, "Home directory is not a valid location"),
    }

    let toggle_button = gtk4::ToggleButton::builder()
        .icon_name("view-dual-symbolic")
        .tooltip_text("Split View")
        .build();

    let header = adw::HeaderBar::new();
    header.pack_end(&toggle_button);

    let toolbar_view = adw::ToolbarView::new();
    toolbar_view.add_top_bar(&header);
    toolbar_view.set_content(Some(split_view.widget()));

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title(DEFAULT_TITLE)
        .default_width(1100)
        .default_height(700)
        .content(&toolbar_view)
        .build();

    connect_split_observer(&split_view, &window, &toggle_button);
    connect_toggle_button(&split_view, &toggle_button);
    connect_close_request(&window, &split_view, settings);

    if split_settings.should_restore_split() {
        tracing::debug!("Restoring split view from settings");
        split_view.enable(left.location().as_ref());
    }

    window.present();
}

/// Keeps the toggle button and window title in sync with the split view
fn connect_split_observer(
    split_view: &SplitViewWidget,
    window: &adw::ApplicationWindow,
    toggle_button: &gtk4::ToggleButton,
) {
    let weak_view = split_view.downgrade();
    let weak_window = window.downgrade();
    let weak_button = toggle_button.downgrade();
    split_view.connect(move |event| {
        let Some(view) = weak_view.upgrade() else {
            return;
        };
        match event {
            SplitEvent::SplitEnabled | SplitEvent::SplitDisabled => {
                if let Some(button) = weak_button.upgrade() {
                    button.set_active(view.is_active());
                }
            }
            SplitEvent::ActivePaneChanged { .. } | SplitEvent::PropertyChanged(_) => {}
        }
        if let Some(window) = weak_window.upgrade() {
            window.set_title(Some(&active_title(&view)));
        }
    });
}

fn active_title(view: &SplitViewWidget) -> String {
    view.active_slot()
        .and_then(|slot| slot.location())
        .map_or_else(
            || DEFAULT_TITLE.to_string(),
            |location| location.display_name().to_string(),
        )
}

fn connect_toggle_button(split_view: &SplitViewWidget, toggle_button: &gtk4::ToggleButton) {
    let weak_view = split_view.downgrade();
    toggle_button.connect_toggled(move |button| {
        let Some(view) = weak_view.upgrade() else {
            return;
        };
        // Programmatic sync from the observer lands here too
        if button.is_active() == view.is_active() {
            return;
        }
        toggle_split(&view);
    });
}

/// Toggles split mode, opening the right pane on the left pane's location
fn toggle_split(view: &SplitViewWidget) {
    let location = view.left_slot().and_then(|slot| slot.location());
    view.toggle(location.as_ref());
}

/// Saves the split state when the window closes
fn connect_close_request(
    window: &adw::ApplicationWindow,
    split_view: &SplitViewWidget,
    settings: &SharedSettings,
) {
    let weak_view = split_view.downgrade();
    let settings = Rc::clone(settings);
    window.connect_close_request(move |_| {
        if let Some(view) = weak_view.upgrade() {
            let snapshot = view.snapshot();
            let mut settings = settings.borrow_mut();
            settings.split_view.capture(&snapshot);
            save_settings(&settings);
        }
        glib::Propagation::Proceed
    });
}

fn save_settings(settings: &AppSettings) {
    let result = ConfigManager::new().and_then(|manager| manager.save_settings(settings));
    match result {
        Ok(()) => tracing::debug!("Split view settings saved"),
        Err(e) => tracing::error!(%e, "Failed to save settings"),
    }
}

/// Loads CSS styles for the split panes
fn load_css_styles() {
    let provider = gtk4::CssProvider::new();
    provider.load_from_string(include_str!("../assets/style.css"));

    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        tracing::warn!("Failed to add CSS provider - no display available");
    }
}
