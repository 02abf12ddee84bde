//! `Duopane` - dual-pane split view for file-browser windows
//!
//! The GTK4/libadwaita front end for `duopane-core`. A window hosts one
//! [`split_view::SplitViewWidget`] whose left pane shows the window's main
//! slot and whose right pane opens on demand.
//!
//! # GTK Widget Lifecycle Pattern
//!
//! Signal handlers in this crate capture weak handles
//! ([`split_view::WeakSplitViewWidget`], `glib::WeakRef`) so that closing a
//! window drops the split view together with its widgets.

#![allow(clippy::too_many_lines)] // GUI setup functions are inherently long
#![allow(clippy::significant_drop_tightening)] // GTK widget drops are managed by GTK
#![allow(clippy::missing_errors_doc)] // Internal GUI functions don't need error docs
#![allow(clippy::missing_panics_doc)] // Internal GUI functions don't need panic docs

mod app;
pub mod split_view;

use duopane_core::config::{AppSettings, ConfigManager};

fn main() -> gtk4::glib::ExitCode {
    let settings = load_startup_settings();

    if let Err(e) = duopane_core::tracing::init_tracing(&settings.logging.to_tracing_config()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting duopane");

    app::run(settings)
}

/// Loads settings, falling back to defaults when the file is unusable.
fn load_startup_settings() -> AppSettings {
    let manager = match ConfigManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Using default settings: {e}");
            return AppSettings::default();
        }
    };
    manager.load_settings().unwrap_or_else(|e| {
        eprintln!("Using default settings: {e}");
        AppSettings::default()
    })
}
