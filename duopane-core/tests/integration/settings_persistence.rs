//! Saving and restoring split geometry between sessions

use duopane_core::config::{AppSettings, ConfigManager};
use duopane_core::split::{SplitContainer, SplitView};
use duopane_core::testing::RecordingContainer;

#[test]
fn divider_position_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = ConfigManager::with_config_dir(dir.path().join("duopane"));

    // First session: split, drag, close the window while split
    let mut settings = manager.load_settings().expect("defaults");
    let mut view = SplitView::new(RecordingContainer::with_width(1200))
        .with_saved_divider_position(settings.split_view.initial_divider_position());
    view.enable(None);
    view.container_mut().set_divider_position(450);
    settings.split_view.capture(&view.snapshot());
    manager.save_settings(&settings).expect("save");
    drop(view);

    // Second session
    let settings = manager.load_settings().expect("load");
    assert_eq!(settings.split_view.divider_position, Some(450));
    assert!(settings.split_view.split_active);

    let mut view = SplitView::new(RecordingContainer::with_width(900))
        .with_saved_divider_position(settings.split_view.initial_divider_position());
    view.enable(None);
    assert_eq!(view.container().divider_position(), 450);
}

#[test]
fn forgetting_position_halves_on_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = ConfigManager::with_config_dir(dir.path());

    let mut settings = AppSettings::default();
    settings.split_view.remember_divider_position = false;
    settings.split_view.divider_position = Some(333);
    manager.save_settings(&settings).expect("save");

    let settings = manager.load_settings().expect("load");
    let mut view = SplitView::new(RecordingContainer::with_width(1000))
        .with_saved_divider_position(settings.split_view.initial_divider_position());
    view.enable(None);
    assert_eq!(view.container().divider_position(), 500);
}

#[test]
fn restore_split_on_startup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = ConfigManager::with_config_dir(dir.path());

    let mut settings = AppSettings::default();
    settings.split_view.restore_split_on_startup = true;
    settings.split_view.split_active = true;
    manager.save_settings(&settings).expect("save");

    let settings = manager.load_settings().expect("load");
    let mut view = SplitView::new(RecordingContainer::with_width(1000));
    if settings.split_view.should_restore_split() {
        view.enable(None);
    }
    assert!(view.is_active());
}

#[test]
fn save_overwrites_previous_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = ConfigManager::with_config_dir(dir.path());

    let mut settings = AppSettings::default();
    settings.split_view.divider_position = Some(100);
    manager.save_settings(&settings).expect("first save");
    settings.split_view.divider_position = Some(200);
    manager.save_settings(&settings).expect("second save");

    let loaded = manager.load_settings().expect("load");
    assert_eq!(loaded.split_view.divider_position, Some(200));
    assert!(!manager.settings_path().with_extension("toml.tmp").exists());
}
