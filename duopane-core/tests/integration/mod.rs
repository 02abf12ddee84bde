//! Integration test modules

mod settings_persistence;
mod window_lifecycle;
