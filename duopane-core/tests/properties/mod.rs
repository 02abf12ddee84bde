//! Property-based test modules

mod split_view_tests;
