//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome and document body while reading and
//! writing shared state from Leptos context providers.

pub mod markdown_view;
pub mod nav_menu;
