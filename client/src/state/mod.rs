//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `catalog` is the static route table, `menu`
//! holds navigation chrome state, and `document` tracks the page being shown.

pub mod catalog;
pub mod document;
pub mod menu;
