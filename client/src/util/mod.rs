//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure transformations out of components so they can
//! run identically during SSR, in the browser, and in unit tests.

pub mod markdown;
