//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `doc` resolves the route slug through the catalog and hosts the content
//! page; rendering details live in `components`.

pub mod doc;
