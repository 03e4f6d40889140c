//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches document text over HTTP from the server's `/markdown` tree.

pub mod api;
