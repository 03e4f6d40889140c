//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! built once at start-up and never mutated: the content directory and the
//! highlight stylesheet are both fixed for the life of the process.

use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Directory served at `/markdown`.
    pub docs_dir: Arc<PathBuf>,
    /// Stylesheet for highlighted code blocks, rendered once.
    pub highlight_css: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(docs_dir: PathBuf) -> Self {
        Self { docs_dir: Arc::new(docs_dir), highlight_css: Arc::from(docview::util::markdown::highlight_css()) }
    }
}
