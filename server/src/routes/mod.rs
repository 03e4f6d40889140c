//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static endpoints (Markdown files, highlight stylesheet, health check) are
//! served next to Leptos SSR under a single Axum router. Every path that is
//! not a static endpoint falls through to the Leptos app, which resolves the
//! slug client-side.

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use docview::util::markdown::HIGHLIGHT_CSS_PATH;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Static routes: Markdown documents, the highlight theme, and `/healthz`.
pub fn asset_routes(state: AppState) -> Router {
    let markdown = ServeDir::new(state.docs_dir.as_path());

    Router::new()
        .route(HIGHLIGHT_CSS_PATH, get(highlight_css))
        .route("/healthz", get(healthz))
        .nest_service("/markdown", markdown)
        .with_state(state)
}

/// Full application: static routes, Leptos SSR, and the `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` / `LEPTOS_*` settings).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(app_with_options(state, conf.leptos_options))
}

/// Builds the router for an already resolved Leptos configuration.
///
/// Paths outside the static routes and the `/:page` route (`/a/b`) still get
/// the shell with the menu, answered with 404.
pub fn app_with_options(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(docview::app::App);

    let pages = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || docview::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(docview::app::shell))
        .with_state(leptos_options.clone());

    // cargo-leptos writes the hydrate bundle and docview.css under <site-root>/pkg.
    let bundle_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(&*leptos_options.site_pkg_dir);

    asset_routes(state)
        .merge(pages)
        .nest_service("/pkg", ServeDir::new(bundle_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

async fn highlight_css(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], state.highlight_css.to_string())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
