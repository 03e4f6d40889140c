//! Document page: resolves the route slug and shows the matching Markdown file.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DocRoute` is mounted for every `/:page` URL. It maps the slug through the
//! catalog and hands the resulting document identifier to `DocPage`, which
//! stays mounted across navigations and reloads whenever the identifier
//! changes. Unknown slugs leave the content area empty.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::markdown_view::MarkdownView;
use crate::net::api;
use crate::state::catalog;
use crate::state::document::{DocumentState, LoadOutcome, LoadTicket};

/// Route-level page for `/:page`.
#[component]
pub fn DocRoute() -> impl IntoView {
    let params = use_params_map();
    let document = Memo::new(move |_| {
        params
            .read()
            .get("page")
            .and_then(|slug| catalog::resolve(&slug))
            .map(|entry| entry.document.to_owned())
    });

    view! { <DocPage document=document/> }
}

/// Fetches and renders the document named by `document`.
///
/// Each identifier change issues a new fetch. Results for identifiers that
/// have since been replaced are dropped, and failures are logged while the
/// previous content stays on screen.
#[component]
pub fn DocPage(#[prop(into)] document: Signal<Option<String>>) -> impl IntoView {
    let state = RwSignal::new(DocumentState::default());

    Effect::new(move || {
        let Some(ticket) = start_load(state, document.get()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::fetch_document(&ticket.identifier).await;
            finish_load(state, &ticket, result);
        });
    });

    let html = Signal::derive(move || state.with(|s| s.html().to_owned()));

    view! { <MarkdownView html=html/> }
}

/// Issues a ticket for `document`, or clears the page when no document
/// matches the route.
fn start_load(state: RwSignal<DocumentState>, document: Option<String>) -> Option<LoadTicket> {
    let Some(identifier) = document else {
        state.update(DocumentState::reset);
        return None;
    };
    state.try_update(|s| s.begin_load(&identifier))
}

/// Applies a fetch result to `state`. `None` once the page is disposed.
fn finish_load(
    state: RwSignal<DocumentState>,
    ticket: &LoadTicket,
    result: Result<String, String>,
) -> Option<LoadOutcome> {
    let outcome = state.try_update(|s| s.complete(ticket, result))?;
    match &outcome {
        LoadOutcome::Displayed => {
            log::debug!("loaded markdown document {}", ticket.identifier);
        }
        LoadOutcome::Stale => {
            log::debug!("dropped stale markdown document {}", ticket.identifier);
        }
        LoadOutcome::Failed(err) => {
            log::error!("error loading markdown document {}: {err}", ticket.identifier);
        }
    }
    Some(outcome)
}

#[cfg(test)]
#[path = "doc_test.rs"]
mod tests;
