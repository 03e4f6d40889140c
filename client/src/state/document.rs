//! Content page state: the current document and its rendered HTML.
//!
//! DESIGN
//! ======
//! Every load is tagged with a generation number. Only a completion carrying
//! the latest generation may touch the displayed content, so a slow response
//! for a superseded identifier can never overwrite the page the user is on.
//! In-flight fetches are not cancelled; their results are just dropped.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::util::markdown::render_markdown_html;

/// Load lifecycle for the current identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet, or the first load for this page failed.
    #[default]
    Idle,
    Loading,
    Displayed,
}

/// Handle for one in-flight load, returned by [`DocumentState::begin_load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub identifier: String,
}

/// What [`DocumentState::complete`] did with a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// New content is on screen.
    Displayed,
    /// A newer load was issued after this one; the result was dropped.
    Stale,
    /// The fetch failed; previous content (if any) is still shown.
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct DocumentState {
    identifier: Option<String>,
    generation: u64,
    status: LoadStatus,
    source: String,
    html: String,
}

impl DocumentState {
    /// Start loading `identifier`. Previously displayed content stays in place
    /// until the load completes.
    pub fn begin_load(&mut self, identifier: &str) -> LoadTicket {
        self.generation += 1;
        self.identifier = Some(identifier.to_owned());
        self.status = LoadStatus::Loading;
        LoadTicket { generation: self.generation, identifier: identifier.to_owned() }
    }

    /// Apply the result of the load described by `ticket`.
    pub fn complete(&mut self, ticket: &LoadTicket, result: Result<String, String>) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(text) => {
                self.html = render_markdown_html(&text);
                self.source = text;
                self.status = LoadStatus::Displayed;
                LoadOutcome::Displayed
            }
            Err(message) => {
                self.status = if self.html.is_empty() && self.source.is_empty() {
                    LoadStatus::Idle
                } else {
                    LoadStatus::Displayed
                };
                LoadOutcome::Failed(message)
            }
        }
    }

    /// Clear the page and invalidate any in-flight load. Used when the route
    /// no longer maps to a document.
    pub fn reset(&mut self) {
        *self = Self { generation: self.generation + 1, ..Self::default() };
    }

    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && self.identifier.as_deref() == Some(ticket.identifier.as_str())
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Raw Markdown of the displayed document.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Rendered HTML of the displayed document.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}
