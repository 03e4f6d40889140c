//! Start-up validation of the route catalog against the content directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client resolves routes to `/markdown/...` identifiers at runtime and
//! never checks that the file exists. The server runs this check once before
//! binding so a broken catalog fails the deploy instead of rendering blank
//! pages.

use std::path::{Component, Path, PathBuf};

use docview::state::catalog::{self, CatalogError, DOCUMENT_PREFIX, NavItem};

/// Errors produced while checking the catalog against the filesystem.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// An identifier resolves outside the content directory.
    #[error("document '{0}' escapes the content directory")]
    OutsideContentDir(String),

    /// One or more catalog entries point at files that do not exist.
    #[error("missing documents: {}", .0.join(", "))]
    MissingDocuments(Vec<String>),
}

/// Map a document identifier (`/markdown/Components/ReactMemo.md`) to its
/// path under `docs_dir`.
///
/// # Errors
///
/// Returns `OutsideContentDir` if the identifier is not under
/// [`DOCUMENT_PREFIX`] or contains anything but plain path segments.
pub fn document_path(docs_dir: &Path, identifier: &str) -> Result<PathBuf, ContentError> {
    let relative = identifier
        .strip_prefix(DOCUMENT_PREFIX)
        .ok_or_else(|| ContentError::OutsideContentDir(identifier.to_owned()))?;
    let relative = Path::new(relative);
    if relative.as_os_str().is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(ContentError::OutsideContentDir(identifier.to_owned()));
    }
    Ok(docs_dir.join(relative))
}

/// Validate `items` structurally, then confirm every document exists under
/// `docs_dir`. Returns the number of documents checked.
///
/// # Errors
///
/// Returns the catalog error, the first escaping identifier, or the full
/// list of missing documents.
pub fn validate_catalog(docs_dir: &Path, items: &'static [NavItem]) -> Result<usize, ContentError> {
    catalog::validate(items)?;

    let mut checked = 0;
    let mut missing = Vec::new();
    for entry in catalog::entries(items) {
        let path = document_path(docs_dir, entry.document)?;
        if path.is_file() {
            tracing::debug!(slug = entry.slug, path = %path.display(), "document found");
        } else {
            missing.push(entry.document.to_owned());
        }
        checked += 1;
    }

    if missing.is_empty() { Ok(checked) } else { Err(ContentError::MissingDocuments(missing)) }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
