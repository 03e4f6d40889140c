//! Static documentation catalog: menu layout and route -> document table.
//!
//! DESIGN
//! ======
//! The catalog is the single source of truth for routing. The menu renders
//! from it, the router resolves slugs through it, and the server validates it
//! against the content directory before accepting traffic.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

/// URL prefix every document identifier lives under.
pub const DOCUMENT_PREFIX: &str = "/markdown/";

/// Identifies one collapsible menu group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupId {
    Components,
    Hooks,
}

impl GroupId {
    /// Every group, in menu order.
    pub const ALL: [GroupId; 2] = [GroupId::Components, GroupId::Hooks];
}

/// A single menu link: route slug, display label, and backing document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub slug: &'static str,
    pub label: &'static str,
    /// Document identifier fetched by the content page (`/markdown/...`).
    pub document: &'static str,
}

impl NavEntry {
    /// Absolute route path for this entry (`/introduction`).
    #[must_use]
    pub fn route(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// A labelled, collapsible group of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavGroup {
    pub id: GroupId,
    pub label: &'static str,
    pub entries: &'static [NavEntry],
}

/// Top-level menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Entry(NavEntry),
    Group(NavGroup),
}

const fn entry(slug: &'static str, label: &'static str, document: &'static str) -> NavEntry {
    NavEntry { slug, label, document }
}

/// The canonical menu, in display order.
pub const MENU: &[NavItem] = &[
    NavItem::Entry(entry("introduction", "React starter", "/markdown/introduction.md")),
    NavItem::Entry(entry("callApi", "Les calls API", "/markdown/callApi.md")),
    NavItem::Entry(entry("mutations", "Les mutations react queries", "/markdown/mutations.md")),
    NavItem::Group(NavGroup {
        id: GroupId::Components,
        label: "Les Components",
        entries: &[
            entry("ReactMemo", "React.memo", "/markdown/Components/ReactMemo.md"),
            entry("ReactForwardRef", "React.forwardRef", "/markdown/Components/ReactForwardRef.md"),
            entry("ReactSuspense", "React.suspense", "/markdown/Components/ReactSuspense.md"),
        ],
    }),
    NavItem::Group(NavGroup {
        id: GroupId::Hooks,
        label: "Les Hooks",
        entries: &[
            entry("useReducer", "useReducer", "/markdown/useReducer.md"),
            entry("useMemo", "useMemo", "/markdown/useMemo.md"),
            entry("useCallback", "useCallback", "/markdown/useCallback.md"),
            entry("useMyHooks", "useMyHooks", "/markdown/useMyHooks.md"),
        ],
    }),
];

/// Errors found while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("entry '{label}' has an empty slug")]
    EmptySlug { label: &'static str },

    #[error("slug '{0}' must be a single path segment")]
    NestedSlug(&'static str),

    #[error("slug '{0}' is used by more than one entry")]
    DuplicateSlug(&'static str),

    #[error("document '{0}' is referenced by more than one entry")]
    DuplicateDocument(&'static str),

    #[error("document '{document}' for '{slug}' is not under /markdown/")]
    OutsidePrefix { slug: &'static str, document: &'static str },

    #[error("document '{document}' for '{slug}' is not a Markdown file")]
    NotMarkdown { slug: &'static str, document: &'static str },

    #[error("group '{0}' has no entries")]
    EmptyGroup(&'static str),
}

/// Iterate every entry in menu order, flattening groups.
pub fn entries(items: &'static [NavItem]) -> impl Iterator<Item = &'static NavEntry> {
    items.iter().flat_map(|item| match item {
        NavItem::Entry(entry) => std::slice::from_ref(entry),
        NavItem::Group(group) => group.entries,
    })
}

/// Resolve a route slug to its entry in the canonical menu.
///
/// Matching is exact and case-sensitive. Unknown slugs return `None`, which
/// callers render as an empty content area.
#[must_use]
pub fn resolve(slug: &str) -> Option<&'static NavEntry> {
    resolve_in(MENU, slug)
}

/// Resolve a route slug against an arbitrary catalog.
#[must_use]
pub fn resolve_in(items: &'static [NavItem], slug: &str) -> Option<&'static NavEntry> {
    entries(items).find(|entry| entry.slug == slug)
}

/// Group that owns the entry with `slug`, if any.
#[must_use]
pub fn group_of(items: &'static [NavItem], slug: &str) -> Option<GroupId> {
    items.iter().find_map(|item| match item {
        NavItem::Group(group) if group.entries.iter().any(|e| e.slug == slug) => Some(group.id),
        _ => None,
    })
}

/// Check the structural rules every catalog must satisfy.
///
/// # Errors
///
/// Returns the first rule violation found, walking entries in menu order.
pub fn validate(items: &'static [NavItem]) -> Result<(), CatalogError> {
    for item in items {
        if let NavItem::Group(group) = item {
            if group.entries.is_empty() {
                return Err(CatalogError::EmptyGroup(group.label));
            }
        }
    }

    let mut slugs = HashSet::new();
    let mut documents = HashSet::new();
    for entry in entries(items) {
        if entry.slug.is_empty() {
            return Err(CatalogError::EmptySlug { label: entry.label });
        }
        if entry.slug.contains('/') {
            return Err(CatalogError::NestedSlug(entry.slug));
        }
        if !entry.document.starts_with(DOCUMENT_PREFIX) {
            return Err(CatalogError::OutsidePrefix { slug: entry.slug, document: entry.document });
        }
        if !entry.document.ends_with(".md") {
            return Err(CatalogError::NotMarkdown { slug: entry.slug, document: entry.document });
        }
        if !slugs.insert(entry.slug) {
            return Err(CatalogError::DuplicateSlug(entry.slug));
        }
        if !documents.insert(entry.document) {
            return Err(CatalogError::DuplicateDocument(entry.document));
        }
    }
    Ok(())
}
