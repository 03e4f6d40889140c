//! Navigation menu state: per-group expansion and the active route.
//!
//! DESIGN
//! ======
//! Transitions are pure: every operation returns a new `MenuState` and leaves
//! the receiver untouched, so components apply them with
//! `menu.update(|m| *m = m.toggle_group(id))`.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use super::catalog::GroupId;

/// Visibility of a collapsible group's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupState {
    #[default]
    Collapsed,
    Expanded,
}

impl GroupState {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// Menu state scoped to a single `NavMenu` instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    components: GroupState,
    hooks: GroupState,
    active_route: Option<String>,
}

impl MenuState {
    /// Current state of `group`.
    #[must_use]
    pub fn group(&self, group: GroupId) -> GroupState {
        match group {
            GroupId::Components => self.components,
            GroupId::Hooks => self.hooks,
        }
    }

    #[must_use]
    pub fn is_expanded(&self, group: GroupId) -> bool {
        self.group(group) == GroupState::Expanded
    }

    /// Flip `group` between collapsed and expanded. Other groups keep their state.
    #[must_use]
    pub fn toggle_group(&self, group: GroupId) -> Self {
        let mut next = self.clone();
        match group {
            GroupId::Components => next.components = next.components.flipped(),
            GroupId::Hooks => next.hooks = next.hooks.flipped(),
        }
        next
    }

    /// Record `path` as the active route.
    ///
    /// The path is not checked against the catalog; the router decides what,
    /// if anything, renders for it. Group expansion is left as is.
    #[must_use]
    pub fn select_entry(&self, path: &str) -> Self {
        Self { active_route: Some(path.to_owned()), ..self.clone() }
    }

    #[must_use]
    pub fn active_route(&self) -> Option<&str> {
        self.active_route.as_deref()
    }

    /// Whether the entry with `slug` is the active route.
    #[must_use]
    pub fn is_active(&self, slug: &str) -> bool {
        self.active_route()
            .and_then(|route| route.strip_prefix('/'))
            .is_some_and(|active| active == slug)
    }
}
