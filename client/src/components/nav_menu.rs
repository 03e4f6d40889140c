//! Fixed left-hand navigation menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the static catalog. Links are plain anchors; the router intercepts
//! clicks for client-side navigation, so selecting an entry only records the
//! active route in `MenuState` and lets routing do the rest.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::catalog::{MENU, NavEntry, NavGroup, NavItem, group_of};
use crate::state::menu::MenuState;

/// Navigation sidebar with top-level links and two collapsible groups.
#[component]
pub fn NavMenu() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let location = use_location();

    // Keep the highlighted entry in sync with deep links and history navigation.
    Effect::new(move || {
        let path = location.pathname.get();
        menu.update(|m| *m = m.select_entry(&path));
    });

    let items = MENU
        .iter()
        .map(|item| match item {
            NavItem::Entry(entry) => {
                view! { <li class="nav-menu__item">{entry_link(entry, menu)}</li> }.into_any()
            }
            NavItem::Group(group) => group_section(group, menu).into_any(),
        })
        .collect_view();

    view! {
        <nav class="nav-menu">
            <ul class="nav-menu__list">{items}</ul>
        </nav>
    }
}

fn entry_link(entry: &'static NavEntry, menu: RwSignal<MenuState>) -> impl IntoView {
    let route = entry.route();
    let on_click = {
        let route = route.clone();
        move |_| menu.update(|m| *m = m.select_entry(&route))
    };
    let class = move || {
        if menu.with(|m| m.is_active(entry.slug)) {
            "nav-menu__link nav-menu__link--active"
        } else {
            "nav-menu__link"
        }
    };

    view! {
        <a class=class href=route on:click=on_click>
            {entry.label}
        </a>
    }
}

fn group_section(group: &'static NavGroup, menu: RwSignal<MenuState>) -> impl IntoView {
    let id = group.id;
    let expanded = move || menu.with(|m| m.is_expanded(id));
    let holds_active = move || {
        menu.with(|m| {
            m.active_route()
                .and_then(|route| route.strip_prefix('/'))
                .is_some_and(|slug| group_of(MENU, slug) == Some(id))
        })
    };
    let toggle_class = move || {
        if holds_active() {
            "nav-menu__toggle nav-menu__toggle--current"
        } else {
            "nav-menu__toggle"
        }
    };

    view! {
        <li class="nav-menu__item">
            <button
                class=toggle_class
                aria-expanded=move || expanded().to_string()
                on:click=move |_| menu.update(|m| *m = m.toggle_group(id))
            >
                <MenuIcon/>
                {group.label}
            </button>
            <Show when=expanded>
                <ul class="nav-menu__group">
                    {group
                        .entries
                        .iter()
                        .map(|entry| view! { <li class="nav-menu__subitem">{entry_link(entry, menu)}</li> })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

/// Hamburger glyph shown next to each group label.
#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg
            class="nav-menu__icon"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
        </svg>
    }
}
