//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_menu::NavMenu;
use crate::pages::doc::DocRoute;
use crate::state::menu::MenuState;
use crate::util::markdown::HIGHLIGHT_CSS_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the menu state and mounts the menu beside the `/:page` route.
/// The site root and paths that match no route render an empty content
/// column.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let menu = RwSignal::new(MenuState::default());
    provide_context(menu);

    view! {
        <Stylesheet id="leptos" href="/pkg/docview.css"/>
        <Stylesheet id="highlight" href=HIGHLIGHT_CSS_PATH/>
        <Title text="React docs"/>

        <Router>
            <div class="layout">
                <NavMenu/>
                <main class="layout__content">
                    <Routes fallback=|| ()>
                        <Route path=StaticSegment("") view=|| ()/>
                        <Route path=ParamSegment("page") view=DocRoute/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
