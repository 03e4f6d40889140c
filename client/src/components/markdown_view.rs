//! Container for rendered document HTML.

use leptos::prelude::*;

/// Injects pre-rendered Markdown HTML into the content column.
#[component]
pub fn MarkdownView(#[prop(into)] html: Signal<String>) -> impl IntoView {
    view! { <article class="markdown-content" inner_html=move || html.get()></article> }
}
