//! Markdown -> HTML rendering with GFM extensions and highlighted code blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The content page feeds fetched document text through
//! [`render_markdown_html`]. Fenced code is highlighted with `syntect` using
//! `hl-` prefixed CSS classes; the matching stylesheet comes from
//! [`highlight_css`] and is served once by the server at
//! [`HIGHLIGHT_CSS_PATH`].
//!
//! TRADE-OFFS
//! ==========
//! Raw HTML embedded in a document is passed through untouched. Documents are
//! bundled with the site, not user supplied.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use std::ops::Range;
use std::sync::OnceLock;

use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Route the highlight stylesheet is served from.
pub const HIGHLIGHT_CSS_PATH: &str = "/theme/highlight.css";

/// Fixed code highlighting theme.
pub const HIGHLIGHT_THEME: &str = "base16-ocean.dark";

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_CSS: OnceLock<String> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Stylesheet for [`HIGHLIGHT_THEME`], generated on first use.
///
/// Empty if the theme is missing from the bundled set.
pub fn highlight_css() -> &'static str {
    THEME_CSS.get_or_init(|| {
        let themes = ThemeSet::load_defaults();
        themes
            .themes
            .get(HIGHLIGHT_THEME)
            .and_then(|theme| css_for_theme_with_class_style(theme, CLASS_STYLE).ok())
            .unwrap_or_default()
    })
}

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

/// Render Markdown source to an HTML fragment.
///
/// Output depends only on `markdown`: rendering the same text twice yields
/// byte-identical HTML.
pub fn render_markdown_html(markdown: &str) -> String {
    let parser = TextMergeStream::new(Parser::new_ext(markdown, markdown_options()));
    let events = rewrite_events(parser);

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, events.into_iter());
    out
}

struct PendingCodeBlock {
    lang: Option<String>,
    body: String,
}

/// Replace code blocks with highlighted HTML and link bare URLs and emails in text.
fn rewrite_events<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut pending: Option<PendingCodeBlock> = None;
    let mut link_depth = 0usize;

    for event in events {
        if let Some(block) = pending.as_mut() {
            match event {
                Event::Text(text) => block.body.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = pending.take() {
                        let html = code_block_html(block.lang.as_deref(), &block.body);
                        out.push(Event::Html(html.into()));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                pending = Some(PendingCodeBlock { lang, body: String::new() });
            }
            Event::Start(Tag::Link { .. }) => {
                link_depth += 1;
                out.push(event);
            }
            Event::End(TagEnd::Link) => {
                link_depth = link_depth.saturating_sub(1);
                out.push(event);
            }
            Event::Text(text) if link_depth == 0 => push_linkified(text, &mut out),
            other => out.push(other),
        }
    }
    out
}

fn push_linkified<'a>(text: CowStr<'a>, out: &mut Vec<Event<'a>>) {
    let links = find_autolinks(&text);
    if links.is_empty() {
        out.push(Event::Text(text));
        return;
    }

    let mut cursor = 0;
    for link in links {
        if link.range.start > cursor {
            out.push(Event::Text(text[cursor..link.range.start].to_owned().into()));
        }
        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: link.href.into(),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        out.push(Event::Text(text[link.range.clone()].to_owned().into()));
        out.push(Event::End(TagEnd::Link));
        cursor = link.range.end;
    }
    if cursor < text.len() {
        out.push(Event::Text(text[cursor..].to_owned().into()));
    }
}

/// A bare URL or email address found in prose.
#[derive(Debug, PartialEq, Eq)]
struct Autolink {
    range: Range<usize>,
    href: String,
}

/// Extended autolinks as GFM defines them. Other schemes and bare domains
/// stay plain text.
fn find_autolinks(text: &str) -> Vec<Autolink> {
    let mut finder = LinkFinder::new();
    finder.url_must_have_scheme(false);

    finder
        .links(text)
        .filter_map(|link| {
            let found = link.as_str();
            let href = match link.kind() {
                LinkKind::Email => format!("mailto:{found}"),
                LinkKind::Url if found.starts_with("http://") || found.starts_with("https://") => found.to_owned(),
                LinkKind::Url if found.starts_with("www.") => format!("http://{found}"),
                _ => return None,
            };
            Some(Autolink { range: link.start()..link.end(), href })
        })
        .collect()
}

fn code_block_html(lang: Option<&str>, source: &str) -> String {
    let lang = lang.filter(|l| !l.is_empty());
    let class = lang
        .map(|l| format!(" class=\"language-{}\"", escape_html(l)))
        .unwrap_or_default();
    format!("<pre class=\"code-block\"><code{class}>{}</code></pre>\n", highlight_code(lang, source))
}

/// Map fence info tokens to names the bundled syntax set knows.
fn syntax_token(lang: &str) -> String {
    match lang.to_ascii_lowercase().as_str() {
        "jsx" | "tsx" | "ts" | "typescript" | "javascript" | "mjs" | "cjs" => "js".to_owned(),
        "shell" | "console" | "zsh" | "bash" => "sh".to_owned(),
        "yml" => "yaml".to_owned(),
        other => other.to_owned(),
    }
}

fn highlight_code(lang: Option<&str>, source: &str) -> String {
    let syntaxes = syntax_set();
    let syntax = lang
        .and_then(|l| syntaxes.find_syntax_by_token(&syntax_token(l)))
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());

    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, syntaxes, CLASS_STYLE);
    for line in LinesWithEndings::from(source) {
        if generator.parse_html_for_line_which_includes_newline(line).is_err() {
            return escape_html(source);
        }
    }
    generator.finalize()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
