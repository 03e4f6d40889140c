use super::*;

const GFM_SAMPLE: &str = "\
| Hook | Purpose |
|------|---------|
| useMemo | memoise values |

Old API: ~~componentWillMount~~

```rust
fn main() {
    println!(\"hi\");
}
```
";

// =============================================================
// Structure
// =============================================================

#[test]
fn heading_renders_h1() {
    let html = render_markdown_html("# Hello\n");
    assert!(html.contains("<h1>Hello</h1>"), "{html}");
}

#[test]
fn gfm_sample_renders_table_strikethrough_and_code() {
    let html = render_markdown_html(GFM_SAMPLE);
    assert!(html.contains("<table>"), "{html}");
    assert!(html.contains("<td>useMemo</td>"), "{html}");
    assert!(html.contains("<del>componentWillMount</del>"), "{html}");
    assert!(html.contains("<pre class=\"code-block\"><code class=\"language-rust\">"), "{html}");
    assert!(html.contains("<span class=\"hl-"), "{html}");
    assert!(html.contains("main"), "{html}");
}

#[test]
fn rendering_is_deterministic() {
    let first = render_markdown_html(GFM_SAMPLE);
    let second = render_markdown_html(GFM_SAMPLE);
    assert_eq!(first, second);
}

#[test]
fn task_list_renders_checkboxes() {
    let html = render_markdown_html("- [x] done\n- [ ] todo\n");
    assert_eq!(html.matches("type=\"checkbox\"").count(), 2, "{html}");
    assert!(html.contains("checked"), "{html}");
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn raw_html_is_passed_through() {
    let html = render_markdown_html("<div class=\"note\">hi</div>\n");
    assert!(html.contains("<div class=\"note\">hi</div>"), "{html}");
}

// =============================================================
// Code blocks
// =============================================================

#[test]
fn unknown_language_falls_back_to_plain_text() {
    let html = render_markdown_html("```nosuchlang\nlet <x> = 1;\n```\n");
    assert!(html.contains("class=\"language-nosuchlang\""), "{html}");
    assert!(html.contains("&lt;x&gt;"), "{html}");
}

#[test]
fn fence_without_language_has_no_language_class() {
    let html = render_markdown_html("```\nplain\n```\n");
    assert!(html.contains("<pre class=\"code-block\"><code>"), "{html}");
    assert!(html.contains("plain"), "{html}");
}

#[test]
fn indented_code_block_is_wrapped() {
    let html = render_markdown_html("para\n\n    indented code\n");
    assert!(html.contains("<pre class=\"code-block\"><code>"), "{html}");
    assert!(html.contains("indented code"), "{html}");
}

#[test]
fn fence_info_uses_first_word_as_language() {
    let html = render_markdown_html("```jsx title=\"App.js\"\nconst a = 1;\n```\n");
    assert!(html.contains("class=\"language-jsx\""), "{html}");
    assert!(!html.contains("title="), "{html}");
}

#[test]
fn urls_inside_code_blocks_are_not_linked() {
    let html = render_markdown_html("```\nhttps://example.com\n```\n");
    assert!(!html.contains("<a "), "{html}");
}

#[test]
fn syntax_token_maps_common_aliases() {
    assert_eq!(syntax_token("JSX"), "js");
    assert_eq!(syntax_token("typescript"), "js");
    assert_eq!(syntax_token("bash"), "sh");
    assert_eq!(syntax_token("yml"), "yaml");
    assert_eq!(syntax_token("rust"), "rust");
}

#[test]
fn highlight_css_targets_prefixed_classes() {
    let css = highlight_css();
    assert!(!css.is_empty());
    assert!(css.contains(".hl-"), "{css}");
}

// =============================================================
// Autolinks
// =============================================================

#[test]
fn bare_url_becomes_link_without_trailing_period() {
    let html = render_markdown_html("See https://react.dev.\n");
    assert!(
        html.contains("<a href=\"https://react.dev\">https://react.dev</a>."),
        "{html}"
    );
}

#[test]
fn www_url_gets_http_scheme() {
    let html = render_markdown_html("Visit www.example.com today\n");
    assert!(
        html.contains("<a href=\"http://www.example.com\">www.example.com</a> today"),
        "{html}"
    );
}

#[test]
fn existing_links_are_not_wrapped_twice() {
    let html = render_markdown_html("[docs](https://react.dev) and <https://example.com>\n");
    assert_eq!(html.matches("<a ").count(), 2, "{html}");
}

#[test]
fn inline_code_url_is_not_linked() {
    let html = render_markdown_html("`https://example.com`\n");
    assert!(html.contains("<code>https://example.com</code>"), "{html}");
    assert!(!html.contains("<a "), "{html}");
}

#[test]
fn email_address_becomes_mailto_link() {
    let html = render_markdown_html("Write to foo@bar.example.com today\n");
    assert!(
        html.contains("<a href=\"mailto:foo@bar.example.com\">foo@bar.example.com</a> today"),
        "{html}"
    );
}

#[test]
fn find_autolinks_balances_parentheses() {
    let text = "(see https://en.wikipedia.org/wiki/Rust_(language))";
    let links = find_autolinks(text);
    assert_eq!(links.len(), 1);
    assert_eq!(&text[links[0].range.clone()], "https://en.wikipedia.org/wiki/Rust_(language)");
}

#[test]
fn find_autolinks_skips_other_schemes_and_bare_domains() {
    assert!(find_autolinks("ftp://example.com/file").is_empty());
    assert!(find_autolinks("edit main.rs then example.org").is_empty());
    assert!(find_autolinks("https:// nothing").is_empty());
}

#[test]
fn find_autolinks_finds_urls_and_emails_in_order() {
    let text = "a http://example.com b www.react.dev c team@react.dev";
    let hrefs: Vec<_> = find_autolinks(text).into_iter().map(|link| link.href).collect();
    assert_eq!(hrefs, ["http://example.com", "http://www.react.dev", "mailto:team@react.dev"]);
}
