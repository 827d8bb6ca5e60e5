//! Server-rendered HTML for the backoffice and approval pages.

pub mod approval;
pub mod backoffice;
pub mod error;

use axum::response::Html;
use pulldown_cmark::escape::{escape_href, escape_html};

use crate::common::StoryId;
use crate::domains::tally::AggregateStatus;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
h1 { font-size: 1.6rem; }
form { display: grid; gap: .6rem; margin: 1rem 0 2rem; }
input[type=text], input[type=url], textarea { padding: .45rem; border: 1px solid #cbd2d9; border-radius: 4px; }
button { padding: .5rem 1rem; border: 0; border-radius: 4px; background: #2563eb; color: #fff; cursor: pointer; width: fit-content; }
.notice { padding: .7rem 1rem; border-radius: 4px; margin: 1rem 0; }
.notice.success { background: #e3f9e5; }
.notice.warning { background: #fff3c4; }
.notice.error { background: #ffe3e3; }
.status { padding: .1rem .5rem; border-radius: 999px; font-size: .85rem; }
.status.pending { background: #e4e7eb; }
.status.approved { background: #c6f7e2; }
.status.rejected { background: #ffbdbd; }
.status.changes_requested { background: #ffe8a3; }
.story { border-bottom: 1px solid #e4e7eb; padding: .6rem 0; }
.decisions { display: flex; gap: 1rem; }
iframe { border: 1px solid #cbd2d9; }
"#;

/// Escape text for HTML element content and quoted attribute values
pub fn text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    // Writing into a String cannot fail
    let _ = escape_html(&mut out, raw);
    out
}

/// Escape a URL for use in `href`/`src` attributes
pub fn url(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let _ = escape_href(&mut out, raw);
    out
}

/// Path of a story's approval page
pub fn approval_path(id: &StoryId) -> String {
    format!("/approval?id={}", urlencoding::encode(id.as_str()))
}

pub fn status_badge(status: AggregateStatus) -> String {
    format!(
        r#"<span class="status {}">{}</span>"#,
        status.as_str(),
        text(status.label())
    )
}

pub fn notice(kind: &str, message: &str) -> String {
    format!(r#"<div class="notice {}">{}</div>"#, kind, text(message))
}

/// Wrap page content in the shared document layout
pub fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/backoffice">Backoffice</a></nav>
{body}
</body>
</html>"#,
        title = text(title),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes_markup_and_quotes() {
        assert_eq!(
            text(r#"<script>alert("x")</script> & co"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn url_keeps_plain_links_intact() {
        assert_eq!(
            url("https://wiki.example.com/pages/viewpage.action?pageId=42"),
            "https://wiki.example.com/pages/viewpage.action?pageId=42"
        );
        assert!(!url(r#"https://x" onload="evil"#).contains('"'));
    }

    #[test]
    fn approval_path_encodes_the_identifier() {
        let id = StoryId::parse("HU 100/a").unwrap();
        assert_eq!(approval_path(&id), "/approval?id=HU%20100%2Fa");
    }
}
