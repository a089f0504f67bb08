// src/markdown/rich_text.rs
//! Formats rich text runs into inline markdown.

use crate::types::{Annotations, RichTextItem, RichTextKind};

/// Formats an array of rich text runs into a single markdown string.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    items.iter().map(render_item).collect()
}

fn render_item(item: &RichTextItem) -> String {
    let base = match &item.kind {
        // Equations ignore styling
        RichTextKind::Equation { equation } => return format!("${}$", equation.expression),
        RichTextKind::Text { text } => text.content.clone(),
        // Mentions carry no dedicated data; plain_text is the fallback
        RichTextKind::Mention => item.plain_text.clone(),
    };

    let styled = apply_annotations(&base, &item.annotations);

    let link = item
        .href
        .clone()
        .or_else(|| match &item.kind {
            RichTextKind::Text { text } => text.link.as_ref().map(|link| link.url.clone()),
            _ => None,
        })
        .filter(|url| is_web_url(url));

    match link {
        Some(url) => format!("[{}]({})", styled, url),
        None => styled,
    }
}

/// Only http(s) targets become markdown links; anything else renders
/// as its text.
fn is_web_url(candidate: &str) -> bool {
    url::Url::parse(candidate)
        .map(|parsed| parsed.scheme() == "http" || parsed.scheme() == "https")
        .unwrap_or(false)
}

fn apply_annotations(text: &str, annotations: &Annotations) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = text.to_string();

    if annotations.code {
        out = format!("`{}`", out);
    }

    match (annotations.bold, annotations.italic) {
        (true, true) => out = format!("***{}***", out),
        (true, false) => out = format!("**{}**", out),
        (false, true) => out = format!("*{}*", out),
        (false, false) => {}
    }

    if annotations.strikethrough {
        out = format!("~~{}~~", out);
    }

    out
}
