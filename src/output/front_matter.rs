// src/output/front_matter.rs
//! Front-matter rendering for the target static-site generator.
//!
//! Line order matters for Chirpy compatibility: title, date,
//! categories, tags, then the optional math switch.

use crate::post::PostDocument;

/// Date format used in the `date:` line: local-offset timezone,
/// seconds precision.
pub const FRONT_MATTER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Renders the front-matter block, ending with a blank line so the
/// body can be concatenated directly after it.
pub fn render_front_matter(post: &PostDocument, math: bool) -> String {
    let mut lines = vec![
        "---".to_string(),
        format!("title: \"{}\"", escape_title(&post.title)),
        format!("date: {}", post.date.format(FRONT_MATTER_DATE_FORMAT)),
        format!("categories: [{}]", post.category),
        format!("tags: [{}]", quoted_list(&post.tags)),
    ];

    if math {
        lines.push("math: true".to_string());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(String::new());

    lines.join("\n")
}

/// Escapes embedded double quotes with a backslash.
fn escape_title(title: &str) -> String {
    title.replace('"', "\\\"")
}

/// Renders tags as double-quoted, comma-space separated entries.
fn quoted_list(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("\"{}\"", tag))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Slug;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn post() -> PostDocument {
        PostDocument {
            title: "Hello World".to_string(),
            slug: Slug::derive("Hello World"),
            date: DateTime::parse_from_rfc3339("2024-03-01T00:00:00+00:00").unwrap(),
            tags: vec!["ai".to_string(), "notes".to_string()],
            category: "Tech".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn renders_the_chirpy_header_in_order() {
        let header = render_front_matter(&post(), false);
        assert_eq!(
            header,
            "---\n\
             title: \"Hello World\"\n\
             date: 2024-03-01 00:00:00 +0000\n\
             categories: [Tech]\n\
             tags: [\"ai\", \"notes\"]\n\
             ---\n\n"
        );
    }

    #[test]
    fn escapes_double_quotes_in_title() {
        let mut doc = post();
        doc.title = "Say \"hi\" twice".to_string();
        let header = render_front_matter(&doc, false);
        assert!(header.contains("title: \"Say \\\"hi\\\" twice\""));
    }

    #[test]
    fn empty_tags_render_as_empty_brackets() {
        let mut doc = post();
        doc.tags = vec![];
        let header = render_front_matter(&doc, false);
        assert!(header.contains("tags: []\n"));
    }

    #[test]
    fn math_flag_adds_the_switch_after_tags() {
        let header = render_front_matter(&post(), true);
        assert!(header.contains("tags: [\"ai\", \"notes\"]\nmath: true\n---\n"));
    }

    #[test]
    fn category_is_unquoted() {
        let header = render_front_matter(&post(), false);
        assert!(header.contains("categories: [Tech]\n"));
    }
}
