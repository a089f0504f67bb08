// src/types/properties.rs
//! Rich text and option values shared by page properties and blocks.

use serde::{Deserialize, Serialize};

/// The kind of rich text content — a typed vocabulary replacing
/// stringly-typed dispatch.
///
/// Mentions carry no dedicated data here; `plain_text` provides the
/// fallback rendering for every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextKind {
    Text { text: TextData },
    Equation { equation: EquationData },
    #[serde(other)]
    Mention,
}

/// Text content of a rich text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationData {
    pub expression: String,
}

/// Rich text run with formatting annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(flatten)]
    pub kind: RichTextKind,
    #[serde(default)]
    pub annotations: Annotations,
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text run — the most common rich text variant.
    ///
    /// This is the vocabulary for constructing rich text in tests and
    /// fixtures. Instead of 4 fields with Nones, just:
    /// ```ignore
    /// RichTextItem::plain_text("hello")
    /// ```
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn plain_text(text: &str) -> Self {
        Self {
            kind: RichTextKind::Text {
                text: TextData {
                    content: text.to_string(),
                    link: None,
                },
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: AnnotationColor,
}

/// Annotation color, kept as the raw API string. Rendering ignores it;
/// it exists so round-tripped fixtures compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationColor(String);

impl Default for AnnotationColor {
    fn default() -> Self {
        Self("default".to_string())
    }
}

/// Select / multi-select option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl SelectOption {
    /// Construct an option with just a label, enough for fixtures.
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn named(name: &str) -> Self {
        Self {
            id: String::new(),
            name: name.to_string(),
            color: String::new(),
        }
    }
}

/// Date value as returned by the API. `start` is kept as the raw ISO
/// string: it may be date-only or a full timestamp, and the post
/// assembly step decides how to interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl DateValue {
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn starting(start: &str) -> Self {
        Self {
            start: start.to_string(),
            end: None,
            time_zone: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_text_deserializes_from_api_shape() {
        let json = r#"{
            "type": "text",
            "text": { "content": "Hello", "link": null },
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            },
            "plain_text": "Hello",
            "href": null
        }"#;

        let item: RichTextItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.plain_text, "Hello");
        assert!(item.annotations.bold);
        assert!(matches!(item.kind, RichTextKind::Text { .. }));
    }

    #[test]
    fn unknown_rich_text_kind_falls_back_to_mention() {
        let json = r#"{
            "type": "mention",
            "mention": { "type": "user", "user": { "id": "u1" } },
            "plain_text": "@someone",
            "href": null
        }"#;

        let item: RichTextItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.plain_text, "@someone");
        assert!(matches!(item.kind, RichTextKind::Mention));
    }
}
