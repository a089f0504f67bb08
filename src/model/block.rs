// src/model/block.rs
//! Body content blocks: the subset of Notion block types the markdown
//! converter understands, plus a catch-all for everything else.

use crate::types::{BlockId, EquationData, RichTextItem};
use serde::{Deserialize, Serialize};

/// One block of page body content.
///
/// `children` is not part of the API payload for a single block; it is
/// populated by the recursive children fetch and carried here so the
/// renderer can indent nested content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub kind: BlockKind,
    #[serde(skip)]
    pub children: Vec<Block>,
}

impl Block {
    /// Construct a childless block (fixture shorthand).
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn of(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            has_children: false,
            kind,
            children: Vec::new(),
        }
    }

    /// Attach fetched children.
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }

    /// Get block type name as the API spells it.
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn block_type(&self) -> &'static str {
        match &self.kind {
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Heading1 { .. } => "heading_1",
            BlockKind::Heading2 { .. } => "heading_2",
            BlockKind::Heading3 { .. } => "heading_3",
            BlockKind::BulletedListItem { .. } => "bulleted_list_item",
            BlockKind::NumberedListItem { .. } => "numbered_list_item",
            BlockKind::ToDo { .. } => "to_do",
            BlockKind::Toggle { .. } => "toggle",
            BlockKind::Quote { .. } => "quote",
            BlockKind::Callout { .. } => "callout",
            BlockKind::Code { .. } => "code",
            BlockKind::Equation { .. } => "equation",
            BlockKind::Divider => "divider",
            BlockKind::Image { .. } => "image",
            BlockKind::Bookmark { .. } => "bookmark",
            BlockKind::Unsupported => "unsupported",
        }
    }
}

/// The rich-text payload shape shared by most text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn of(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoData {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeData {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(flatten)]
    pub file: FileObject,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

/// External vs. Notion-hosted file reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    External { external: ExternalFile },
    File { file: HostedFile },
}

impl FileObject {
    pub fn url(&self) -> &str {
        match self {
            FileObject::External { external } => &external.url,
            FileObject::File { file } => &file.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkData {
    pub url: String,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

/// All block types the converter distinguishes, dispatched on the API's
/// `type` tag. Everything else is `Unsupported` and renders as nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: TextBlockContent },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: TextBlockContent },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextBlockContent },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextBlockContent },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: TextBlockContent },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: TextBlockContent },
    #[serde(rename = "to_do")]
    ToDo { to_do: ToDoData },
    #[serde(rename = "toggle")]
    Toggle { toggle: TextBlockContent },
    #[serde(rename = "quote")]
    Quote { quote: TextBlockContent },
    #[serde(rename = "callout")]
    Callout { callout: TextBlockContent },
    #[serde(rename = "code")]
    Code { code: CodeData },
    #[serde(rename = "equation")]
    Equation { equation: EquationData },
    #[serde(rename = "divider")]
    Divider,
    #[serde(rename = "image")]
    Image { image: ImageData },
    #[serde(rename = "bookmark")]
    Bookmark { bookmark: BookmarkData },
    #[serde(other)]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paragraph_block_from_api_shape() {
        let json = r#"{
            "object": "block",
            "id": "9bc30ad4-9373-46a5-84ab-0a7845ee52e6",
            "has_children": false,
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": { "content": "Some words.", "link": null },
                    "plain_text": "Some words.",
                    "href": null
                }],
                "color": "default"
            }
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type(), "paragraph");
        assert!(!block.has_children);
    }

    #[test]
    fn unknown_block_type_is_unsupported() {
        let json = r#"{
            "id": "9bc30ad4-9373-46a5-84ab-0a7845ee52e6",
            "has_children": false,
            "type": "child_database",
            "child_database": { "title": "Nested" }
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type(), "unsupported");
    }

    #[test]
    fn image_block_resolves_external_url() {
        let json = r#"{
            "id": "9bc30ad4-9373-46a5-84ab-0a7845ee52e6",
            "has_children": false,
            "type": "image",
            "image": {
                "type": "external",
                "external": { "url": "https://example.com/a.png" },
                "caption": []
            }
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        match &block.kind {
            BlockKind::Image { image } => assert_eq!(image.file.url(), "https://example.com/a.png"),
            other => panic!("expected image, got {:?}", other),
        }
    }
}
