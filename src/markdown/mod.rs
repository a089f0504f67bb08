// src/markdown/mod.rs
//! Block-to-markdown conversion.
//!
//! This is the converter the pipeline delegates body rendering to: one
//! call per page, blocks in, a single opaque markdown string out. The
//! rest of the crate never interprets block structure.

mod rich_text;

pub use rich_text::rich_text_to_markdown;

use crate::constants::{CHARS_PER_BLOCK_ESTIMATE, INDENT_SPACES};
use crate::error::AppError;
use crate::model::{Block, BlockKind};
use std::fmt::Write;

/// Renders a page's block tree into the markdown body of a post.
pub fn render_page_body(blocks: &[Block]) -> Result<String, AppError> {
    let estimated_capacity = blocks.len() * CHARS_PER_BLOCK_ESTIMATE;
    let mut out = String::with_capacity(estimated_capacity);
    render_level(&mut out, blocks, 0)?;
    Ok(out)
}

fn is_list_item(block: &Block) -> bool {
    matches!(
        block.kind,
        BlockKind::BulletedListItem { .. }
            | BlockKind::NumberedListItem { .. }
            | BlockKind::ToDo { .. }
    )
}

fn render_level(out: &mut String, blocks: &[Block], depth: usize) -> Result<(), AppError> {
    let indent = " ".repeat(depth * INDENT_SPACES);
    let mut numbered = 0usize;

    for (i, block) in blocks.iter().enumerate() {
        if matches!(block.kind, BlockKind::NumberedListItem { .. }) {
            numbered += 1;
        } else {
            numbered = 0;
        }

        match &block.kind {
            BlockKind::Paragraph { paragraph } => {
                let text = rich_text_to_markdown(&paragraph.rich_text);
                writeln!(out, "{}{}\n", indent, text)?;
            }
            BlockKind::Heading1 { heading_1 } => {
                writeln!(out, "{}# {}\n", indent, rich_text_to_markdown(&heading_1.rich_text))?;
            }
            BlockKind::Heading2 { heading_2 } => {
                writeln!(out, "{}## {}\n", indent, rich_text_to_markdown(&heading_2.rich_text))?;
            }
            BlockKind::Heading3 { heading_3 } => {
                writeln!(
                    out,
                    "{}### {}\n",
                    indent,
                    rich_text_to_markdown(&heading_3.rich_text)
                )?;
            }
            BlockKind::BulletedListItem { bulleted_list_item } => {
                writeln!(
                    out,
                    "{}- {}",
                    indent,
                    rich_text_to_markdown(&bulleted_list_item.rich_text)
                )?;
            }
            BlockKind::NumberedListItem { numbered_list_item } => {
                writeln!(
                    out,
                    "{}{}. {}",
                    indent,
                    numbered,
                    rich_text_to_markdown(&numbered_list_item.rich_text)
                )?;
            }
            BlockKind::ToDo { to_do } => {
                let marker = if to_do.checked { "x" } else { " " };
                writeln!(
                    out,
                    "{}- [{}] {}",
                    indent,
                    marker,
                    rich_text_to_markdown(&to_do.rich_text)
                )?;
            }
            BlockKind::Toggle { toggle } => {
                writeln!(out, "{}{}\n", indent, rich_text_to_markdown(&toggle.rich_text))?;
            }
            BlockKind::Quote { quote } => {
                writeln!(out, "{}> {}\n", indent, rich_text_to_markdown(&quote.rich_text))?;
            }
            BlockKind::Callout { callout } => {
                writeln!(out, "{}> {}\n", indent, rich_text_to_markdown(&callout.rich_text))?;
            }
            BlockKind::Code { code } => {
                writeln!(out, "{}```{}", indent, code.language)?;
                for run in &code.rich_text {
                    for line in run.plain_text.lines() {
                        writeln!(out, "{}{}", indent, line)?;
                    }
                }
                writeln!(out, "{}```", indent)?;
                let caption = rich_text_to_markdown(&code.caption);
                if !caption.is_empty() {
                    writeln!(out, "{}*{}*", indent, caption)?;
                }
                out.push('\n');
            }
            BlockKind::Equation { equation } => {
                writeln!(out, "{}$$", indent)?;
                writeln!(out, "{}{}", indent, equation.expression)?;
                writeln!(out, "{}$$\n", indent)?;
            }
            BlockKind::Divider => {
                writeln!(out, "{}---\n", indent)?;
            }
            BlockKind::Image { image } => {
                let alt = rich_text_to_markdown(&image.caption);
                writeln!(out, "{}![{}]({})\n", indent, alt, image.file.url())?;
            }
            BlockKind::Bookmark { bookmark } => {
                let caption = rich_text_to_markdown(&bookmark.caption);
                let label = if caption.is_empty() {
                    bookmark.url.as_str()
                } else {
                    caption.as_str()
                };
                writeln!(out, "{}[{}]({})\n", indent, label, bookmark.url)?;
            }
            BlockKind::Unsupported => {
                log::debug!("Skipping unsupported block {}", block.id.as_str());
            }
        }

        if !block.children.is_empty() {
            render_level(out, &block.children, depth + 1)?;
        }

        // Close a list run with a blank line before the next prose block
        let next_breaks_list = blocks.get(i + 1).is_some_and(|next| !is_list_item(next));
        if is_list_item(block) && next_breaks_list {
            out.push('\n');
        }
    }

    Ok(())
}
