// src/post.rs
//! Post assembly: turns a page's extracted fields plus a rendered body
//! into the document the writer materializes.

use crate::extract::{extract, FieldValue};
use crate::model::Page;
use crate::types::Slug;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// The derived output for one page. Created per page record, consumed
/// immediately by the file-writing step, not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDocument {
    pub title: String,
    pub slug: Slug,
    pub date: DateTime<FixedOffset>,
    pub tags: Vec<String>,
    pub category: String,
    pub body: String,
}

impl PostDocument {
    /// Assembles a post from a page's fields and its rendered body.
    ///
    /// Defaulting rules:
    /// - missing title → empty string, used verbatim downstream
    /// - missing or empty `Slug` → derived from the title
    /// - missing (or unparseable) `Date` → `fallback_now`
    /// - missing `Tags` → empty list
    /// - missing `Category` → "Blog"
    pub fn assemble(page: &Page, body: String, fallback_now: DateTime<FixedOffset>) -> Self {
        let title = extract(page, "Title")
            .and_then(FieldValue::into_text)
            .unwrap_or_default();

        let slug = extract(page, "Slug")
            .and_then(FieldValue::into_text)
            .filter(|value| !value.is_empty())
            .map(Slug::explicit)
            .unwrap_or_else(|| Slug::derive(&title));

        let date = extract(page, "Date")
            .and_then(FieldValue::into_date)
            .and_then(|raw| parse_post_date(&raw))
            .unwrap_or(fallback_now);

        let tags = extract(page, "Tags")
            .and_then(FieldValue::into_labels)
            .unwrap_or_default();

        let category = extract(page, "Category")
            .and_then(FieldValue::into_label)
            .unwrap_or_else(|| crate::constants::DEFAULT_CATEGORY.to_string());

        Self {
            title,
            slug,
            date,
            tags,
            category,
            body,
        }
    }
}

/// Parses a property date string into a fixed-offset instant.
///
/// The API emits either a date-only value (`2024-03-01`), which maps to
/// midnight UTC, or a full RFC 3339 timestamp, which keeps its offset.
/// Anything else is treated as absent so the caller falls back to now.
pub fn parse_post_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant);
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let utc = FixedOffset::east_opt(0)?;
    midnight.and_local_timezone(utc).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyTypeValue, PropertyValue};
    use crate::types::{DateValue, PageId, RichTextItem, SelectOption};
    use std::collections::HashMap;

    fn fixed_now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-15T10:30:00+02:00").unwrap()
    }

    fn page(fields: Vec<(&str, PropertyTypeValue)>) -> Page {
        let mut properties = HashMap::new();
        for (name, value) in fields {
            properties.insert(name.into(), PropertyValue::of(value));
        }
        Page {
            id: PageId::parse("550e8400e29b41d4a716446655440000").unwrap(),
            url: String::new(),
            archived: false,
            properties,
        }
    }

    fn title_field(text: &str) -> (&'static str, PropertyTypeValue) {
        (
            "Title",
            PropertyTypeValue::Title {
                title: vec![RichTextItem::plain_text(text)],
            },
        )
    }

    #[test]
    fn derives_slug_from_title_when_slug_field_missing() {
        let post = PostDocument::assemble(
            &page(vec![title_field("Hello World")]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(post.slug.as_str(), "hello-world");
    }

    #[test]
    fn empty_slug_field_falls_back_to_derivation() {
        let post = PostDocument::assemble(
            &page(vec![
                title_field("Hello World"),
                ("Slug", PropertyTypeValue::RichText { rich_text: vec![] }),
            ]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(post.slug.as_str(), "hello-world");
    }

    #[test]
    fn explicit_slug_wins_over_derivation() {
        let post = PostDocument::assemble(
            &page(vec![
                title_field("Hello World"),
                (
                    "Slug",
                    PropertyTypeValue::RichText {
                        rich_text: vec![RichTextItem::plain_text("custom-slug")],
                    },
                ),
            ]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(post.slug.as_str(), "custom-slug");
    }

    #[test]
    fn date_only_value_is_midnight_utc() {
        let post = PostDocument::assemble(
            &page(vec![
                title_field("Post"),
                (
                    "Date",
                    PropertyTypeValue::Date {
                        date: Some(DateValue::starting("2024-03-01")),
                    },
                ),
            ]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(
            post.date.format("%Y-%m-%d %H:%M:%S %z").to_string(),
            "2024-03-01 00:00:00 +0000"
        );
    }

    #[test]
    fn timestamp_value_keeps_its_offset() {
        let post = PostDocument::assemble(
            &page(vec![
                title_field("Post"),
                (
                    "Date",
                    PropertyTypeValue::Date {
                        date: Some(DateValue::starting("2024-03-01T09:15:00.000+09:00")),
                    },
                ),
            ]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(
            post.date.format("%Y-%m-%d %H:%M:%S %z").to_string(),
            "2024-03-01 09:15:00 +0900"
        );
    }

    #[test]
    fn missing_date_falls_back_to_now() {
        let post = PostDocument::assemble(
            &page(vec![title_field("Post")]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(post.date, fixed_now());
    }

    #[test]
    fn unparseable_date_falls_back_to_now() {
        let post = PostDocument::assemble(
            &page(vec![
                title_field("Post"),
                (
                    "Date",
                    PropertyTypeValue::Date {
                        date: Some(DateValue::starting("not-a-date")),
                    },
                ),
            ]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(post.date, fixed_now());
    }

    #[test]
    fn category_and_tags_default() {
        let post = PostDocument::assemble(
            &page(vec![title_field("Post")]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(post.category, "Blog");
        assert!(post.tags.is_empty());
    }

    #[test]
    fn explicit_category_and_tags_are_kept() {
        let post = PostDocument::assemble(
            &page(vec![
                title_field("Post"),
                (
                    "Category",
                    PropertyTypeValue::Select {
                        select: Some(SelectOption::named("Tech")),
                    },
                ),
                (
                    "Tags",
                    PropertyTypeValue::MultiSelect {
                        multi_select: vec![SelectOption::named("ai"), SelectOption::named("notes")],
                    },
                ),
            ]),
            String::new(),
            fixed_now(),
        );
        assert_eq!(post.category, "Tech");
        assert_eq!(post.tags, vec!["ai", "notes"]);
    }

    #[test]
    fn missing_title_yields_empty_title_and_slug() {
        let post = PostDocument::assemble(&page(vec![]), String::new(), fixed_now());
        assert_eq!(post.title, "");
        assert_eq!(post.slug.as_str(), "");
    }
}
