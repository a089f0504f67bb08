// src/extract.rs
//! Typed property extraction.
//!
//! `extract` is the only place that understands the property union.
//! Absence is represented as `None` and handled by the caller via
//! defaulting; a missing or oddly-shaped field never raises an error.

use crate::model::{Page, PropertyTypeValue};
use crate::types::RichTextItem;

/// The value a recognized property extracts to.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain text of a title or rich_text field's first run.
    Text(String),
    /// The raw ISO start string of a date field.
    Date(String),
    /// Multi-select option labels, in source order.
    Labels(Vec<String>),
    /// A single select option label.
    Label(String),
}

impl FieldValue {
    /// The text payload, if this is a `Text` value.
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The date string payload, if this is a `Date` value.
    pub fn into_date(self) -> Option<String> {
        match self {
            FieldValue::Date(date) => Some(date),
            _ => None,
        }
    }

    /// The label list payload, if this is a `Labels` value.
    pub fn into_labels(self) -> Option<Vec<String>> {
        match self {
            FieldValue::Labels(labels) => Some(labels),
            _ => None,
        }
    }

    /// The single label payload, if this is a `Label` value.
    pub fn into_label(self) -> Option<String> {
        match self {
            FieldValue::Label(label) => Some(label),
            _ => None,
        }
    }
}

/// Reads a named field off a page with per-type extraction rules:
///
/// - title / rich_text → plain text of the first run, or empty string
///   if there are no runs
/// - date → the start string, or `None` if the date itself is unset
/// - multi_select → option labels in source order (possibly empty)
/// - select → the option label, or `None` if unset
/// - any other type, or field missing entirely → `None`
pub fn extract(page: &Page, name: &str) -> Option<FieldValue> {
    let property = page.property(name)?;

    match &property.type_specific_value {
        PropertyTypeValue::Title { title } => Some(FieldValue::Text(first_run_text(title))),
        PropertyTypeValue::RichText { rich_text } => {
            Some(FieldValue::Text(first_run_text(rich_text)))
        }
        PropertyTypeValue::Date { date } => date
            .as_ref()
            .map(|d| FieldValue::Date(d.start.clone())),
        PropertyTypeValue::MultiSelect { multi_select } => Some(FieldValue::Labels(
            multi_select.iter().map(|option| option.name.clone()).collect(),
        )),
        PropertyTypeValue::Select { select } => select
            .as_ref()
            .map(|option| FieldValue::Label(option.name.clone())),
        PropertyTypeValue::Unrecognized => None,
    }
}

fn first_run_text(runs: &[RichTextItem]) -> String {
    runs.first()
        .map(|run| run.plain_text.clone())
        .unwrap_or_default()
}
