// src/model/property_value.rs
use crate::types::{DateValue, RichTextItem, SelectOption};
use serde::{Deserialize, Serialize};

/// Property value — wraps a typed value with its property ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub type_specific_value: PropertyTypeValue,
}

impl PropertyValue {
    /// Wrap a typed value with an empty property ID (fixture shorthand).
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn of(value: PropertyTypeValue) -> Self {
        Self {
            id: String::new(),
            type_specific_value: value,
        }
    }

    /// Returns the Notion API type name for this property value.
    #[allow(dead_code)]
    pub fn type_name(&self) -> &'static str {
        match &self.type_specific_value {
            PropertyTypeValue::Title { .. } => "title",
            PropertyTypeValue::RichText { .. } => "rich_text",
            PropertyTypeValue::Date { .. } => "date",
            PropertyTypeValue::MultiSelect { .. } => "multi_select",
            PropertyTypeValue::Select { .. } => "select",
            PropertyTypeValue::Unrecognized => "unrecognized",
        }
    }
}

/// The recognized property kinds, dispatched on the API's `type` tag.
///
/// Anything the extraction rules don't cover (checkbox, number, people,
/// formula, and whatever the API grows next) lands in `Unrecognized`
/// and extracts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyTypeValue {
    Title {
        title: Vec<RichTextItem>,
    },
    RichText {
        rich_text: Vec<RichTextItem>,
    },
    Date {
        date: Option<DateValue>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Select {
        select: Option<SelectOption>,
    },
    #[serde(other)]
    Unrecognized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_property_from_api_shape() {
        let json = r#"{
            "id": "title",
            "type": "title",
            "title": [{
                "type": "text",
                "text": { "content": "Hello World", "link": null },
                "plain_text": "Hello World",
                "href": null
            }]
        }"#;

        let value: PropertyValue = serde_json::from_str(json).unwrap();
        assert_eq!(value.type_name(), "title");
        match value.type_specific_value {
            PropertyTypeValue::Title { title } => {
                assert_eq!(title[0].plain_text, "Hello World")
            }
            other => panic!("expected title, got {:?}", other),
        }
    }

    #[test]
    fn parses_unset_date_property() {
        let json = r#"{ "id": "abc", "type": "date", "date": null }"#;
        let value: PropertyValue = serde_json::from_str(json).unwrap();
        assert_eq!(
            value.type_specific_value,
            PropertyTypeValue::Date { date: None }
        );
    }

    #[test]
    fn parses_multi_select_in_source_order() {
        let json = r#"{
            "id": "abc",
            "type": "multi_select",
            "multi_select": [
                { "id": "1", "name": "ai", "color": "blue" },
                { "id": "2", "name": "notes", "color": "red" }
            ]
        }"#;
        let value: PropertyValue = serde_json::from_str(json).unwrap();
        match value.type_specific_value {
            PropertyTypeValue::MultiSelect { multi_select } => {
                let names: Vec<&str> = multi_select.iter().map(|o| o.name.as_str()).collect();
                assert_eq!(names, vec!["ai", "notes"]);
            }
            other => panic!("expected multi_select, got {:?}", other),
        }
    }

    #[test]
    fn unknown_property_type_is_unrecognized() {
        let json = r#"{ "id": "abc", "type": "checkbox", "checkbox": true }"#;
        let value: PropertyValue = serde_json::from_str(json).unwrap();
        assert_eq!(
            value.type_specific_value,
            PropertyTypeValue::Unrecognized
        );
    }
}
