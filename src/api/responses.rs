// src/api/responses.rs
//! Wire types for Notion API responses and query bodies.

use serde::{Deserialize, Serialize};

/// Generic paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Error body the API returns on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionError {
    #[serde(default)]
    pub status: u32,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Query body for a data-source query: the fixed published filter plus
/// pagination fields.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedQuery {
    pub filter: PublishedFilter,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl PublishedQuery {
    pub fn page(page_size: u32, start_cursor: Option<String>) -> Self {
        Self {
            filter: PublishedFilter::default(),
            page_size,
            start_cursor,
        }
    }
}

/// The filter predicate this tool queries with: `Published` checkbox
/// equals true.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedFilter {
    pub property: &'static str,
    pub checkbox: CheckboxCondition,
}

impl Default for PublishedFilter {
    fn default() -> Self {
        Self {
            property: "Published",
            checkbox: CheckboxCondition { equals: true },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckboxCondition {
    pub equals: bool,
}
