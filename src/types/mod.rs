// src/types/mod.rs
//! Domain types: newtyped IDs and validated values.

mod domain_types;
mod ids;
mod properties;

pub use domain_types::{ApiKey, PropertyName, Slug};
pub use ids::{BlockId, DataSourceId, DatabaseId, NotionId, PageId};
pub use properties::{
    AnnotationColor, Annotations, DateValue, EquationData, Link, RichTextItem, RichTextKind,
    SelectOption, TextData,
};

use thiserror::Error;

/// Validation failures for domain type construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid API key: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid Notion ID: {0}")]
    InvalidId(String),
}
