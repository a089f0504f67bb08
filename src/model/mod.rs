// src/model/mod.rs
//! Domain model for the objects this tool consumes: pages with typed
//! properties, database metadata with its data sources, and body blocks.

mod block;
mod property_value;

pub use block::{
    Block, BlockKind, BookmarkData, CodeData, ExternalFile, FileObject, HostedFile, ImageData,
    TextBlockContent, ToDoData,
};
pub use property_value::{PropertyTypeValue, PropertyValue};

use crate::types::{DataSourceId, DatabaseId, PageId, PropertyName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One document from the remote database: a stable identifier plus a
/// mapping from field name to typed property value. Read-only, fetched
/// fresh each run, discarded after its markdown file is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub archived: bool,
    pub properties: HashMap<PropertyName, PropertyValue>,
}

impl Page {
    /// Look up a property value by field name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// Database metadata. The current API generation puts the queryable
/// collection behind one or more data sources; the first entry is the
/// default one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseMeta {
    pub id: DatabaseId,
    #[serde(default)]
    pub data_sources: Vec<DataSourceRef>,
}

impl DatabaseMeta {
    /// The database's default data source, if it has one.
    pub fn default_data_source(&self) -> Option<&DataSourceRef> {
        self.data_sources.first()
    }
}

/// Reference to a queryable data source inside a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceRef {
    pub id: DataSourceId,
    #[serde(default)]
    pub name: String,
}
