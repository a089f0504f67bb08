// src/lib.rs
//! notion2chirpy library — syncs published Notion database pages into
//! Chirpy-style Jekyll posts.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `SyncConfig`
//! - **Domain model** — `Page`, `PropertyTypeValue`, `Block`, etc.
//! - **Domain types** — `DatabaseId`, `ApiKey`, `Slug`, etc.
//! - **API client** — `NotionHttpClient`, `NotionRepository`
//! - **Conversion** — `extract`, `PostDocument`, `render_page_body`
//! - **Output** — `PostWriter`, `render_front_matter`, `post_filename`
//! - **Pipeline** — stage traits and the `run_sync` driver

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod error;
mod extract;
mod markdown;
mod model;
mod output;
mod pipeline;
mod post;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SyncConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockKind, DataSourceRef, DatabaseMeta, Page, PropertyTypeValue, PropertyValue,
    TextBlockContent, ToDoData,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, DataSourceId, DatabaseId, DateValue, NotionId, PageId,
    PropertyName, RichTextItem, RichTextKind, SelectOption, Slug,
};

// --- API Client ---
pub use crate::api::{resolve_data_source, fetch_block_tree, NotionHttpClient, NotionRepository};

// --- Conversion ---
pub use crate::extract::{extract, FieldValue};
pub use crate::markdown::{render_page_body, rich_text_to_markdown};
pub use crate::post::{parse_post_date, PostDocument};

// --- Output ---
pub use crate::output::{post_filename, post_path, render_front_matter, PostWriter, WrittenPost};

// --- Pipeline ---
pub use crate::pipeline::{
    run_sync, ChirpySync, PageSource, PostComposer, PostDelivery, SyncReport,
};
