// src/api/mod.rs
//! Notion API interaction — the ability to retrieve pages and blocks
//! from a workspace.
//!
//! Business logic depends on the `NotionRepository` trait, never on
//! HTTP details.

pub mod client;
mod pagination;
pub mod parser;
mod responses;

use crate::constants::BLOCK_MAX_FETCH_DEPTH;
use crate::error::AppError;
use crate::model::{Block, DataSourceRef, DatabaseMeta, Page};
use crate::types::{DataSourceId, DatabaseId, NotionId};
use futures::future::BoxFuture;
use futures::FutureExt;

pub use client::NotionHttpClient;
pub use responses::{PaginatedResponse, PublishedQuery};

/// The ability to retrieve content from a Notion workspace.
///
/// This is the fundamental algebra for API interaction: database
/// metadata, the published rows of a data source, and the child blocks
/// of a page or block.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    async fn retrieve_database(&self, id: &DatabaseId) -> Result<DatabaseMeta, AppError>;
    async fn query_published(&self, data_source: &DataSourceId) -> Result<Vec<Page>, AppError>;
    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError>;
}

#[async_trait::async_trait]
impl NotionRepository for NotionHttpClient {
    async fn retrieve_database(&self, id: &DatabaseId) -> Result<DatabaseMeta, AppError> {
        let endpoint = format!("databases/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = client::extract_response_text(response).await?;
        parser::parse_api_response(result)
    }

    async fn query_published(&self, data_source: &DataSourceId) -> Result<Vec<Page>, AppError> {
        let endpoint = format!("data_sources/{}/query", data_source.to_hyphenated());
        let client = self.clone();
        let pagination_result = pagination::fetch_all_pages(|page_size, cursor| {
            let client = client.clone();
            let endpoint = endpoint.clone();
            async move {
                let query = PublishedQuery::page(page_size, cursor);
                let response = client.post(&endpoint, &query).await?;
                let result = client::extract_response_text(response).await?;
                parser::parse_api_response::<PaginatedResponse<Page>>(result)
            }
        })
        .await?;
        Ok(pagination_result.items)
    }

    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        let base = format!("blocks/{}/children", parent.to_hyphenated());
        let client = self.clone();
        let pagination_result = pagination::fetch_all_pages(|page_size, cursor| {
            let client = client.clone();
            let endpoint = match &cursor {
                Some(cursor) => format!("{}?page_size={}&start_cursor={}", base, page_size, cursor),
                None => format!("{}?page_size={}", base, page_size),
            };
            async move {
                let response = client.get(&endpoint).await?;
                let result = client::extract_response_text(response).await?;
                parser::parse_api_response::<PaginatedResponse<Block>>(result)
            }
        })
        .await?;
        Ok(pagination_result.items)
    }
}

/// Resolves the database's default data source: the first entry of its
/// data-source list, or a configuration error if the list is empty.
pub async fn resolve_data_source(
    repo: &dyn NotionRepository,
    database: &DatabaseId,
) -> Result<DataSourceRef, AppError> {
    let meta = repo.retrieve_database(database).await?;

    meta.default_data_source()
        .cloned()
        .ok_or_else(|| AppError::MissingDataSource {
            database: database.as_str().to_string(),
        })
}

/// Fetches a page's block tree: the top-level children plus, for every
/// block flagged `has_children`, its descendants (depth-capped).
pub async fn fetch_block_tree(
    repo: &dyn NotionRepository,
    parent: &NotionId,
) -> Result<Vec<Block>, AppError> {
    fetch_level(repo, parent.clone(), 0).await
}

fn fetch_level(
    repo: &dyn NotionRepository,
    parent: NotionId,
    depth: u8,
) -> BoxFuture<'_, Result<Vec<Block>, AppError>> {
    async move {
        let mut blocks = repo.retrieve_children(&parent).await?;

        if depth >= BLOCK_MAX_FETCH_DEPTH {
            log::warn!(
                "Reached block fetch depth {} under {}; deeper content is dropped",
                depth,
                parent.as_str()
            );
            return Ok(blocks);
        }

        for block in &mut blocks {
            if block.has_children {
                block.children =
                    fetch_level(repo, NotionId::from(&block.id), depth + 1).await?;
            }
        }

        Ok(blocks)
    }
    .boxed()
}
