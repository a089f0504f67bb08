// src/pipeline.rs
//! Pipeline capability traits and the sequential sync driver.
//!
//! Each trait describes a single stage (query, compose, deliver),
//! enabling testing each stage in isolation. The driver threads pages
//! through the stages one at a time, in query-result order; the first
//! error at any stage aborts the whole run.

use crate::api::{self, NotionRepository};
use crate::config::SyncConfig;
use crate::error::AppError;
use crate::markdown;
use crate::model::Page;
use crate::output::{PostWriter, WrittenPost};
use crate::post::PostDocument;
use crate::types::NotionId;
use chrono::{DateTime, FixedOffset, Local};

/// Retrieves the published pages to sync.
#[async_trait::async_trait]
pub trait PageSource {
    async fn fetch_published(&self) -> Result<Vec<Page>, AppError>;
}

/// Transforms one page into a PostDocument.
#[async_trait::async_trait]
pub trait PostComposer {
    async fn compose(&self, page: &Page) -> Result<PostDocument, AppError>;
}

/// Materializes a PostDocument on disk.
pub trait PostDelivery {
    fn deliver(&self, post: &PostDocument) -> Result<WrittenPost, AppError>;
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct SyncReport {
    pub written: Vec<WrittenPost>,
}

/// Runs the pipeline: query once, then extract → render → write per
/// page, strictly sequentially. Each write completes before the next
/// page is touched.
pub async fn run_sync<P>(pipeline: &P) -> Result<SyncReport, AppError>
where
    P: PageSource + PostComposer + PostDelivery,
{
    println!("⏳ Fetching published pages from Notion...");
    let pages = pipeline.fetch_published().await?;
    println!("Found {} published pages.", pages.len());

    let mut written = Vec::with_capacity(pages.len());
    for page in &pages {
        log::debug!("Processing page {}", page.id.as_str());
        let post = pipeline.compose(page).await?;
        written.push(pipeline.deliver(&post)?);
    }

    log::info!("Sync wrote {} post(s)", written.len());
    Ok(SyncReport { written })
}

/// The production pipeline: a Notion repository on one end, a posts
/// directory on the other.
///
/// Clients are constructed in the entry point and passed in by
/// reference, never held as an ambient singleton. The run timestamp is captured once
/// at construction so every date-defaulted post in a run agrees with
/// its own filename.
pub struct ChirpySync<'a> {
    repo: &'a dyn NotionRepository,
    config: &'a SyncConfig,
    writer: PostWriter,
    run_started: DateTime<FixedOffset>,
}

impl<'a> ChirpySync<'a> {
    pub fn new(repo: &'a dyn NotionRepository, config: &'a SyncConfig) -> Self {
        Self {
            repo,
            config,
            writer: PostWriter::new(&config.posts_dir, config.math),
            run_started: Local::now().fixed_offset(),
        }
    }

    /// Pins the fallback timestamp for deterministic runs in tests.
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn with_run_started(mut self, instant: DateTime<FixedOffset>) -> Self {
        self.run_started = instant;
        self
    }

    /// Creates the posts directory if missing. Must succeed before the
    /// query stage runs.
    pub fn prepare_output(&self) -> Result<(), AppError> {
        self.writer.ensure_posts_dir()
    }
}

#[async_trait::async_trait]
impl PageSource for ChirpySync<'_> {
    async fn fetch_published(&self) -> Result<Vec<Page>, AppError> {
        let data_source = api::resolve_data_source(self.repo, &self.config.database_id).await?;
        log::info!(
            "Querying data source {} ({})",
            data_source.id.as_str(),
            if data_source.name.is_empty() {
                "unnamed"
            } else {
                data_source.name.as_str()
            }
        );
        self.repo.query_published(&data_source.id).await
    }
}

#[async_trait::async_trait]
impl PostComposer for ChirpySync<'_> {
    async fn compose(&self, page: &Page) -> Result<PostDocument, AppError> {
        let blocks = api::fetch_block_tree(self.repo, &NotionId::from(&page.id)).await?;
        let body = markdown::render_page_body(&blocks)?;
        Ok(PostDocument::assemble(page, body, self.run_started))
    }
}

impl PostDelivery for ChirpySync<'_> {
    fn deliver(&self, post: &PostDocument) -> Result<WrittenPost, AppError> {
        self.writer.write(post)
    }
}
