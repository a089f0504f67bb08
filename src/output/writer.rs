// src/output/writer.rs
//! Executes post writes by performing actual I/O.
//!
//! This module is the only place where file I/O occurs, keeping the
//! rest of the codebase pure and testable.

use super::front_matter::render_front_matter;
use super::paths::post_path;
use crate::error::AppError;
use crate::post::PostDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// A post that has been materialized on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPost {
    pub path: PathBuf,
    #[allow(dead_code)] // Read by library consumers
    pub bytes_written: usize,
}

impl WrittenPost {
    /// The bare filename, for progress lines.
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Writes posts into a single output directory.
pub struct PostWriter {
    posts_dir: PathBuf,
    math: bool,
}

impl PostWriter {
    pub fn new(posts_dir: impl Into<PathBuf>, math: bool) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            math,
        }
    }

    /// Creates the posts directory if missing (recursively). Fails if
    /// the path exists but is not a directory.
    pub fn ensure_posts_dir(&self) -> Result<(), AppError> {
        ensure_directory(&self.posts_dir)
    }

    /// Writes one post, overwriting any existing file of the same name.
    /// The write completes (or fails) before the caller moves on.
    pub fn write(&self, post: &PostDocument) -> Result<WrittenPost, AppError> {
        let path = post_path(&self.posts_dir, post);
        let content = format!("{}{}", render_front_matter(post, self.math), post.body);

        log::debug!("Writing {} bytes to {}", content.len(), path.display());
        fs::write(&path, &content)?;

        let written = WrittenPost {
            bytes_written: content.len(),
            path,
        };

        log::info!("Wrote post file: {}", written.path.display());
        println!("✓ Wrote {}", written.filename());

        Ok(written)
    }
}

/// Creates a directory tree, tolerating an existing directory.
fn ensure_directory(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        if path.is_dir() {
            log::debug!("Directory already exists: {}", path.display());
            return Ok(());
        }
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", path.display()),
        )));
    }

    fs::create_dir_all(path)?;
    log::info!("Created directory: {}", path.display());
    Ok(())
}
