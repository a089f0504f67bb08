// src/output/paths.rs
//! Pure filename and path calculations without any I/O.

use crate::post::PostDocument;
use std::path::{Path, PathBuf};

/// Date format used for the filename prefix.
pub const FILENAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// Computes the Jekyll post filename: `<YYYY-MM-DD>-<slug>.md`.
///
/// Derived solely from the post's date and slug; two posts yielding the
/// same pair collide, and the later write wins.
pub fn post_filename(post: &PostDocument) -> String {
    format!(
        "{}-{}.md",
        post.date.format(FILENAME_DATE_FORMAT),
        post.slug
    )
}

/// Resolves the full output path inside the posts directory.
pub fn post_path(posts_dir: &Path, post: &PostDocument) -> PathBuf {
    posts_dir.join(post_filename(post))
}
