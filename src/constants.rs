// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

/// How many objects the Notion API returns per page of results.
///
/// The API maximum is 100. We use the maximum to minimize round-trips
/// when draining query and children cursors.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Maximum nesting depth when recursively fetching block children.
///
/// Notion bodies can nest arbitrarily deep (toggles within lists within
/// toggles). This limit prevents runaway fetches; 50 levels is far
/// deeper than any real page body.
pub const BLOCK_MAX_FETCH_DEPTH: u8 = 50;

/// Number of spaces per indentation level when rendering nested blocks.
pub const INDENT_SPACES: usize = 2;

/// Category assigned to posts whose `Category` field is absent.
pub const DEFAULT_CATEGORY: &str = "Blog";

/// Directory posts are written into when no override is given.
pub const DEFAULT_POSTS_DIR: &str = "_posts";

/// Estimated characters per block, used to pre-allocate output strings.
///
/// A performance hint, not a constraint. Over-estimating wastes a
/// little memory; under-estimating causes reallocation.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;
