// src/api/pagination.rs
//! Cursor-following pagination without BoxFuture.
//!
//! The source this tool replaces trusted a single response page; the
//! query and children fetches here follow continuation cursors to
//! exhaustion instead, preserving result order.

use super::responses::PaginatedResponse;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;

/// Collected result of draining a paginated endpoint.
#[derive(Debug)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    #[allow(dead_code)]
    pub total_fetched: usize,
}

/// Fetches all pages using async closures directly.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    T: Send + 'static,
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;

    loop {
        let response = fetch_fn(NOTION_API_PAGE_SIZE as u32, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor.clone();
        all_items.extend(response.results);

        if !has_more || cursor.is_none() {
            break;
        }
    }

    Ok(PaginationResult {
        total_fetched: all_items.len(),
        items: all_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(results: Vec<u32>, next: Option<&str>) -> PaginatedResponse<u32> {
        PaginatedResponse {
            object: "list".to_string(),
            has_more: next.is_some(),
            next_cursor: next.map(String::from),
            results,
        }
    }

    #[tokio::test]
    async fn follows_cursors_to_exhaustion_in_order() {
        let mut calls = 0;
        let result = fetch_all_pages(|_page_size, cursor| {
            calls += 1;
            let response = match cursor.as_deref() {
                None => page_of(vec![1, 2], Some("a")),
                Some("a") => page_of(vec![3], Some("b")),
                Some("b") => page_of(vec![4, 5], None),
                other => panic!("unexpected cursor {:?}", other),
            };
            async move { Ok(response) }
        })
        .await
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(result.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.total_fetched, 5);
    }

    #[tokio::test]
    async fn single_page_stops_immediately() {
        let result = fetch_all_pages(|_page_size, _cursor| async {
            Ok(page_of(vec![42], None))
        })
        .await
        .unwrap();
        assert_eq!(result.items, vec![42]);
    }
}
