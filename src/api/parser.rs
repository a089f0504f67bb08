// src/api/parser.rs
//! Response parsing and API error mapping.

use super::client::ApiResponse;
use super::responses::NotionError;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;

/// Parse any Notion API response body into `T`, mapping non-2xx
/// responses to `AppError::NotionService`.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > 500 {
            format!("{}...", &body[..500])
        } else {
            body.to_string()
        };

        AppError::MalformedResponse(format!("{} (body: {})", e, preview))
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    // The API error body carries a structured code; fall back to the
    // HTTP status when the body is unparseable.
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
        };
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;

    fn response(body: &str, status: StatusCode) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/test".to_string(),
        }
    }

    #[test]
    fn maps_structured_error_body() {
        let body = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page with ID: abc123",
            "request_id": "req_123"
        }"#;

        let result: Result<Page, _> =
            parse_api_response(response(body, StatusCode::NOT_FOUND));

        match result {
            Err(AppError::NotionService { code, .. }) => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound)
            }
            other => panic!("expected NotionService error, got {:?}", other.err()),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_http_status() {
        let result: Result<Page, _> =
            parse_api_response(response("<html>gateway</html>", StatusCode::BAD_GATEWAY));

        match result {
            Err(AppError::NotionService { code, .. }) => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502))
            }
            other => panic!("expected NotionService error, got {:?}", other.err()),
        }
    }

    #[test]
    fn malformed_success_body_is_reported() {
        let result: Result<Page, _> = parse_api_response(response("not json", StatusCode::OK));
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }
}
