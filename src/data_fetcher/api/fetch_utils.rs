//! JSON request helpers with status code error mapping
//!
//! No retries and no caching: one call is one HTTP request.

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// GETs `url` and parses the JSON body into `T`.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");
    let response = send(client.get(url), url).await?;
    parse_body(response, url).await
}

/// POSTs `body` as JSON to `url`.
///
/// Success is decided by the status code alone; the raw response body is
/// returned for the caller to inspect.
#[instrument(skip(client, body))]
pub(super) async fn post<B>(client: &Client, url: &str, body: &B) -> Result<String, AppError>
where
    B: Serialize + ?Sized,
{
    info!("Posting data to URL: {url}");
    let response = send(client.post(url).json(body), url).await?;
    response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })
}

async fn send(request: RequestBuilder, url: &str) -> Result<Response, AppError> {
    let response = request.send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if status.is_success() {
        return Ok(response);
    }

    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    // The body is only read for its error detail; a failed read keeps the reason phrase.
    let body = response.text().await.unwrap_or_default();
    let message = extract_error_detail(&body).unwrap_or_else(|| reason.to_string());

    error!("HTTP {} - {} (URL: {})", status_code, message, url);

    Err(match status_code {
        404 => AppError::api_not_found(url),
        400..=499 => AppError::api_client_error(status_code, message, url),
        _ => AppError::api_server_error(status_code, message, url),
    })
}

async fn parse_body<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, AppError> {
    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_malformed_json("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::ApiParse(e)
        }
    })
}

/// Pulls the human readable message out of an error body.
///
/// The API reports errors as `{"detail": "..."}`, or for rejected request
/// bodies as `{"detail": [{"msg": "..."}, ...]}`.
pub(super) fn extract_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
