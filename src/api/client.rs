//! HTTP API Client
//!
//! Typed functions for the Trackboard REST API, resolved against a
//! configurable backend origin.

use futures::future::join_all;
use gloo_net::http::{Request, Response};
use std::future::Future;

use crate::api::error::{ApiError, ApiResult};
use crate::dates;
use crate::models::{Dataset, Entry, NewEntry};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("trackboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Resolve a request path against a base origin. Absolute URLs pass
/// through untouched; relative paths get a leading slash.
pub fn join(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

fn url(path: &str) -> String {
    join(&get_api_base(), path)
}

/// Log a raw API error to the console; the caller alerts the user with
/// a catalog message instead.
pub fn log_error(context: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}

/// Which entry collection a graph shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    /// Recorded entries only
    Actual,
    /// Recorded entries plus a projection toward the target value
    Target,
    /// Recorded entries plus a projection until the end date
    EndDate,
}

impl GraphKind {
    fn path(&self, dataset_id: i64) -> String {
        match self {
            GraphKind::Actual => format!("/datasets/{}/entries", dataset_id),
            GraphKind::Target => format!("/datasets/{}/entries/projected/target", dataset_id),
            GraphKind::EndDate => format!("/datasets/{}/entries/projected/endDate", dataset_id),
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            GraphKind::Actual => crate::messages::HEADER_GRAPH_ACTUAL,
            GraphKind::Target => crate::messages::HEADER_GRAPH_TARGET,
            GraphKind::EndDate => crate::messages::HEADER_GRAPH_END_DATE,
        }
    }
}

// ============ Dataset Calls ============

/// Fetch all datasets (sidebar listing)
pub async fn fetch_datasets() -> ApiResult<Vec<Dataset>> {
    let response = Request::get(&url("/datasets"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_json(response).await
}

/// Fetch a single dataset
pub async fn fetch_dataset(id: i64) -> ApiResult<Dataset> {
    let response = Request::get(&url(&format!("/datasets/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_json(response).await
}

/// Create a dataset; the API echoes it back with the assigned id
pub async fn create_dataset(dataset: &Dataset) -> ApiResult<Dataset> {
    let response = Request::post(&url("/datasets"))
        .json(dataset)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_json(response).await
}

/// Update a dataset (API answers 204 No Content)
pub async fn update_dataset(id: i64, dataset: &Dataset) -> ApiResult<()> {
    let response = Request::put(&url(&format!("/datasets/{}", id)))
        .json(dataset)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    expect_ok(response).await
}

/// Delete a dataset and all its entries
pub async fn delete_dataset(id: i64) -> ApiResult<()> {
    let response = Request::delete(&url(&format!("/datasets/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    expect_ok(response).await
}

// ============ Entry Calls ============

/// Fetch the recorded entries of a dataset
pub async fn fetch_entries(dataset_id: i64) -> ApiResult<Vec<Entry>> {
    fetch_graph_entries(dataset_id, GraphKind::Actual).await
}

/// Fetch the entry collection behind a graph: recorded rows, or recorded
/// rows plus server-computed projections
pub async fn fetch_graph_entries(dataset_id: i64, kind: GraphKind) -> ApiResult<Vec<Entry>> {
    let response = Request::get(&url(&kind.path(dataset_id)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_json(response).await
}

/// Create an entry; the API echoes it back with the assigned id
pub async fn create_entry(dataset_id: i64, entry: &NewEntry) -> ApiResult<Entry> {
    let response = Request::post(&url(&format!("/datasets/{}/entries", dataset_id)))
        .json(entry)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_json(response).await
}

/// Update an entry (API answers 204 No Content)
pub async fn update_entry(entry: &Entry) -> ApiResult<()> {
    let response = Request::put(&url(&format!("/entries/{}", entry.id)))
        .json(entry)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    expect_ok(response).await
}

/// Delete an entry
pub async fn delete_entry(id: i64) -> ApiResult<()> {
    let response = Request::delete(&url(&format!("/entries/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    expect_ok(response).await
}

// ============ Fan-out ============

/// Tally of a fan-out of independent calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FanOutTally {
    pub succeeded: usize,
    pub total: usize,
}

impl FanOutTally {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Run independent calls concurrently and count successes. A failed
/// branch never aborts its siblings; the tally is produced exactly once,
/// after every branch has settled.
pub async fn settle_all<T, E, F>(calls: Vec<F>) -> FanOutTally
where
    F: Future<Output = Result<T, E>>,
{
    let total = calls.len();
    let results = join_all(calls).await;
    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    FanOutTally { succeeded, total }
}

/// Copy every entry of one dataset into another, one create per entry.
/// Branch failures are logged and tolerated; the tally reports how many
/// made it.
pub async fn copy_entries(source_id: i64, target_id: i64) -> ApiResult<FanOutTally> {
    let entries = fetch_entries(source_id).await?;

    let calls: Vec<_> = entries
        .into_iter()
        .map(|entry| {
            let payload = NewEntry {
                value: entry.value,
                label: entry.label,
                date: if entry.date.is_empty() {
                    None
                } else {
                    Some(dates::to_iso_utc(&entry.date))
                },
            };
            async move {
                create_entry(target_id, &payload).await.map_err(|e| {
                    log_error("copy entry", &e);
                    e
                })
            }
        })
        .collect();

    Ok(settle_all(calls).await)
}

// ============ Response Handling ============

async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_ok(response: Response) -> ApiResult<()> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    Ok(())
}

/// The backend reports failures as plain-text bodies.
async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http {
        status,
        body: body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_paths() {
        let base = "http://localhost:8080";
        assert_eq!(join(base, ""), "http://localhost:8080");
        assert_eq!(join(base, "/datasets"), "http://localhost:8080/datasets");
        assert_eq!(join(base, "datasets/7"), "http://localhost:8080/datasets/7");
        assert_eq!(join(base, "https://elsewhere/x"), "https://elsewhere/x");
    }

    #[test]
    fn test_graph_kind_paths() {
        assert_eq!(GraphKind::Actual.path(7), "/datasets/7/entries");
        assert_eq!(
            GraphKind::Target.path(7),
            "/datasets/7/entries/projected/target"
        );
        assert_eq!(
            GraphKind::EndDate.path(7),
            "/datasets/7/entries/projected/endDate"
        );
    }

    async fn attempt(result: Result<i32, &'static str>) -> Result<i32, &'static str> {
        result
    }

    #[test]
    fn test_settle_all_tolerates_failed_branches() {
        let calls = vec![attempt(Ok(1)), attempt(Err("boom")), attempt(Ok(3))];
        let tally = futures::executor::block_on(settle_all(calls));

        assert_eq!(tally.total, 3);
        assert_eq!(tally.succeeded, 2);
        assert!(!tally.all_succeeded());
    }

    #[test]
    fn test_settle_all_empty_fan_out() {
        let calls: Vec<_> = Vec::<Result<i32, &'static str>>::new()
            .into_iter()
            .map(attempt)
            .collect();
        let tally = futures::executor::block_on(settle_all(calls));

        assert_eq!(tally.total, 0);
        assert!(tally.all_succeeded());
    }
}
