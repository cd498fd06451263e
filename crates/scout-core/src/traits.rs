use std::future::Future;
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::{ScrapeResult, SearchQuery};

/// Remote job-listing API.
///
/// Implementations only move bytes: they return the decoded JSON body and
/// leave interpretation of its (inconsistent) shape to the core.
pub trait JobApi: Send + Sync + Clone {
    /// Fetch one page of listing results starting at raw item offset `start`.
    fn listing_page(
        &self,
        query: &SearchQuery,
        start: usize,
    ) -> impl Future<Output = Result<serde_json::Value, AppError>> + Send;

    /// Fetch the detail record for an already-normalized job URL.
    fn job_detail(
        &self,
        job_url: &str,
    ) -> impl Future<Output = Result<serde_json::Value, AppError>> + Send;
}

/// Persists the collected results of a run.
pub trait ResultStore: Send + Sync + Clone {
    /// Write the result and return where it was stored.
    fn save(&self, result: &ScrapeResult) -> impl Future<Output = Result<PathBuf, AppError>> + Send;
}
