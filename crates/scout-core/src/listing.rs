use std::collections::HashSet;
use std::time::Duration;

use serde_json::Value;

use crate::models::{Listing, SearchQuery, StopReason};
use crate::traits::JobApi;

/// One decoded page of the listing search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Number of items the source returned, including ones without a URL.
    /// The pagination cursor advances by this, not by the unique count.
    pub raw_count: usize,
    /// Non-empty `url` fields in page order, duplicates included.
    pub urls: Vec<String>,
}

impl ListingPage {
    /// Read the `jobs` array of a listing response. A missing or non-array
    /// `jobs` decodes as an empty page.
    pub fn from_response(body: &Value) -> Self {
        let Some(jobs) = body.get("jobs").and_then(Value::as_array) else {
            return Self::default();
        };

        let urls = jobs
            .iter()
            .filter_map(|job| job.get("url").and_then(Value::as_str))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            raw_count: jobs.len(),
            urls,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw_count == 0
    }
}

/// Page through the listing endpoint collecting unique job URLs.
///
/// Stops on an empty page, on the first failed request, or once `query.limit`
/// URLs are held. Failures end pagination but keep what was collected; they
/// are reported through [`StopReason::Failed`] rather than as an error.
pub async fn fetch_job_listings<A: JobApi>(
    api: &A,
    query: &SearchQuery,
    page_delay: Duration,
) -> Listing {
    let mut collected: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut start = 0usize;
    let mut page_idx = 1usize;

    let stop = loop {
        tracing::info!("Fetching page {page_idx} of listings (start={start})...");

        let body = match api.listing_page(query, start).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Listing request failed; stopping.");
                break StopReason::Failed(e.to_string());
            }
        };

        let page = ListingPage::from_response(&body);
        if page.is_empty() {
            tracing::info!("No more jobs returned; pagination complete.");
            break StopReason::Exhausted;
        }

        let mut new_count = 0usize;
        for url in page.urls {
            if seen.insert(url.clone()) {
                collected.push(url);
                new_count += 1;
            }
        }

        tracing::info!(
            "  Received {} items, {} new; total unique so far: {}",
            page.raw_count,
            new_count,
            collected.len()
        );

        if let Some(limit) = query.limit {
            if collected.len() >= limit {
                collected.truncate(limit);
                tracing::info!("Reached limit={limit}; stopping pagination.");
                break StopReason::LimitReached;
            }
        }

        start += page.raw_count;
        page_idx += 1;

        if !page_delay.is_zero() {
            tokio::time::sleep(page_delay).await;
        }
    };

    Listing {
        urls: collected,
        stop,
    }
}
