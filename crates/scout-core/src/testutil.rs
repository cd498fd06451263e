//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::{DEFAULT_DOMAIN, ScrapeResult, SearchQuery};
use crate::report::{ScrapeEvent, ScrapeReporter};
use crate::traits::{JobApi, ResultStore};

/// Query used across tests; `limit` is the only knob that matters.
pub fn test_query(limit: Option<usize>) -> SearchQuery {
    SearchQuery {
        job_title: "Machine Learning Engineer".into(),
        location: "Dhaka, Bangladesh".into(),
        limit,
        domain: DEFAULT_DOMAIN.into(),
    }
}

/// A listing response body holding one item per URL.
pub fn listing_body(urls: &[&str]) -> Value {
    let jobs: Vec<Value> = urls.iter().map(|u| json!({ "url": u })).collect();
    json!({ "jobs": jobs })
}

// ---------------------------------------------------------------------------
// MockJobApi
// ---------------------------------------------------------------------------

type Responses = Arc<Mutex<Vec<Result<Value, AppError>>>>;

/// Mock API with queued listing and detail responses.
///
/// Each call pops the first queued response. An exhausted listing queue
/// returns an empty page; an exhausted detail queue returns a minimal record.
#[derive(Clone, Default)]
pub struct MockJobApi {
    listing_pages: Responses,
    details: Responses,
    listing_calls: Arc<Mutex<Vec<usize>>>,
    detail_calls: Arc<Mutex<Vec<String>>>,
}

impl MockJobApi {
    pub fn new(
        listing_pages: Vec<Result<Value, AppError>>,
        details: Vec<Result<Value, AppError>>,
    ) -> Self {
        Self {
            listing_pages: Arc::new(Mutex::new(listing_pages)),
            details: Arc::new(Mutex::new(details)),
            ..Default::default()
        }
    }

    pub fn with_listing_pages(pages: Vec<Result<Value, AppError>>) -> Self {
        Self::new(pages, vec![])
    }

    pub fn with_details(details: Vec<Result<Value, AppError>>) -> Self {
        Self::new(vec![], details)
    }

    /// `start` offsets of every listing request, in call order.
    pub fn listing_starts(&self) -> Vec<usize> {
        self.listing_calls.lock().unwrap().clone()
    }

    /// URLs passed to every detail request, in call order.
    pub fn detail_urls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

impl JobApi for MockJobApi {
    async fn listing_page(&self, _query: &SearchQuery, start: usize) -> Result<Value, AppError> {
        self.listing_calls.lock().unwrap().push(start);
        let mut pages = self.listing_pages.lock().unwrap();
        if pages.is_empty() {
            Ok(json!({ "jobs": [] }))
        } else {
            pages.remove(0)
        }
    }

    async fn job_detail(&self, job_url: &str) -> Result<Value, AppError> {
        self.detail_calls.lock().unwrap().push(job_url.to_string());
        let mut details = self.details.lock().unwrap();
        if details.is_empty() {
            Ok(json!({ "title": "default" }))
        } else {
            details.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockStore
// ---------------------------------------------------------------------------

/// Mock store that records saved results in memory.
#[derive(Clone)]
pub struct MockStore {
    pub saved: Arc<Mutex<Vec<ScrapeResult>>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MockStore {
    pub fn ok() -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// Store whose first save fails with `error`.
    pub fn with_error(error: AppError) -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(Some(error))),
        }
    }
}

impl ResultStore for MockStore {
    async fn save(&self, result: &ScrapeResult) -> Result<PathBuf, AppError> {
        if let Some(e) = self.error.lock().unwrap().take() {
            return Err(e);
        }
        self.saved.lock().unwrap().push(result.clone());
        Ok(PathBuf::from("mock.json"))
    }
}

// ---------------------------------------------------------------------------
// RecordingReporter
// ---------------------------------------------------------------------------

/// Reporter that flattens events into short strings for assertions.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ScrapeReporter for RecordingReporter {
    fn report(&self, event: ScrapeEvent<'_>) {
        let line = match event {
            ScrapeEvent::ListingComplete { found, stop } => format!("listing:{found}:{stop}"),
            ScrapeEvent::DetailStarted { index, total, .. } => format!("start:{index}/{total}"),
            ScrapeEvent::DetailFetched {
                index,
                total,
                title,
            } => format!("ok:{index}/{total}:{title}"),
            ScrapeEvent::DetailFailed { index, total, .. } => format!("fail:{index}/{total}"),
            ScrapeEvent::Saved { count, .. } => format!("saved:{count}"),
            ScrapeEvent::SaveFailed { count, .. } => format!("save_failed:{count}"),
        };
        self.events.lock().unwrap().push(line);
    }
}
