use std::path::PathBuf;
use std::time::Duration;

use crate::detail::fetch_job_details;
use crate::error::AppError;
use crate::listing::fetch_job_listings;
use crate::models::{JobDetail, Listing, ScrapeResult, SearchQuery, StopReason};
use crate::report::{ScrapeEvent, ScrapeReporter, TracingReporter};
use crate::traits::{JobApi, ResultStore};

/// Politeness delays between outbound requests.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Pause between listing pages.
    pub page_delay: Duration,
    /// Pause between detail requests (not after the last one).
    pub detail_delay: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_delay: Duration::from_millis(600),
            detail_delay: Duration::from_millis(800),
        }
    }
}

impl ScrapeConfig {
    /// No delays at all. Intended for tests and local mock servers.
    pub fn immediate() -> Self {
        Self {
            page_delay: Duration::ZERO,
            detail_delay: Duration::ZERO,
        }
    }
}

/// How a run ended. None of these are process-level failures.
#[derive(Debug)]
pub enum RunOutcome {
    /// Listing produced no URLs, either because the search is empty or
    /// because the first request failed.
    NoListings(StopReason),
    /// Every detail request failed.
    NoDetails { attempted: usize },
    Saved { path: PathBuf, count: usize },
    SaveFailed { count: usize, error: AppError },
}

/// Orchestrates a run: list → fetch details → save.
///
/// Generic over the remote API, the result store, and the progress reporter
/// so the whole pipeline can be exercised without network or disk.
pub struct ScrapeService<A, S, R = TracingReporter>
where
    A: JobApi,
    S: ResultStore,
    R: ScrapeReporter,
{
    api: A,
    store: S,
    reporter: R,
    config: ScrapeConfig,
}

impl<A, S> ScrapeService<A, S, TracingReporter>
where
    A: JobApi,
    S: ResultStore,
{
    /// Create a service with default delays that reports through `tracing`.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            reporter: TracingReporter,
            config: ScrapeConfig::default(),
        }
    }
}

impl<A, S, R> ScrapeService<A, S, R>
where
    A: JobApi,
    S: ResultStore,
    R: ScrapeReporter,
{
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_reporter<R2: ScrapeReporter>(self, reporter: R2) -> ScrapeService<A, S, R2> {
        ScrapeService {
            api: self.api,
            store: self.store,
            reporter,
            config: self.config,
        }
    }

    /// Collect unique listing URLs for the query.
    pub async fn fetch_listings(&self, query: &SearchQuery) -> Listing {
        fetch_job_listings(&self.api, query, self.config.page_delay).await
    }

    /// Fetch details for each URL in order, skipping the ones that fail.
    pub async fn fetch_details(&self, urls: &[String]) -> Vec<JobDetail> {
        let total = urls.len();
        let mut detailed = Vec::with_capacity(total);

        for (i, url) in urls.iter().enumerate() {
            let index = i + 1;
            self.reporter
                .report(ScrapeEvent::DetailStarted { index, total, url });

            match fetch_job_details(&self.api, url).await {
                Some(detail) => {
                    self.reporter.report(ScrapeEvent::DetailFetched {
                        index,
                        total,
                        title: &detail.title,
                    });
                    detailed.push(detail);
                }
                None => {
                    self.reporter
                        .report(ScrapeEvent::DetailFailed { index, total, url });
                }
            }

            if index < total && !self.config.detail_delay.is_zero() {
                tokio::time::sleep(self.config.detail_delay).await;
            }
        }

        detailed
    }

    /// Run the full pipeline for one search.
    ///
    /// 1. Page through listings collecting unique URLs
    /// 2. Fetch and extract details for each URL
    /// 3. Save the collected records, if any
    pub async fn run(&self, query: &SearchQuery) -> RunOutcome {
        let listing = self.fetch_listings(query).await;
        self.reporter.report(ScrapeEvent::ListingComplete {
            found: listing.urls.len(),
            stop: &listing.stop,
        });

        if listing.urls.is_empty() {
            return RunOutcome::NoListings(listing.stop);
        }

        tracing::info!(
            "Fetching detailed information for {} jobs...",
            listing.urls.len()
        );
        let detailed = self.fetch_details(&listing.urls).await;

        if detailed.is_empty() {
            return RunOutcome::NoDetails {
                attempted: listing.urls.len(),
            };
        }

        let count = detailed.len();
        tracing::info!("Saving {count} jobs to JSON file...");
        let result = ScrapeResult::new(query, detailed);

        match self.store.save(&result).await {
            Ok(path) => {
                self.reporter.report(ScrapeEvent::Saved { path: &path, count });
                RunOutcome::Saved { path, count }
            }
            Err(error) => {
                self.reporter
                    .report(ScrapeEvent::SaveFailed { count, error: &error });
                RunOutcome::SaveFailed { count, error }
            }
        }
    }
}
