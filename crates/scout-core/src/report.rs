use std::path::Path;

use crate::error::AppError;
use crate::models::StopReason;

/// Progress events emitted while a run processes its listing URLs.
#[derive(Debug, Clone)]
pub enum ScrapeEvent<'a> {
    ListingComplete {
        found: usize,
        stop: &'a StopReason,
    },
    DetailStarted {
        index: usize,
        total: usize,
        url: &'a str,
    },
    DetailFetched {
        index: usize,
        total: usize,
        title: &'a str,
    },
    DetailFailed {
        index: usize,
        total: usize,
        url: &'a str,
    },
    Saved {
        path: &'a Path,
        count: usize,
    },
    SaveFailed {
        count: usize,
        error: &'a AppError,
    },
}

/// Trait for receiving progress events (decoupled logging).
pub trait ScrapeReporter: Send + Sync {
    fn report(&self, event: ScrapeEvent<'_>) {
        let _ = event;
    }
}

/// Reporter that uses the `tracing` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ScrapeReporter for TracingReporter {
    fn report(&self, event: ScrapeEvent<'_>) {
        match event {
            ScrapeEvent::ListingComplete { found, stop } => {
                tracing::info!(%found, %stop, "Found {found} job URLs (unique)");
            }
            ScrapeEvent::DetailStarted { index, total, url } => {
                tracing::info!(%url, "Processing job {index}/{total}...");
            }
            ScrapeEvent::DetailFetched { title, .. } => {
                let title = if title.is_empty() { "(no title)" } else { title };
                tracing::info!("✓ {title}");
            }
            ScrapeEvent::DetailFailed { url, .. } => {
                tracing::warn!(%url, "✗ Failed to fetch job details");
            }
            ScrapeEvent::Saved { path, count } => {
                tracing::info!(path = %path.display(), "✓ Successfully saved {count} jobs");
            }
            ScrapeEvent::SaveFailed { count, error } => {
                tracing::error!(%error, "✗ Failed to save {count} jobs to file");
            }
        }
    }
}
