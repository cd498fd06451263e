use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOMAIN: &str = "www.indeed.com";

/// Validated search parameters for one run.
///
/// Build it through [`validate_input`](crate::validate::validate_input) so the
/// title and location are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub job_title: String,
    pub location: String,
    /// Hard cap on the number of listing URLs kept. `None` paginates until exhausted.
    pub limit: Option<usize>,
    /// Indeed domain the listing search runs against.
    pub domain: String,
}

impl SearchQuery {
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}

/// Fields extracted for a single job posting.
///
/// Every field is always present; missing data is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Canonical detail-page URL the record was fetched from.
    pub url: String,
    /// URL as discovered on the listing page.
    pub source_url: String,
}

/// Why listing pagination ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The source returned an empty page.
    Exhausted,
    /// The configured limit was reached.
    LimitReached,
    /// A request failed; results collected so far are kept.
    Failed(String),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted => write!(f, "exhausted"),
            StopReason::LimitReached => write!(f, "limit reached"),
            StopReason::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

/// Unique listing URLs in first-seen order, plus how pagination ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub urls: Vec<String>,
    pub stop: StopReason,
}

/// Collected detail records for one search, ready to be written.
#[derive(Debug, Clone)]
pub struct ScrapeResult {
    pub job_title: String,
    pub location: String,
    pub timestamp: DateTime<Local>,
    pub jobs: Vec<JobDetail>,
}

impl ScrapeResult {
    pub fn new(query: &SearchQuery, jobs: Vec<JobDetail>) -> Self {
        Self {
            job_title: query.job_title.clone(),
            location: query.location.clone(),
            timestamp: Local::now(),
            jobs,
        }
    }

    /// The on-disk JSON envelope for this result.
    pub fn document(&self) -> ResultDocument<'_> {
        ResultDocument {
            metadata: ResultMetadata {
                search_job_title: format!("{}_detailed", self.job_title),
                search_location: &self.location,
                timestamp: self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                total_jobs: self.jobs.len(),
            },
            data: ResultData { job: &self.jobs },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultDocument<'a> {
    pub metadata: ResultMetadata<'a>,
    pub data: ResultData<'a>,
}

#[derive(Debug, Serialize)]
pub struct ResultMetadata<'a> {
    pub search_job_title: String,
    pub search_location: &'a str,
    pub timestamp: String,
    pub total_jobs: usize,
}

#[derive(Debug, Serialize)]
pub struct ResultData<'a> {
    pub job: &'a [JobDetail],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> SearchQuery {
        SearchQuery {
            job_title: "Rust Developer".into(),
            location: "Berlin".into(),
            limit: None,
            domain: DEFAULT_DOMAIN.into(),
        }
    }

    #[test]
    fn document_envelope_shape() {
        let job = JobDetail {
            title: "Backend Engineer".into(),
            ..Default::default()
        };
        let result = ScrapeResult::new(&query(), vec![job]);
        let json = serde_json::to_value(result.document()).unwrap();

        assert_eq!(json["metadata"]["search_job_title"], "Rust Developer_detailed");
        assert_eq!(json["metadata"]["search_location"], "Berlin");
        assert_eq!(json["metadata"]["total_jobs"], 1);
        assert_eq!(json["data"]["job"][0]["title"], "Backend Engineer");
        assert_eq!(json["data"]["job"][0]["company"], "");
    }

    #[test]
    fn metadata_timestamp_is_iso8601() {
        let result = ScrapeResult::new(&query(), vec![]);
        let doc = result.document();
        assert!(
            chrono::NaiveDateTime::parse_from_str(&doc.metadata.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .is_ok(),
            "unexpected timestamp: {}",
            doc.metadata.timestamp
        );
    }

    #[test]
    fn with_domain_overrides_default() {
        let q = query().with_domain("uk.indeed.com");
        assert_eq!(q.domain, "uk.indeed.com");
    }
}
