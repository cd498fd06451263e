pub mod config;
pub mod detail;
pub mod error;
pub mod listing;
pub mod models;
pub mod normalize;
pub mod report;
pub mod scrape;
pub mod store;
pub mod traits;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::ScoutConfig;
pub use error::AppError;
pub use models::{JobDetail, Listing, ScrapeResult, SearchQuery, StopReason};
pub use normalize::normalize_job_url;
pub use scrape::{RunOutcome, ScrapeConfig, ScrapeService};
pub use store::JsonFileStore;
pub use traits::{JobApi, ResultStore};
pub use validate::validate_input;
