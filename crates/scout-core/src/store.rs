use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::ScrapeResult;
use crate::traits::ResultStore;

const FILE_PREFIX: &str = "indeed_jobs";

/// Writes each run to a timestamped, pretty-printed JSON file.
///
/// Files are named `indeed_jobs_<title>_<location>_<YYYYMMDD_HHMMSS>.json`
/// under `output_dir`, which is created on first use.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    output_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Target path for a result, without touching the filesystem.
    pub fn path_for(&self, result: &ScrapeResult) -> PathBuf {
        let filename = format!(
            "{FILE_PREFIX}_{}_{}_{}.json",
            sanitize(&result.job_title),
            sanitize(&result.location),
            result.timestamp.format("%Y%m%d_%H%M%S"),
        );
        self.output_dir.join(filename)
    }
}

/// Make a search term safe for use inside a filename.
fn sanitize(term: &str) -> String {
    term.chars()
        .filter(|c| *c != ',')
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

impl ResultStore for JsonFileStore {
    async fn save(&self, result: &ScrapeResult) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            AppError::PersistenceError(format!(
                "Failed to create output directory {}: {e}",
                self.output_dir.display()
            ))
        })?;

        let path = self.path_for(result);
        let json = serde_json::to_string_pretty(&result.document())?;

        tokio::fs::write(&path, json).await.map_err(|e| {
            AppError::PersistenceError(format!("Failed to write {}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), jobs = result.jobs.len(), "Data saved");
        Ok(path)
    }
}
