use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.hasdata.com";
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration for a scrape run.
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub api_key: String,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl ScoutConfig {
    /// Read configuration from environment variables.
    ///
    /// - `HASDATA_API_KEY` (required)
    /// - `HASDATA_BASE_URL` (optional, defaults to `https://api.hasdata.com`)
    /// - `SCOUT_OUTPUT_DIR` (optional, defaults to `data`)
    /// - `SCOUT_TIMEOUT_SECS` (optional, defaults to 30)
    ///
    /// Call `dotenvy::dotenv()` beforehand to seed these from a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("HASDATA_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(
                    "HASDATA_API_KEY environment variable not set. \
                     Set HASDATA_API_KEY in your environment or .env file."
                        .into(),
                )
            })?;

        let base_url = lookup("HASDATA_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let output_dir = lookup("SCOUT_OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let timeout = match lookup("SCOUT_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT,
            Some(raw) => {
                let parsed: u64 = raw.trim().parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid SCOUT_TIMEOUT_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::ConfigError(
                        "SCOUT_TIMEOUT_SECS must be at least 1".into(),
                    ));
                }
                Duration::from_secs(parsed)
            }
        };

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            output_dir,
            timeout,
        })
    }
}
