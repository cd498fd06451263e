use crate::error::AppError;
use crate::models::{DEFAULT_DOMAIN, SearchQuery};

/// Validate raw search parameters into a [`SearchQuery`].
///
/// Title and location are trimmed and must be non-empty. `limit`, when given,
/// must parse as an integer >= 1; `None` means no cap.
pub fn validate_input(
    job_title: &str,
    location: &str,
    limit: Option<&str>,
) -> Result<SearchQuery, AppError> {
    let job_title = job_title.trim();
    let location = location.trim();

    if job_title.is_empty() {
        return Err(AppError::InvalidArgument(
            "job_title is required and cannot be empty.".into(),
        ));
    }
    if location.is_empty() {
        return Err(AppError::InvalidArgument(
            "location is required and cannot be empty.".into(),
        ));
    }

    let limit = limit.map(parse_limit).transpose()?;

    Ok(SearchQuery {
        job_title: job_title.to_string(),
        location: location.to_string(),
        limit,
        domain: DEFAULT_DOMAIN.to_string(),
    })
}

fn parse_limit(raw: &str) -> Result<usize, AppError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("limit must be an integer, got '{raw}'.")))?;
    if value < 1 {
        return Err(AppError::InvalidArgument(
            "limit must be >= 1 when provided.".into(),
        ));
    }
    usize::try_from(value)
        .map_err(|_| AppError::InvalidArgument(format!("limit {value} is out of range.")))
}
