use serde_json::Value;

use crate::models::JobDetail;
use crate::normalize::normalize_job_url;
use crate::traits::JobApi;

/// Key under which some API versions nest the job fields.
const NESTED_KEY: &str = "job";

/// Candidate keys for one output field, searched top-level first.
#[derive(Debug, Clone, Copy)]
struct FieldRule {
    top_level: &'static [&'static str],
    nested: &'static [&'static str],
}

const DESCRIPTION_KEYS: &[&str] = &["description", "jobDescription", "full_description"];

const TITLE: FieldRule = FieldRule {
    top_level: &["title"],
    nested: &["title", "jobTitle"],
};
const COMPANY: FieldRule = FieldRule {
    top_level: &["company"],
    nested: &["company", "companyName", "company_name"],
};
const LOCATION: FieldRule = FieldRule {
    top_level: &["location"],
    nested: &["location", "jobLocation"],
};
const DESCRIPTION: FieldRule = FieldRule {
    top_level: DESCRIPTION_KEYS,
    nested: DESCRIPTION_KEYS,
};

impl FieldRule {
    fn resolve(&self, body: &Value) -> String {
        let nested = body.get(NESTED_KEY).filter(|v| v.is_object());

        pick(body, self.top_level)
            .or_else(|| nested.and_then(|job| pick(job, self.nested)))
            .unwrap_or_default()
    }
}

/// First key in `keys` holding a usable value.
fn pick(container: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| container.get(*key))
        .find_map(as_text)
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract a [`JobDetail`] from a detail response of either known shape.
pub fn extract_job_detail(body: &Value, url: &str, source_url: &str) -> JobDetail {
    JobDetail {
        title: TITLE.resolve(body),
        company: COMPANY.resolve(body),
        location: LOCATION.resolve(body),
        description: DESCRIPTION.resolve(body),
        url: url.to_string(),
        source_url: source_url.to_string(),
    }
}

/// Fetch and extract the detail record for one listing URL.
///
/// Returns `None` when the request fails; the caller skips that job.
pub async fn fetch_job_details<A: JobApi>(api: &A, job_url: &str) -> Option<JobDetail> {
    let normalized = normalize_job_url(job_url);

    match api.job_detail(&normalized).await {
        Ok(body) => Some(extract_job_detail(&body, &normalized, job_url)),
        Err(e) => {
            tracing::warn!(url = %normalized, error = %e, "Job details request failed");
            None
        }
    }
}
