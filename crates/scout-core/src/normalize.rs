//! Canonicalisation of Indeed job-posting URLs.
//!
//! Listing pages return a mix of click-tracking links (`/rc/clk?jk=...`),
//! search result links carrying `vjk`, and mobile detail pages. The detail
//! endpoint works best with the plain desktop form, so every URL is rewritten
//! to `https://www.indeed.com/viewjob?jk=<id>` when a job id can be found.

use url::Url;
use url::form_urlencoded::byte_serialize;

const CANONICAL_VIEWJOB: &str = "https://www.indeed.com/viewjob";
const MOBILE_SEGMENT: &str = "/m/viewjob";
const DESKTOP_SEGMENT: &str = "/viewjob";

/// Used only to read the query of relative links such as `/rc/clk?jk=...`.
const RELATIVE_BASE: &str = "https://www.indeed.com/";

/// Rewrite a job-posting URL into its canonical detail-page form.
///
/// Never fails: anything that cannot be interpreted is returned unchanged.
pub fn normalize_job_url(url: &str) -> String {
    if let Some(id) = job_id(url) {
        let encoded: String = byte_serialize(id.as_bytes()).collect();
        return format!("{CANONICAL_VIEWJOB}?jk={encoded}");
    }

    if url.contains(MOBILE_SEGMENT) {
        return url.replacen(MOBILE_SEGMENT, DESKTOP_SEGMENT, 1);
    }

    url.to_string()
}

/// First non-empty `jk` value, falling back to `vjk`.
fn job_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url)
        .or_else(|_| Url::parse(RELATIVE_BASE).and_then(|base| base.join(url)))
        .ok()?;

    let first = |key: &str| {
        parsed
            .query_pairs()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.into_owned())
    };

    first("jk").or_else(|| first("vjk"))
}
