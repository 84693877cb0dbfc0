//! User-Agent string for dataset requests.

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/denisecase/datafun-03-spec";

/// Default User-Agent for fetch requests (identifies the tool).
#[must_use]
pub(crate) fn default_fetch_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("datafetch/{version} (dataset-summary-tool; +{PROJECT_UA_URL})")
}
