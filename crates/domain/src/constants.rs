//! Shared constants for the reporting toolkit

/// Default GitHub API root when `API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// API version pin sent on every request.
pub const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
pub const API_VERSION: &str = "2022-11-28";

/// Content negotiation per endpoint family.
pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
pub const ACCEPT_SCIM_JSON: &str = "application/scim+json";

/// Page size requested from every paginated endpoint.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Total GET attempts before the last response is handed back as-is.
pub const MAX_HTTP_ATTEMPTS: u32 = 6;

/// Per-request timeout, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// Cap on the linear backoff between retries, in seconds.
pub const BACKOFF_CAP_SECS: u64 = 30;

/// Courtesy delay between link-header pages, in seconds.
pub const COURTESY_DELAY_SECS: u64 = 1;

/// Margin added on top of a rate-limit reset time, in seconds.
pub const RATE_RESET_MARGIN_SECS: u64 = 2;

/// A seat is "active" when its last activity is within this many days.
pub const ACTIVITY_WINDOW_DAYS: i64 = 30;
