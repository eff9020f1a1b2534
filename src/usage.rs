// src/usage.rs
// =============================================================================
// API usage tracking.
//
// GitHub allows 60 unauthenticated requests per hour. Every response carries
// the current quota in three headers:
//   X-RateLimit-Limit      ceiling for the window
//   X-RateLimit-Remaining  requests left
//   X-RateLimit-Reset      unix timestamp when the window resets
//
// UsageCounters is an explicit state object: discovery borrows it mutably
// for the length of a run, so repeated runs (and tests) never share globals.
// =============================================================================

use chrono::{Local, TimeZone};
use reqwest::header::HeaderMap;

pub const DEFAULT_LIMIT: u64 = 60;

/// Rate-limit metadata from a single response. Missing or unparseable
/// headers are None.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitMeta {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub reset: Option<u64>,
}

impl RateLimitMeta {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
        };

        Self {
            limit: read("x-ratelimit-limit"),
            remaining: read("x-ratelimit-remaining"),
            reset: read("x-ratelimit-reset"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageCounters {
    pub requests: u64,
    pub limit: u64,
    pub remaining: u64,
    pub reset: Option<u64>,
}

impl Default for UsageCounters {
    fn default() -> Self {
        Self {
            requests: 0,
            limit: DEFAULT_LIMIT,
            remaining: DEFAULT_LIMIT,
            reset: None,
        }
    }
}

impl UsageCounters {
    /// Zeroes the request count. Quota fields survive until a newer
    /// response overwrites them.
    pub fn begin_run(&mut self) {
        self.requests = 0;
    }

    pub fn record_response(&mut self, meta: &RateLimitMeta) {
        self.requests += 1;

        if let Some(limit) = meta.limit {
            self.limit = limit;
        }
        if let Some(remaining) = meta.remaining {
            self.remaining = remaining;
        }
        if let Some(reset) = meta.reset {
            self.reset = Some(reset);
        }
    }

    pub fn current(&self) -> UsageCounters {
        *self
    }

    /// Reset time in local wall-clock time, or "Unknown".
    pub fn reset_display(&self) -> String {
        self.reset
            .and_then(|ts| i64::try_from(ts).ok())
            .and_then(|ts| Local.timestamp_opt(ts, 0).single())
            .map(|time| time.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn summary(&self) -> String {
        format!(
            "Requests: {} | Remaining: {}/{} | Reset: {}",
            self.requests,
            self.remaining,
            self.limit,
            self.reset_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn full_meta(remaining: u64) -> RateLimitMeta {
        RateLimitMeta {
            limit: Some(60),
            remaining: Some(remaining),
            reset: Some(1_700_000_000),
        }
    }

    #[test]
    fn test_defaults_before_any_response() {
        let usage = UsageCounters::default();
        assert_eq!(usage.requests, 0);
        assert_eq!(usage.limit, 60);
        assert_eq!(usage.remaining, 60);
        assert_eq!(usage.reset, None);
        assert_eq!(usage.reset_display(), "Unknown");
    }

    #[test]
    fn test_record_overwrites_from_latest_response() {
        let mut usage = UsageCounters::default();
        usage.record_response(&full_meta(59));
        usage.record_response(&full_meta(58));

        assert_eq!(usage.requests, 2);
        assert_eq!(usage.remaining, 58);
        assert_eq!(usage.reset, Some(1_700_000_000));
    }

    #[test]
    fn test_missing_headers_keep_previous_values() {
        let mut usage = UsageCounters::default();
        usage.record_response(&full_meta(42));
        usage.record_response(&RateLimitMeta::default());

        assert_eq!(usage.requests, 2);
        assert_eq!(usage.remaining, 42);
        assert_eq!(usage.limit, 60);
        assert_eq!(usage.reset, Some(1_700_000_000));
    }

    #[test]
    fn test_missing_headers_on_first_response_keep_default() {
        let mut usage = UsageCounters::default();
        usage.record_response(&RateLimitMeta::default());
        assert_eq!(usage.remaining, 60);
    }

    #[test]
    fn test_begin_run_only_resets_request_count() {
        let mut usage = UsageCounters::default();
        usage.record_response(&full_meta(10));
        usage.begin_run();

        let current = usage.current();
        assert_eq!(current.requests, 0);
        assert_eq!(current.remaining, 10);
    }

    #[test]
    fn test_parse_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("X-RateLimit-Limit", HeaderValue::from_static("60"));
        headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("57"));
        headers.insert("X-RateLimit-Reset", HeaderValue::from_static("1700000000"));

        let meta = RateLimitMeta::from_headers(&headers);
        assert_eq!(meta, full_meta(57));
    }

    #[test]
    fn test_garbage_header_counts_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("lots"));

        let meta = RateLimitMeta::from_headers(&headers);
        assert_eq!(meta.remaining, None);
        assert_eq!(meta.limit, None);
    }

    #[test]
    fn test_summary_format() {
        let usage = UsageCounters {
            requests: 4,
            limit: 60,
            remaining: 56,
            reset: None,
        };
        assert_eq!(usage.summary(), "Requests: 4 | Remaining: 56/60 | Reset: Unknown");
    }
}
