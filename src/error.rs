// src/error.rs
// =============================================================================
// Error types for repository discovery.
//
// Two layers:
// - FetchError: something went wrong for ONE repository. Discovery logs it,
//   records it in the report and moves on to the next repository.
// - DiscoveryError: the whole run produced nothing. This is the only error a
//   caller of discovery ever has to handle.
//
// The CLI (main.rs) wraps everything else in anyhow::Result, like before.
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error and Display
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use thiserror::Error;

/// Failure reported by a `Transport` before any HTTP status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Network(e.to_string())
    }
}

/// Per-repository recoverable failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("cannot access repository {repo}: HTTP {status}")]
    Metadata { repo: String, status: u16 },

    #[error("cannot fetch tree for {repo}: HTTP {status}")]
    Tree { repo: String, status: u16 },

    #[error("malformed response for {repo}: {source}")]
    Malformed {
        repo: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Run-level failure: every repository was processed and nothing matched.
///
/// `requests` lets the caller tell "genuinely empty" (a handful of requests)
/// apart from "probably rate-limited".
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(
        "No animations found. Used only {requests} API requests. \
         Check if repositories exist and are public."
    )]
    NothingFound { requests: u64 },
}
