// src/github/fetch.rs
// =============================================================================
// The HTTP seam between discovery and GitHub.
//
// Discovery never talks to reqwest directly. It asks a `Transport` for a URL
// and gets back the status code, the rate-limit headers and the body text.
// That keeps discovery testable: tests plug in an in-memory transport and
// never touch the network.
//
// Why return non-2xx responses instead of an error?
// - GitHub still sends rate-limit headers on a 403 or 404
// - Usage tracking must count those requests too
// - Discovery decides what a bad status means, not the transport
//
// Rust concepts:
// - Traits: an interface that several types can implement
// - async-trait: lets a trait have async methods usable as `dyn Transport`
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;

use crate::error::TransportError;
use crate::usage::RateLimitMeta;

/// A completed HTTP exchange, successful or not.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub rate_limit: RateLimitMeta,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET. Err only when no response arrived at all.
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// The real transport, backed by a reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        // GitHub rejects API requests without a User-Agent
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .user_agent(concat!("html-gallery/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let rate_limit = RateLimitMeta::from_headers(response.headers());
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            rate_limit,
            body,
        })
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why Send + Sync on the trait?
//    - The tokio runtime may move our future between threads
//    - Anything held across an .await must be Send
//    - &dyn Transport is only Send if the Transport is Sync
//
// 2. Why build the Client once?
//    - reqwest::Client keeps a connection pool
//    - Reusing it means the metadata and tree requests share a TLS connection
// -----------------------------------------------------------------------------
