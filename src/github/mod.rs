// src/github/mod.rs
// =============================================================================
// This module handles talking to GitHub.
//
// Currently implements:
// - The Transport seam and its reqwest-backed implementation (fetch.rs)
// - Response types for repository metadata and recursive trees (api.rs)
// - Pure URL builders for API, raw, web and preview links (urls.rs)
// =============================================================================

pub mod api;
mod fetch;
pub mod urls;

pub use api::{RepoMetadata, TreeEntry, TreeResponse};
pub use fetch::{RawResponse, ReqwestTransport, Transport};
