// src/discovery/scan.rs
// =============================================================================
// Repository discovery using the Git Trees API.
//
// How it works, for each configured repository in order:
// 1. GET /repos/{owner}/{repo} to learn the default branch
// 2. GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1 to list EVERY
//    file and directory in one response
// 3. Keep the files ending in the target extension
// 4. Normalize them into FileRecords
// 5. Pause before the next repository
//
// Two requests per repository, however deep the folders go. Walking the
// contents API one directory at a time would cost one request per folder.
//
// Failure handling:
// - Anything wrong with one repository (network, HTTP status, bad JSON) is
//   logged and recorded in the report, and the loop moves on
// - Only the caller decides whether an empty result is an error
//   (DiscoveryReport::into_files)
// =============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::pacing::Pacer;
use super::record::{records_from_tree, FileRecord};
use crate::config::{GalleryConfig, RepositorySpec};
use crate::error::{DiscoveryError, FetchError};
use crate::github::{urls, RawResponse, RepoMetadata, Transport, TreeResponse};
use crate::usage::UsageCounters;

/// A repository that contributed nothing because something failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoFailure {
    pub repository_id: String,
    pub reason: String,
}

/// Everything one discovery run produced.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    pub files: Vec<FileRecord>,
    pub failures: Vec<RepoFailure>,
    /// Requests that got a response during this run
    pub requests: u64,
}

impl DiscoveryReport {
    /// The files, or `NothingFound` when the run came back empty.
    pub fn into_files(self) -> Result<Vec<FileRecord>, DiscoveryError> {
        if self.files.is_empty() {
            Err(DiscoveryError::NothingFound {
                requests: self.requests,
            })
        } else {
            Ok(self.files)
        }
    }
}

/// Discovers matching files in every configured repository.
///
/// Never fails for a single repository: a broken repository just
/// contributes zero files. `usage` has its request count reset first and is
/// updated after every response.
pub async fn discover_all(
    transport: &dyn Transport,
    pacer: &dyn Pacer,
    config: &GalleryConfig,
    usage: &mut UsageCounters,
) -> DiscoveryReport {
    usage.begin_run();

    let repos = config.repository_specs();
    let mut report = DiscoveryReport::default();

    tracing::info!(
        "Fetching trees for {} repositories ({} requests expected)",
        repos.len(),
        repos.len() * 2
    );

    for (i, repo) in repos.iter().enumerate() {
        tracing::info!("Fetching complete tree for {} ({}/{})", repo.id(), i + 1, repos.len());

        match discover_repo(transport, config, repo, usage).await {
            Ok(files) => {
                tracing::info!("{}: {} matching files", repo.id(), files.len());
                report.files.extend(files);
            }
            Err(e) => {
                tracing::warn!("Could not fetch {}: {}", repo.id(), e);
                report.failures.push(RepoFailure {
                    repository_id: repo.id(),
                    reason: e.to_string(),
                });
            }
        }

        if i + 1 < repos.len() {
            pacer.pause(config.delay()).await;
        }
    }

    report.requests = usage.requests;

    tracing::info!(
        "Found {} files using {} requests ({} repositories failed)",
        report.files.len(),
        report.requests,
        report.failures.len()
    );

    report
}

/// Fetches and filters one repository's full tree.
async fn discover_repo(
    transport: &dyn Transport,
    config: &GalleryConfig,
    repo: &RepositorySpec,
    usage: &mut UsageCounters,
) -> Result<Vec<FileRecord>, FetchError> {
    let metadata_url = urls::repo_metadata_url(&config.api_host, &repo.owner, &repo.name);
    let response = fetch(transport, &metadata_url, usage).await?;
    if !response.is_success() {
        return Err(FetchError::Metadata {
            repo: repo.id(),
            status: response.status,
        });
    }
    let metadata: RepoMetadata = parse(&response, repo)?;
    let branch = metadata.default_branch;

    let tree_url = urls::tree_url(&config.api_host, &repo.owner, &repo.name, &branch);
    let response = fetch(transport, &tree_url, usage).await?;
    if !response.is_success() {
        return Err(FetchError::Tree {
            repo: repo.id(),
            status: response.status,
        });
    }
    let tree: TreeResponse = parse(&response, repo)?;

    tracing::debug!("{}: {} total items on {}", repo.id(), tree.tree.len(), branch);
    if tree.truncated {
        tracing::warn!("{}: tree listing was truncated by GitHub, some files may be missing", repo.id());
    }

    Ok(records_from_tree(config, repo, &branch, &tree.tree))
}

async fn fetch(
    transport: &dyn Transport,
    url: &str,
    usage: &mut UsageCounters,
) -> Result<RawResponse, FetchError> {
    let response = transport.get(url).await?;
    usage.record_response(&response.rate_limit);

    tracing::debug!(
        "Request #{} {} -> HTTP {} | Remaining: {}/{}",
        usage.requests,
        url,
        response.status,
        usage.remaining,
        usage.limit
    );

    Ok(response)
}

fn parse<T: DeserializeOwned>(response: &RawResponse, repo: &RepositorySpec) -> Result<T, FetchError> {
    serde_json::from_str(&response.body).map_err(|source| FetchError::Malformed {
        repo: repo.id(),
        source,
    })
}
