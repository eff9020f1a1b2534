// src/github/urls.rs
// =============================================================================
// Every URL the gallery needs, one pure function per kind.
//
// Hosts come from configuration (api.github.com, raw.githubusercontent.com,
// github.com and the htmlpreview proxy by default). Trailing slashes on a
// host are tolerated so "https://github.com/" and "https://github.com" give
// the same result.
//
// File paths are percent-encoded one segment at a time, so a file called
// "my anim.html" or "a#b.html" still yields a working link while the
// slashes between folders stay literal.
// =============================================================================

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Characters escaped inside one path segment (the WHATWG path set plus
/// `%` and `/`).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Same set as JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn host(base: &str) -> &str {
    base.trim_end_matches('/')
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// `GET {api}/repos/{owner}/{repo}`: repository metadata (default branch).
pub fn repo_metadata_url(api_host: &str, owner: &str, repo: &str) -> String {
    format!("{}/repos/{}/{}", host(api_host), owner, repo)
}

/// `GET {api}/repos/{owner}/{repo}/git/trees/{branch}?recursive=1`
///
/// One request returns every file and directory in the repository.
pub fn tree_url(api_host: &str, owner: &str, repo: &str, branch: &str) -> String {
    format!(
        "{}/repos/{}/{}/git/trees/{}?recursive=1",
        host(api_host),
        owner,
        repo,
        branch
    )
}

pub fn raw_content_url(raw_host: &str, owner: &str, repo: &str, branch: &str, path: &str) -> String {
    format!("{}/{}/{}/{}/{}", host(raw_host), owner, repo, branch, encode_path(path))
}

/// The "get code" link: the file in GitHub's web UI on the resolved branch.
pub fn source_view_url(web_host: &str, owner: &str, repo: &str, branch: &str, path: &str) -> String {
    format!("{}/{}/{}/blob/{}/{}", host(web_host), owner, repo, branch, encode_path(path))
}

/// Preview proxy link: the prefix followed by the raw URL encoded the way
/// `encodeURIComponent` would.
///
/// The prefix is used verbatim because proxies like htmlpreview expect the
/// target right after a literal `?`.
pub fn preview_url(preview_prefix: &str, raw_url: &str) -> String {
    format!("{}{}", preview_prefix, utf8_percent_encode(raw_url, URI_COMPONENT))
}
