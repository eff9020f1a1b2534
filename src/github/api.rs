// src/github/api.rs
// =============================================================================
// Shapes of the two GitHub REST responses discovery reads.
//
// Only the fields we use are declared; serde ignores the rest. A response
// missing a required field (e.g. no "default_branch") fails to deserialize,
// and discovery treats that like any other per-repository failure.
// =============================================================================

use serde::Deserialize;

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Deserialize)]
pub struct RepoMetadata {
    pub default_branch: String,
}

/// `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeEntry>,
    /// GitHub caps recursive listings; when it does, this is true.
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub sha: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// A submodule
    Commit,
    #[serde(other)]
    Other,
}

impl TreeEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_response() {
        let json = r#"{
            "sha": "abc",
            "url": "https://api.github.com/...",
            "tree": [
                {"path": "index.html", "mode": "100644", "type": "blob", "sha": "1"},
                {"path": "sub", "mode": "040000", "type": "tree", "sha": "2"},
                {"path": "vendor/lib", "mode": "160000", "type": "commit", "sha": "3"}
            ],
            "truncated": false
        }"#;

        let parsed: TreeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tree.len(), 3);
        assert!(parsed.tree[0].is_file());
        assert_eq!(parsed.tree[1].kind, EntryKind::Tree);
        assert_eq!(parsed.tree[2].kind, EntryKind::Commit);
        assert!(!parsed.truncated);
    }

    #[test]
    fn test_unknown_entry_kind_is_tolerated() {
        let json = r#"{"tree": [{"path": "x", "type": "symlink"}]}"#;
        let parsed: TreeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tree[0].kind, EntryKind::Other);
        assert_eq!(parsed.tree[0].sha, "");
    }

    #[test]
    fn test_metadata_without_default_branch_is_malformed() {
        let result: Result<RepoMetadata, _> = serde_json::from_str(r#"{"name": "demos"}"#);
        assert!(result.is_err());
    }
}
