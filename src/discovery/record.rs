// src/discovery/record.rs
// =============================================================================
// Turning raw tree entries into display-ready FileRecords.
//
// Selection policy: an entry is kept if it is a file (blob) and its path ends
// with the target extension. No size, depth or content checks.
//
// Example:
//   path = "space/cool-space_demo.html"
//   -> file_name     "cool-space_demo.html"
//   -> folder        "space"
//   -> display_name  "Cool Space Demo"
// =============================================================================

use serde::Serialize;

use crate::config::{GalleryConfig, RepositorySpec};
use crate::github::{urls, TreeEntry};

/// One animation file, ready for display.
///
/// `(repository_id, path)` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub display_name: String,
    pub file_name: String,
    pub path: String,
    pub folder: String,
    pub repository_id: String,
    pub repository_display_name: String,
    pub branch: String,
    pub raw_content_url: String,
    pub source_view_url: String,
    /// True for fallback-mode guesses that were never checked against GitHub.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub limited: bool,
}

impl FileRecord {
    /// Builds a record for `path` in `repo` on `branch`.
    pub fn new(config: &GalleryConfig, repo: &RepositorySpec, branch: &str, path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').collect();
        let file_name = segments.last().copied().unwrap_or(path).to_string();
        let folder = if segments.len() > 1 {
            segments[0].to_string()
        } else {
            String::new()
        };

        Self {
            display_name: display_name(&file_name, &config.extension),
            file_name,
            path: path.to_string(),
            folder,
            repository_id: repo.id(),
            repository_display_name: repo.display_name.clone(),
            branch: branch.to_string(),
            raw_content_url: urls::raw_content_url(&config.raw_host, &repo.owner, &repo.name, branch, path),
            source_view_url: urls::source_view_url(&config.web_host, &repo.owner, &repo.name, branch, path),
            limited: false,
        }
    }

    /// Link for the embedded preview frame.
    pub fn preview_url(&self, config: &GalleryConfig) -> String {
        urls::preview_url(&config.preview_prefix, &self.raw_content_url)
    }

    /// "Animated Designs P1 - sub folder" or "Animated Designs P1 - root level"
    pub fn subtitle(&self) -> String {
        if self.folder.is_empty() {
            format!("{} - root level", self.repository_display_name)
        } else {
            format!("{} - {} folder", self.repository_display_name, self.folder)
        }
    }
}

/// Human title from a file name: extension stripped, `-` and `_` become
/// spaces, each word capitalized.
pub fn display_name(file_name: &str, extension: &str) -> String {
    file_name
        .strip_suffix(extension)
        .unwrap_or(file_name)
        .replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_match(entry: &TreeEntry, extension: &str) -> bool {
    entry.is_file() && entry.path.ends_with(extension)
}

/// Filters a tree listing down to matching files and normalizes them,
/// keeping the listing's order.
pub fn records_from_tree(
    config: &GalleryConfig,
    repo: &RepositorySpec,
    branch: &str,
    entries: &[TreeEntry],
) -> Vec<FileRecord> {
    entries
        .iter()
        .filter(|entry| is_match(entry, &config.extension))
        .map(|entry| FileRecord::new(config, repo, branch, &entry.path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::api::EntryKind;

    fn repo() -> RepositorySpec {
        RepositorySpec {
            owner: "octo".to_string(),
            name: "demos".to_string(),
            display_name: "Demos".to_string(),
            branch_hint: "master".to_string(),
        }
    }

    fn entry(path: &str, kind: EntryKind) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            kind,
            sha: String::new(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("cool-space_demo.html", ".html"), "Cool Space Demo");
        assert_eq!(display_name("index.html", ".html"), "Index");
    }

    #[test]
    fn test_display_name_keeps_inner_capitals_and_empty_words() {
        assert_eq!(display_name("myHTML-page.html", ".html"), "MyHTML Page");
        assert_eq!(display_name("a--b.html", ".html"), "A  B");
    }

    #[test]
    fn test_display_name_only_strips_trailing_extension() {
        assert_eq!(display_name("page.html.html", ".html"), "Page.html");
    }

    #[test]
    fn test_folder_for_root_and_nested_files() {
        let config = GalleryConfig::default();

        let root = FileRecord::new(&config, &repo(), "main", "index.html");
        assert_eq!(root.folder, "");
        assert_eq!(root.file_name, "index.html");

        let nested = FileRecord::new(&config, &repo(), "main", "sub/index.html");
        assert_eq!(nested.folder, "sub");

        let deep = FileRecord::new(&config, &repo(), "main", "a/b/c/wave.html");
        assert_eq!(deep.folder, "a");
        assert_eq!(deep.file_name, "wave.html");
        assert_eq!(deep.display_name, "Wave");
    }

    #[test]
    fn test_record_urls_use_resolved_branch() {
        let config = GalleryConfig::default();
        let record = FileRecord::new(&config, &repo(), "main", "sub/a.html");

        assert_eq!(record.repository_id, "octo/demos");
        assert_eq!(record.branch, "main");
        assert_eq!(
            record.raw_content_url,
            "https://raw.githubusercontent.com/octo/demos/main/sub/a.html"
        );
        assert_eq!(record.source_view_url, "https://github.com/octo/demos/blob/main/sub/a.html");
        assert!(record.preview_url(&config).starts_with("https://htmlpreview.github.io/?https%3A%2F%2F"));
    }

    #[test]
    fn test_filter_drops_directories_and_other_extensions() {
        let config = GalleryConfig::default();
        let entries = vec![
            entry("index.html", EntryKind::Blob),
            entry("folder.html", EntryKind::Tree),
            entry("styles.css", EntryKind::Blob),
            entry("notes.html.bak", EntryKind::Blob),
            entry("UPPER.HTML", EntryKind::Blob),
            entry("sub/demo.html", EntryKind::Blob),
            entry("module.html", EntryKind::Commit),
        ];

        let records = records_from_tree(&config, &repo(), "main", &entries);
        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["index.html", "sub/demo.html"]);
    }

    #[test]
    fn test_subtitle() {
        let config = GalleryConfig::default();
        assert_eq!(
            FileRecord::new(&config, &repo(), "main", "index.html").subtitle(),
            "Demos - root level"
        );
        assert_eq!(
            FileRecord::new(&config, &repo(), "main", "sub/index.html").subtitle(),
            "Demos - sub folder"
        );
    }

    #[test]
    fn test_json_uses_camel_case_and_hides_limited_flag() {
        let config = GalleryConfig::default();
        let record = FileRecord::new(&config, &repo(), "main", "index.html");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["displayName"], "Index");
        assert_eq!(json["repositoryId"], "octo/demos");
        assert!(json.get("limited").is_none());
    }
}
