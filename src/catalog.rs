// src/catalog.rs
// =============================================================================
// Aggregation over discovered files.
//
// - group: files bucketed by repository, in the order repositories first
//   appear, files in their original order inside each bucket
// - find: look a file up by (repository, path)
// - search: case-insensitive text filter over names and folders
//
// None of these copy-edit or deduplicate the records.
// =============================================================================

use std::collections::HashMap;

use crate::discovery::FileRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoGroup<'a> {
    pub repository_id: &'a str,
    /// Taken from the first record of the repository
    pub repository_display_name: &'a str,
    pub files: Vec<&'a FileRecord>,
}

pub fn group(files: &[FileRecord]) -> Vec<RepoGroup<'_>> {
    let mut groups: Vec<RepoGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for file in files {
        let slot = *index.entry(file.repository_id.as_str()).or_insert_with(|| {
            groups.push(RepoGroup {
                repository_id: &file.repository_id,
                repository_display_name: &file.repository_display_name,
                files: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].files.push(file);
    }

    groups
}

/// First record whose path matches and whose repository is `repo`, given
/// either as `owner/name` or just `name`.
pub fn find<'a>(files: &'a [FileRecord], repo: &str, path: &str) -> Option<&'a FileRecord> {
    files.iter().find(|f| {
        f.path == path
            && (f.repository_id == repo
                || f.repository_id.rsplit('/').next() == Some(repo))
    })
}

pub fn search<'a>(files: &'a [FileRecord], query: &str) -> Vec<&'a FileRecord> {
    let query = query.trim().to_lowercase();
    files
        .iter()
        .filter(|f| {
            query.is_empty()
                || f.display_name.to_lowercase().contains(&query)
                || f.folder.to_lowercase().contains(&query)
        })
        .collect()
}
