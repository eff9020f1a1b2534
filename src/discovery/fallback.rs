// src/discovery/fallback.rs
// =============================================================================
// Fallback listing for when GitHub is rate limiting us.
//
// No network requests at all: we guess conventionally named files and hand
// back the first two. Nothing checks that they exist, so every record is
// marked `limited` and its repository name gets a " (Limited)" suffix.
//
// Only used when the caller asks for it (`html-gallery list --fallback`).
// =============================================================================

use super::record::FileRecord;
use crate::config::{GalleryConfig, RepositorySpec};

pub const GUESSED_FILES: &[&str] = &["index.html", "main.html", "animation.html", "demo.html"];
pub const MAX_GUESSES: usize = 2;

/// Guessed records for one repository, built on its branch hint.
pub fn fallback_listing(config: &GalleryConfig, repo: &RepositorySpec) -> Vec<FileRecord> {
    tracing::info!("Using fallback listing for {}", repo.id());

    GUESSED_FILES
        .iter()
        .take(MAX_GUESSES)
        .map(|file_name| {
            let mut record = FileRecord::new(config, repo, &repo.branch_hint, file_name);
            record.repository_display_name = format!("{} (Limited)", repo.display_name);
            record.limited = true;
            record
        })
        .collect()
}

/// Fallback listing for every configured repository, in order.
pub fn fallback_all(config: &GalleryConfig) -> Vec<FileRecord> {
    config
        .repository_specs()
        .iter()
        .flat_map(|repo| fallback_listing(config, repo))
        .collect()
}
