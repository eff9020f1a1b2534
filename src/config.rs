// src/config.rs
// =============================================================================
// Gallery configuration.
//
// Everything here is fixed when the process starts:
// - which GitHub owner and repositories to scan
// - how long to pause between repositories
// - which file extension counts as an "animation"
// - which hosts to build API, raw, web and preview URLs from
//
// The defaults reproduce the original gallery, so running without a config
// file just works. A TOML file can override any subset of fields.
// =============================================================================

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_OWNER: &str = "shivas1432";
pub const DEFAULT_DELAY_MS: u64 = 500;
pub const DEFAULT_EXTENSION: &str = ".html";
pub const DEFAULT_API_HOST: &str = "https://api.github.com";
pub const DEFAULT_RAW_HOST: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_WEB_HOST: &str = "https://github.com";
pub const DEFAULT_PREVIEW_PREFIX: &str = "https://htmlpreview.github.io/?";

/// One `[[repositories]]` entry in the config file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepositoryEntry {
    pub name: String,
    pub display_name: String,
    /// Only used by fallback mode; discovery resolves the real default branch.
    #[serde(default = "default_branch_hint")]
    pub branch: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub owner: String,
    pub repositories: Vec<RepositoryEntry>,
    pub delay_ms: u64,
    pub extension: String,
    pub api_host: String,
    pub raw_host: String,
    pub web_host: String,
    pub preview_prefix: String,
}

/// A configured repository with its owner resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositorySpec {
    pub owner: String,
    pub name: String,
    pub display_name: String,
    pub branch_hint: String,
}

impl RepositorySpec {
    /// `owner/name`, the provenance key carried by every record.
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

fn default_branch_hint() -> String {
    "master".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let repositories = (1..=3)
            .map(|n| RepositoryEntry {
                name: format!("Animated-DesignsP{}", n),
                display_name: format!("Animated Designs P{}", n),
                branch: default_branch_hint(),
            })
            .collect();

        Self {
            owner: DEFAULT_OWNER.to_string(),
            repositories,
            delay_ms: DEFAULT_DELAY_MS,
            extension: DEFAULT_EXTENSION.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            raw_host: DEFAULT_RAW_HOST.to_string(),
            web_host: DEFAULT_WEB_HOST.to_string(),
            preview_prefix: DEFAULT_PREVIEW_PREFIX.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Loads a TOML file, or the built-in defaults when `path` is None.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                Self::from_toml(&text)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: GalleryConfig = toml::from_str(text)?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            bail!("owner must not be empty");
        }
        if self.extension.is_empty() {
            bail!("extension must not be empty");
        }
        if let Some(repo) = self.repositories.iter().find(|r| r.name.trim().is_empty()) {
            bail!("repository '{}' has an empty name", repo.display_name);
        }
        for (field, value) in [
            ("api_host", &self.api_host),
            ("raw_host", &self.raw_host),
            ("web_host", &self.web_host),
            ("preview_prefix", &self.preview_prefix),
        ] {
            Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", field, value))?;
        }
        Ok(())
    }

    /// Repositories in configured order, each tagged with the owner.
    pub fn repository_specs(&self) -> Vec<RepositorySpec> {
        self.repositories
            .iter()
            .map(|entry| RepositorySpec {
                owner: self.owner.clone(),
                name: entry.name.clone(),
                display_name: entry.display_name.clone(),
                branch_hint: entry.branch.clone(),
            })
            .collect()
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
