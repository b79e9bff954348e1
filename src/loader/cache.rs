//! On-disk cache of the downloaded suffix list.
//!
//! The cache directory holds the list body and a `metadata.json` describing
//! where it came from and when.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::CACHE_DURATION;

const LIST_FILE: &str = "public_suffix_list.dat";
const METADATA_FILE: &str = "metadata.json";

/// Metadata stored next to a cached list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct CacheMetadata {
    /// URL the list was downloaded from
    pub source: String,
    /// When the list was downloaded
    pub last_updated: SystemTime,
    /// Number of rules in the cached list
    pub rules: usize,
}

impl CacheMetadata {
    pub(crate) fn new(source: &str, rules: usize) -> Self {
        Self {
            source: source.to_string(),
            last_updated: SystemTime::now(),
            rules,
        }
    }

    /// Downloaded from `source` less than `CACHE_DURATION` ago.
    pub(crate) fn is_fresh(&self, source: &str) -> bool {
        self.source == source
            && self
                .last_updated
                .elapsed()
                .map(|age| age < CACHE_DURATION)
                .unwrap_or(false)
    }
}

fn list_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(LIST_FILE)
}

fn metadata_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(METADATA_FILE)
}

/// Loads the cache metadata, `None` if there is no usable cache.
pub(crate) async fn load_metadata(cache_dir: &Path) -> Option<CacheMetadata> {
    let content = tokio::fs::read_to_string(metadata_path(cache_dir))
        .await
        .ok()?;
    match serde_json::from_str(&content) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            log::warn!("Ignoring unreadable cache metadata in {:?}: {}", cache_dir, e);
            None
        }
    }
}

/// Reads the cached list body.
pub(crate) async fn read_list(cache_dir: &Path) -> Result<String> {
    let path = list_path(cache_dir);
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read cached suffix list: {:?}", path))
}

/// Writes the list body, then its metadata.
pub(crate) async fn save(cache_dir: &Path, body: &str, metadata: &CacheMetadata) -> Result<()> {
    tokio::fs::create_dir_all(cache_dir)
        .await
        .with_context(|| format!("Failed to create cache directory: {:?}", cache_dir))?;

    let path = list_path(cache_dir);
    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("Failed to write cache file: {:?}", path))?;

    let content =
        serde_json::to_string_pretty(metadata).context("Failed to serialize cache metadata")?;
    tokio::fs::write(metadata_path(cache_dir), content)
        .await
        .context("Failed to write cache metadata")?;

    Ok(())
}
