//! Suffix list loading.
//!
//! A list source is either a local path or an `http(s)://` URL. Downloads are
//! cached on disk and reused while fresh; a stale cache is still preferred to
//! no list at all when the download fails.

mod cache;
mod fetch;

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use crate::error_handling::DatabaseError;
use crate::suffix::SuffixDatabase;
use cache::CacheMetadata;
use fetch::fetch_list;

/// True if `source` should be downloaded rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Resolves a list source to the text of the list.
///
/// # Errors
///
/// The `anyhow::Error` wraps a `DatabaseError`: `Io` when a local file cannot
/// be read, `Fetch` when the download fails and no cache from the same source
/// exists, and `Unavailable` when the downloaded document is unusable.
pub async fn load_list(source: &str, cache_dir: &Path) -> Result<String> {
    if !is_remote(source) {
        info!("Loading suffix list from: {}", source);
        return tokio::fs::read_to_string(source)
            .await
            .map_err(DatabaseError::Io)
            .with_context(|| format!("Failed to read suffix list from {}", source));
    }

    let cached = cache::load_metadata(cache_dir).await;
    if let Some(metadata) = cached.as_ref().filter(|m| m.is_fresh(source)) {
        match cache::read_list(cache_dir).await {
            Ok(body) => {
                info!(
                    "Using cached suffix list ({} rules) from {:?}",
                    metadata.rules, cache_dir
                );
                return Ok(body);
            }
            Err(e) => warn!("{:#}; downloading again", e),
        }
    }

    let error = match fetch_and_cache(source, cache_dir).await {
        Ok(body) => return Ok(body),
        Err(e) => e,
    };

    if cached.is_some_and(|m| m.source == source) {
        warn!(
            "Failed to download suffix list: {:#}. Falling back to stale cache in {:?}",
            error, cache_dir
        );
        if let Ok(body) = cache::read_list(cache_dir).await {
            return Ok(body);
        }
    }

    Err(error.context(format!("No suffix list available from {}", source)))
}

/// Loads and parses the suffix list from `source`.
pub async fn load_database(source: &str, cache_dir: &Path) -> Result<SuffixDatabase> {
    let document = load_list(source, cache_dir).await?;
    let database = SuffixDatabase::parse(&document)
        .with_context(|| format!("Failed to parse suffix list from {}", source))?;
    Ok(database)
}

/// Downloads the list, checks that it parses, and stores it in the cache.
async fn fetch_and_cache(url: &str, cache_dir: &Path) -> Result<String> {
    let body = fetch_list(url).await?;
    let database = SuffixDatabase::parse(&body)
        .with_context(|| format!("Downloaded suffix list from {} is unusable", url))?;

    let metadata = CacheMetadata::new(url, database.len());
    if let Err(e) = cache::save(cache_dir, &body, &metadata).await {
        warn!("Failed to cache suffix list: {:#}", e);
    }
    Ok(body)
}
