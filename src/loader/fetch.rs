//! Suffix list download.

use crate::config::{FETCH_TIMEOUT, MAX_LIST_SIZE};
use crate::error_handling::DatabaseError;

/// Downloads the suffix list from `url`.
///
/// # Errors
///
/// Returns `DatabaseError::Fetch` for transport failures and non-success
/// statuses, and `DatabaseError::Unavailable` for a body larger than
/// `MAX_LIST_SIZE` or not in UTF-8.
pub(crate) async fn fetch_list(url: &str) -> Result<String, DatabaseError> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    log::info!("Downloading suffix list from: {}", url);
    let response = client.get(url).send().await?.error_for_status()?;

    // Check content-length header if available
    if let Some(content_length) = response.content_length() {
        if content_length > MAX_LIST_SIZE as u64 {
            return Err(DatabaseError::Unavailable(format!(
                "suffix list too large: {} bytes (max: {} bytes)",
                content_length, MAX_LIST_SIZE
            )));
        }
    }

    let bytes = response.bytes().await?;

    // Content-length can be missing or wrong
    if bytes.len() > MAX_LIST_SIZE {
        return Err(DatabaseError::Unavailable(format!(
            "suffix list too large: {} bytes (max: {} bytes)",
            bytes.len(),
            MAX_LIST_SIZE
        )));
    }

    String::from_utf8(bytes.to_vec())
        .map_err(|e| DatabaseError::Unavailable(format!("suffix list is not valid UTF-8: {}", e)))
}
