//! Input reading.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Reads the whole input, from stdin when `file` is `-`.
pub async fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        info!("Reading input from stdin");
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    info!("Reading input from: {}", file.display());
    tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read input file {}", file.display()))
}

/// Lines holding one domain each; blank lines and `#` comments are skipped.
pub fn domain_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
