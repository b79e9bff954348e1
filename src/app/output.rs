//! Result printing.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::domain::Domain;

/// One JSON output line: the input as given plus every domain field.
#[derive(Serialize)]
struct OutputRecord<'a> {
    input: &'a str,
    #[serde(flatten)]
    domain: &'a Domain,
    registrable_domain: Option<String>,
}

/// Writes one result line.
///
/// Plain lines are tab-separated: input, subdomain, registrable label, suffix,
/// then `valid`, `host` (valid host only) or `invalid`, and `private` when the
/// suffix came from a private rule. Missing parts print as `-`.
pub fn write_domain<W: Write>(
    out: &mut W,
    input: &str,
    domain: &Domain,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let record = OutputRecord {
                input,
                domain,
                registrable_domain: domain.registrable_domain(),
            };
            serde_json::to_writer(&mut *out, &record).context("Failed to serialize result")?;
            writeln!(out).context("Failed to write result")?;
        }
        OutputFormat::Plain => {
            writeln!(out, "{}", plain_line(input, domain)).context("Failed to write result")?;
        }
    }
    Ok(())
}

fn plain_line(input: &str, domain: &Domain) -> String {
    let status = if domain.valid() {
        "valid"
    } else if domain.valid_host() {
        "host"
    } else {
        "invalid"
    };
    let mut fields = vec![
        input,
        domain.subdomain().unwrap_or("-"),
        domain.registrable_label().unwrap_or("-"),
        domain.suffix().unwrap_or("-"),
        status,
    ];
    if domain.private() {
        fields.push("private");
    }
    fields.join("\t")
}
