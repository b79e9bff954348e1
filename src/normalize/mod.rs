//! Host name normalization.
//!
//! Turns raw input into the two canonical forms used by the rest of the crate:
//! the ASCII (punycode) form every comparison and rule lookup works on, and the
//! Unicode form shown to humans. Labels are encoded one at a time, so the same
//! routine also normalizes suffix list rules.

use idna::punycode;

use crate::config::ACE_PREFIX;
use crate::error_handling::EncodingError;

/// A host name split into lowercase labels, in both canonical forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Unicode form, punycode labels decoded
    pub text: String,
    /// ASCII form, non-ASCII labels punycode-encoded
    pub ascii: String,
    /// Labels of the ASCII form, left to right
    pub labels: Vec<String>,
}

/// Normalizes a host name given as bytes.
///
/// # Errors
///
/// Returns `EncodingError::InvalidUtf8` if the bytes are not UTF-8, otherwise
/// whatever [`normalize`] returns.
pub fn normalize_bytes(input: &[u8]) -> Result<NormalizedName, EncodingError> {
    let text =
        std::str::from_utf8(input).map_err(|e| EncodingError::InvalidUtf8(e.to_string()))?;
    normalize(text)
}

/// Normalizes a host name.
///
/// Strips surrounding whitespace and a trailing `:port`, lowercases, and
/// round-trips every label through punycode. One trailing empty label (from an
/// input ending in `.`) is dropped; empty labels anywhere else are kept so that
/// label validation can reject them.
///
/// Only raw punycode is applied: there is no UTS-46 mapping and no
/// nameprep/IDNA code point check, so a name IDNA would refuse (an unassigned
/// or noncharacter code point, say) is still encoded and may come out valid.
///
/// # Errors
///
/// Returns `EncodingError::Punycode` if a label cannot be encoded, or is an
/// `xn--` label that does not decode to the same punycode it was written in.
pub fn normalize(input: &str) -> Result<NormalizedName, EncodingError> {
    let host = strip_port(input.trim()).to_lowercase();

    let mut parts: Vec<&str> = host.split('.').collect();
    if parts.len() > 1 && parts.last().is_some_and(|last| last.is_empty()) {
        parts.pop();
    }

    let mut labels = Vec::with_capacity(parts.len());
    let mut unicode = Vec::with_capacity(parts.len());
    for part in parts {
        let ascii = encode_label(part)?;
        unicode.push(decode_label(&ascii)?);
        labels.push(ascii);
    }

    Ok(NormalizedName {
        text: unicode.join("."),
        ascii: labels.join("."),
        labels,
    })
}

/// Removes a trailing `:<digits>` port.
///
/// Only the segment after the last colon is considered, and only when it is
/// made entirely of digits; anything else is returned unchanged.
pub fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}

/// Encodes one lowercase label to its ASCII form.
///
/// ASCII labels are returned unchanged; anything else becomes `xn--` plus the
/// punycode encoding of its code points as given, without IDNA mapping.
pub fn encode_label(label: &str) -> Result<String, EncodingError> {
    if label.is_ascii() {
        return Ok(label.to_string());
    }
    punycode::encode_str(label)
        .map(|encoded| format!("{ACE_PREFIX}{encoded}"))
        .ok_or_else(|| EncodingError::Punycode {
            label: label.to_string(),
        })
}

/// Decodes one ASCII label to its Unicode form.
///
/// Non-`xn--` labels are returned unchanged. An `xn--` label must decode, and
/// re-encode to exactly the same punycode.
pub fn decode_label(label: &str) -> Result<String, EncodingError> {
    let Some(encoded) = label.strip_prefix(ACE_PREFIX) else {
        return Ok(label.to_string());
    };
    punycode::decode_to_string(encoded)
        .filter(|decoded| punycode::encode_str(decoded).as_deref() == Some(encoded))
        .ok_or_else(|| EncodingError::Punycode {
            label: label.to_string(),
        })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
