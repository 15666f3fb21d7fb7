//! Sri Lankan NIC number format classification
//!
//! Two formats are accepted: the old format of 9 digits followed by a V
//! or X (case-insensitive), and the new format of exactly 12 digits.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static OLD_FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}[VvXx]$").unwrap());

static NEW_FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

/// Which accepted format an NIC matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NicFormat {
    Old,
    New,
}

/// Outcome of NIC classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NicValidation {
    pub valid: bool,
    pub format: Option<NicFormat>,
    pub message: &'static str,
}

/// Classify an NIC number. Input is trimmed first; no formats beyond
/// the two fixed ones are accepted.
pub fn validate(nic: &str) -> NicValidation {
    let trimmed = nic.trim();

    if trimmed.is_empty() {
        return NicValidation {
            valid: false,
            format: None,
            message: "NIC number is required",
        };
    }

    if OLD_FORMAT_RE.is_match(trimmed) {
        return NicValidation {
            valid: true,
            format: Some(NicFormat::Old),
            message: "Valid old NIC format",
        };
    }

    if NEW_FORMAT_RE.is_match(trimmed) {
        return NicValidation {
            valid: true,
            format: Some(NicFormat::New),
            message: "Valid new NIC format",
        };
    }

    NicValidation {
        valid: false,
        format: None,
        message: "Invalid NIC format. Use either 9 digits + V/X (old) or 12 digits (new)",
    }
}

/// Canonical entry form: uppercase the V/X suffix
pub fn normalize(nic: &str) -> String {
    nic.to_uppercase()
}
