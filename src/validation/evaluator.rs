//! Completeness evaluator
//!
//! Walks the required-field registry against a form snapshot and
//! collects the labels of fields that are currently required but empty.

use tracing::debug;

use crate::form::state::FormState;
use crate::registry::REQUIRED_FIELDS;
use crate::validation::exemptions::is_exempt;
use crate::validation::report::MissingFieldReport;

/// Evaluate the whole registry against one snapshot.
///
/// Pure: same snapshot, same report. Exempt fields are skipped before
/// the emptiness check, so a hidden section never nags the user.
pub fn validate_required_fields(form: &FormState) -> MissingFieldReport {
    let mut report = MissingFieldReport::new();

    for entry in REQUIRED_FIELDS {
        if is_exempt(entry.key, form) {
            continue;
        }
        if form.get(entry.key).is_empty() {
            report.push(entry.step, entry.label);
        }
    }

    debug!(missing = report.len(), "completeness evaluation");
    report
}
