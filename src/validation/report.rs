//! Missing-field report and its user-facing rendering

use std::collections::BTreeMap;

/// Shown when nothing is missing
pub const ALL_FIELDS_COMPLETE: &str = "All required fields are completed!";

/// Missing-field labels grouped by wizard step.
///
/// Buckets are created on first use and keep first-seen label order;
/// iteration is in ascending step order. Computed on demand, never
/// persisted (only its formatted rendering reaches the user).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingFieldReport {
    steps: BTreeMap<u8, Vec<String>>,
}

impl MissingFieldReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label to a step's bucket
    pub fn push(&mut self, step: u8, label: &str) {
        self.steps.entry(step).or_default().push(label.to_string());
    }

    /// True when no field is missing
    pub fn is_empty(&self) -> bool {
        self.steps.values().all(|labels| labels.is_empty())
    }

    /// Total number of missing fields
    pub fn len(&self) -> usize {
        self.steps.values().map(Vec::len).sum()
    }

    /// Steps with at least one missing field, ascending
    pub fn steps(&self) -> impl Iterator<Item = u8> + '_ {
        self.steps
            .iter()
            .filter(|(_, labels)| !labels.is_empty())
            .map(|(step, _)| *step)
    }

    /// Missing labels for one step, in registry order
    pub fn labels_for_step(&self, step: u8) -> &[String] {
        self.steps.get(&step).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All missing labels flattened in ascending step order
    pub fn flatten(&self) -> Vec<&str> {
        self.steps
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// Render a report as the confirmation-dialog message: one flat bullet
/// list in ascending step order, or the fixed completion message.
///
/// Steps sort the output but do not produce section headers; the dialog
/// expects a single flat list.
pub fn format_missing_fields(report: &MissingFieldReport) -> String {
    if report.is_empty() {
        return ALL_FIELDS_COMPLETE.to_string();
    }

    report
        .flatten()
        .iter()
        .map(|label| format!("\u{2022} {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_renders_completion_message() {
        assert_eq!(
            format_missing_fields(&MissingFieldReport::new()),
            ALL_FIELDS_COMPLETE
        );
    }

    #[test]
    fn bullets_flatten_in_ascending_step_order() {
        let mut report = MissingFieldReport::new();
        // inserted out of step order on purpose
        report.push(3, "Employer Name");
        report.push(1, "Card Type");
        report.push(3, "Net Monthly Income");
        report.push(2, "Full Name");

        assert_eq!(
            format_missing_fields(&report),
            "\u{2022} Card Type\n\u{2022} Full Name\n\u{2022} Employer Name\n\u{2022} Net Monthly Income"
        );
    }

    #[test]
    fn bucket_order_is_first_seen() {
        let mut report = MissingFieldReport::new();
        report.push(2, "Title");
        report.push(2, "Full Name");
        assert_eq!(report.labels_for_step(2), ["Title", "Full Name"]);
        assert_eq!(report.len(), 2);
        assert_eq!(report.steps().collect::<Vec<_>>(), vec![2]);
    }
}
