//! Field-completeness validation
//!
//! The exemption rules decide what is currently required, the evaluator
//! collects what is required but empty, and the report module renders
//! the result for the save-incomplete confirmation dialog.

pub mod evaluator;
pub mod exemptions;
pub mod report;

pub use evaluator::validate_required_fields;
pub use exemptions::is_exempt;
pub use report::{format_missing_fields, MissingFieldReport, ALL_FIELDS_COMPLETE};
