//! Digital credit card application core
//!
//! The engine behind a six-step application wizard: a flat form-state
//! snapshot updated by patches, a required-field registry with
//! conditional exemption rules, a completeness evaluator that tells the
//! user what is still missing, and a document gate that decides whether
//! the final step submits or saves as incomplete.
//!
//! ## Quick start
//!
//! ```rust
//! use ccapp::form::{FieldKey, FormPatch, FormState};
//! use ccapp::validation::{format_missing_fields, validate_required_fields};
//!
//! let form = FormState::new()
//!     .apply(&FormPatch::new().set(FieldKey::CardType, "Visa Gold"))
//!     .unwrap();
//!
//! let report = validate_required_fields(&form);
//! assert!(!report.labels_for_step(2).is_empty());
//! println!("{}", format_missing_fields(&report));
//! ```

// Core error handling
pub mod error;

// Form schema, state snapshots, derived values
pub mod form;

// Required-field registry
pub mod registry;

// Completeness validation: exemptions, evaluator, report
pub mod validation;

// Document-completeness gate for the submit decision
pub mod documents;

// NIC number format classification
pub mod nic;

// Wizard step state machine
pub mod wizard;

// Snapshot persistence boundary
pub mod store;

// Camera acquisition boundary
pub mod capture;

// Public re-exports for the common call paths
pub use error::{CaptureError, FormError, StoreError};
pub use form::{FieldGroup, FieldKey, FieldKind, FieldValue, FormPatch, FormState};
pub use registry::{RequiredFieldSpec, REQUIRED_FIELDS};
pub use validation::{
    format_missing_fields, is_exempt, validate_required_fields, MissingFieldReport,
    ALL_FIELDS_COMPLETE,
};
pub use documents::{is_complete, missing_documents, required_documents, DocumentRequirement};
pub use store::{ApplicationSnapshot, ApplicationStatus, MemoryStore, SnapshotStore, STORE_KEY};
pub use wizard::{Advance, ApplicationWizard, FinalAction, WizardStep};
