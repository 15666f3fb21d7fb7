//! Form schema, state snapshots, and derived values

pub mod derived;
pub mod keys;
pub mod state;

pub use keys::{FieldGroup, FieldKey, FieldKind};
pub use state::{FieldValue, FormPatch, FormState};
