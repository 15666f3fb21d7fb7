//! Error types for the application core
//!
//! Completeness failures are never errors here; a missing field is a
//! report entry. These types cover the genuine failure modes: malformed
//! patches, snapshot persistence faults, and camera acquisition.

use thiserror::Error;

use crate::form::keys::{FieldKey, FieldKind};

/// Errors from form-state updates
#[derive(Error, Debug)]
pub enum FormError {
    #[error("field '{field}' expects a {expected:?} value, patch supplied {found:?}")]
    KindMismatch {
        field: FieldKey,
        expected: FieldKind,
        found: FieldKind,
    },
}

/// Errors from the snapshot persistence boundary
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors from camera-stream acquisition
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera unavailable: {0}")]
    Unavailable(String),

    #[error("capture failed: {0}")]
    Failed(String),
}
