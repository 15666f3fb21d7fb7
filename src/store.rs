//! Snapshot persistence boundary
//!
//! The whole application is serialized under one fixed key and
//! overwritten wholesale on every save. The incomplete-save path runs
//! behind a single simulated network delay with no retry, no
//! cancellation, and no failure path of its own.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;
use crate::form::state::FormState;

/// Fixed key the snapshot is written under
pub const STORE_KEY: &str = "creditCardApplication";

/// Simulated network delay before an incomplete save lands
pub const SAVE_DELAY: Duration = Duration::from_secs(1);

/// Terminal status of a saved application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Incomplete,
    Submitted,
}

/// What gets persisted: the full form, a status tag, a timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSnapshot {
    pub form_data: FormState,
    pub status: ApplicationStatus,
    pub saved_at: DateTime<Utc>,
}

/// String key-value storage the snapshot lands in
pub trait SnapshotStore {
    fn put(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn put(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

fn write_snapshot<S: SnapshotStore>(
    store: &mut S,
    form: &FormState,
    status: ApplicationStatus,
) -> Result<ApplicationSnapshot, StoreError> {
    let snapshot = ApplicationSnapshot {
        form_data: form.clone(),
        status,
        saved_at: Utc::now(),
    };
    let payload = serde_json::to_string(&snapshot)?;
    store.put(STORE_KEY, &payload)?;
    info!(?status, "application snapshot written");
    Ok(snapshot)
}

/// Save the application as incomplete after the simulated delay.
///
/// An abandoned future simply never persists; there is nothing to roll
/// back.
pub async fn save_incomplete<S: SnapshotStore>(
    store: &mut S,
    form: &FormState,
    delay: Duration,
) -> Result<ApplicationSnapshot, StoreError> {
    tokio::time::sleep(delay).await;
    write_snapshot(store, form, ApplicationStatus::Incomplete)
}

/// Submit the application immediately
pub fn submit<S: SnapshotStore>(
    store: &mut S,
    form: &FormState,
) -> Result<ApplicationSnapshot, StoreError> {
    write_snapshot(store, form, ApplicationStatus::Submitted)
}

/// Read back the stored snapshot, if any
pub fn load<S: SnapshotStore>(store: &S) -> Result<Option<ApplicationSnapshot>, StoreError> {
    match store.get(STORE_KEY) {
        Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
        None => Ok(None),
    }
}
