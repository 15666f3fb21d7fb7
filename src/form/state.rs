//! Application form state and the patch reducer
//!
//! `FormState` is the single source of truth for the wizard: one flat
//! record holding a value for every `FieldKey`. State is never mutated
//! in place; `apply` folds a `FormPatch` over a snapshot and returns the
//! next snapshot, which keeps the completeness evaluator trivially
//! testable against constructed states.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::form::keys::{FieldKey, FieldKind};

/// A single field value.
///
/// Untagged on the wire, so a snapshot serializes to plain JSON scalars
/// exactly as the hosting application stored them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    List(Vec<String>),
    Text(String),
}

impl FieldValue {
    /// The kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::List(_) => FieldKind::List,
        }
    }

    /// The default (initial) value for a kind
    pub fn empty(kind: FieldKind) -> FieldValue {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0.0),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::List => FieldValue::List(Vec::new()),
        }
    }

    /// Completeness semantics for the required-field check.
    ///
    /// A text value is empty after trimming; a number is empty iff it
    /// is zero, so a legitimate zero answer reads as unanswered
    /// (downstream minimum checks rely on zero being rejected); a list
    /// is empty with no elements; a flag is never empty, so an
    /// unchecked required checkbox passes this check (known gap,
    /// pinned by test).
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => *n == 0.0,
            FieldValue::Flag(_) => false,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// A partial update: named fields to replace, everything else untouched.
#[derive(Debug, Clone, Default)]
pub struct FormPatch {
    entries: Vec<(FieldKey, FieldValue)>,
}

impl FormPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field assignment to the patch
    pub fn set(mut self, key: FieldKey, value: impl Into<FieldValue>) -> Self {
        self.entries.push((key, value.into()));
        self
    }

    pub fn entries(&self) -> &[(FieldKey, FieldValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Snapshot of the whole application form.
///
/// Serializes to a flat JSON object keyed by wire names, matching the
/// persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<FieldKey, FieldValue>,
}

impl FormState {
    /// Fresh form with every field at its initial value.
    ///
    /// The requested credit limit starts at 100 000 and the signature
    /// date fields capture today's date, as the application form does on
    /// load; everything else starts empty.
    pub fn new() -> Self {
        Self::new_on(chrono::Local::now().date_naive())
    }

    /// Fresh form dated explicitly (deterministic construction for tests)
    pub fn new_on(today: NaiveDate) -> Self {
        let mut values = BTreeMap::new();
        for key in FieldKey::ALL {
            values.insert(key, FieldValue::empty(key.kind()));
        }
        values.insert(
            FieldKey::RequestedCreditLimit,
            FieldValue::Number(100_000.0),
        );
        let stamp = today.format("%d/%m/%Y").to_string();
        for key in [
            FieldKey::SignatureDate,
            FieldKey::SuppSignatureDate,
            FieldKey::AuthorizedOfficerDate,
        ] {
            values.insert(key, FieldValue::Text(stamp.clone()));
        }
        Self { values }
    }

    /// Current value of a field.
    ///
    /// Total: a key absent from a deserialized snapshot reads as its
    /// kind's initial value.
    pub fn get(&self, key: FieldKey) -> FieldValue {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| FieldValue::empty(key.kind()))
    }

    /// Text value of a field, or `""` when the field is not text
    pub fn text(&self, key: FieldKey) -> &str {
        match self.values.get(&key) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Numeric value of a field, or `0.0` when the field is not numeric
    pub fn number(&self, key: FieldKey) -> f64 {
        match self.values.get(&key) {
            Some(FieldValue::Number(n)) => *n,
            _ => 0.0,
        }
    }

    /// Flag value of a field, or `false` when the field is not a flag
    pub fn flag(&self, key: FieldKey) -> bool {
        match self.values.get(&key) {
            Some(FieldValue::Flag(b)) => *b,
            _ => false,
        }
    }

    /// List value of a field, or `&[]` when the field is not a list
    pub fn list(&self, key: FieldKey) -> &[String] {
        match self.values.get(&key) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    /// Fold a patch over this snapshot, producing the next snapshot.
    ///
    /// Each patch entry must carry the kind its key declares; a mismatch
    /// rejects the whole patch and leaves no partial update behind.
    pub fn apply(&self, patch: &FormPatch) -> Result<FormState, FormError> {
        let mut next = self.clone();
        for (key, value) in patch.entries() {
            if value.kind() != key.kind() {
                return Err(FormError::KindMismatch {
                    field: *key,
                    expected: key.kind(),
                    found: value.kind(),
                });
            }
            next.values.insert(*key, value.clone());
        }
        Ok(next)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
