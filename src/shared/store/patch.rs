// src/shared/store/patch.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics for nullable fields)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear the value
// - Value(v): replace with v
//
// Serde behavior (recommended usage):
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    /// Merge into an optional field in place.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

/// Replace `target` when the patch carries a value. Used for required fields,
/// which are `Option<T>` in patch structs (omitted => keep).
pub fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}
