//! Live binding of form values to their display targets.
//!
//! A field's display text is its trimmed value, or its placeholder with the
//! `"e.g., "` prefix stripped while the value is blank. Every display target
//! of a field always carries the same text.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use std::collections::HashMap;

use crate::consts::PLACEHOLDER_PREFIX;
use crate::field::{DisplayTarget, FieldId, FieldRegistry};
use crate::state::PosterState;

/// Text shown for a field given its raw input and placeholder.
#[must_use]
pub fn effective_value(raw: &str, placeholder: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        placeholder.replacen(PLACEHOLDER_PREFIX, "", 1)
    } else {
        trimmed.to_owned()
    }
}

/// Raw, untrimmed input text per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<FieldId, String>,
}

impl FormValues {
    pub fn set(&mut self, field: FieldId, raw: impl Into<String>) {
        self.values.insert(field, raw.into());
    }

    /// Raw value; empty when the field was never edited.
    #[must_use]
    pub fn raw(&self, field: FieldId) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn display(&self, field: FieldId) -> String {
        effective_value(self.raw(field), field.spec().placeholder)
    }
}

/// Text to write into one display target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetText {
    pub target: DisplayTarget,
    pub text: String,
}

/// Text for every display target of `field` under `state`.
#[must_use]
pub fn reconcile_field(state: &PosterState, registry: &FieldRegistry, field: FieldId) -> Vec<TargetText> {
    let text = state.display_value(field);
    registry
        .targets(field)
        .iter()
        .map(|target| TargetText { target: *target, text: text.clone() })
        .collect()
}

/// Text for every display target of every field.
#[must_use]
pub fn reconcile_all(state: &PosterState, registry: &FieldRegistry) -> Vec<TargetText> {
    FieldId::ALL
        .iter()
        .flat_map(|field| reconcile_field(state, registry, *field))
        .collect()
}
