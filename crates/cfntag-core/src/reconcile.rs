//! # Reconciler
//!
//! Per-resource diff/merge between an existing tag list and the mandated tag
//! map. Pure: no I/O, no failure modes, no global state. The mandated map is
//! an explicit [`MandatedTags`] value so the engine stays testable without
//! environment mutation.
//!
//! ## Guarantees
//!
//! - Originally-present tags keep their relative order.
//! - Mandated keys absent from the original are appended in the map's
//!   enumeration order.
//! - The output key set is the union of existing and mandated keys.
//! - Idempotent: reconciling the output again yields no updates and no adds.
//! - Duplicate keys in the input are not merged; each pair independently
//!   matches against the mandate.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::tags::Tag;

/// The mandated tag set: an ordered key → value map sourced once per run.
///
/// Insertion order is preserved (it drives the append order of newly added
/// tags and the order of diagnostic output). Deserializes directly from a
/// JSON object of string → string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MandatedTags(IndexMap<String, String>);

impl MandatedTags {
    /// An empty mandate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mandated key/value pair, keeping first-insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up the mandated value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of mandated keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mandate is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for MandatedTags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of reconciling one resource's tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// The merged tag list to write back, in final order.
    pub tags: Vec<Tag>,
    /// Keys present in the original list, in encounter order.
    pub found: Vec<String>,
    /// Keys whose value was rewritten to the mandated value.
    pub updated: Vec<String>,
    /// Mandated keys appended because they were absent.
    pub added: Vec<String>,
}

/// Merge `existing` tags with the mandated map.
///
/// Existing tags are emitted in order, with mandated keys rewritten to the
/// mandated value when they differ (string comparison against the YAML
/// value; a non-string value never equals a mandated string and is
/// rewritten). Mandated keys not found are appended afterwards.
pub fn reconcile(existing: &[Tag], mandated: &MandatedTags) -> Reconciliation {
    let mut outcome = Reconciliation::default();

    for tag in existing {
        outcome.found.push(tag.key.clone());
        match mandated.get(&tag.key) {
            Some(want) if tag.value.as_str() != Some(want) => {
                outcome.tags.push(Tag::new(tag.key.as_str(), want));
                outcome.updated.push(tag.key.clone());
            }
            _ => outcome.tags.push(tag.clone()),
        }
    }

    for (key, value) in mandated.iter() {
        if !outcome.found.iter().any(|found| found == key) {
            outcome.tags.push(Tag::new(key, value));
            outcome.added.push(key.to_string());
        }
    }

    outcome
}
