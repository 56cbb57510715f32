//! # Tag Normalizer
//!
//! CloudFormation accepts two equivalent shapes for a resource's tag list:
//!
//! ```yaml
//! Tags:
//!   - Key: team
//!     Value: ops
//! ```
//!
//! or the map form used by types whose schema declares tags as JSON:
//!
//! ```yaml
//! Tags:
//!   team: ops
//! ```
//!
//! [`normalize`] folds both into one canonical ordered `Vec<Tag>`. Values are
//! passed through as arbitrary YAML — intrinsic functions like `!Ref` or
//! `Fn::Sub` survive untouched. Duplicate keys are not validated; each pair
//! survives as its own entry.

use serde_yaml::{Mapping, Value};

/// One key/value tag pair.
///
/// The key is always a string; the value is whatever scalar or structure the
/// template carried (or the mandated string during reconciliation).
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// The tag key.
    pub key: String,
    /// The tag value, unmodified from the source document.
    pub value: Value,
}

impl Tag {
    /// Build a tag from a key and any YAML-convertible value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Render this tag as a `{Key, Value}` record mapping.
    pub fn to_record(&self) -> Value {
        let mut record = Mapping::new();
        record.insert(Value::from("Key"), Value::from(self.key.as_str()));
        record.insert(Value::from("Value"), self.value.clone());
        Value::Mapping(record)
    }
}

/// Fold either accepted tag-list shape into canonical `(key, value)` pairs,
/// preserving encounter order.
///
/// Entries that fit neither shape (a sequence element without a `Key` field,
/// a mapping entry with a non-string key) are dropped with a debug log; the
/// walker then treats whatever remains as the resource's tag list.
pub fn normalize(tags: &Value) -> Vec<Tag> {
    match tags {
        Value::Sequence(records) => records
            .iter()
            .filter_map(|record| {
                let key = record.get("Key").and_then(Value::as_str);
                match key {
                    Some(key) => {
                        let value = record.get("Value").cloned().unwrap_or(Value::Null);
                        Some(Tag::new(key, value))
                    }
                    None => {
                        tracing::debug!(?record, "skipping tag record without a string Key");
                        None
                    }
                }
            })
            .collect(),
        Value::Mapping(map) => map
            .iter()
            .filter_map(|(key, value)| match key.as_str() {
                Some(key) => Some(Tag::new(key, value.clone())),
                None => {
                    tracing::debug!(?key, "skipping tag entry with non-string key");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Render a tag list as a YAML sequence of `{Key, Value}` records — the
/// shape every resource is written back in.
pub fn to_record_list(tags: &[Tag]) -> Value {
    Value::Sequence(tags.iter().map(Tag::to_record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn normalizes_record_sequence() {
        let tags = normalize(&yaml("- Key: team\n  Value: ops\n- Key: env\n  Value: prod"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], Tag::new("team", "ops"));
        assert_eq!(tags[1], Tag::new("env", "prod"));
    }

    #[test]
    fn normalizes_plain_mapping() {
        let tags = normalize(&yaml("team: ops\nenv: prod"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], Tag::new("team", "ops"));
        assert_eq!(tags[1], Tag::new("env", "prod"));
    }

    #[test]
    fn both_shapes_normalize_identically() {
        let records = normalize(&yaml("- Key: a\n  Value: '1'\n- Key: b\n  Value: '2'"));
        let mapping = normalize(&yaml("a: '1'\nb: '2'"));
        assert_eq!(records, mapping);
    }

    #[test]
    fn record_without_value_becomes_null() {
        let tags = normalize(&yaml("- Key: orphan"));
        assert_eq!(tags, vec![Tag::new("orphan", Value::Null)]);
    }

    #[test]
    fn duplicate_keys_survive_as_separate_pairs() {
        let tags = normalize(&yaml("- Key: dup\n  Value: one\n- Key: dup\n  Value: two"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].value, Value::from("one"));
        assert_eq!(tags[1].value, Value::from("two"));
    }

    #[test]
    fn intrinsic_values_pass_through() {
        let tags = normalize(&yaml("- Key: stack\n  Value:\n    Ref: AWS::StackName"));
        assert_eq!(tags.len(), 1);
        assert!(tags[0].value.is_mapping());
    }

    #[test]
    fn scalar_input_normalizes_to_empty() {
        assert!(normalize(&Value::from("not tags")).is_empty());
        assert!(normalize(&Value::Null).is_empty());
    }

    #[test]
    fn record_round_trip() {
        let tag = Tag::new("team", "ops");
        let record = tag.to_record();
        assert_eq!(record.get("Key").and_then(Value::as_str), Some("team"));
        assert_eq!(record.get("Value").and_then(Value::as_str), Some("ops"));
    }

    #[test]
    fn to_record_list_preserves_order() {
        let list = to_record_list(&[Tag::new("b", "2"), Tag::new("a", "1")]);
        let seq = list.as_sequence().unwrap();
        assert_eq!(seq[0].get("Key").and_then(Value::as_str), Some("b"));
        assert_eq!(seq[1].get("Key").and_then(Value::as_str), Some("a"));
    }
}
