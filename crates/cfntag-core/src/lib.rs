//! # cfntag-core — Tag Reconciliation Engine
//!
//! Rewrites CloudFormation templates so that a mandated set of key/value tags
//! is present on every taggable resource, preserving unrelated tags, resource
//! ordering, and as much of the original document shape as the YAML engine
//! round-trips.
//!
//! ## Pipeline
//!
//! 1. [`Template::load`] parses the template into an ordered YAML tree.
//! 2. [`Template::reconcile`] walks `Resources`, normalizes each eligible
//!    resource's tag list, diffs it against the [`MandatedTags`] map, and
//!    writes the merged list back in `{Key, Value}` record form.
//! 3. [`Template::to_yaml_string`] serializes the tree and applies
//!    [`repair::repair_serialized_text`] so that resource types whose tag
//!    property is a JSON map in the CloudFormation schema come out in map
//!    form rather than record form.
//!
//! The mandated tag map is an explicit value threaded through every call;
//! nothing in this crate reads process environment or global state.

pub mod catalog;
pub mod document;
pub mod error;
pub mod reconcile;
pub mod repair;
pub mod tags;

pub use document::{ProvenanceTags, ResourceStats, Template};
pub use error::{TaggerError, TaggerResult};
pub use reconcile::{reconcile, MandatedTags, Reconciliation};
pub use tags::Tag;
