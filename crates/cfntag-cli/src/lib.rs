//! # cfntag-cli — the `cfntag` binary
//!
//! Ties the engine to the outside world: argument parsing, mandated-tag
//! configuration, provenance resolution, the per-resource change report, and
//! the simulate/apply output modes.
//!
//! ```bash
//! CFN_TAGS='{"Creator": "alice", "Team": "ops"}' cfntag -f template.yaml
//! cfntag -f template.yaml --apply --git
//! ```
//!
//! Any inability to establish a complete configuration — unreadable or
//! malformed template, missing mandate, unresolvable git context under
//! `--git` — aborts the whole run. The tool never partially tags.

pub mod config;
pub mod run;
