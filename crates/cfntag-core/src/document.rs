//! # Document Walker
//!
//! Owns one parsed template for the life of a run: load, walk `Resources`,
//! reconcile each eligible resource's tags in place, serialize, write back.
//!
//! The walk mutates the YAML tree directly so that everything the engine
//! does not touch — resource order, unrelated properties, other top-level
//! sections — survives byte-comparably through re-serialization.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::catalog;
use crate::error::{TaggerError, TaggerResult};
use crate::reconcile::{reconcile, MandatedTags};
use crate::repair::repair_serialized_text;
use crate::tags::{self, Tag};

/// Tag key recording the repository remote URL.
pub const PROVENANCE_REPO_KEY: &str = "gitrepo";
/// Tag key recording the template's repo-relative path.
pub const PROVENANCE_FILE_KEY: &str = "gitfile";

/// The two provenance values appended to every eligible resource when
/// provenance mode is on. Resolved by the caller before the walk starts, so
/// a resolution failure aborts the run before any resource is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceTags {
    /// Remote URL of the repository, credentials stripped.
    pub repo: String,
    /// Template path relative to the repository root.
    pub file: String,
}

/// Per-resource record of what one walker pass observed and changed.
///
/// Reporting and test data only; never serialized into the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceStats {
    /// Tag keys present before reconciliation, in encounter order.
    pub found: Vec<String>,
    /// Keys whose value was rewritten to the mandated value.
    pub updated: Vec<String>,
    /// Mandated keys appended because they were absent.
    pub added: Vec<String>,
}

/// One CloudFormation template, parsed and exclusively owned by this run.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    doc: Value,
}

impl Template {
    /// Load and parse a template file.
    pub fn load(path: impl AsRef<Path>) -> TaggerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TaggerError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                TaggerError::Io(e)
            }
        })?;
        Self::parse(path, &content)
    }

    /// Parse template text, recording `path` for diagnostics and write-back.
    pub fn parse(path: impl AsRef<Path>, content: &str) -> TaggerResult<Self> {
        let path = path.as_ref();
        let doc: Value = serde_yaml::from_str(content).map_err(|source| TaggerError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// The path this template was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read access to the parsed tree.
    pub fn document(&self) -> &Value {
        &self.doc
    }

    /// Reconcile every eligible resource against the mandated tag map,
    /// mutating the tree in place. Returns per-resource statistics keyed by
    /// logical name, in document order.
    ///
    /// When `provenance` is set, the two provenance tags are appended to each
    /// eligible resource after the mandated diff — unconditionally, never
    /// deduplicated against prior runs.
    pub fn reconcile(
        &mut self,
        mandated: &MandatedTags,
        provenance: Option<&ProvenanceTags>,
    ) -> IndexMap<String, ResourceStats> {
        let mut stats = IndexMap::new();

        let Some(resources) = self
            .doc
            .get_mut("Resources")
            .and_then(Value::as_mapping_mut)
        else {
            tracing::debug!("template has no Resources mapping; nothing to do");
            return stats;
        };

        for (name, resource) in resources.iter_mut() {
            let Some(name) = name.as_str() else { continue };
            let Some(resource_type) = resource.get("Type").and_then(Value::as_str) else {
                tracing::debug!(resource = name, "skipping resource without a string Type");
                continue;
            };
            if !catalog::supports_tags(resource_type) {
                tracing::debug!(
                    resource = name,
                    resource_type,
                    "type does not support tags; skipping"
                );
                continue;
            }
            let resource_type = resource_type.to_string();

            let existing_value = resource.get("Properties").and_then(|p| p.get("Tags"));
            let had_tags = existing_value.is_some();
            let existing: Vec<Tag> = existing_value.map(tags::normalize).unwrap_or_default();

            let outcome = reconcile(&existing, mandated);
            let mut merged = outcome.tags;

            if let Some(prov) = provenance {
                merged.push(Tag::new(PROVENANCE_REPO_KEY, prov.repo.as_str()));
                merged.push(Tag::new(PROVENANCE_FILE_KEY, prov.file.as_str()));
            }

            // Write back unless the resource had no tags and gained none: a
            // resource without Properties must not grow an empty block.
            if had_tags || !merged.is_empty() {
                write_tags(resource, tags::to_record_list(&merged));
            }

            tracing::info!(
                resource = name,
                resource_type = resource_type.as_str(),
                found = outcome.found.len(),
                updated = outcome.updated.len(),
                added = outcome.added.len(),
                "reconciled resource"
            );

            stats.insert(
                name.to_string(),
                ResourceStats {
                    found: outcome.found,
                    updated: outcome.updated,
                    added: outcome.added,
                },
            );
        }

        stats
    }

    /// Serialize the tree: explicit `---` document start, 2-space block
    /// indentation, tag blocks of JSON-schema types repaired to map form.
    pub fn to_yaml_string(&self) -> TaggerResult<String> {
        let body = serde_yaml::to_string(&self.doc)?;
        let rendered = format!("---\n{body}");
        Ok(repair_serialized_text(&rendered))
    }

    /// Overwrite the source file with the re-serialized template.
    pub fn save(&self) -> TaggerResult<()> {
        let rendered = self.to_yaml_string()?;
        std::fs::write(&self.path, rendered)?;
        Ok(())
    }
}

/// Replace (or create) `Properties.Tags` on one resource node.
///
/// A missing or non-mapping `Properties` is replaced by a fresh mapping
/// holding only `Tags` — created once per resource, not once per tag.
fn write_tags(resource: &mut Value, tag_list: Value) {
    let tags_key = Value::from("Tags");
    match resource.get_mut("Properties").and_then(Value::as_mapping_mut) {
        Some(properties) => {
            properties.insert(tags_key, tag_list);
        }
        None => {
            let mut properties = Mapping::new();
            properties.insert(tags_key, tag_list);
            if let Some(resource) = resource.as_mapping_mut() {
                resource.insert(Value::from("Properties"), Value::Mapping(properties));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandate(pairs: &[(&str, &str)]) -> MandatedTags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn template(body: &str) -> Template {
        Template::parse("test.yaml", body).unwrap()
    }

    const BUCKET_WITH_OWNER: &str = "\
Resources:
  Storage:
    Type: AWS::S3::Bucket
    Properties:
      Tags:
        - Key: Owner
          Value: bob
";

    #[test]
    fn adds_missing_mandated_tag() {
        let mut tpl = template(BUCKET_WITH_OWNER);
        let stats = tpl.reconcile(&mandate(&[("Creator", "alice")]), None);

        assert_eq!(stats["Storage"].added, vec!["Creator"]);
        assert!(stats["Storage"].updated.is_empty());

        let tags = tpl.document()["Resources"]["Storage"]["Properties"]["Tags"]
            .as_sequence()
            .unwrap()
            .clone();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0]["Key"], Value::from("Owner"));
        assert_eq!(tags[1]["Key"], Value::from("Creator"));
        assert_eq!(tags[1]["Value"], Value::from("alice"));
    }

    #[test]
    fn updates_mismatched_mandated_tag() {
        let mut tpl = template(
            "Resources:\n  Storage:\n    Type: AWS::S3::Bucket\n    Properties:\n      Tags:\n        - Key: Creator\n          Value: bob\n",
        );
        let stats = tpl.reconcile(&mandate(&[("Creator", "alice")]), None);

        assert_eq!(stats["Storage"].updated, vec!["Creator"]);
        assert!(stats["Storage"].added.is_empty());

        let tags = &tpl.document()["Resources"]["Storage"]["Properties"]["Tags"];
        assert_eq!(tags[0]["Value"], Value::from("alice"));
    }

    #[test]
    fn resource_without_properties_gains_block_once() {
        let mut tpl = template("Resources:\n  Storage:\n    Type: AWS::S3::Bucket\n");
        let stats = tpl.reconcile(&mandate(&[("Creator", "alice")]), None);

        assert_eq!(stats["Storage"].added, vec!["Creator"]);
        let tags = tpl.document()["Resources"]["Storage"]["Properties"]["Tags"]
            .as_sequence()
            .unwrap()
            .clone();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0]["Key"], Value::from("Creator"));
    }

    #[test]
    fn properties_without_tags_gets_full_mandate() {
        let mut tpl = template(
            "Resources:\n  Storage:\n    Type: AWS::S3::Bucket\n    Properties:\n      BucketName: data\n",
        );
        let stats = tpl.reconcile(&mandate(&[("Creator", "alice"), ("Team", "ops")]), None);

        assert_eq!(stats["Storage"].added, vec!["Creator", "Team"]);
        // Existing properties survive.
        let props = &tpl.document()["Resources"]["Storage"]["Properties"];
        assert_eq!(props["BucketName"], Value::from("data"));
        assert_eq!(props["Tags"].as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn ineligible_resource_is_untouched() {
        let mut tpl = template(
            "Resources:\n  Wait:\n    Type: AWS::CloudFormation::WaitCondition\n    Properties:\n      Tags:\n        - Key: keep\n          Value: asis\n",
        );
        let before = tpl.document().clone();
        let stats = tpl.reconcile(&mandate(&[("Creator", "alice")]), None);

        assert!(stats.is_empty());
        assert_eq!(tpl.document(), &before);
    }

    #[test]
    fn mapping_form_tags_are_rewritten_as_records() {
        let mut tpl = template(
            "Resources:\n  Param:\n    Type: AWS::SSM::Parameter\n    Properties:\n      Tags:\n        team: ops\n",
        );
        tpl.reconcile(&mandate(&[("Creator", "alice")]), None);

        let tags = tpl.document()["Resources"]["Param"]["Properties"]["Tags"]
            .as_sequence()
            .unwrap()
            .clone();
        assert_eq!(tags[0]["Key"], Value::from("team"));
        assert_eq!(tags[0]["Value"], Value::from("ops"));
        assert_eq!(tags[1]["Key"], Value::from("Creator"));
    }

    #[test]
    fn provenance_tags_are_appended_last() {
        let mut tpl = template(BUCKET_WITH_OWNER);
        let prov = ProvenanceTags {
            repo: "https://github.com/acme/infra".to_string(),
            file: "templates/app.yaml".to_string(),
        };
        tpl.reconcile(&mandate(&[("Creator", "alice")]), Some(&prov));

        let tags = tpl.document()["Resources"]["Storage"]["Properties"]["Tags"]
            .as_sequence()
            .unwrap()
            .clone();
        let keys: Vec<&str> = tags
            .iter()
            .map(|t| t["Key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["Owner", "Creator", "gitrepo", "gitfile"]);
        assert_eq!(
            tags[2]["Value"],
            Value::from("https://github.com/acme/infra")
        );
    }

    #[test]
    fn provenance_reaches_resource_without_properties() {
        let mut tpl = template("Resources:\n  Storage:\n    Type: AWS::S3::Bucket\n");
        let prov = ProvenanceTags {
            repo: "https://github.com/acme/infra".to_string(),
            file: "app.yaml".to_string(),
        };
        tpl.reconcile(&MandatedTags::new(), Some(&prov));

        let tags = tpl.document()["Resources"]["Storage"]["Properties"]["Tags"]
            .as_sequence()
            .unwrap()
            .clone();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn empty_mandate_leaves_untagged_resource_bare() {
        let mut tpl = template("Resources:\n  Storage:\n    Type: AWS::S3::Bucket\n");
        tpl.reconcile(&MandatedTags::new(), None);
        assert!(tpl.document()["Resources"]["Storage"]
            .get("Properties")
            .is_none());
    }

    #[test]
    fn missing_resources_section_is_a_no_op() {
        let mut tpl = template("Description: empty template\n");
        let stats = tpl.reconcile(&mandate(&[("Creator", "alice")]), None);
        assert!(stats.is_empty());
    }

    #[test]
    fn stats_follow_document_order() {
        let mut tpl = template(
            "Resources:\n  Zebra:\n    Type: AWS::S3::Bucket\n  Alpha:\n    Type: AWS::S3::Bucket\n",
        );
        let stats = tpl.reconcile(&mandate(&[("Creator", "alice")]), None);
        let names: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
    }

    #[test]
    fn serializes_with_document_start_marker() {
        let tpl = template(BUCKET_WITH_OWNER);
        let rendered = tpl.to_yaml_string().unwrap();
        assert!(rendered.starts_with("---\n"));
        assert!(rendered.contains("Type: AWS::S3::Bucket"));
    }

    #[test]
    fn second_pass_changes_nothing() {
        let mandated = mandate(&[("Creator", "alice"), ("Team", "ops")]);
        let mut tpl = template(BUCKET_WITH_OWNER);
        tpl.reconcile(&mandated, None);
        let after_first = tpl.to_yaml_string().unwrap();

        let mut again = Template::parse("test.yaml", &after_first).unwrap();
        let stats = again.reconcile(&mandated, None);
        assert!(stats.values().all(|s| s.updated.is_empty() && s.added.is_empty()));
        assert_eq!(again.to_yaml_string().unwrap(), after_first);
    }

    #[test]
    fn load_missing_file_is_file_not_found() {
        let err = Template::load("/tmp/cfntag-no-such-template.yaml").unwrap_err();
        assert!(matches!(err, TaggerError::FileNotFound { .. }));
    }

    #[test]
    fn load_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "Resources: [unclosed\n").unwrap();
        let err = Template::load(&path).unwrap_err();
        assert!(matches!(err, TaggerError::YamlParse { .. }));
    }

    #[test]
    fn save_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tpl.yaml");
        std::fs::write(&path, BUCKET_WITH_OWNER).unwrap();

        let mut tpl = Template::load(&path).unwrap();
        tpl.reconcile(&mandate(&[("Creator", "alice")]), None);
        tpl.save().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("---\n"));
        assert!(written.contains("Creator"));
        assert!(written.contains("alice"));
    }
}
