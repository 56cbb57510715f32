//! # Output Repair
//!
//! Post-processes serialized template text. Resource types whose schema
//! declares `Tags` as a JSON map must not carry record-form tag blocks, but
//! the YAML engine has no per-node style control, so the walker writes every
//! tag list in record form and this pass rewrites the affected blocks:
//!
//! ```yaml
//! Tags:
//! - Key: team
//!   Value: ops
//! ```
//!
//! becomes
//!
//! ```yaml
//! Tags:
//!   team: ops
//! ```
//!
//! The pass is a single forward scan coupled to the engine's exact output
//! conventions (one `Key`/`Value` pair per two lines, fixed indentation). A
//! different serializer means re-deriving the line rules or dropping this
//! step; everything lives behind [`repair_serialized_text`] so that swap is
//! local.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog;

/// A resource `Type:` field line carrying an AWS type identifier.
static TYPE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s+Type:\s*['"]?AWS"#).expect("valid regex"));

/// A single bare identifier followed by a colon: a new key opened at the
/// current block level, meaning any tag block has ended.
static BARE_KEY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+\w+:\s*$").expect("valid regex"));

/// Rewrite record-form tag blocks to map form for resource types in the
/// JSON-encoded subset, and drop a blank line immediately preceding any
/// `Tags:` block.
///
/// Best-effort by design: lines that do not match the engine's formatting
/// conventions pass through unchanged.
pub fn repair_serialized_text(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut inside_json_resource = false;
    let mut inside_tag_block = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim_start();

        if TYPE_LINE.is_match(line) {
            // Everything after the first colon is the type identifier.
            let resource_type = line
                .splitn(2, ':')
                .nth(1)
                .unwrap_or("")
                .trim()
                .trim_matches(|c| c == '\'' || c == '"');
            inside_json_resource = catalog::uses_json_tags(resource_type);
        }

        // A fresh bare key ends the tag block; `Tags:` itself then re-enters.
        if BARE_KEY_LINE.is_match(line) {
            inside_tag_block = false;
        }
        if trimmed.starts_with("Tags:") {
            inside_tag_block = true;
            if out.last().is_some_and(|prev| prev.is_empty()) {
                out.pop();
            }
        }

        if inside_tag_block && inside_json_resource && trimmed.starts_with("- Key:") {
            if let Some(folded) = fold_record_pair(line, lines.get(i + 1).copied()) {
                out.push(folded);
                i += 2;
                continue;
            }
        }

        out.push(line.to_string());
        i += 1;
    }

    out.join("\n")
}

/// Fold a `- Key: <k>` line and its `Value: <v>` follower into a single
/// `<k>: <v>` map entry, indented one level below where the record sat.
fn fold_record_pair(key_line: &str, value_line: Option<&str>) -> Option<String> {
    let value_line = value_line?;
    let trimmed = key_line.trim_start();
    let indent = &key_line[..key_line.len() - trimmed.len()];
    let key = trimmed.strip_prefix("- Key:")?.trim();
    let value = value_line.splitn(2, ':').nth(1)?.trim();
    Some(format!("{indent}  {key}: {value}"))
}
