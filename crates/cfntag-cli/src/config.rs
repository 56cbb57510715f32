//! # Mandated-Tag Configuration
//!
//! Resolves the mandated tag map once at startup, in precedence order:
//!
//! 1. A `.cfntaggerrc` file in the git working-tree root (or the start
//!    directory when not inside a repository): INI-style, tags read from its
//!    `[Tags]` section in file order. A config file without that section is
//!    a fatal error, not a fallthrough.
//! 2. The `CFN_TAGS` environment variable: a JSON object of string → string.
//!
//! No source at all, or a malformed one, aborts the run.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use cfntag_core::MandatedTags;
use cfntag_git::RepoContext;

/// Config file searched for at the repository root.
pub const CONFIG_FILE_NAME: &str = ".cfntaggerrc";

/// Environment variable consulted when no config file exists.
pub const TAGS_ENV_VAR: &str = "CFN_TAGS";

/// Resolve the mandated tag map for this run.
pub fn load_mandated_tags(start_dir: &Path) -> Result<MandatedTags> {
    let config_path = config_file_path(start_dir);
    if config_path.is_file() {
        tracing::info!(path = %config_path.display(), "using mandated tags from config file");
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        return parse_tags_section(&content)
            .with_context(|| format!("in config file {}", config_path.display()));
    }

    tracing::info!("using mandated tags from ${TAGS_ENV_VAR}");
    let raw = std::env::var(TAGS_ENV_VAR).map_err(|_| {
        anyhow!("{TAGS_ENV_VAR} is not set and no {CONFIG_FILE_NAME} was found")
    })?;
    parse_tags_json(&raw)
}

/// Where the config file would live: the repository root when `start_dir` is
/// inside a working tree, otherwise `start_dir` itself.
pub fn config_file_path(start_dir: &Path) -> PathBuf {
    match RepoContext::discover(start_dir) {
        Ok(repo) => repo.root().join(CONFIG_FILE_NAME),
        Err(_) => start_dir.join(CONFIG_FILE_NAME),
    }
}

/// Parse a JSON object of string → string into the mandated map, preserving
/// the object's textual key order.
pub fn parse_tags_json(raw: &str) -> Result<MandatedTags> {
    serde_json::from_str(raw)
        .with_context(|| format!("malformed {TAGS_ENV_VAR} JSON (expected an object of string to string)"))
}

/// Extract the `[Tags]` section of an INI-style config file.
///
/// Recognized syntax is deliberately small: `[Section]` headers, `key = value`
/// or `key: value` entries, `#`/`;` comment lines. Keys are case-sensitive
/// and kept in file order.
pub fn parse_tags_section(content: &str) -> Result<MandatedTags> {
    let mut tags = MandatedTags::new();
    let mut in_tags_section = false;
    let mut section_seen = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_tags_section = header.trim() == "Tags";
            section_seen |= in_tags_section;
            continue;
        }
        if in_tags_section {
            if let Some((key, value)) = line.split_once('=').or_else(|| line.split_once(':')) {
                tags.insert(key.trim(), value.trim());
            }
        }
    }

    if !section_seen {
        bail!("no [Tags] section defined");
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_parses_in_order() {
        let tags = parse_tags_json(r#"{"Creator": "alice", "Team": "ops"}"#).unwrap();
        let pairs: Vec<(&str, &str)> = tags.iter().collect();
        assert_eq!(pairs, vec![("Creator", "alice"), ("Team", "ops")]);
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(parse_tags_json("{Creator: alice").is_err());
    }

    #[test]
    fn non_string_values_are_fatal() {
        assert!(parse_tags_json(r#"{"Creator": 1}"#).is_err());
        assert!(parse_tags_json(r#"["Creator"]"#).is_err());
    }

    #[test]
    fn tags_section_parses_in_file_order() {
        let tags = parse_tags_section(
            "[Tags]\nCreator = alice\nTeam = ops\n\n[Other]\nIgnored = yes\n",
        )
        .unwrap();
        let pairs: Vec<(&str, &str)> = tags.iter().collect();
        assert_eq!(pairs, vec![("Creator", "alice"), ("Team", "ops")]);
    }

    #[test]
    fn colon_delimiter_and_comments_are_accepted() {
        let tags = parse_tags_section(
            "# mandated tags\n[Tags]\nCreator: alice\n; trailing comment\n",
        )
        .unwrap();
        assert_eq!(tags.get("Creator"), Some("alice"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let tags = parse_tags_section("[Tags]\nCreator = alice\ncreator = bob\n").unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("creator"), Some("bob"));
    }

    #[test]
    fn missing_tags_section_is_fatal() {
        let err = parse_tags_section("[Other]\nCreator = alice\n").unwrap_err();
        assert!(err.to_string().contains("[Tags]"));
    }

    #[test]
    fn empty_tags_section_is_allowed() {
        let tags = parse_tags_section("[Tags]\n").unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn config_file_at_start_dir_wins_outside_a_repo() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[Tags]\nCreator = alice\n",
        )
        .unwrap();

        let tags = load_mandated_tags(dir.path()).unwrap();
        assert_eq!(tags.get("Creator"), Some("alice"));
    }

    #[test]
    fn config_file_without_tags_section_does_not_fall_through() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[Other]\nx = y\n").unwrap();

        assert!(load_mandated_tags(dir.path()).is_err());
    }
}
