//! # Run Pipeline
//!
//! One invocation: load the template, resolve provenance if requested,
//! reconcile, report, and emit — stdout in simulate mode, the source file in
//! apply mode.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;

use cfntag_core::{MandatedTags, ProvenanceTags, ResourceStats, Template};
use cfntag_git::RepoContext;

/// Options for one reconciliation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// The template file to reconcile.
    pub filename: PathBuf,
    /// Overwrite the source file instead of printing to stdout.
    pub apply: bool,
    /// Append the gitrepo/gitfile provenance tags.
    pub git: bool,
}

/// Execute one run. Returns the process exit code: 0 on success; every
/// failure propagates as an error and exits 1.
pub fn run_tag(opts: &RunOptions, mandated: &MandatedTags) -> Result<u8> {
    let mut template = Template::load(&opts.filename)?;

    // Provenance is resolved before any mutation so a missing git context
    // aborts the run instead of leaving a partially tagged tree.
    let provenance = if opts.git {
        Some(resolve_provenance(&opts.filename)?)
    } else {
        None
    };

    let stats = template.reconcile(mandated, provenance.as_ref());
    print_report(&template, &stats, mandated);

    let rendered = template.to_yaml_string()?;
    if opts.apply {
        println!("Writing file...");
        std::fs::write(&opts.filename, rendered)
            .with_context(|| format!("failed to write {}", opts.filename.display()))?;
    } else {
        println!();
        print!("{rendered}");
    }

    Ok(0)
}

/// Resolve the two provenance values from the template's working tree.
pub fn resolve_provenance(filename: &Path) -> Result<ProvenanceTags> {
    let start_dir = filename.parent().filter(|p| !p.as_os_str().is_empty());
    let start_dir = match start_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let repo = RepoContext::discover(&start_dir)
        .context("--git requires the template to be inside a git working tree")?;
    let remote = repo
        .remote_url()
        .context("--git requires an origin remote")?;
    let file = repo.relative_path(filename)?;

    Ok(ProvenanceTags {
        repo: remote,
        file: file.display().to_string(),
    })
}

/// Per-resource change report, one header per eligible resource followed by
/// an ADD/CHANGE line per mandated key that was touched.
fn print_report(
    template: &Template,
    stats: &IndexMap<String, ResourceStats>,
    mandated: &MandatedTags,
) {
    let filename = template.path().display();
    for (name, resource_stats) in stats {
        let resource_type = template.document()["Resources"][name.as_str()]["Type"]
            .as_str()
            .unwrap_or("<unknown>");

        println!();
        println!("[{filename}][Resource] {name} => {resource_type}");

        for key in &resource_stats.updated {
            if let Some(value) = mandated.get(key) {
                println!("    [tag][CHANGE] {key:<15} => {value}");
            }
        }
        for key in &resource_stats.added {
            if let Some(value) = mandated.get(key) {
                println!("    [tag][   ADD] {key:<15} => {value}");
            }
        }
    }
}
