//! Merge command implementation.
//!
//! Each build directory is expected to contain a manifest at the same
//! relative path as the primary manifest; directories without one
//! contribute zero components. The primary file is rewritten in place.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

use crate::cli::MergeArgs;
use crate::error::{CliError, Result};
use verimeta_core::document::ManifestDocument;
use verimeta_core::merge::{MergeOutcome, merge_documents};
use verimeta_core::namespace::NamespaceContext;

/// Merge every build directory's manifest into the primary and rewrite
/// it, reporting the merged counts on `stderr`.
///
/// # Errors
///
/// Returns an error if:
/// - The primary manifest cannot be read or is malformed
/// - A secondary manifest that exists cannot be read or lacks component
///   key attributes
/// - The rewritten manifest cannot be written
/// - Writing the report to `stderr` fails
pub fn run_merge(args: &MergeArgs, stderr: &mut dyn Write) -> Result<()> {
    run_merge_with(args, stderr, secondary_manifest_path)
}

/// Internal implementation with injectable secondary-path resolution for
/// testability.
fn run_merge_with<F>(args: &MergeArgs, stderr: &mut dyn Write, resolve_secondary: F) -> Result<()>
where
    F: Fn(&Utf8Path, &Utf8Path) -> Utf8PathBuf,
{
    let namespace = NamespaceContext::default();
    let mut primary = ManifestDocument::parse_file(&args.manifest, namespace.clone())?;

    let mut secondaries = Vec::with_capacity(args.build_dirs.len());
    for build_dir in &args.build_dirs {
        let path = resolve_secondary(build_dir, &args.manifest);
        match ManifestDocument::parse_file_if_exists(&path, namespace.clone())? {
            Some(secondary) => secondaries.push(secondary),
            None => debug!("no manifest at {path}; contributing zero components"),
        }
    }

    let outcome = merge_documents(&mut primary, secondaries)?;
    primary.write_file(&args.manifest)?;
    report(&outcome, &args.manifest, stderr)
}

/// Locate a build directory's manifest: the primary manifest's path taken
/// relative to that directory.
#[must_use]
pub fn secondary_manifest_path(build_dir: &Utf8Path, manifest: &Utf8Path) -> Utf8PathBuf {
    build_dir.join(manifest)
}

fn report(outcome: &MergeOutcome, manifest: &Utf8Path, stderr: &mut dyn Write) -> Result<()> {
    writeln!(
        stderr,
        "Merged {} component(s) and {} artifact(s) into {manifest}",
        outcome.components_added, outcome.artifacts_added
    )
    .map_err(|source| CliError::WriteFailed { source })?;
    Ok(())
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
