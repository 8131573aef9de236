//! Export command implementation.
//!
//! Parses a verification manifest and prints one JSON record per artifact
//! to the given output stream, for consumption by a content-addressed
//! fetch pipeline.

use std::io::Write;

use crate::cli::ExportArgs;
use crate::error::{CliError, Result};
use verimeta_core::document::ManifestDocument;
use verimeta_core::export::export_artifacts;
use verimeta_core::namespace::NamespaceContext;
use verimeta_core::parse::parse_artifacts;

/// Parse the manifest and write the JSON record array to `stdout`.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest cannot be read or is malformed
/// - An artifact has no recognized hash or a malformed digest
/// - Writing to `stdout` fails
pub fn run_export(args: &ExportArgs, stdout: &mut dyn Write) -> Result<()> {
    let document = ManifestDocument::parse_file(&args.manifest, NamespaceContext::default())?;
    let artifacts = parse_artifacts(&document)?;
    let records = export_artifacts(&artifacts, &args.repositories)?;

    serde_json::to_writer(&mut *stdout, &records)
        .map_err(|source| CliError::WriteFailed {
            source: source.into(),
        })?;
    writeln!(stdout).map_err(|source| CliError::WriteFailed { source })?;

    Ok(())
}
