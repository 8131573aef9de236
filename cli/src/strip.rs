//! Strip command implementation.
//!
//! Removes the verified-components section from a manifest and rewrites
//! the file in place, leaving every other section untouched.

use std::io::Write;

use crate::cli::StripArgs;
use crate::error::{CliError, Result};
use verimeta_core::document::ManifestDocument;
use verimeta_core::namespace::NamespaceContext;
use verimeta_core::strip::strip_components;

/// Strip the manifest's components section and rewrite the file,
/// reporting the result on `stderr`.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest cannot be read or is malformed
/// - The rewritten manifest cannot be written
/// - Writing the report to `stderr` fails
pub fn run_strip(args: &StripArgs, stderr: &mut dyn Write) -> Result<()> {
    let mut document = ManifestDocument::parse_file(&args.manifest, NamespaceContext::default())?;
    let removed = strip_components(&mut document);
    document.write_file(&args.manifest)?;

    let message = if removed {
        format!("Removed components section from {}", args.manifest)
    } else {
        format!("No components section in {}", args.manifest)
    };
    writeln!(stderr, "{message}").map_err(|source| CliError::WriteFailed { source })?;

    Ok(())
}
