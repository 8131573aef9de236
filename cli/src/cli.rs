//! CLI argument definitions for the verimeta tools.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary small and
//! focused on orchestration.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Maintain Gradle dependency-verification manifests.
#[derive(Parser, Debug)]
#[command(name = "verimeta")]
#[command(version, about)]
#[command(long_about = concat!(
    "Maintain Gradle dependency-verification manifests.\n\n",
    "The export command derives one fetch-verification record per artifact ",
    "for a content-addressed download pipeline. The merge command unions the ",
    "verified components of several sub-build manifests into one manifest, ",
    "and the strip command resets a manifest by removing its components ",
    "section entirely.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Emit fetch-verification records against two repositories:\n",
    "    $ verimeta export verification-metadata.xml \\\n",
    "        https://repo.maven.apache.org/maven2/ https://plugins.gradle.org/m2/\n\n",
    "  Fold the manifests of two included builds into the root manifest:\n",
    "    $ verimeta merge gradle/verification-metadata.xml build-a build-b\n\n",
    "  Reset the verified components of a manifest:\n",
    "    $ verimeta strip gradle/verification-metadata.xml\n",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Emit one JSON fetch-verification record per artifact in a manifest.
    Export(ExportArgs),

    /// Merge sub-build manifests into a primary manifest, in place.
    Merge(MergeArgs),

    /// Remove the verified-components section from a manifest, in place.
    Strip(StripArgs),
}

/// Arguments for the export command.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Path to the verification manifest.
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,

    /// Repository base URLs to derive download URL prefixes from.
    #[arg(value_name = "REPOSITORY_URL")]
    pub repositories: Vec<String>,
}

/// Arguments for the merge command.
#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Path to the primary verification manifest (rewritten in place).
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,

    /// Build output directories, each expected to contain a manifest at
    /// the same relative path as the primary.
    #[arg(value_name = "BUILD_DIR")]
    pub build_dirs: Vec<Utf8PathBuf>,
}

/// Arguments for the strip command.
#[derive(Args, Debug, Clone)]
pub struct StripArgs {
    /// Path to the verification manifest (rewritten in place).
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,
}
