//! Core library for dependency-verification manifest tooling.
//!
//! This crate implements the data model and algorithms behind the
//! `verimeta` maintenance tools: parsing a Gradle dependency-verification
//! manifest into artifact records, encoding digests as integrity strings,
//! exporting fetch-verification records, merging manifests from multiple
//! sub-builds, and stripping the verified-components section.
//!
//! # Modules
//!
//! - [`artifact`] - Artifact records and module-metadata linkage
//! - [`checksum`] - Hash algorithm tags and raw checksum pairs
//! - [`component`] - Component identity values
//! - [`document`] - Manifest document access over an ordered element tree
//! - [`error`] - Semantic error types
//! - [`export`] - Fetch-verification record derivation
//! - [`merge`] - In-place union merge of manifests
//! - [`namespace`] - Explicit per-document namespace context
//! - [`parse`] - Manifest parsing into artifact sequences
//! - [`sri`] - Integrity-string hash encoding
//! - [`strip`] - Removal of the verified-components section

pub mod artifact;
pub mod checksum;
pub mod component;
pub mod document;
pub mod error;
pub mod export;
pub mod merge;
pub mod namespace;
pub mod parse;
pub mod sri;
pub mod strip;
