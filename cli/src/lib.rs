//! Command-line surface for verification-manifest maintenance.
//!
//! This crate provides the `verimeta` binary's argument definitions and
//! command handlers. Handlers take their output streams as `&mut dyn
//! Write` so they can be exercised against in-memory buffers; the binary
//! entrypoint wires them to stdout/stderr and maps errors to exit codes.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - CLI error type and exit-code mapping
//! - [`export`] - `verimeta export` command handler
//! - [`merge`] - `verimeta merge` command handler
//! - [`strip`] - `verimeta strip` command handler

pub mod cli;
pub mod error;
pub mod export;
pub mod merge;
pub mod strip;
