//! verimeta CLI entrypoint.
//!
//! Parses the command line, dispatches to the command handlers over the
//! process's stdout/stderr, and maps failures to a non-zero exit code.

use clap::Parser;
use std::io::Write;

use verimeta_cli::cli::{Cli, Command};
use verimeta_cli::error::Result;
use verimeta_cli::export::run_export;
use verimeta_cli::merge::run_merge;
use verimeta_cli::strip::run_strip;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Export(args) => run_export(args, stdout),
        Command::Merge(args) => run_merge(args, stderr),
        Command::Strip(args) => run_strip(args, stderr),
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}
