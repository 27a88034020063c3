#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `filesum`
//! workspace. It recognises three commands (`list`, `create` and `verify`)
//! plus the global `--algorithm`, `--chunk-size`, `--length`, `--verbose`
//! and `--debug` options, and delegates all checksum work to
//! [`filesum::FileChecksum`].
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error so tests can drive the front-end without spawning a process. A
//! [`clap`](https://docs.rs/clap/) builder command parses the arguments into a
//! private `ParsedArgs` value, which is then executed against a facade built
//! from the global options.
//!
//! Directory operands expand through the [`walk`] crate in depth-first,
//! byte-wise sorted order, filtered by `--pattern`.
//!
//! # Invariants
//!
//! - `run` never panics; unexpected I/O failures surface as non-zero exit codes.
//! - Checksum lines use the `<hex>  <path>` layout understood by `sha1sum -c`
//!   style tools.
//! - Diagnostics are written to the supplied error handle as
//!   `filesum: <message>`.
//!
//! # Errors
//!
//! Exit status `0` reports success, `1` reports a verification mismatch and
//! `2` reports a usage, configuration or I/O error.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["filesum", "list"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! let names = String::from_utf8(stdout).unwrap();
//! assert!(names.lines().any(|name| name == "crc32"));
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/filesum.rs` for the binary that wires [`run`] into `main`.

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;

mod arguments;
mod command_builder;
mod execution;


use arguments::parse_args;
use execution::execute;

/// Name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "filesum";

/// Exit status for success.
pub const EXIT_OK: i32 = 0;

/// Exit status when at least one verification failed.
pub const EXIT_MISMATCH: i32 = 1;

/// Exit status for usage, configuration and I/O errors.
pub const EXIT_ERROR: i32 = 2;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller.
#[allow(clippy::module_name_repetitions)]
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let parsed = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(error) => return report_parse_error(&error, stdout, stderr),
    };

    match execute(parsed, stdout) {
        Ok(status) => status,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            EXIT_ERROR
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

/// Routes clap's help, version and usage errors to the right handle.
fn report_parse_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if stdout.write_all(rendered.as_bytes()).is_err() {
                return EXIT_ERROR;
            }
            EXIT_OK
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = stderr.write_all(rendered.as_bytes());
            EXIT_ERROR
        }
        _ => {
            let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
            let _ = write!(stderr, "{PROGRAM_NAME}: {message}");
            EXIT_ERROR
        }
    }
}
