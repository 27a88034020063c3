//! crates/cli/src/execution.rs
//! Runs a parsed command against the checksum facade.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use filesum::{Checksum, ChecksumConfig, FileChecksum, FileChecksumError};
use logging::VerbosityConfig;

use crate::arguments::{Action, ParsedArgs};
use crate::{EXIT_MISMATCH, EXIT_OK};

/// Failure that ends the command with [`EXIT_ERROR`](crate::EXIT_ERROR).
#[derive(Debug)]
pub(crate) enum CliError {
    Checksum(FileChecksumError),
    Debug(String),
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checksum(error) => fmt::Display::fmt(error, f),
            Self::Debug(reason) => write!(f, "invalid --debug value: {reason}"),
            Self::Output(error) => write!(f, "failed to write output: {error}"),
        }
    }
}

impl From<FileChecksumError> for CliError {
    fn from(error: FileChecksumError) -> Self {
        Self::Checksum(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        Self::Output(error)
    }
}

pub(crate) fn execute<Out: Write>(parsed: ParsedArgs, stdout: &mut Out) -> Result<i32, CliError> {
    install_logging(parsed.verbose, &parsed.debug)?;
    tracing::debug!(command = parsed.action.name(), "running command");

    let sums = match &parsed.action {
        Action::List => return list(stdout),
        _ => FileChecksum::new(config_from(&parsed))?,
    };

    match parsed.action {
        Action::List => list(stdout),
        Action::Create {
            paths,
            aggregate: false,
            pattern,
        } => create_each(&sums, &paths, &pattern, stdout),
        Action::Create {
            paths,
            aggregate: true,
            pattern,
        } => {
            let files = expand(&paths, &pattern)?;
            let sum = sums.create_checksum_aggregate(&files)?;
            write_line(stdout, &sum, &operand_label(&paths))?;
            Ok(EXIT_OK)
        }
        Action::Verify {
            paths,
            expected,
            aggregate: false,
            pattern,
        } => {
            let mut all_matched = true;
            for path in &paths {
                let matched = if path.is_dir() {
                    sums.verify_dir(path, expected.as_str(), &pattern)?
                } else {
                    sums.verify(path, expected.as_str())?
                };
                write_verdict(stdout, &path.display().to_string(), matched)?;
                all_matched &= matched;
            }
            Ok(if all_matched { EXIT_OK } else { EXIT_MISMATCH })
        }
        Action::Verify {
            paths,
            expected,
            aggregate: true,
            pattern,
        } => {
            let files = expand(&paths, &pattern)?;
            let matched = sums.verify_aggregate(&files, expected.as_str())?;
            write_verdict(stdout, &operand_label(&paths), matched)?;
            Ok(if matched { EXIT_OK } else { EXIT_MISMATCH })
        }
    }
}

fn install_logging(verbose: u8, debug: &[String]) -> Result<(), CliError> {
    let mut config = VerbosityConfig::from_verbose_level(verbose);
    for token in debug {
        config.apply_flag(token).map_err(CliError::Debug)?;
    }
    // A subscriber may already be installed when `run` is called repeatedly.
    let _ = logging::init_tracing(config);
    Ok(())
}

fn config_from(parsed: &ParsedArgs) -> ChecksumConfig {
    let mut config = ChecksumConfig::default();
    if let Some(algorithm) = &parsed.algorithm {
        config = config.with_algorithm(algorithm.as_str());
    }
    if let Some(chunk_size) = parsed.chunk_size {
        config = config.with_chunk_size(chunk_size);
    }
    if let Some(length) = parsed.length {
        config = config.with_output_length(length);
    }
    config
}

fn list<Out: Write>(stdout: &mut Out) -> Result<i32, CliError> {
    for name in FileChecksum::available_algorithms() {
        writeln!(stdout, "{name}")?;
    }
    Ok(EXIT_OK)
}

fn create_each<Out: Write>(
    sums: &FileChecksum,
    paths: &[PathBuf],
    pattern: &str,
    stdout: &mut Out,
) -> Result<i32, CliError> {
    for path in paths {
        if path.is_dir() {
            for (file, sum) in sums.create_checksum_files(path, pattern)? {
                write_line(stdout, &sum, &file.display().to_string())?;
            }
        } else {
            let sum = sums.create_checksum(path)?;
            write_line(stdout, &sum, &path.display().to_string())?;
        }
    }
    Ok(EXIT_OK)
}

/// Replaces directory operands by their matching files, keeping operand order.
fn expand(paths: &[PathBuf], pattern: &str) -> Result<Vec<PathBuf>, FileChecksumError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            files.extend(walk::matching_files(path, pattern)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn operand_label(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_line<Out: Write>(stdout: &mut Out, sum: &Checksum, label: &str) -> io::Result<()> {
    writeln!(stdout, "{}  {label}", sum.to_hex())
}

fn write_verdict<Out: Write>(stdout: &mut Out, label: &str, matched: bool) -> io::Result<()> {
    let verdict = if matched { "OK" } else { "FAILED" };
    writeln!(stdout, "{label}: {verdict}")
}
