//! crates/cli/src/arguments.rs
//! Translation of clap matches into a typed command.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::command_builder::clap_command;

/// Command selected on the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    List,
    Create {
        paths: Vec<PathBuf>,
        aggregate: bool,
        pattern: String,
    },
    Verify {
        paths: Vec<PathBuf>,
        expected: String,
        aggregate: bool,
        pattern: String,
    },
}

impl Action {
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create { .. } => "create",
            Self::Verify { .. } => "verify",
        }
    }
}

/// Parsed command produced by [`parse_args`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) algorithm: Option<String>,
    pub(crate) chunk_size: Option<usize>,
    pub(crate) length: Option<usize>,
    pub(crate) verbose: u8,
    pub(crate) debug: Vec<String>,
    pub(crate) action: Action,
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut matches = clap_command().try_get_matches_from(arguments)?;

    let Some((name, mut sub)) = matches.remove_subcommand() else {
        return Err(clap_command().error(
            clap::error::ErrorKind::MissingSubcommand,
            "a command is required",
        ));
    };

    let action = match name.as_str() {
        "list" => Action::List,
        "create" => Action::Create {
            paths: take_paths(&mut sub),
            aggregate: sub.get_flag("aggregate"),
            pattern: take_pattern(&mut sub),
        },
        "verify" => Action::Verify {
            paths: take_paths(&mut sub),
            expected: sub.remove_one::<String>("expected").unwrap_or_default(),
            aggregate: sub.get_flag("aggregate"),
            pattern: take_pattern(&mut sub),
        },
        other => {
            return Err(clap_command().error(
                clap::error::ErrorKind::InvalidSubcommand,
                format!("unrecognised command '{other}'"),
            ));
        }
    };

    Ok(ParsedArgs {
        algorithm: sub.remove_one::<String>("algorithm"),
        chunk_size: sub.remove_one::<usize>("chunk-size"),
        length: sub.remove_one::<usize>("length"),
        verbose: sub.get_count("verbose"),
        debug: sub
            .remove_many::<String>("debug")
            .map(Iterator::collect)
            .unwrap_or_default(),
        action,
    })
}

fn take_paths(matches: &mut ArgMatches) -> Vec<PathBuf> {
    matches
        .remove_many::<PathBuf>("paths")
        .map(Iterator::collect)
        .unwrap_or_default()
}

fn take_pattern(matches: &mut ArgMatches) -> String {
    matches
        .remove_one::<String>("pattern")
        .unwrap_or_else(|| walk::MATCH_ALL.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_options_apply_before_and_after_the_command() {
        let before = parse_args(["filesum", "-a", "crc32", "-c", "64", "list"]).unwrap();
        let after = parse_args(["filesum", "list", "-a", "crc32", "-c", "64"]).unwrap();
        assert_eq!(before, after);
        assert_eq!(before.algorithm.as_deref(), Some("crc32"));
        assert_eq!(before.chunk_size, Some(64));
        assert_eq!(before.action, Action::List);
    }

    #[test]
    fn create_collects_paths_and_defaults_pattern() {
        let parsed = parse_args(["filesum", "create", "a", "b"]).unwrap();
        assert_eq!(
            parsed.action,
            Action::Create {
                paths: vec![PathBuf::from("a"), PathBuf::from("b")],
                aggregate: false,
                pattern: "*".to_owned(),
            }
        );
    }

    #[test]
    fn verify_requires_expected_value() {
        let error = parse_args(["filesum", "verify", "a"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let parsed =
            parse_args(["filesum", "verify", "--aggregate", "-e", "0xab", "-p", "*.txt", "d"])
                .unwrap();
        assert_eq!(
            parsed.action,
            Action::Verify {
                paths: vec![PathBuf::from("d")],
                expected: "0xab".to_owned(),
                aggregate: true,
                pattern: "*.txt".to_owned(),
            }
        );
    }

    #[test]
    fn verbosity_and_debug_flags_accumulate() {
        let parsed =
            parse_args(["filesum", "-vv", "--debug", "io", "--debug", "digest2", "list"]).unwrap();
        assert_eq!(parsed.verbose, 2);
        assert_eq!(parsed.debug, vec!["io".to_owned(), "digest2".to_owned()]);
    }

    #[test]
    fn non_numeric_chunk_size_is_rejected() {
        let error = parse_args(["filesum", "-c", "big", "list"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
