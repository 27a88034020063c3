//! crates/cli/src/command_builder.rs
//! The clap command definition.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

use crate::PROGRAM_NAME;

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create and verify checksums of files and directory trees.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_name("ALGO")
                .help("Checksum algorithm (see `list`; default sha1).")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .short('c')
                .value_name("SIZE")
                .help("Bytes read per chunk (default 2048).")
                .value_parser(value_parser!(usize))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .short('l')
                .value_name("LEN")
                .help("Output bytes for shake_128 and shake_256 (default 32).")
                .value_parser(value_parser!(usize))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more detail.")
                .global(true)
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAG")
                .help("Enable a diagnostic target, e.g. digest2, io or all3.")
                .global(true)
                .action(ArgAction::Append),
        )
        .subcommand(Command::new("list").about("Print the available algorithm names."))
        .subcommand(
            Command::new("create")
                .about("Print the checksum of each file, or one aggregate checksum.")
                .arg(aggregate_arg())
                .arg(pattern_arg())
                .arg(paths_arg()),
        )
        .subcommand(
            Command::new("verify")
                .about("Compare files against an expected checksum.")
                .arg(
                    Arg::new("expected")
                        .long("expected")
                        .short('e')
                        .value_name("HEX")
                        .help("Expected checksum as hex (with or without 0x).")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(aggregate_arg())
                .arg(pattern_arg())
                .arg(paths_arg()),
        )
}

fn aggregate_arg() -> Arg {
    Arg::new("aggregate")
        .long("aggregate")
        .help("Stream every file into a single checksum, in operand order.")
        .action(ArgAction::SetTrue)
}

fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .long("pattern")
        .short('p')
        .value_name("GLOB")
        .help("Select files below directory operands (default *).")
        .default_value(walk::MATCH_ALL)
        .action(ArgAction::Set)
}

fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .help("Files or directories to checksum.")
        .required(true)
        .num_args(1..)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
}
