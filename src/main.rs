use autofolder::{
    api::{self, Action},
    host::TerminalHost,
};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    Command,
};
use log::LevelFilter;
use std::{path::PathBuf, process::ExitCode};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> ExitCode {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("workspace")
                .short('w')
                .long("workspace")
                .help("Workspace root where the structure document lives [default: current directory]")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("no-prompt")
                .long("no-prompt")
                .help("Never open an editor or prompt; print the document path instead")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("create")
                .about("Writes folder-structure.md into the workspace and opens it for editing"),
        )
        .subcommand(
            Command::new("accept")
                .about("Creates the folders and files listed in folder-structure.md"),
        )
        .subcommand(Command::new("reject").about("Cancels folder structure creation"))
        .subcommand(
            Command::new("preview")
                .about("Shows folder-structure.md as a tree without creating anything"),
        )
        .subcommand(
            Command::new("propose")
                .about("Creates and opens folder-structure.md, then asks to accept or reject it"),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    init_logging(is_verbose);

    let host = TerminalHost::new(
        matches.get_one::<PathBuf>("workspace").cloned(),
        !matches.get_flag("no-prompt"),
    );

    let action = match matches.subcommand() {
        Some(("create", _)) => Action::Create,
        Some(("accept", _)) => Action::Accept,
        Some(("reject", _)) => Action::Reject,
        Some(("preview", _)) => Action::Preview,
        Some(("propose", _)) => Action::Propose,
        _ => unreachable!(),
    };

    match api::run_action(&host, action) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if is_verbose {
                eprintln!("{:?}", miette::Report::new(error));
            }

            ExitCode::FAILURE
        }
    }
}

fn init_logging(is_verbose: bool) {
    let level = if is_verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
