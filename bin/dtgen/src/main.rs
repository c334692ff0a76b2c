//! ---
//! dtgen_section: "03-command-line"
//! dtgen_subsection: "binary"
//! dtgen_type: "source"
//! dtgen_scope: "code"
//! dtgen_description: "Command-line entry point writing timestamp fixture files."
//! dtgen_version: "v0.1.0"
//! dtgen_owner: "tbd"
//! ---
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgAction, Command, CommandFactory, Parser};
use dtgen_core::{parse_line_count, FixtureError, FixtureWriter, GeneratorConfig};
use dtgen_logging::{self as logging, Verbosity};
use tracing::debug;

const DEFAULT_PROGRAM: &str = "dtgen";

#[derive(Debug, Parser)]
#[command(
    name = "dtgen",
    author,
    version,
    about = "Write random timestamp strings, one per line, for parser fixtures",
    long_about = None
)]
struct Cli {
    /// Output file path. Use '-' for stdout.
    output_file: PathBuf,

    /// Number of lines to generate
    num_lines: String,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let program = program_name(args.first().map(OsString::as_os_str));

    let mut command = Cli::command();
    command.build();
    let split = split_args(&command, args.get(1..).unwrap_or_default());
    if !split.wants_info && split.positionals.len() != 2 {
        println!("{}", FixtureError::Usage { program });
        return ExitCode::from(FixtureError::EXIT_USAGE as u8);
    }

    let cli = match Cli::try_parse_from(split.into_argv(args.first())) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code_for(&err);
            debug!(exit_code = code, error = ?err, "generation aborted");
            eprintln!("error: {err}");
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Validate before touching the filesystem so a bad count never creates a file.
    let lines = parse_line_count(&cli.num_lines)?;

    let mut writer = FixtureWriter::from_config(&GeneratorConfig { seed: cli.seed });

    if is_stdout(&cli.output_file) {
        writer.generate_to_stdout(lines)?;
        return Ok(());
    }

    let report = writer.generate(&cli.output_file, lines)?;
    if let Some(dir) = &report.created_dir {
        debug!(dir = %dir.display(), "created parent directory");
    }
    logging::log_run_event(
        "dtgen.generate",
        &format!("generated {} lines -> {}", report.lines, report.path.display()),
    );
    Ok(())
}

/// Arguments separated into option tokens and positional values.
///
/// Any token that is not a known option counts as positional, so counts such
/// as `-abc` and paths such as `-out.txt` reach the positionals instead of
/// being rejected as unknown flags.
#[derive(Debug, Default)]
struct SplitArgs {
    options: Vec<OsString>,
    positionals: Vec<OsString>,
    /// `--help` or `--version` was requested.
    wants_info: bool,
}

impl SplitArgs {
    /// Rebuild an argv with every positional after `--`.
    fn into_argv(self, arg0: Option<&OsString>) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.options.len() + self.positionals.len() + 2);
        argv.push(arg0.cloned().unwrap_or_else(|| DEFAULT_PROGRAM.into()));
        argv.extend(self.options);
        argv.push("--".into());
        argv.extend(self.positionals);
        argv
    }
}

/// Known option matched by a single token.
struct OptionToken<'a> {
    arg: &'a Arg,
    /// The option's value, if any, is the next token.
    value_follows: bool,
    info: bool,
}

fn split_args(command: &Command, args: &[OsString]) -> SplitArgs {
    let mut split = SplitArgs::default();
    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        if token == "--" {
            split.positionals.extend(tokens.by_ref().cloned());
            break;
        }
        match token.to_str().and_then(|text| match_option(command, text)) {
            Some(option) => {
                split.options.push(token.clone());
                split.wants_info |= option.info;
                if option.value_follows && option.arg.get_action().takes_values() {
                    split.options.extend(tokens.next().cloned());
                }
            }
            None => split.positionals.push(token.clone()),
        }
    }
    split
}

fn match_option<'a>(command: &'a Command, text: &str) -> Option<OptionToken<'a>> {
    if let Some(long) = text.strip_prefix("--") {
        let (name, inline_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_long() == Some(name))?;
        return Some(OptionToken {
            arg,
            value_follows: !inline_value,
            info: is_info(arg),
        });
    }

    // Short cluster such as `-vv` or `-q`; every character must be known.
    let cluster = text.strip_prefix('-').filter(|rest| !rest.is_empty())?;
    let mut info = false;
    for (idx, short) in cluster.char_indices() {
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_short() == Some(short))?;
        info |= is_info(arg);
        if arg.get_action().takes_values() {
            return Some(OptionToken {
                arg,
                value_follows: idx + short.len_utf8() == cluster.len(),
                info,
            });
        }
        if idx + short.len_utf8() == cluster.len() {
            return Some(OptionToken {
                arg,
                value_follows: false,
                info,
            });
        }
    }
    None
}

fn is_info(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FixtureError>()
        .map(FixtureError::exit_code)
        .unwrap_or(FixtureError::EXIT_IO)
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn program_name(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_owned())
}
