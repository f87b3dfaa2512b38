//! CLI entrypoint for `svcmsg`.

mod cli;
mod error;

use camino::Utf8Path;
use clap::Parser;
use std::io::{self, Write};
use svcmsg::{Arguments, Namespace, RuntimeConfig, canonicalize_names};

use crate::cli::{Cli, Command, FormatArgs};
use crate::error::CliError;

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    match &cli.command {
        Command::Format(args) => format_template(args, out),
        Command::Names { naturals } => {
            for name in canonicalize_names(naturals.iter().map(String::as_str)) {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
        Command::Key { namespace } => {
            writeln!(out, "{}", Namespace::new(namespace.as_str()).key())?;
            Ok(())
        }
        Command::Default(args) => {
            let config = load_config(args.path.as_deref())?;
            writeln!(out, "{}", config.default_service)?;
            writeln!(out, "{}", config.default_service.key())?;
            Ok(())
        }
    }
}

fn format_template(args: &FormatArgs, out: &mut impl Write) -> Result<(), CliError> {
    let config = load_config(args.config.path.as_deref())?;
    let escape_mode = args.escape_mode.unwrap_or(config.escape_mode);
    let arguments: Arguments = args.arguments.iter().cloned().collect();
    let text = svcmsg::format(&args.template, &arguments, escape_mode.into())?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn load_config(path: Option<&Utf8Path>) -> Result<RuntimeConfig, CliError> {
    Ok(path.map_or_else(RuntimeConfig::load, |file| {
        RuntimeConfig::load_from(Some(file))
    })?)
}
