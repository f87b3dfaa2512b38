//! Command-line interface definitions for `svcmsg`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser, Subcommand};
use svcmsg::EscapeMode;

/// Parsed CLI arguments for `svcmsg`.
#[derive(Debug, Parser)]
#[command(name = "svcmsg")]
#[command(about = "Derive registry keys and format placeholder messages")]
#[command(version)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a `{$name}` template with named arguments.
    Format(FormatArgs),
    /// Print the canonical placeholder name for each natural name.
    Names {
        /// Natural names in declaration order.
        #[arg(required = true, value_name = "NATURAL")]
        naturals: Vec<String>,
    },
    /// Print the registry key derived from a namespace.
    Key {
        /// Namespace to derive the key from.
        namespace: String,
    },
    /// Print the configured default namespace and its key.
    Default(ConfigArgs),
}

/// Arguments for `svcmsg format`.
#[derive(Debug, ClapArgs)]
pub struct FormatArgs {
    /// Template source, for example `Hello {$name}`.
    pub template: String,
    /// Argument binding (repeat for each placeholder).
    #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub arguments: Vec<(String, String)>,
    /// Entity handling for literal text; overrides the configured mode.
    #[arg(long, value_enum)]
    pub escape_mode: Option<EscapeMode>,
    /// Configuration source flags.
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Configuration source flags.
#[derive(Debug, ClapArgs)]
pub struct ConfigArgs {
    /// TOML configuration file; must exist when given.
    #[arg(long = "config", value_name = "path")]
    pub path: Option<Utf8PathBuf>,
}

fn parse_binding(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_owned(), value.to_owned())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}
