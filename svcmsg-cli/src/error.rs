//! Error types for the `svcmsg` binary.

use std::io;
use svcmsg::{FormatError, SvcMsgError};
use thiserror::Error;

/// Errors surfaced by `svcmsg` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Library(#[from] SvcMsgError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl From<FormatError> for CliError {
    fn from(e: FormatError) -> Self {
        Self::Library(e.into())
    }
}
