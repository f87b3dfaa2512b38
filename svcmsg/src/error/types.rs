//! Primary error enum for registry, formatting, and configuration flows.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::{FormatError, RegistryError};

/// Errors surfaced by the crate's public entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SvcMsgError {
    /// A service lookup or default override failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A template could not be compiled or rendered.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Configuration providers could not be merged or extracted.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file '{path}' does not exist")]
    MissingConfigFile {
        /// Path supplied by the caller.
        path: Utf8PathBuf,
    },
}

/// Result alias used throughout the crate.
pub type SvcMsgResult<T> = Result<T, SvcMsgError>;
