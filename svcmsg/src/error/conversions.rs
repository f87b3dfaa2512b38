//! Conversions between external error types and `SvcMsgError`.

use super::SvcMsgError;

impl From<figment::Error> for SvcMsgError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

impl From<SvcMsgError> for figment::Error {
    /// Allow using `?` inside `figment::Jail` closures.
    fn from(e: SvcMsgError) -> Self {
        match e {
            // Keep the original Figment error with its metadata.
            SvcMsgError::Config(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
