//! Crate-level error type wrapping component failures.

mod conversions;
mod types;

pub use types::{SvcMsgError, SvcMsgResult};

#[cfg(test)]
mod tests;
