//! Test helpers shared across crates in the svcmsg workspace.
//!
//! [`jail`] wraps `figment::Jail` so configuration tests can isolate
//! environment variables and files; [`services`] provides small service types
//! and call counters for exercising registries.

pub mod jail;
pub mod services;
