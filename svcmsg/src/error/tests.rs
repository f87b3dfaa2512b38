//! Unit tests for crate-level error wrapping.

use super::*;
use crate::{FormatError, Namespace, RegistryError};
use rstest::rstest;

#[rstest]
fn registry_errors_are_transparent() {
    let err = SvcMsgError::from(RegistryError::Unregistered {
        namespace: Namespace::new("ruby"),
    });
    assert_eq!(err.to_string(), "no service registered for namespace 'ruby'");
    assert!(matches!(err, SvcMsgError::Registry(_)));
}

#[rstest]
fn format_errors_are_transparent() {
    let err = SvcMsgError::from(FormatError::UnboundPlaceholder {
        name: String::from("arg"),
    });
    assert_eq!(err.to_string(), "placeholder 'arg' has no bound argument");
}

#[rstest]
fn figment_errors_round_trip() {
    let err = SvcMsgError::from(figment::Error::from("boom"));
    assert!(matches!(err, SvcMsgError::Config(_)));
    let back = figment::Error::from(err);
    assert_eq!(back.to_string(), "boom");
}

#[rstest]
fn other_errors_become_figment_messages() {
    let err = SvcMsgError::MissingConfigFile {
        path: "missing.toml".into(),
    };
    let back = figment::Error::from(err);
    assert!(back.to_string().contains("missing.toml"));
}
