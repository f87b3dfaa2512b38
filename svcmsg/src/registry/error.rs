//! Failures reported by [`super::ServiceRegistry`].

use thiserror::Error;

use super::Namespace;

/// Errors raised while resolving services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No factory was registered for the derived key.
    #[error("no service registered for namespace '{namespace}'")]
    Unregistered {
        /// Namespace the caller asked for.
        namespace: Namespace,
    },

    /// The default selector was changed after the registry served a lookup.
    #[error(
        "cannot select '{requested}' as the default service: lookups already resolved '{current}'"
    )]
    DefaultSealed {
        /// Namespace the caller tried to install.
        requested: Namespace,
        /// Namespace that remains the default.
        current: Namespace,
    },
}
