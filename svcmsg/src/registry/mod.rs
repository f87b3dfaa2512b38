//! Namespaced service registry.
//!
//! A [`ServiceRegistry`] maps a [`Namespace`] to a factory that produces a
//! service instance on demand. Every namespace is turned into a
//! [`RegistryKey`] by appending [`KEY_SUFFIX`] before it touches the map, both
//! on registration and on lookup, so the default selector and ad-hoc lookups
//! always agree on where a factory lives.
//!
//! The registry holds its own state instead of relying on a process-wide
//! singleton; share it by reference or through an [`Arc`].

mod error;
mod key;

pub use error::RegistryError;
pub use key::{KEY_SUFFIX, Namespace, RegistryKey};

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::RuntimeConfig;

/// Namespace resolved by [`ServiceRegistry::lookup_default`] when nothing
/// overrides it.
pub const BUILTIN_DEFAULT_NAMESPACE: &str = "python";

/// Zero-argument callable producing a service instance.
pub type Factory<S> = Arc<dyn Fn() -> S + Send + Sync>;

#[derive(Debug)]
struct DefaultSelector {
    namespace: Namespace,
    // Set once any lookup has been served.
    sealed: bool,
}

/// Maps namespaces to service factories.
///
/// Registration overwrites: the last factory stored for a namespace wins.
/// Lookups never fall back to another namespace; a miss is reported as
/// [`RegistryError::Unregistered`].
///
/// # Examples
///
/// ```rust
/// use svcmsg::ServiceRegistry;
///
/// let registry = ServiceRegistry::with_default_namespace("python");
/// registry.register("python", || String::from("cpython"));
/// registry.register("ruby", || String::from("mri"));
///
/// assert_eq!(registry.lookup("ruby")?, "mri");
/// assert_eq!(registry.lookup_default()?, "cpython");
/// # Ok::<_, svcmsg::RegistryError>(())
/// ```
pub struct ServiceRegistry<S> {
    factories: RwLock<HashMap<RegistryKey, Factory<S>>>,
    default: Mutex<DefaultSelector>,
}

impl<S> ServiceRegistry<S> {
    /// Creates an empty registry whose default is
    /// [`BUILTIN_DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_namespace(BUILTIN_DEFAULT_NAMESPACE)
    }

    /// Creates an empty registry with an explicit default namespace.
    #[must_use]
    pub fn with_default_namespace(namespace: impl Into<Namespace>) -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
            default: Mutex::new(DefaultSelector {
                namespace: namespace.into(),
                sealed: false,
            }),
        }
    }

    /// Creates an empty registry using the default namespace from `config`.
    #[must_use]
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::with_default_namespace(&config.default_service)
    }

    /// Stores `factory` under the key derived from `namespace`.
    ///
    /// A factory already registered for the namespace is replaced.
    pub fn register<F>(&self, namespace: impl Into<Namespace>, factory: F)
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        let name: Namespace = namespace.into();
        let replaced = self
            .factories
            .write()
            .insert(name.key(), Arc::new(factory))
            .is_some();
        tracing::debug!(namespace = %name, replaced, "registered service factory");
    }

    /// Invokes the factory registered for `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] when no factory exists for the
    /// namespace.
    pub fn lookup(&self, namespace: &str) -> Result<S, RegistryError> {
        self.default.lock().sealed = true;
        self.resolve(namespace)
    }

    /// Invokes the factory registered for the default namespace.
    ///
    /// The default is resolved through the same key derivation as
    /// [`Self::lookup`], so `lookup_default()` and
    /// `lookup(&default_namespace())` always reach the same factory.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] when the default namespace has
    /// no factory.
    pub fn lookup_default(&self) -> Result<S, RegistryError> {
        let namespace = {
            let mut selector = self.default.lock();
            selector.sealed = true;
            selector.namespace.clone()
        };
        self.resolve(namespace.as_str())
    }

    /// Replaces the default namespace.
    ///
    /// Overrides are accepted only until the registry serves its first
    /// lookup, mirroring a value pinned before the application starts.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DefaultSealed`] once any lookup has run.
    pub fn override_default(&self, namespace: impl Into<Namespace>) -> Result<(), RegistryError> {
        let requested: Namespace = namespace.into();
        let mut selector = self.default.lock();
        if selector.sealed {
            return Err(RegistryError::DefaultSealed {
                requested,
                current: selector.namespace.clone(),
            });
        }
        tracing::debug!(
            previous = %selector.namespace,
            namespace = %requested,
            "overriding default service namespace"
        );
        selector.namespace = requested;
        Ok(())
    }

    /// Returns the namespace [`Self::lookup_default`] resolves.
    #[must_use]
    pub fn default_namespace(&self) -> Namespace {
        self.default.lock().namespace.clone()
    }

    /// Reports whether a factory is stored for `namespace`.
    #[must_use]
    pub fn is_registered(&self, namespace: &str) -> bool {
        self.factories
            .read()
            .contains_key(&RegistryKey::derive(namespace))
    }

    /// Lists registered namespaces in sorted order.
    #[must_use]
    pub fn namespaces(&self) -> Vec<Namespace> {
        let mut names: Vec<Namespace> = self
            .factories
            .read()
            .keys()
            .map(RegistryKey::namespace)
            .collect();
        names.sort();
        names
    }

    /// Number of registered namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    fn resolve(&self, namespace: &str) -> Result<S, RegistryError> {
        // Clone the factory so the lock is released before it runs; factories
        // may consult the registry themselves.
        let factory = self
            .factories
            .read()
            .get(&RegistryKey::derive(namespace))
            .cloned();
        factory.map_or_else(
            || {
                tracing::warn!(namespace, "no service registered for namespace");
                Err(RegistryError::Unregistered {
                    namespace: Namespace::from(namespace),
                })
            },
            |make| Ok(make()),
        )
    }
}

impl<S> Default for ServiceRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ServiceRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("namespaces", &self.namespaces())
            .field("default", &*self.default.lock())
            .finish()
    }
}
