//! Namespaces and the storage keys derived from them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Suffix appended to every namespace before it is used as a storage key.
///
/// Keys are always derived through [`RegistryKey::derive`], both when a
/// factory is registered and when one is looked up, so a raw namespace string
/// can never alias a stored key.
pub const KEY_SUFFIX: &str = "$j2cl$service$loader$key";

/// Caller-chosen name identifying a pluggable service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a namespace from any string-like value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use svcmsg::Namespace;
    ///
    /// let ns = Namespace::new("python");
    /// assert_eq!(ns.as_str(), "python");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the namespace text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the storage key for this namespace.
    #[must_use]
    pub fn key(&self) -> RegistryKey {
        RegistryKey::derive(&self.0)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Namespace {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Namespace {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Namespace {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&Namespace> for Namespace {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

/// Collision-resistant key under which a factory is stored.
///
/// Only [`RegistryKey::derive`] constructs keys, so every key carries
/// [`KEY_SUFFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryKey(String);

impl RegistryKey {
    /// Derives the key for `namespace`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use svcmsg::{Namespace, RegistryKey};
    ///
    /// let key = RegistryKey::derive("python");
    /// assert_eq!(key.as_str(), "python$j2cl$service$loader$key");
    /// assert_eq!(key, Namespace::new("python").key());
    /// ```
    #[must_use]
    pub fn derive(namespace: &str) -> Self {
        let mut key = String::with_capacity(namespace.len() + KEY_SUFFIX.len());
        key.push_str(namespace);
        key.push_str(KEY_SUFFIX);
        Self(key)
    }

    /// Returns the full key text, suffix included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recovers the namespace the key was derived from.
    #[must_use]
    pub fn namespace(&self) -> Namespace {
        Namespace::new(self.0.strip_suffix(KEY_SUFFIX).unwrap_or(&self.0))
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
