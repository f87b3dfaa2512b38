//! Runtime configuration for the registry and formatter.
//!
//! Values are layered with Figment: built-in defaults, then an optional TOML
//! file, then `SVCMSG_*` environment variables. Later layers win.

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{
    BUILTIN_DEFAULT_NAMESPACE, EscapeMode, FormatOptions, Namespace, SvcMsgError, SvcMsgResult,
};

/// Prefix for environment variables read by [`RuntimeConfig::load`].
pub const ENV_PREFIX: &str = "SVCMSG_";

/// Environment variable selecting the default service namespace.
///
/// The value is taken verbatim, so numeric or boolean-looking namespaces stay
/// strings.
pub const DEFAULT_SERVICE_ENV: &str = "SVCMSG_DEFAULT_SERVICE";

/// Environment variable naming the configuration file to load.
pub const CONFIG_PATH_ENV: &str = "SVCMSG_CONFIG_PATH";

/// Settings that would otherwise be compile-time constants.
///
/// # Examples
///
/// ```rust
/// use svcmsg::{EscapeMode, RuntimeConfig};
///
/// let config = RuntimeConfig::default();
/// assert_eq!(config.default_service.as_str(), "python");
/// assert_eq!(config.escape_mode, EscapeMode::PreserveEntities);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Namespace resolved by [`crate::ServiceRegistry::lookup_default`].
    pub default_service: Namespace,
    /// Escape mode applied when callers do not choose one.
    pub escape_mode: EscapeMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            default_service: Namespace::new(BUILTIN_DEFAULT_NAMESPACE),
            escape_mode: EscapeMode::default(),
        }
    }
}

impl RuntimeConfig {
    /// Builds the provider stack without extracting it.
    ///
    /// `file` is merged when present; a missing file contributes nothing.
    #[must_use]
    pub fn figment(file: Option<&Utf8Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX).ignore(&["config_path", "default_service"]),
        );
        // `Env` would parse `123` or `true` as typed data.
        if let Ok(namespace) = std::env::var(DEFAULT_SERVICE_ENV) {
            figment = figment.merge(Serialized::default("default_service", namespace));
        }
        figment
    }

    /// Loads configuration, reading the file named by [`CONFIG_PATH_ENV`]
    /// when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`SvcMsgError::Config`] when a layer holds an invalid value.
    pub fn load() -> SvcMsgResult<Self> {
        let Some(path) = std::env::var(CONFIG_PATH_ENV).ok().map(Utf8PathBuf::from) else {
            return Self::load_from(None);
        };
        if path.is_file() {
            return Self::load_from(Some(&path));
        }
        tracing::debug!(path = %path, "configuration file not found; skipping");
        Self::load_from(None)
    }

    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns [`SvcMsgError::MissingConfigFile`] when `file` does not exist
    /// and [`SvcMsgError::Config`] when a layer holds an invalid value.
    pub fn load_from(file: Option<&Utf8Path>) -> SvcMsgResult<Self> {
        if let Some(path) = file
            && !path.is_file()
        {
            return Err(SvcMsgError::MissingConfigFile {
                path: path.to_owned(),
            });
        }
        let config: Self = Self::figment(file).extract()?;
        tracing::debug!(
            default_service = %config.default_service,
            escape_mode = ?config.escape_mode,
            "loaded runtime configuration"
        );
        Ok(config)
    }

    /// Formatting options carrying the configured escape mode.
    #[must_use]
    pub const fn format_options(&self) -> FormatOptions {
        FormatOptions::new(self.escape_mode)
    }
}
