//! Isolation for configuration tests.
//!
//! `RuntimeConfig::load` reads `SVCMSG_DEFAULT_SERVICE`, `SVCMSG_ESCAPE_MODE`
//! and the file named by `SVCMSG_CONFIG_PATH` from the process environment
//! and working directory. [`with_jail`] runs a test body inside a
//! `figment::Jail`, which restores both afterwards, and hands back the
//! body's value so assertions can run outside the jail with `anyhow`.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
///
/// # Examples
///
/// ```
/// use svcmsg_test_helpers::jail::with_jail;
///
/// let value = with_jail(|j| {
///     j.set_env("SVCMSG_DEFAULT_SERVICE", "ruby");
///     Ok(std::env::var("SVCMSG_DEFAULT_SERVICE").unwrap_or_default())
/// })
/// .expect("jail should run");
/// assert_eq!(value, "ruby");
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut captured = None;
    figment::Jail::try_with(|jail| {
        captured = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("configuration jail failed: {err}"))?;
    captured.ok_or_else(|| anyhow!("configuration jail produced no value"))
}

