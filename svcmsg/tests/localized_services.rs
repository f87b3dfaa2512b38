//! Integration tests combining the service registry with message formatting.
//!
//! Each registered service is a message catalogue keyed by language; the
//! default selector decides which catalogue renders when callers do not name
//! one.

use anyhow::Result;
use rstest::{fixture, rstest};
use std::collections::HashMap;
use std::sync::Arc;
use svcmsg::{
    FormatOptions, Message, MessageBuilder, RegistryError, RuntimeConfig, ServiceRegistry,
};

type Catalogue = Arc<HashMap<&'static str, Message>>;

fn test_results(translation: Option<&str>) -> Result<Message> {
    let mut builder = MessageBuilder::new("MSG_results");
    let run = builder.argument("_run");
    let failed = builder.argument("_failed");
    builder
        .description("Test summary")
        .text("Tests run: ")
        .placeholder(&run)
        .text(", Failures: ")
        .placeholder(&failed);
    let message = builder.build()?;
    if let Some(source) = translation {
        return Ok(message.translate(source)?);
    }
    Ok(message)
}

fn catalogue(translation: Option<&str>) -> Result<Catalogue> {
    let message = test_results(translation)?;
    Ok(Arc::new(HashMap::from([("MSG_results", message)])))
}

#[fixture]
fn registry() -> ServiceRegistry<Catalogue> {
    let registry = ServiceRegistry::with_default_namespace("en");
    let english = catalogue(None).expect("english catalogue");
    let german = catalogue(Some("Fehler: {$failed}, Tests: {$run}")).expect("german catalogue");
    registry.register("en", move || Arc::clone(&english));
    registry.register("de", move || Arc::clone(&german));
    registry
}

fn render(catalogue: &Catalogue) -> Result<String> {
    let message = catalogue
        .get("MSG_results")
        .ok_or_else(|| anyhow::anyhow!("message missing"))?;
    Ok(message.format(["12", "1"], FormatOptions::default())?)
}

#[rstest]
fn default_catalogue_renders(registry: ServiceRegistry<Catalogue>) -> Result<()> {
    assert_eq!(render(&registry.lookup_default()?)?, "Tests run: 12, Failures: 1");
    Ok(())
}

#[rstest]
fn translated_catalogue_reorders_arguments(registry: ServiceRegistry<Catalogue>) -> Result<()> {
    assert_eq!(render(&registry.lookup("de")?)?, "Fehler: 1, Tests: 12");
    Ok(())
}

#[rstest]
fn override_before_first_lookup_switches_catalogue(
    registry: ServiceRegistry<Catalogue>,
) -> Result<()> {
    registry.override_default("de")?;
    assert_eq!(render(&registry.lookup_default()?)?, "Fehler: 1, Tests: 12");
    Ok(())
}

#[rstest]
fn unknown_language_is_not_silently_replaced(registry: ServiceRegistry<Catalogue>) {
    let err = registry.lookup("fr").err();
    assert!(matches!(err, Some(RegistryError::Unregistered { .. })));
}

#[rstest]
fn configured_default_selects_catalogue() -> Result<()> {
    let config = RuntimeConfig {
        default_service: "de".into(),
        ..RuntimeConfig::default()
    };
    let registry = ServiceRegistry::from_config(&config);
    let german = catalogue(Some("{$failed}/{$run}"))?;
    registry.register("de", move || Arc::clone(&german));
    assert_eq!(render(&registry.lookup_default()?)?, "1/12");
    Ok(())
}
