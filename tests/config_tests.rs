//! Tests for locale configuration validation.

use anyhow::{Result, ensure};
use multilang::config::{ConfigError, LocaleConfig};
use rstest::rstest;

#[rstest]
fn accepts_default_within_locale_set() -> Result<()> {
    let config = LocaleConfig::new("es", ["en", "es"])?;
    ensure!(
        config.default_locale() == "es",
        "expected default locale es, got {:?}",
        config.default_locale()
    );
    ensure!(
        config.locales() == ["en", "es"],
        "expected locale order preserved, got {:?}",
        config.locales()
    );
    Ok(())
}

#[rstest]
fn rejects_empty_locale_set() -> Result<()> {
    let result = LocaleConfig::new("es", Vec::<String>::new());
    ensure!(
        result == Err(ConfigError::EmptyLocales),
        "expected EmptyLocales, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn rejects_default_outside_locale_set() -> Result<()> {
    let result = LocaleConfig::new("fr", ["en", "es"]);
    ensure!(
        result == Err(ConfigError::DefaultNotConfigured("fr".into())),
        "expected DefaultNotConfigured, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn error_message_names_the_offending_default() -> Result<()> {
    let Err(err) = LocaleConfig::new("fr", ["en", "es"]) else {
        anyhow::bail!("expected construction to fail");
    };
    ensure!(
        err.to_string() == "default locale \"fr\" is not in the configured locale set",
        "unexpected message: {err}"
    );
    Ok(())
}
