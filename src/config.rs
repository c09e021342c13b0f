//! Locale configuration for the annotation pipeline.
//!
//! A [`LocaleConfig`] names the locales a site is built in and which of them
//! is the default. Validation happens once at construction so every other
//! part of the crate can rely on the invariants: the locale set is non-empty
//! and contains the default.
//!
//! # Examples
//!
//! ```rust
//! use multilang::config::LocaleConfig;
//!
//! let config = LocaleConfig::new("es", ["en", "es"])?;
//! assert_eq!(config.default_locale(), "es");
//! assert_eq!(config.locales(), ["en", "es"]);
//! # Ok::<(), multilang::config::ConfigError>(())
//! ```

use serde::Serialize;
use thiserror::Error;

/// Errors raised when a locale configuration fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The locale set was empty.
    #[error("locale set must not be empty")]
    EmptyLocales,
    /// The default locale is not a member of the locale set.
    #[error("default locale \"{0}\" is not in the configured locale set")]
    DefaultNotConfigured(String),
}

/// Validated, immutable locale configuration.
///
/// Locale identifiers are opaque tokens (for example `en` or `es-ES`) matched
/// literally against filenames and path segments; no language-tag parsing is
/// performed. The order of `locales` is preserved and determines the order of
/// alternate-file maps built during processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleConfig {
    default: String,
    locales: Vec<String>,
}

impl LocaleConfig {
    /// Build a configuration from a default locale and the full locale set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLocales`] when `locales` yields no items
    /// and [`ConfigError::DefaultNotConfigured`] when `default` is not one of
    /// them.
    pub fn new(
        default: impl Into<String>,
        locales: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ConfigError> {
        let default = default.into();
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        if locales.is_empty() {
            return Err(ConfigError::EmptyLocales);
        }
        if !locales.contains(&default) {
            return Err(ConfigError::DefaultNotConfigured(default));
        }
        Ok(Self { default, locales })
    }

    /// The locale whose files carry no locale marker in canonical output
    /// paths.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default
    }

    /// Every locale the site is built in, in configuration order.
    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }
}
