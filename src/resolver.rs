//! Locale resolution and the per-build annotation pass.
//!
//! [`LocaleResolver`] is configured once and then invoked once per build over
//! the whole file collection. It recognises two naming conventions for the
//! same logical document — a locale suffix on the filename (`file_en.md`) and
//! a locale path segment (`en/file.md`) — with the path convention taking
//! precedence when both could apply.
//!
//! # Examples
//!
//! ```rust
//! use multilang::config::LocaleConfig;
//! use multilang::resolver::LocaleResolver;
//!
//! let config = LocaleConfig::new("es", ["en", "es"])?;
//! let resolver = LocaleResolver::new(config);
//! assert_eq!(resolver.locale_of("en/file.md"), Some("en"));
//! assert_eq!(resolver.base_filename("index_en.html"), "index_es.html");
//! # Ok::<(), multilang::config::ConfigError>(())
//! ```

use camino::Utf8Path;
use indexmap::IndexMap;

use crate::config::LocaleConfig;
use crate::files::{Files, Metadata};
use crate::rules::{PathRule, SuffixRule};

/// Resolves file locales and annotates a file collection in place.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    config: LocaleConfig,
    suffix_rule: SuffixRule,
    path_rule: PathRule,
}

impl LocaleResolver {
    /// Build a resolver from a validated configuration, deriving both
    /// recognition rules once.
    #[must_use]
    pub fn new(config: LocaleConfig) -> Self {
        let suffix_rule = SuffixRule::new(config.locales());
        let path_rule = PathRule::new(config.locales());
        Self {
            config,
            suffix_rule,
            path_rule,
        }
    }

    /// The configuration this resolver was built with.
    #[must_use]
    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    /// Whether either recognition rule matches `path`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.locale_of(path).is_some()
    }

    /// The locale embedded in `path`, path segment taking precedence over
    /// filename suffix. `None` when neither rule matches; callers wanting a
    /// total answer fall back to the default locale, as the annotation pass
    /// does.
    #[must_use]
    pub fn locale_of(&self, path: &str) -> Option<&str> {
        self.path_rule
            .locale(path)
            .or_else(|| self.suffix_rule.locale(path))
    }

    /// The path the default locale uses for the same logical document.
    ///
    /// Returns `path` unchanged when it carries no recognised locale marker
    /// (including markers naming unconfigured locales) or when the embedded
    /// locale already is the default. Idempotent on its own output.
    #[must_use]
    pub fn base_filename(&self, path: &str) -> String {
        let default = self.config.default_locale();
        self.path_rule
            .retag(path, default)
            .or_else(|| self.suffix_rule.retag(path, default))
            .unwrap_or_else(|| path.to_owned())
    }

    /// The sibling path for the same logical document in `to`.
    ///
    /// Substitutes `from` for `to` in the matched path segment, or failing
    /// that in the `_<from>` filename suffix. Always an identity when
    /// `from == to`, and a no-op when `path` carries no `from` marker.
    #[must_use]
    pub fn alt_filename(&self, path: &str, from: &str, to: &str) -> String {
        self.path_rule
            .swap(path, from, to)
            .or_else(|| SuffixRule::swap(path, from, to))
            .unwrap_or_else(|| path.to_owned())
    }

    /// Annotate every record in `files` and relocate index files.
    ///
    /// First pass, per record in insertion order: assign `locale`, inherit
    /// missing content fields from the base (default-locale) file, and build
    /// the alternate-file map. Unrecognised paths are assigned the default
    /// locale. Missing alternates are left out of the map rather than
    /// reported; the failure surfaces on first use via [`Files::lang`].
    ///
    /// Second pass: move index files to their locale-prefixed output keys.
    /// Collection metadata (`locales`, `default_locale`) is set once per
    /// call, before either pass.
    pub fn process(&self, files: &mut Files) {
        files.metadata = Metadata {
            locales: self.config.locales().to_vec(),
            default_locale: self.config.default_locale().to_owned(),
        };

        let paths: Vec<String> = files.paths().map(str::to_owned).collect();
        for path in &paths {
            let locale = self.assign_locale(path, files);
            let alt_files = self.alternates(path, &locale, files);
            if let Some(record) = files.get_mut(path) {
                record.locale = locale;
                record.alt_files = alt_files;
            }
        }

        self.relocate_indexes(files);
    }

    /// Resolve one record's locale and inherit fields from its base file.
    fn assign_locale(&self, path: &str, files: &mut Files) -> String {
        let Some(locale) = self.locale_of(path) else {
            return self.config.default_locale().to_owned();
        };
        let locale = locale.to_owned();
        let base = self.base_filename(path);
        if base != path {
            if let Some(base_record) = files.get(&base).cloned() {
                tracing::debug!(file = %path, base = %base, "inheriting fields from base file");
                if let Some(record) = files.get_mut(path) {
                    record.inherit_missing(&base_record);
                }
            }
        }
        locale
    }

    /// Map every configured locale to the key of this document's file in
    /// that locale, keeping only keys that exist in the collection. The
    /// record's own locale always maps back to its own key.
    fn alternates(&self, path: &str, own: &str, files: &Files) -> IndexMap<String, String> {
        let mut alt_files = IndexMap::new();
        for locale in self.config.locales() {
            if locale == own {
                alt_files.insert(locale.clone(), path.to_owned());
            } else {
                let alt = self.alt_filename(path, own, locale);
                if files.contains(&alt) {
                    alt_files.insert(locale.clone(), alt);
                }
            }
        }
        alt_files
    }

    /// Move index files to locale-appropriate output keys.
    ///
    /// A record whose basename starts with `index` is re-keyed to
    /// `index<ext>` with `path = ""` when it carries the default locale, and
    /// to `<locale>/index<ext>` with `path = "<locale>/"` otherwise. Renames
    /// are collected first and applied after iteration, and alternate-file
    /// keys across the whole collection are rewritten through the rename map
    /// so the indirection survives re-keying. When two records contend for
    /// the same target key the last rename applied wins and the displaced
    /// record is dropped with a warning.
    fn relocate_indexes(&self, files: &mut Files) {
        let mut renames: Vec<(String, String)> = Vec::new();
        for (path, record) in files.iter_mut() {
            let name = Utf8Path::new(path).file_name().unwrap_or("");
            if !name.starts_with("index") {
                continue;
            }
            let ext = Utf8Path::new(path)
                .extension()
                .map(|ext| format!(".{ext}"))
                .unwrap_or_default();
            let (prefix, target) = if record.locale == self.config.default_locale() {
                (String::new(), format!("index{ext}"))
            } else {
                (
                    format!("{}/", record.locale),
                    format!("{}/index{ext}", record.locale),
                )
            };
            record.path = Some(prefix);
            if path != target {
                renames.push((path.to_owned(), target));
            }
        }

        let mut renamed: IndexMap<String, String> = IndexMap::new();
        for (old, target) in renames {
            let Some(record) = files.remove(&old) else {
                continue;
            };
            if files.insert(target.clone(), record).is_some() {
                tracing::warn!(
                    from = %old,
                    to = %target,
                    "index relocation displaced an existing entry; last write wins"
                );
            }
            renamed.insert(old, target);
        }
        if renamed.is_empty() {
            return;
        }
        for (_, record) in files.iter_mut() {
            for key in record.alt_files.values_mut() {
                if let Some(target) = renamed.get(key) {
                    target.clone_into(key);
                }
            }
        }
    }
}
