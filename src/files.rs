//! The virtual file collection the pipeline annotates.
//!
//! Files are records of caller-defined content fields keyed by their
//! site-relative path. The collection does no I/O; the host build system
//! fills it and consumes the annotations (`locale`, alternate-file map, and
//! the rewritten `path` for index files) after processing.
//!
//! Cross-locale "references" are represented as key indirection: a record's
//! alternate map stores the collection key of each sibling rather than a
//! shared pointer, and [`Files::lang`] resolves the indirection on demand.
//!
//! # Examples
//!
//! ```rust
//! use multilang::files::{FileRecord, Files};
//! use serde_json::json;
//!
//! let mut files = Files::new();
//! let mut record = FileRecord::new();
//! record.set_field("title", json!("hello"));
//! files.insert("file_en.md", record);
//! assert_eq!(files.len(), 1);
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Caller-defined content fields attached to a file.
pub type FieldMap = serde_json::Map<String, Value>;

/// Error returned when an alternate-file lookup cannot be resolved.
///
/// Raised for locales outside the configured set and for configured locales
/// whose alternate file does not exist in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale \"{locale}\"")]
pub struct UnknownLocaleError {
    /// The locale identifier that failed to resolve.
    pub locale: String,
}

/// One virtual file: the fields the pipeline writes plus an open-ended map of
/// caller-defined content fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileRecord {
    /// The locale assigned during processing.
    pub locale: String,
    /// Output path prefix, set only for relocated index files (`""` for the
    /// default locale, `"<locale>/"` otherwise).
    pub path: Option<String>,
    /// Collection key of the same logical document in each locale. Contains
    /// an entry per resolvable locale only; the record's own locale always
    /// maps to its own key.
    pub alt_files: IndexMap<String, String>,
    /// Caller-defined content fields (front matter, template name, ...).
    pub fields: FieldMap,
}

impl FileRecord {
    /// An empty record with no content fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A record seeded with the given content fields.
    #[must_use]
    pub fn with_fields(fields: FieldMap) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Read a content field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a content field, replacing any previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Copy every content field present in `base` but absent here.
    ///
    /// Presence is the test, not truthiness: a field already defined in this
    /// record is never overwritten, whatever its value. This realises the
    /// inheritance rule letting secondary-locale files pick up fields (for
    /// example a template name) set only on their default-locale base file.
    pub fn inherit_missing(&mut self, base: &Self) {
        for (name, value) in &base.fields {
            if !self.fields.contains_key(name) {
                self.fields.insert(name.clone(), value.clone());
            }
        }
    }

    /// Collection key of this document in `locale`, when resolvable.
    #[must_use]
    pub fn alt(&self, locale: &str) -> Option<&str> {
        self.alt_files.get(locale).map(String::as_str)
    }
}

/// Collection-wide annotations set once per processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Every configured locale, in configuration order.
    pub locales: Vec<String>,
    /// The configured default locale.
    pub default_locale: String,
}

/// The file collection: an insertion-ordered map from site-relative path to
/// [`FileRecord`], plus collection-wide [`Metadata`].
#[derive(Debug, Default)]
pub struct Files {
    records: IndexMap<String, FileRecord>,
    /// Collection-wide annotations for downstream consumers.
    pub metadata: Metadata,
}

impl Files {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under `path`, returning any record it displaced.
    pub fn insert(&mut self, path: impl Into<String>, record: FileRecord) -> Option<FileRecord> {
        self.records.insert(path.into(), record)
    }

    /// Remove the record under `path`, preserving the order of the rest.
    pub fn remove(&mut self, path: &str) -> Option<FileRecord> {
        self.records.shift_remove(path)
    }

    /// Borrow the record under `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.records.get(path)
    }

    /// Mutably borrow the record under `path`.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut FileRecord> {
        self.records.get_mut(path)
    }

    /// Whether a record exists under `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.records.contains_key(path)
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(path, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over `(path, record)` pairs with mutable records.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut FileRecord)> {
        self.records.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Paths of every record, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Resolve the record under `path` in another `locale`.
    ///
    /// Follows the alternate-file indirection built during processing.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownLocaleError`] when `path` is not in the collection,
    /// when `locale` is not configured, or when the alternate file for a
    /// configured locale does not exist.
    pub fn lang(&self, path: &str, locale: &str) -> Result<&FileRecord, UnknownLocaleError> {
        self.records
            .get(path)
            .and_then(|record| record.alt_files.get(locale))
            .and_then(|key| self.records.get(key))
            .ok_or_else(|| UnknownLocaleError {
                locale: locale.to_owned(),
            })
    }
}
