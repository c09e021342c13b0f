//! Locale annotation for static-site build pipelines.
//!
//! This library assigns a locale to every file in an in-memory virtual file
//! collection, derives cross-locale relationships between files (base and
//! alternate counterparts), lets secondary-locale files inherit unset content
//! fields from their default-locale base file, and relocates index files into
//! locale-prefixed output paths. It performs no I/O; a host build system
//! fills the collection and consumes the annotations.

pub mod config;
pub mod files;
pub mod resolver;
mod rules;
