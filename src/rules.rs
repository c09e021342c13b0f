//! Recognition rules for the two locale naming conventions.
//!
//! Both rules are derived once from the configured locale set and reused for
//! every lookup: the suffix rule recognises `<name>_<locale>.<ext>` (and the
//! extension-less `<name>_<locale>`), the path rule recognises a directory
//! segment exactly equal to a configured locale. The resolver gives the path
//! rule precedence.

use camino::Utf8Path;

/// Recognises a locale tag at the end of a filename stem.
#[derive(Debug, Clone)]
pub(crate) struct SuffixRule {
    /// `(locale, "_<locale>")` pairs, in configuration order.
    tags: Vec<(String, String)>,
}

impl SuffixRule {
    pub(crate) fn new(locales: &[String]) -> Self {
        let tags = locales
            .iter()
            .map(|locale| (locale.clone(), format!("_{locale}")))
            .collect();
        Self { tags }
    }

    /// The configured locale tagged onto `path`'s stem, if any.
    pub(crate) fn locale<'a>(&'a self, path: &str) -> Option<&'a str> {
        let stem = Utf8Path::new(path).file_stem()?;
        self.tags
            .iter()
            .find(|(_, tag)| stem.ends_with(tag.as_str()))
            .map(|(locale, _)| locale.as_str())
    }

    /// Replace whichever configured locale tag ends the stem with `to`,
    /// preserving the extension. `None` when no configured tag matches.
    pub(crate) fn retag(&self, path: &str, to: &str) -> Option<String> {
        let stem = Utf8Path::new(path).file_stem()?;
        let prefix = self
            .tags
            .iter()
            .find_map(|(_, tag)| stem.strip_suffix(tag.as_str()))?;
        Some(rebuild(Utf8Path::new(path), prefix, to))
    }

    /// Substitute the `_<from>` suffix with `_<to>`. Unlike [`Self::retag`],
    /// `from` need not be a configured locale; `None` when the stem does not
    /// end in `_<from>`.
    pub(crate) fn swap(path: &str, from: &str, to: &str) -> Option<String> {
        let stem = Utf8Path::new(path).file_stem()?;
        let prefix = stem.strip_suffix(&format!("_{from}"))?;
        Some(rebuild(Utf8Path::new(path), prefix, to))
    }
}

fn rebuild(path: &Utf8Path, prefix: &str, locale: &str) -> String {
    let name = match path.extension() {
        Some(ext) => format!("{prefix}_{locale}.{ext}"),
        None => format!("{prefix}_{locale}"),
    };
    path.with_file_name(name).into_string()
}

/// Recognises a configured locale used as a directory segment.
///
/// Only directory segments count: the final (basename) segment never matches,
/// mirroring the `<locale>/rest` and `.../<locale>/rest` conventions. The
/// first matching segment wins when a path contains several.
#[derive(Debug, Clone)]
pub(crate) struct PathRule {
    locales: Vec<String>,
}

impl PathRule {
    pub(crate) fn new(locales: &[String]) -> Self {
        Self {
            locales: locales.to_vec(),
        }
    }

    /// Index and locale of the first matching directory segment.
    fn capture<'a>(&'a self, path: &str) -> Option<(usize, &'a str)> {
        let last = path.split('/').count().checked_sub(1)?;
        path.split('/').take(last).enumerate().find_map(|(i, seg)| {
            self.locales
                .iter()
                .find(|locale| locale.as_str() == seg)
                .map(|locale| (i, locale.as_str()))
        })
    }

    /// The configured locale embedded as a directory segment, if any.
    pub(crate) fn locale<'a>(&'a self, path: &str) -> Option<&'a str> {
        self.capture(path).map(|(_, locale)| locale)
    }

    /// Replace the matched locale segment with `to`, slashes preserved.
    /// `None` when no segment matches.
    pub(crate) fn retag(&self, path: &str, to: &str) -> Option<String> {
        let (index, _) = self.capture(path)?;
        Some(replace_segment(path, index, to))
    }

    /// Substitute `from` for `to` within the matched segment only. When the
    /// matched segment is not `from`, the path is returned unchanged; `None`
    /// when no segment matches at all.
    pub(crate) fn swap(&self, path: &str, from: &str, to: &str) -> Option<String> {
        let (index, locale) = self.capture(path)?;
        if locale == from {
            Some(replace_segment(path, index, to))
        } else {
            Some(path.to_owned())
        }
    }
}

fn replace_segment(path: &str, index: usize, replacement: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .enumerate()
        .map(|(i, seg)| if i == index { replacement } else { seg })
        .collect();
    segments.join("/")
}
