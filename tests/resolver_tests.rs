//! Tests for the pure filename and path resolution functions.

use anyhow::{Result, ensure};
use multilang::config::LocaleConfig;
use multilang::resolver::LocaleResolver;
use rstest::rstest;

fn resolver() -> Result<LocaleResolver> {
    Ok(LocaleResolver::new(LocaleConfig::new("es", ["en", "es"])?))
}

#[rstest]
#[case("index_es.html", "es", "ca", "index_ca.html")]
#[case("index_es.html", "es", "es", "index_es.html")]
#[case("some/path/file_es.md", "es", "ca", "some/path/file_ca.md")]
#[case("some/path/file_es.md", "es", "es", "some/path/file_es.md")]
#[case("some/es/file.md", "es", "ca", "some/ca/file.md")]
#[case("some/es/file.md", "es", "es", "some/es/file.md")]
#[case("es/file.md", "es", "ca", "ca/file.md")]
#[case("es/file.md", "es", "es", "es/file.md")]
#[case("notes_es", "es", "en", "notes_en")]
#[case("rand.md", "es", "en", "rand.md")]
fn alt_filename_returns_sibling_path(
    #[case] path: &str,
    #[case] from: &str,
    #[case] to: &str,
    #[case] expected: &str,
) -> Result<()> {
    let resolver = resolver()?;
    let alt = resolver.alt_filename(path, from, to);
    ensure!(
        alt == expected,
        "expected {path:?} ({from} -> {to}) to yield {expected:?}, got {alt:?}"
    );
    Ok(())
}

#[rstest]
#[case("index_es.html", "index_es.html")]
#[case("index_en.html", "index_es.html")]
#[case("some/path/file_es.md", "some/path/file_es.md")]
#[case("some/path/file_en.md", "some/path/file_es.md")]
#[case("some/es/file.md", "some/es/file.md")]
#[case("some/en/file.md", "some/es/file.md")]
#[case("es/file.md", "es/file.md")]
#[case("en/file.md", "es/file.md")]
#[case("notes_en", "notes_es")]
fn base_filename_returns_default_locale_path(
    #[case] path: &str,
    #[case] expected: &str,
) -> Result<()> {
    let resolver = resolver()?;
    let base = resolver.base_filename(path);
    ensure!(
        base == expected,
        "expected base of {path:?} to be {expected:?}, got {base:?}"
    );
    Ok(())
}

#[rstest]
#[case("index_ca.html")]
#[case("ca/file.md")]
#[case("rand.md")]
fn base_filename_ignores_unconfigured_locales(#[case] path: &str) -> Result<()> {
    let resolver = resolver()?;
    let base = resolver.base_filename(path);
    ensure!(
        base == path,
        "expected {path:?} to pass through unchanged, got {base:?}"
    );
    Ok(())
}

#[rstest]
fn base_filename_is_idempotent() -> Result<()> {
    let resolver = resolver()?;
    let once = resolver.base_filename("some/en/file_en.md");
    let twice = resolver.base_filename(&once);
    ensure!(
        once == twice,
        "expected idempotence, got {once:?} then {twice:?}"
    );
    Ok(())
}

#[rstest]
#[case("index_es.html", Some("es"))]
#[case("index_en.html", Some("en"))]
#[case("some/path/file_es.md", Some("es"))]
#[case("some/path/file_en.md", Some("en"))]
#[case("some/es/file.md", Some("es"))]
#[case("some/en/file.md", Some("en"))]
#[case("es/file.md", Some("es"))]
#[case("en/file.md", Some("en"))]
#[case("rand.md", None)]
#[case("file_ca.md", None)]
#[case("ca/file.md", None)]
fn locale_of_recognises_both_conventions(
    #[case] path: &str,
    #[case] expected: Option<&str>,
) -> Result<()> {
    let resolver = resolver()?;
    let locale = resolver.locale_of(path);
    ensure!(
        locale == expected,
        "expected locale of {path:?} to be {expected:?}, got {locale:?}"
    );
    Ok(())
}

#[rstest]
fn path_segment_takes_precedence_over_suffix() -> Result<()> {
    let resolver = resolver()?;
    let locale = resolver.locale_of("en/file_es.md");
    ensure!(
        locale == Some("en"),
        "expected the path segment to win, got {locale:?}"
    );
    Ok(())
}

#[rstest]
fn basename_segment_never_matches_the_path_rule() -> Result<()> {
    let resolver = resolver()?;
    // "en" here is a filename, not a directory segment.
    let locale = resolver.locale_of("some/en");
    ensure!(
        locale.is_none(),
        "expected no match for a bare basename, got {locale:?}"
    );
    Ok(())
}

#[rstest]
#[case("index_es.html")]
#[case("some/path/file_es.md")]
#[case("some/es/file.md")]
#[case("es/file.md")]
fn alt_filename_round_trips_between_configured_locales(#[case] path: &str) -> Result<()> {
    let resolver = resolver()?;
    let there = resolver.alt_filename(path, "es", "en");
    let back = resolver.alt_filename(&there, "en", "es");
    ensure!(
        back == path,
        "expected {path:?} to round-trip via {there:?}, got {back:?}"
    );
    Ok(())
}

#[rstest]
fn matches_reports_whether_any_rule_applies() -> Result<()> {
    let resolver = resolver()?;
    ensure!(resolver.matches("en/file.md"), "path rule should match");
    ensure!(resolver.matches("file_en.md"), "suffix rule should match");
    ensure!(!resolver.matches("rand.md"), "no rule should match");
    Ok(())
}
