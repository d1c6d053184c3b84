//! Every `t!("key")` used in `src/` must resolve in the fallback locale, and
//! every shipped locale must define every fallback key.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "translatepro-ui.ftl";
const FALLBACK: &str = "en-US";

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message IDs (`id = value` lines); comments and `-terms` are skipped.
fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of `t!(...)` calls. Dynamically built IDs and
/// direct `fl!` calls are not seen; neither is anything under `src/tests`.
fn referenced_keys(content: &str) -> BTreeSet<String> {
    let needle = "t!(\"";
    let mut keys = BTreeSet::new();
    let mut rest = content;
    while let Some(pos) = rest.find(needle) {
        rest = &rest[pos + needle.len()..];
        let Some(end) = rest.find('"') else { break };
        let candidate = &rest[..end];
        if !candidate.is_empty() && candidate.chars().all(is_key_char) {
            keys.insert(candidate.to_string());
        }
        rest = &rest[end..];
    }
    keys
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().is_some_and(|name| name == "tests") {
                continue;
            }
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback_file = crate_root.join("i18n").join(FALLBACK).join(FTL_FILENAME);
    let fallback = ftl_keys(&fs::read_to_string(&fallback_file).expect("read fallback FTL"));
    assert!(!fallback.is_empty(), "no keys parsed from {fallback_file:?}");

    let mut sources = Vec::new();
    rust_sources(&crate_root.join("src"), &mut sources);
    let referenced: BTreeSet<String> = sources
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|content| referenced_keys(&content))
        .collect();
    assert!(referenced.contains("translator-submit"), "source scan found nothing");

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in source but missing from {FALLBACK}:\n{}",
        missing.join("\n")
    );

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback keys unused in src: {}", unused.len(), unused.join(", "));
    }
}

#[test]
fn every_locale_covers_the_fallback() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n");
    let fallback = ftl_keys(
        &fs::read_to_string(i18n_root.join(FALLBACK).join(FTL_FILENAME)).expect("read fallback"),
    );

    let mut report = String::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("locale {locale} is missing {path:?}"));
        let missing: Vec<_> = fallback.difference(&ftl_keys(&content)).cloned().collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {locale}: {}\n", missing.join(", ")));
        }
    }
    assert!(report.is_empty(), "locales missing fallback keys:\n{report}");
}

#[test]
fn key_scanner_ignores_non_key_literals() {
    let src = r#"t!("nav-home"); t!("Not A Key"); t!("with-arg", n = 1);"#;
    let keys = referenced_keys(src);
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        ["nav-home", "with-arg"]
    );
}
