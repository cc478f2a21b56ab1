use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file name in every locale folder.
const FTL_FILENAME: &str = "smartsalon-ui.ftl";
const FALLBACK: &str = "en-US";

/// Message IDs defined in a Fluent file. Comments, terms and
/// attribute/continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal keys passed to the `t!` macro anywhere under `src_root`.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let needle = concat!("t!", "(\"");
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (i, _) in content.match_indices(needle) {
            let rest = &content[i + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn every_referenced_key_is_translated_everywhere() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join("i18n");

    let fallback_file = i18n_root.join(FALLBACK).join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from {fallback_file:?}"
    );

    let used = referenced_keys(&crate_root.join("src"));
    assert!(!used.is_empty(), "No t! call sites found under src/");

    let missing_in_fallback: Vec<_> = used.difference(&fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced keys missing in {FALLBACK}:\n{}",
        missing_in_fallback.join("\n")
    );

    let mut per_locale: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale {locale} missing {path:?}"));
        let missing: Vec<_> = fallback_keys
            .difference(&parse_ftl_keys(&content))
            .cloned()
            .collect();
        if !missing.is_empty() {
            per_locale.insert(locale, missing);
        }
    }

    if !per_locale.is_empty() {
        let report = per_locale
            .iter()
            .map(|(locale, keys)| format!("  {locale}: {}", keys.join(", ")))
            .collect::<Vec<_>>()
            .join("\n");
        panic!("Locales missing translations relative to {FALLBACK}:\n{report}");
    }

    let unused: Vec<_> = fallback_keys.difference(&used).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys unused in sources: {}", unused.join(", "));
    }
}

#[test]
fn ftl_parser_skips_comments_and_terms() {
    let keys = parse_ftl_keys("# comment\n-brand = X\nnav-home = Home\n\n    .title = attr\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["nav-home".to_string()]);
}
