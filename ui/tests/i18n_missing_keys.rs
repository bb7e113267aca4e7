use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Translation completeness checks for `lifegrid-ui.ftl`.
///
/// - every non-fallback locale defines at least the fallback (en-US) keys
/// - no locale defines a key twice
/// - every literal `t!("...")` key used under `src/` exists in the fallback
///
/// Key extraction is a line heuristic: `key =` at the start of a line is a
/// message definition; comments, attributes and selector variants are skipped.
///
/// Adding a locale:
/// 1. Create `ui/i18n/<locale>/lifegrid-ui.ftl`
/// 2. Copy all keys from `en-US/lifegrid-ui.ftl` and translate
/// 3. Register it in `LOCALES` below
const EN_US: &str = include_str!("../i18n/en-US/lifegrid-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/lifegrid-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback_keys = extract_keys(EN_US);
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_translation_keys_from_source(&src_root);
    assert!(!referenced.is_empty(), "no t!() call sites found under src/");

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

fn definition_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    if !key.is_empty() && key.chars().all(valid_key_char) {
        Some(key)
    } else {
        None
    }
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter_map(definition_key)
        .map(str::to_string)
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for line in src.lines() {
        if let Some(key) = definition_key(line) {
            if !seen.insert(key) {
                dups.insert(format!("{key}  (line: \"{line}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Literal first arguments of `t!("...")` in every `.rs` file under `src_root`.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(\"") {
            rest = &rest[pos + 4..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}
