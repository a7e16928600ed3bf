//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources (`src/`, excluding `*_test.rs` and the
//! test-only fakes) for antipatterns. Every budget is zero; a new exception
//! means fixing an old one first.

use std::fs;
use std::path::Path;

/// Pattern, budget, and why it is banned.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics — these abort the wasm instance.
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0, "silently discards a result"),
    (".ok()", 0, "silently discards an error"),
    // Leaks — callbacks must be owned by a handle that unregisters them.
    (".forget()", 0, "leaks a JS closure"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with("_test.rs") || path_str.ends_with("fake.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({why}): found {count}, max {max}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_component_has_tests() {
    for module in ["config", "cursor", "header", "nav", "reveal", "theme", "dom/frame_loop"] {
        let test_file = format!("src/{module}_test.rs");
        assert!(Path::new(&test_file).exists(), "missing {test_file}");
        let source = fs::read_to_string(format!("src/{module}.rs")).unwrap_or_default();
        let stem = module.rsplit('/').next().unwrap_or(module);
        assert!(
            source.contains(&format!("#[path = \"{stem}_test.rs\"]")),
            "src/{module}.rs does not attach its tests"
        );
    }
}
