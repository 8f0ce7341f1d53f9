//! Hygiene checks over the production sources in `src/`.
//!
//! Each antipattern has a budget of zero. Sibling `*_test.rs` files are
//! exempt; tests may unwrap and panic.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding test files.
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
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Lines containing `pattern`, per file.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn assert_absent(pattern: &str, what: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    let listing = found.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n");
    assert!(found.is_empty(), "{what} found in production code:\n{listing}");
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", ".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", ".expect()");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "panic!()");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", "unreachable!()");
}

#[test]
fn no_todo() {
    assert_absent("todo!(", "todo!()");
}

#[test]
fn no_unimplemented() {
    assert_absent("unimplemented!(", "unimplemented!()");
}

// =============================================================
// Silently dropped errors
// =============================================================

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "let _ =");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", ".ok()");
}

// =============================================================
// Structure
// =============================================================

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "#[allow(dead_code)]");
}

#[test]
fn tests_live_in_sibling_files() {
    let files = source_files();
    let inline: Vec<&str> = files
        .iter()
        .filter(|file| file.content.contains("mod tests {"))
        .map(|file| file.path.as_str())
        .collect();
    assert!(inline.is_empty(), "inline test modules; move them to *_test.rs: {inline:?}");
}
