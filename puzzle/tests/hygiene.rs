//! Hygiene — enforces coding standards at test time
//!
//! Scans the puzzle crate's production sources for patterns that panic,
//! swallow errors, or leak debugging output into the browser console. Each
//! pattern has a budget (zero for all of them). The budget never grows: a new
//! hit has to be fixed, not allowed.

use std::fs;
use std::path::Path;

struct Budget {
    /// Substring searched for on every line.
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "crashes the page" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "crashes the page" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "unfinished stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" };
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "discards a result unseen" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "drops the error value" };
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, why: "no stdout in the browser" };
const DBG: Budget = Budget { pattern: "dbg!(", max: 0, why: "debug leftovers" };
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" };

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`; `*_test.rs` files are skipped.
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

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the puzzle crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let count: usize = hits.iter().map(|(_, n)| n).sum();
    let listing = hits
        .iter()
        .map(|(path, n)| format!("  {path}: {n}"))
        .collect::<Vec<_>>()
        .join("\n");

    assert!(
        count <= budget.max,
        "`{}` budget exceeded ({}): found {count}, max {}.\n{listing}",
        budget.pattern,
        budget.why,
        budget.max
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn println_budget() {
    check(&PRINTLN);
}

#[test]
fn dbg_budget() {
    check(&DBG);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
