// src/diff.rs
//! Zero-context unified-diff parser: `diff --git` resets, `+++ b/<path>`
//! opens a file section, `@@ ... +N` sets the next added-line number, and
//! `+` lines (not `+++`) are emitted with a monotonically increasing line
//! number.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

static HUNK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+(\d+)").expect("hunk header regex must compile"));

/// One added line: `(line_number, text)`.
pub type AddedLine = (usize, String);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub path: String,
    pub added_lines: Vec<AddedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Header,
    Body,
}

/// Parses a zero-context unified diff (`git diff --unified=0`) into a map
/// from path to the added lines found in that path's hunks, in order.
#[must_use]
pub fn parse_diff(diff_text: &str) -> BTreeMap<String, Vec<AddedLine>> {
    let mut files: BTreeMap<String, Vec<AddedLine>> = BTreeMap::new();
    let mut state = State::Idle;
    let mut current_path: Option<String> = None;
    let mut next_line_number: usize = 0;

    for line in diff_text.lines() {
        if line.starts_with("diff --git") {
            current_path = None;
            state = State::Idle;
            continue;
        }

        if let Some(path) = line.strip_prefix("+++ b/") {
            current_path = Some(path.to_string());
            files.entry(path.to_string()).or_default();
            state = State::Header;
            continue;
        }

        if line.starts_with("@@") {
            match HUNK_HEADER.captures(line).and_then(|caps| caps[1].parse::<usize>().ok()) {
                Some(start) => next_line_number = start.saturating_sub(1),
                None => {
                    warn!("malformed hunk header, resetting line count: {line}");
                    next_line_number = 0;
                }
            }
            state = State::Body;
            continue;
        }

        if state == State::Body && current_path.is_some() && line.starts_with('+') && !line.starts_with("+++") {
            next_line_number += 1;
            let path = current_path.as_ref().expect("checked above");
            files
                .entry(path.clone())
                .or_default()
                .push((next_line_number, line[1..].trim().to_string()));
        }
    }

    files
}

/// Flat view of `parse_diff`, one entry per path, sorted for determinism.
#[must_use]
pub fn parse_diff_entries(diff_text: &str) -> Vec<DiffEntry> {
    parse_diff(diff_text)
        .into_iter()
        .map(|(path, added_lines)| DiffEntry { path, added_lines })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_file_single_hunk() {
        let diff = "\
diff --git a/foo.py b/foo.py
index 111..222 100644
--- a/foo.py
+++ b/foo.py
@@ -1,0 +2,2 @@
+line two
+line three
";
        let parsed = parse_diff(diff);
        let lines = &parsed["foo.py"];
        assert_eq!(lines, &vec![(2, "line two".to_string()), (3, "line three".to_string())]);
    }

    #[test]
    fn resets_between_files() {
        let diff = "\
diff --git a/a.txt b/a.txt
+++ b/a.txt
@@ -0,0 +1,1 @@
+hello
diff --git a/b.txt b/b.txt
+++ b/b.txt
@@ -0,0 +5,1 @@
+world
";
        let parsed = parse_diff(diff);
        assert_eq!(parsed["a.txt"], vec![(1, "hello".to_string())]);
        assert_eq!(parsed["b.txt"], vec![(5, "world".to_string())]);
    }

    #[test]
    fn line_numbers_are_monotonic_within_a_file() {
        let diff = "\
diff --git a/a.txt b/a.txt
+++ b/a.txt
@@ -0,0 +10,3 @@
+one
+two
+three
";
        let parsed = parse_diff(diff);
        let numbers: Vec<usize> = parsed["a.txt"].iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![10, 11, 12]);
    }

    #[test]
    fn removed_lines_are_not_emitted() {
        let diff = "\
diff --git a/a.txt b/a.txt
+++ b/a.txt
@@ -1,1 +1,1 @@
-old line
+new line
";
        let parsed = parse_diff(diff);
        assert_eq!(parsed["a.txt"], vec![(1, "new line".to_string())]);
    }

    #[test]
    fn empty_diff_yields_no_files() {
        assert!(parse_diff("").is_empty());
    }

    #[test]
    fn malformed_hunk_header_resets_line_count_to_zero() {
        let diff = "\
diff --git a/a.txt b/a.txt
+++ b/a.txt
@@ garbage @@
+first
+second
";
        let parsed = parse_diff(diff);
        assert_eq!(
            parsed["a.txt"],
            vec![(1, "first".to_string()), (2, "second".to_string())]
        );
    }
}
