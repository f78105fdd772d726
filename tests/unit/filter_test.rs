//! Tests for relative paths and ignore rules
//!
//! Cases mirror how pylint's own `ignore` and `ignore-patterns` options
//! are applied to paths relative to the run root.

use pylint_vcs::core::services::{IgnoreFilter, relative_path, should_include};
use test_case::test_case;

// =============================================================================
// relative_path
// =============================================================================

#[test_case("/Hi/How/Are/You/blah.py", "/Hi/" ; "parent with trailing separator")]
#[test_case("/Hi/How/Are/You/blah.py", "/Hi" ; "parent without trailing separator")]
fn relative_path_strips_parent(path: &str, parent: &str) {
    assert_eq!(relative_path(path, parent), "How/Are/You/blah.py");
}

#[test]
fn relative_path_without_parent_is_unchanged() {
    assert_eq!(relative_path("/other/file.py", "/repo"), "/other/file.py");
}

#[test]
fn relative_path_of_root_itself_is_empty() {
    assert_eq!(relative_path("/repo", "/repo"), "");
    assert_eq!(relative_path("/repo/", "/repo"), "");
}

#[test]
fn relative_path_removes_first_occurrence_anywhere() {
    // Substring removal, not a prefix check
    assert_eq!(relative_path("/a/repo/b.py", "repo"), "a//b.py");
}

#[test]
fn relative_path_strips_only_one_separator() {
    assert_eq!(relative_path("/repo//b.py", "/repo"), "/b.py");
}

// =============================================================================
// should_include
// =============================================================================

#[test_case("part/is/fine.py", &["not_here.py"], &[], true ; "unrelated list")]
#[test_case("this/dir/is/ignored/file.py", &["ignored"], &[], false ; "directory segment")]
#[test_case("path/to/ignored.py", &["ignored.py"], &[], false ; "file segment")]
#[test_case("path/to/my_ignored.py", &["ignored.py"], &[], true ; "segment must match exactly")]
#[test_case("test_file.py", &[], &["test_.*?py"], false ; "pattern matches")]
#[test_case("some/dir/test_file.py", &[], &["test_.*?py"], true ; "pattern anchored at start")]
#[test_case("test_file.py", &["other"], &["^zzz", "test_"], false ; "any pattern excludes")]
#[test_case("test_file.py.bak", &[], &["test_.*py"], false ; "pattern not anchored at end")]
fn should_include_cases(path: &str, list: &[&str], patterns: &[&str], expected: bool) {
    assert_eq!(should_include(path, list, patterns), expected);
}

#[test]
fn invalid_pattern_never_matches() {
    assert!(should_include("unbalanced(.py", &[], &["unbalanced("]));
}

#[test]
fn empty_rules_include_everything() {
    let filter = IgnoreFilter::new(std::iter::empty(), std::iter::empty());
    assert!(filter.includes("any/path/at/all.py"));
}
