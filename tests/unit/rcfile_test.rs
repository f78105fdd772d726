//! Tests for reading pylint rcfiles from disk

use std::collections::BTreeSet;

use pylint_vcs::adapters::rcfile::{RcfileError, RuleConfig};

use crate::common::TestProject;

#[test]
fn typical_pylintrc() {
    let project = TestProject::new();
    let path = project.add_file(
        "pylintrc",
        "\
[MASTER]
# Files or directories to be skipped
ignore=CVS,migrations
ignore-patterns=test_.*?py,
    .*_pb2.py

[MESSAGES CONTROL]
disable=C0114

[REPORTS]
output-format=text
msg-template={path}:{line}: [{msg_id}({symbol}), {obj}] {msg}
",
    );

    let rc = RuleConfig::load(&path).unwrap();
    assert_eq!(rc.ignore_list, BTreeSet::from(["CVS".to_string(), "migrations".to_string()]));
    assert_eq!(rc.ignore_patterns, vec!["test_.*?py", ".*_pb2.py"]);
    assert_eq!(
        rc.message_template.as_deref(),
        Some("{path}:{line}: [{msg_id}({symbol}), {obj}] {msg}")
    );
}

#[test]
fn empty_file_gives_defaults() {
    let project = TestProject::new();
    let path = project.add_file(".pylintrc", "");
    assert_eq!(RuleConfig::load(&path).unwrap(), RuleConfig::default());
}

#[test]
fn syntax_error_names_the_file() {
    let project = TestProject::new();
    let path = project.add_file("broken.rc", "[MASTER]\nthis line has no delimiter\n");

    let err = RuleConfig::load(&path).unwrap_err();
    assert!(matches!(err, RcfileError::Syntax { .. }));
    assert!(err.to_string().contains("broken.rc"));
}

#[test]
fn blank_line_inside_ignore_patterns_keeps_later_patterns() {
    let project = TestProject::new();
    let path = project.add_file(
        "pylintrc",
        "\
[MASTER]
ignore-patterns=
    test_.*?py

    .*_pb2.py

[REPORTS]
msg-template={msg_id}
",
    );

    let rc = RuleConfig::load(&path).unwrap();
    assert_eq!(rc.ignore_patterns, vec!["test_.*?py", ".*_pb2.py"]);
    assert_eq!(rc.message_template.as_deref(), Some("{msg_id}"));
}
