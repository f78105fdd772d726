//! Stand-in pylint executable for CLI tests
//!
//! A shell script that answers like `pylint --output-format=json`: files
//! containing `import sys` get the docstring and unused-import findings,
//! plus a final-newline finding when the last byte is not a newline, and
//! exit status 20. Every other file gets an empty report.

use std::fs;
use std::path::{Path, PathBuf};

const SCRIPT: &str = r#"#!/bin/sh
for last; do :; done
if grep -q "import sys" "$last"; then
  printf '['
  if [ -n "$(tail -c 1 "$last")" ]; then
    cat <<JSON
{"type": "convention", "module": "target", "obj": "", "line": 1, "column": 0,
 "path": "$last", "symbol": "missing-final-newline",
 "message": "Final newline missing", "message-id": "C0304"},
JSON
  fi
  cat <<JSON
{"type": "convention", "module": "target", "obj": "", "line": 1, "column": 0,
 "path": "$last", "symbol": "missing-module-docstring",
 "message": "Missing module docstring", "message-id": "C0114"},
{"type": "warning", "module": "target", "obj": "", "line": 1, "column": 0,
 "path": "$last", "symbol": "unused-import",
 "message": "Unused import sys", "message-id": "W0611"}]
JSON
  exit 20
fi
echo "[]"
"#;

/// Install the fake pylint into `dir` and return its path
pub fn install(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-pylint");
    fs::write(&path, SCRIPT).expect("Failed to write fake pylint");
    let mut perms = fs::metadata(&path).expect("Failed to stat fake pylint").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod fake pylint");
    path
}
