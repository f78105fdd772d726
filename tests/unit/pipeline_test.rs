//! End-to-end runs of the pipeline with fake collaborators
//!
//! Real files on disk, fake VCS and fake linter.

use std::path::PathBuf;

use pylint_vcs::core::models::Category;
use pylint_vcs::core::services::VcsRegistry;
use pylint_vcs::output::RunStatus;
use pylint_vcs::pipeline::{RunError, RunRequest, execute};
use pylint_vcs::session::{SessionError, SessionOptions};

use crate::common::{FakeLinter, FakeVersionControl, TestProject, import_sys_findings};

fn request(project: &TestProject, options: SessionOptions) -> RunRequest {
    RunRequest {
        paths: vec![project.path().to_path_buf()],
        options: SessionOptions {
            cwd: project.path().to_path_buf(),
            ..options
        },
        jobs: Some(2),
    }
}

fn full_mode() -> SessionOptions {
    SessionOptions {
        pylint: true,
        ..SessionOptions::default()
    }
}

fn vcs_mode() -> SessionOptions {
    SessionOptions {
        vcs: true,
        ..SessionOptions::default()
    }
}

fn import_sys_linter() -> FakeLinter {
    import_sys_findings()
        .into_iter()
        .fold(FakeLinter::clean(), |linter, d| linter.with_finding("target.py", d))
}

#[test]
fn import_sys_fails_with_rendered_report() {
    let project = TestProject::new();
    project.add_file("target.py", "import sys");

    let report =
        execute(&request(&project, full_mode()), &VcsRegistry::new(), &import_sys_linter()).unwrap();

    assert_eq!(report.status(), RunStatus::Failed);
    assert_eq!(report.outcomes.len(), 1);
    let outcome = &report.outcomes[0];
    assert_eq!(outcome.label, "[pylint] target.py");
    assert_eq!(
        outcome.report(),
        Some(
            "C:  1, 0: Final newline missing (missing-final-newline)\n\
             C:  1, 0: Missing module docstring (missing-module-docstring)\n\
             W:  1, 0: Unused import sys (unused-import)"
        )
    );
}

#[test]
fn rcfile_ignore_excludes_target() {
    let project = TestProject::new();
    project.add_file("target.py", "import sys");
    project.add_file("other.py", "\"\"\"Doc.\"\"\"\n");
    project.add_file("pylintrc", "[MASTER]\nignore = target.py\n");

    let linter = import_sys_linter();
    let report = execute(&request(&project, full_mode()), &VcsRegistry::new(), &linter).unwrap();

    assert_eq!(report.status(), RunStatus::Passed);
    let labels: Vec<_> = report.outcomes.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["[pylint] other.py"]);
    assert_eq!(linter.seen(), vec![(project.path().join("other.py"), Some(project.path().join("pylintrc")))]);
}

#[test]
fn rcfile_message_template_is_used() {
    let project = TestProject::new();
    project.add_file("target.py", "import sys");
    project.add_file("pylintrc", "[REPORTS]\nmsg-template = start {msg_id} end\n");

    let report =
        execute(&request(&project, full_mode()), &VcsRegistry::new(), &import_sys_linter()).unwrap();
    assert_eq!(report.outcomes[0].report(), Some("start C0304 end\nstart C0114 end\nstart W0611 end"));
}

#[test]
fn vcs_mode_lints_only_added_sources() {
    let project = TestProject::new();
    let added = project.add_file("pkg/added.py", "");
    project.add_file("pkg/untouched.py", "");
    project.add_file("pkg/some_other_data", "");

    let vcs = FakeVersionControl::at(
        project.path(),
        vec![added.clone(), project.path().join("pkg/some_other_data"), project.path().join("pkg/deleted.py")],
    );
    let registry = VcsRegistry::new().with(vcs);
    let linter = FakeLinter::clean();

    let report = execute(&request(&project, vcs_mode()), &registry, &linter).unwrap();

    assert_eq!(report.notices, vec!["VCS working copy detected. VCS linting mode enabled"]);
    let files: Vec<PathBuf> = report.outcomes.iter().map(|o| o.file_path.clone()).collect();
    assert_eq!(files, vec![added]);
    assert_eq!(report.status(), RunStatus::Passed);
}

#[test]
fn vcs_fallback_lints_like_full_mode() {
    let project = TestProject::new();
    project.add_file("a.py", "");
    project.add_file("pkg/b.py", "");

    let full = execute(&request(&project, full_mode()), &VcsRegistry::new(), &FakeLinter::clean()).unwrap();
    let registry = VcsRegistry::new().with(FakeVersionControl::absent());
    let fallback = execute(&request(&project, vcs_mode()), &registry, &FakeLinter::clean()).unwrap();

    assert_eq!(
        fallback.notices,
        vec!["No VCS working copy detected. VCS linting mode disabled: linting all the files"]
    );
    assert_eq!(full.outcomes, fallback.outcomes);
}

#[test]
fn broken_listing_falls_back() {
    let project = TestProject::new();
    project.add_file("a.py", "");
    let registry = VcsRegistry::new().with(FakeVersionControl::broken(project.path()));

    let report = execute(&request(&project, vcs_mode()), &registry, &FakeLinter::clean()).unwrap();
    assert_eq!(report.outcomes.len(), 1);
}

#[test]
fn relative_root_aborts_the_run() {
    let project = TestProject::new();
    project.add_file("a.py", "");
    let registry = VcsRegistry::new().with(FakeVersionControl::at(std::path::Path::new("relative"), vec![]));

    let err = execute(&request(&project, vcs_mode()), &registry, &FakeLinter::clean()).unwrap_err();
    assert!(matches!(err, RunError::Session(SessionError::Vcs(_))));
}

#[test]
fn no_vcs_flag_prints_notice_and_lints_everything() {
    let project = TestProject::new();
    project.add_file("a.py", "");
    let mut options = vcs_mode();
    options.no_vcs = true;

    let report = execute(&request(&project, options), &VcsRegistry::new(), &FakeLinter::clean()).unwrap();
    assert_eq!(report.notices, vec!["VCS linting mode set to disabled"]);
    assert_eq!(report.outcomes.len(), 1);
}

#[test]
fn disabled_run_collects_nothing() {
    let project = TestProject::new();
    project.add_file("a.py", "");
    let mut options = full_mode();
    options.no_pylint = true;

    let linter = FakeLinter::clean();
    let report = execute(&request(&project, options), &VcsRegistry::new(), &linter).unwrap();
    assert_eq!(report.status(), RunStatus::NoTests);
    assert!(linter.seen().is_empty());
}

#[test]
fn informational_findings_still_fail() {
    let project = TestProject::new();
    project.add_file("noisy.py", "");
    let linter = FakeLinter::clean().with_finding(
        "noisy.py",
        pylint_vcs::core::models::Diagnostic::new(
            Category::Info,
            "I0011",
            "locally-disabled",
            "Locally disabling unused-import (W0611)",
            2,
            0,
        ),
    );

    let report = execute(&request(&project, full_mode()), &VcsRegistry::new(), &linter).unwrap();
    assert_eq!(report.status(), RunStatus::Failed);
}

#[test]
fn missing_path_is_an_error() {
    let project = TestProject::new();
    let mut req = request(&project, full_mode());
    req.paths = vec![PathBuf::from("does/not/exist")];

    let err = execute(&req, &VcsRegistry::new(), &FakeLinter::clean()).unwrap_err();
    assert!(matches!(err, RunError::Discovery(_)));
}
