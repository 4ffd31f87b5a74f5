//! `VagrantController` tests against a recording mock runner.

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Arc;

use evilgenius::application::ports::{MachineInspector, MachineLifecycle, RemoteShell};
use evilgenius::domain::{ExitPolicy, MachineState, StatusParseError, VagrantError};
use evilgenius::infra::log_sink::NullSink;
use evilgenius::infra::vagrant::VagrantController;

use crate::mocks::{MockCommandRunner, ROOT, STATUS_OUTPUT, VAGRANT, controller};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| (*a).to_string()).collect()
}

// ── Argument lists ────────────────────────────────────────────────────────────

#[tokio::test]
async fn init_without_vm_passes_only_subcommand() {
    let mock = MockCommandRunner::new_ok();
    let (ctl, _) = controller(&mock);
    ctl.init(None).await.expect("init");
    assert_eq!(mock.recorded_calls(), vec![args(&["init"])]);
}

#[tokio::test]
async fn up_with_vm_appends_machine_name() {
    let mock = MockCommandRunner::new_ok();
    let (ctl, _) = controller(&mock);
    ctl.up(Some("web1")).await.expect("up");
    ctl.up(None).await.expect("up all");
    assert_eq!(
        mock.recorded_calls(),
        vec![args(&["up", "web1"]), args(&["up"])]
    );
}

#[tokio::test]
async fn destroy_always_forces() {
    let mock = MockCommandRunner::new_ok();
    let (ctl, _) = controller(&mock);
    ctl.destroy(Some("db1")).await.expect("destroy vm");
    ctl.destroy(None).await.expect("destroy all");
    assert_eq!(
        mock.recorded_calls(),
        vec![args(&["destroy", "db1", "--force"]), args(&["destroy", "--force"])]
    );
}

#[tokio::test]
async fn run_command_passes_command_as_single_argument() {
    let mock = MockCommandRunner::with_output(&["Linux web1 3.2.0"], 0);
    let (ctl, _) = controller(&mock);
    let invocation = ctl
        .run_command("uname -a | head -n 1", Some("web1"))
        .await
        .expect("ssh");
    assert_eq!(
        mock.recorded_calls(),
        vec![args(&["ssh", "web1", "-c", "uname -a | head -n 1"])]
    );
    assert_eq!(invocation.lines, vec!["Linux web1 3.2.0".to_string()]);
}

#[tokio::test]
async fn run_command_without_vm_omits_name() {
    let mock = MockCommandRunner::new_ok();
    let (ctl, _) = controller(&mock);
    ctl.run_command("true", None).await.expect("ssh");
    assert_eq!(mock.recorded_calls(), vec![args(&["ssh", "-c", "true"])]);
}

#[tokio::test]
async fn invocation_records_program_and_root() {
    let mock = MockCommandRunner::new_ok();
    let (ctl, _) = controller(&mock);
    let invocation = ctl.up(None).await.expect("up");
    assert_eq!(invocation.program, PathBuf::from(VAGRANT));
    assert_eq!(invocation.cwd, PathBuf::from(ROOT));
    assert_eq!(invocation.command_line(), format!("{VAGRANT} up"));
}

// ── Output sink ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_output_line_reaches_the_sink() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, sink) = controller(&mock);
    ctl.status().await.expect("status");
    assert_eq!(sink.snapshot().len(), STATUS_OUTPUT.len());
}

// ── Status ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn status_parses_runner_output() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, _) = controller(&mock);
    let statuses = ctl.status().await.expect("status");
    assert_eq!(mock.recorded_calls(), vec![args(&["status"])]);
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses["web1"], MachineState::Running);
    assert_eq!(statuses["db1"], MachineState::NotCreated);
}

#[tokio::test]
async fn status_of_listed_machine() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, _) = controller(&mock);
    let state = ctl.status_of("db1").await.expect("status_of");
    assert_eq!(state, MachineState::NotCreated);
}

#[tokio::test]
async fn status_of_unlisted_machine_is_unknown() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, _) = controller(&mock);
    let err = ctl.status_of("mail1").await.expect_err("should fail");
    let vagrant_err = err.downcast_ref::<VagrantError>().expect("VagrantError");
    assert!(matches!(vagrant_err, VagrantError::UnknownMachine(name) if name == "mail1"));
}

#[tokio::test]
async fn status_with_unparseable_entry_reports_line() {
    let mock = MockCommandRunner::with_output(
        &["Current machine states:", "", "web1   exploding (virtualbox)"],
        0,
    );
    let (ctl, _) = controller(&mock);
    let err = ctl.status().await.expect_err("should fail");
    let vagrant_err = err.downcast_ref::<VagrantError>().expect("VagrantError");
    assert!(matches!(
        vagrant_err,
        VagrantError::StatusParse(StatusParseError { line }) if line == "web1   exploding (virtualbox)"
    ));
}

#[tokio::test]
async fn status_without_header_is_empty() {
    let mock = MockCommandRunner::with_output(&["A Vagrant environment is required."], 1);
    let (ctl, _) = controller(&mock);
    let statuses = ctl.status().await.expect("status");
    assert!(statuses.is_empty());
}

// ── Exit policy ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn return_code_policy_hands_back_nonzero_exit() {
    let mock = MockCommandRunner::with_output(&["boom"], 3);
    let (ctl, _) = controller(&mock);
    let invocation = ctl.up(Some("web1")).await.expect("up");
    assert_eq!(invocation.exit_code, 3);
    assert!(!invocation.success());
}

#[tokio::test]
async fn fail_policy_turns_nonzero_exit_into_error() {
    let mock = MockCommandRunner::with_output(&["boom"], 3);
    let (ctl, _) = controller(&mock);
    let ctl = ctl.with_exit_policy(ExitPolicy::Fail);
    let err = ctl.up(Some("web1")).await.expect_err("should fail");
    let vagrant_err = err.downcast_ref::<VagrantError>().expect("VagrantError");
    assert!(matches!(vagrant_err, VagrantError::ProcessFailed { code: 3, .. }));
}

#[tokio::test]
async fn fail_policy_accepts_zero_exit() {
    let mock = MockCommandRunner::new_ok();
    let (ctl, _) = controller(&mock);
    let ctl = ctl.with_exit_policy(ExitPolicy::Fail);
    assert!(ctl.destroy(None).await.is_ok());
}

#[tokio::test]
async fn spawn_failure_propagates_with_subcommand_context() {
    let mock = MockCommandRunner::new_spawn_error();
    let (ctl, _) = controller(&mock);
    let err = ctl.init(None).await.expect_err("should fail");
    assert!(format!("{err:#}").contains("vagrant init"));
}

// ── locate ────────────────────────────────────────────────────────────────────

#[test]
fn locate_missing_executable_is_tool_not_found() {
    let result = VagrantController::locate(
        MockCommandRunner::new_ok(),
        "evilgenius-no-such-vagrant-binary",
        Some(PathBuf::from(ROOT)),
        Arc::new(NullSink),
    );
    let err = result.err().expect("should fail");
    let vagrant_err = err.downcast_ref::<VagrantError>().expect("VagrantError");
    assert!(matches!(vagrant_err, VagrantError::ToolNotFound { .. }));
    assert!(err.to_string().contains("does not appear to be installed"));
}

#[cfg(unix)]
#[test]
fn locate_explicit_path_uses_it_verbatim() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let exe = dir.path().join("vagrant");
    std::fs::write(&exe, "#!/bin/sh\n").expect("write");
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).expect("chmod");

    let ctl = VagrantController::locate(
        MockCommandRunner::new_ok(),
        exe.to_str().expect("utf-8 path"),
        Some(dir.path().to_path_buf()),
        Arc::new(NullSink),
    )
    .expect("locate");
    assert_eq!(ctl.executable(), exe.as_path());
    assert_eq!(ctl.root(), dir.path());
}
