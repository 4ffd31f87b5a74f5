//! `TokioCommandRunner` tests against real `/bin/sh` children.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use evilgenius::application::ports::{CommandRunner, OutputSink, ProcessInvocation};
use evilgenius::domain::VagrantError;
use evilgenius::infra::command_runner::TokioCommandRunner;
use evilgenius::infra::log_sink::NullSink;

use crate::mocks::CollectingSink;

const SH: &str = "/bin/sh";

async fn sh(script: &str, cwd: &Path) -> anyhow::Result<ProcessInvocation> {
    TokioCommandRunner::new(None)
        .run(Path::new(SH), &["-c", script], cwd, Arc::new(NullSink))
        .await
}

#[tokio::test]
async fn captures_every_line_in_order_exactly_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = "i=1; while [ $i -le 5000 ]; do echo line$i; i=$((i+1)); done";
    let invocation = sh(script, dir.path()).await.expect("run");
    assert_eq!(invocation.lines.len(), 5000);
    for (i, line) in invocation.lines.iter().enumerate() {
        assert_eq!(line, &format!("line{}", i + 1));
    }
    assert!(invocation.success());
}

#[tokio::test]
async fn merges_stderr_in_write_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = "i=1; while [ $i -le 300 ]; do echo out$i; echo err$i 1>&2; i=$((i+1)); done";
    let expected: Vec<String> = (1..=300)
        .flat_map(|i| [format!("out{i}"), format!("err{i}")])
        .collect();
    for _ in 0..5 {
        let invocation = sh(script, dir.path()).await.expect("run");
        assert_eq!(invocation.lines, expected);
    }
}

#[tokio::test]
async fn stderr_only_output_is_captured() {
    let dir = tempfile::tempdir().expect("tempdir");
    let invocation = sh("echo 'The box could not be found.' 1>&2; exit 1", dir.path())
        .await
        .expect("run");
    assert_eq!(invocation.lines, vec!["The box could not be found."]);
    assert_eq!(invocation.exit_code, 1);
}

#[tokio::test]
async fn strips_line_endings_and_keeps_unterminated_tail() {
    let dir = tempfile::tempdir().expect("tempdir");
    let invocation = sh("printf 'a\\r\\nb\\nc'", dir.path()).await.expect("run");
    assert_eq!(invocation.lines, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn sink_sees_each_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sink = Arc::new(CollectingSink::default());
    let invocation = TokioCommandRunner::new(None)
        .run(
            Path::new(SH),
            &["-c", "echo one; echo two; echo three"],
            dir.path(),
            Arc::clone(&sink) as Arc<dyn OutputSink>,
        )
        .await
        .expect("run");
    assert_eq!(sink.snapshot(), invocation.lines);
    assert_eq!(sink.snapshot(), vec!["one", "two", "three"]);
}

#[tokio::test]
async fn reports_exit_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let invocation = sh("echo failing; exit 7", dir.path()).await.expect("run");
    assert_eq!(invocation.exit_code, 7);
    assert!(!invocation.success());
    assert_eq!(invocation.lines, vec!["failing"]);
}

#[tokio::test]
async fn runs_in_requested_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("Vagrantfile"), "# marker\n").expect("write");
    let invocation = sh("cat Vagrantfile", dir.path()).await.expect("run");
    assert_eq!(invocation.lines, vec!["# marker"]);
    assert_eq!(invocation.cwd.as_path(), dir.path());
}

#[tokio::test]
async fn silent_process_yields_no_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let invocation = sh("true", dir.path()).await.expect("run");
    assert!(invocation.lines.is_empty());
    assert_eq!(invocation.exit_code, 0);
}

#[tokio::test]
async fn timeout_kills_the_child() {
    let dir = tempfile::tempdir().expect("tempdir");
    let started = std::time::Instant::now();
    let err = TokioCommandRunner::new(Some(Duration::from_millis(200)))
        .run(Path::new(SH), &["-c", "exec sleep 30"], dir.path(), Arc::new(NullSink))
        .await
        .expect_err("should time out");
    assert!(started.elapsed() < Duration::from_secs(20));
    let vagrant_err = err.downcast_ref::<VagrantError>().expect("VagrantError");
    assert!(matches!(vagrant_err, VagrantError::Timeout { .. }));
}

#[tokio::test]
async fn missing_program_fails_to_spawn() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = TokioCommandRunner::new(None)
        .run(
            &dir.path().join("no-such-program"),
            &["status"],
            dir.path(),
            Arc::new(NullSink),
        )
        .await
        .expect_err("should fail");
    assert!(err.to_string().contains("failed to spawn"));
}
