//! `evilgenius status` handler tests.

#![allow(clippy::expect_used)]

use evilgenius::app::{AppContext, AppFlags};
use evilgenius::commands::status::{StatusArgs, run};
use evilgenius::domain::{EvilGeniusConfig, VagrantError};

use crate::mocks::{MockCommandRunner, STATUS_OUTPUT, controller};

fn quiet_app(json: bool) -> AppContext {
    let flags = AppFlags {
        quiet: true,
        no_color: true,
        yes: true,
        json,
        ..Default::default()
    };
    AppContext::with_config(&flags, EvilGeniusConfig::default())
}

#[tokio::test]
async fn status_all_machines_succeeds() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, _) = controller(&mock);
    run(&quiet_app(false), &ctl, &StatusArgs::default())
        .await
        .expect("status");
}

#[tokio::test]
async fn status_json_succeeds() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, _) = controller(&mock);
    run(&quiet_app(true), &ctl, &StatusArgs::default())
        .await
        .expect("status");
}

#[tokio::test]
async fn status_single_machine_succeeds() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, _) = controller(&mock);
    let args = StatusArgs {
        vm: Some("web1".to_string()),
    };
    run(&quiet_app(false), &ctl, &args).await.expect("status");
}

#[tokio::test]
async fn status_unknown_machine_fails() {
    let mock = MockCommandRunner::with_output(STATUS_OUTPUT, 0);
    let (ctl, _) = controller(&mock);
    let args = StatusArgs {
        vm: Some("ghost".to_string()),
    };
    let err = run(&quiet_app(false), &ctl, &args)
        .await
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<VagrantError>(),
        Some(VagrantError::UnknownMachine(_))
    ));
}
