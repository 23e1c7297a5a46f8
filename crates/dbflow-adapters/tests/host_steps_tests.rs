use std::sync::Arc;

use dbflow_adapters::scripts::wipe_data_script;
use dbflow_adapters::{RunVmScript, StartVms, StopVms};
use dbflow_core::{HostPass, MultiHostRunner, PacingConfig, RecordingSleeper, Step, StepError, WorkflowContext};
use dbflow_domain::{Credential, CredentialKind, DatabaseInfra, Host, HostAttr, InstanceDetail};
use dbflow_providers::implementations::{InMemoryCompute, InMemoryInventory, InMemoryRemoteExecutor,
                                        StaticCredentialResolver};

struct Fixture {
    executor: Arc<InMemoryRemoteExecutor>,
    compute: Arc<InMemoryCompute>,
    runner: Arc<MultiHostRunner>,
}

fn fixture() -> Fixture {
    let inventory = InMemoryInventory::new().with_host("a", HostAttr::new("vm-a", "root", "secret"))
                                            .with_host("b", HostAttr::new("vm-b", "root", "secret"));
    let credentials = StaticCredentialResolver::new().with("dev",
                                                           CredentialKind::Compute,
                                                           Credential::new("cs", "pw", "http://compute.local", "dbaas"));
    let executor = Arc::new(InMemoryRemoteExecutor::new());
    let compute = Arc::new(InMemoryCompute::new());
    let runner = MultiHostRunner::new(executor.clone(), Arc::new(inventory), compute.clone(), Arc::new(credentials))
        .with_sleeper(Arc::new(RecordingSleeper::new()))
        .with_pacing(PacingConfig::immediate());
    Fixture { executor,
              compute,
              runner: Arc::new(runner) }
}

fn ctx() -> WorkflowContext {
    let instances = vec![InstanceDetail::new(Host::new("a", "a.db.local", "a").unwrap(), true),
                         InstanceDetail::new(Host::new("b", "b.db.local", "b").unwrap(), false)];
    WorkflowContext::new("dev", DatabaseInfra::new("infra-a", "small", 1024), instances)
}

#[test]
fn script_step_undo_runs_in_reverse() {
    let fx = fixture();
    let step = RunVmScript::new("configure", fx.runner.clone(), "echo {{IS_MASTER}}")
        .with_undo(wipe_data_script(), HostPass::reversed());
    let mut ctx = ctx();

    step.run(&mut ctx).unwrap();
    step.undo(&mut ctx).unwrap();

    assert_eq!(fx.executor.visited(), vec!["a", "b", "b", "a"]);
    let commands: Vec<String> = fx.executor.calls().into_iter().map(|c| c.command).collect();
    assert_eq!(commands[..2], ["echo true".to_string(), "echo false".to_string()]);
}

#[test]
fn script_step_without_undo_script_compensates_nothing() {
    let fx = fixture();
    let step = RunVmScript::new("configure", fx.runner.clone(), "true");
    let mut ctx = ctx();

    step.run(&mut ctx).unwrap();
    step.undo(&mut ctx).unwrap();

    assert_eq!(fx.executor.visited().len(), 2);
}

#[test]
fn aborted_fan_out_surfaces_as_error_recorded_once() {
    let fx = fixture();
    fx.executor.fail_on("b", 1);
    let step = RunVmScript::new("configure", fx.runner.clone(), "true");
    let mut ctx = ctx();

    let err = step.run(&mut ctx).unwrap_err();

    assert!(matches!(err, StepError::RemoteCommand { ref host, .. } if host == "b"));
    assert_eq!(ctx.errors().len(), 1);
}

#[test]
fn start_and_stop_are_each_others_undo() {
    let fx = fixture();
    let mut ctx = ctx();

    StartVms::new(fx.runner.clone()).undo(&mut ctx).unwrap();
    StopVms::new(fx.runner.clone()).undo(&mut ctx).unwrap();

    assert_eq!(fx.compute.calls(), vec!["stop:vm-a", "stop:vm-b", "start:vm-a", "start:vm-b"]);
}
