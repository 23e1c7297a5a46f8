use std::sync::Arc;

use dbflow_adapters::{MountDataVolume, NewVolume, ResizeVolume, VolumeServices};
use dbflow_core::{ErrorCode, RunOutcome, Step, StepError, WorkflowContext, WorkflowDriver};
use dbflow_domain::{Credential, CredentialKind, DatabaseInfra, Host, HostAttr, Volume};
use dbflow_providers::implementations::{CallJournal, InMemoryInventory, InMemoryRemoteExecutor, InMemoryStorage,
                                        InMemoryVolumeRepository, StaticCredentialResolver, StorageCall};
use dbflow_providers::{ProviderError, VolumeRepository};

struct Fixture {
    journal: CallJournal,
    storage: Arc<InMemoryStorage>,
    volumes: Arc<InMemoryVolumeRepository>,
    executor: Arc<InMemoryRemoteExecutor>,
    credentials: Arc<StaticCredentialResolver>,
    services: VolumeServices,
}

fn host() -> Host { Host::new("h1", "db1.local", "10.0.0.1").unwrap() }

fn fixture(with_workload: bool) -> Fixture {
    let journal = CallJournal::new();
    let storage = Arc::new(InMemoryStorage::new().with_journal(journal.clone()));
    let volumes = Arc::new(InMemoryVolumeRepository::new().with_journal(journal.clone()));
    let executor = Arc::new(InMemoryRemoteExecutor::new().with_journal(journal.clone()));
    let credentials = Arc::new(StaticCredentialResolver::new().with("dev",
                                                                   CredentialKind::VolumeProvider,
                                                                   Credential::new("vp",
                                                                                   "pw",
                                                                                   "http://volumes.local",
                                                                                   "dbaas")));
    let mut inventory = InMemoryInventory::new().with_host("h1", HostAttr::new("vm-1", "root", "secret"));
    if with_workload {
        inventory = inventory.with_workload("h1");
    }
    let services = VolumeServices { storage: storage.clone(),
                                    volumes: volumes.clone(),
                                    inventory: Arc::new(inventory),
                                    executor: executor.clone(),
                                    credentials: credentials.clone() };
    Fixture { journal,
              storage,
              volumes,
              executor,
              credentials,
              services }
}

fn ctx() -> WorkflowContext { WorkflowContext::new("dev", DatabaseInfra::new("infra-a", "small", 2048), vec![]) }

#[test]
fn new_volume_creates_and_persists_active_volume() {
    let fx = fixture(true);
    let step = NewVolume::new(host(), fx.services.clone());

    step.run(&mut ctx()).unwrap();

    assert_eq!(fx.storage.calls(),
               vec![StorageCall::Create { group: "infra-a".into(),
                                          size_kb: 2048,
                                          to_address: "10.0.0.1".into() }]);
    let volume = fx.volumes.active_for_host("h1").unwrap().unwrap();
    assert_eq!(volume.identifier(), "vol-1");
    assert_eq!(volume.total_size_kb, 2048);
    assert!(volume.is_active);
}

#[test]
fn steps_skip_hosts_without_workload() {
    let fx = fixture(false);
    let mut ctx = ctx();

    NewVolume::new(host(), fx.services.clone()).run(&mut ctx).unwrap();
    NewVolume::new(host(), fx.services.clone()).undo(&mut ctx).unwrap();
    MountDataVolume::new(host(), fx.services.clone()).run(&mut ctx).unwrap();
    ResizeVolume::new(host(), fx.services.clone()).run(&mut ctx).unwrap();

    assert!(fx.storage.calls().is_empty());
    assert!(fx.executor.calls().is_empty());
    assert!(fx.volumes.all().is_empty());
    assert_eq!(fx.credentials.resolutions(), 0);
}

#[test]
fn undo_wipes_data_before_deleting_volume() {
    let fx = fixture(true);
    let step = NewVolume::new(host(), fx.services.clone());
    let mut ctx = ctx();
    step.run(&mut ctx).unwrap();

    step.undo(&mut ctx).unwrap();

    let wipe = fx.journal.position("exec:10.0.0.1").unwrap();
    let delete = fx.journal.position("storage:delete").unwrap();
    let forget = fx.journal.position("volume:delete:").unwrap();
    assert!(wipe < delete && delete < forget);
    assert_eq!(fx.executor.calls()[0].command, "rm -rf /data/*");
    assert!(fx.volumes.all().is_empty());
}

#[test]
fn failed_wipe_never_reaches_storage_delete() {
    let fx = fixture(true);
    let step = NewVolume::new(host(), fx.services.clone());
    let mut ctx = ctx();
    step.run(&mut ctx).unwrap();
    fx.executor.fail_on("10.0.0.1", 1);

    let err = step.undo(&mut ctx).unwrap_err();

    assert!(matches!(err, StepError::RemoteCommand { exit_code: 1, .. }));
    assert!(fx.journal.position("storage:delete").is_none());
    assert_eq!(fx.volumes.all().len(), 1);
}

#[test]
fn undo_without_active_volume_is_noop() {
    let fx = fixture(true);

    NewVolume::new(host(), fx.services.clone()).undo(&mut ctx()).unwrap();

    assert!(fx.executor.calls().is_empty());
    assert!(fx.storage.calls().is_empty());
}

#[test]
fn http_error_on_create_persists_nothing() {
    let fx = fixture(true);
    fx.storage.fail_with("create", 500, "quota exceeded");

    let err = NewVolume::new(host(), fx.services.clone()).run(&mut ctx()).unwrap_err();

    assert_eq!(err,
               StepError::Provider(ProviderError::Http { status: 500,
                                                         body: "quota exceeded".into() }));
    assert!(fx.volumes.all().is_empty());
}

#[test]
fn mount_runs_provider_command_on_host() {
    let fx = fixture(true);
    fx.volumes.save(&Volume::new("h1", "vol-7", 1024).unwrap()).unwrap();

    MountDataVolume::new(host(), fx.services.clone()).run(&mut ctx()).unwrap();

    let calls = fx.executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].address, "10.0.0.1");
    assert_eq!(calls[0].user, "root");
    assert_eq!(calls[0].command, "mount -t nfs storage:/exports/vol-7 /data");
}

#[test]
fn mount_and_resize_require_active_volume() {
    let fx = fixture(true);
    let expected = StepError::MissingVolume { host: "h1".into() };

    assert_eq!(MountDataVolume::new(host(), fx.services.clone()).run(&mut ctx()).unwrap_err(), expected);
    assert_eq!(ResizeVolume::new(host(), fx.services.clone()).run(&mut ctx()).unwrap_err(), expected);
    assert!(fx.storage.calls().is_empty());
}

#[test]
fn resize_updates_size_after_provider_confirms() {
    let fx = fixture(true);
    fx.volumes.save(&Volume::new("h1", "vol-7", 1024).unwrap()).unwrap();

    ResizeVolume::new(host(), fx.services.clone()).run(&mut ctx()).unwrap();

    assert_eq!(fx.storage.size_of("vol-7"), Some(2048));
    assert_eq!(fx.volumes.active_for_host("h1").unwrap().unwrap().total_size_kb, 2048);
}

#[test]
fn rejected_resize_keeps_recorded_size() {
    let fx = fixture(true);
    fx.volumes.save(&Volume::new("h1", "vol-7", 1024).unwrap()).unwrap();
    fx.storage.fail_with("resize", 409, "shrink not allowed");

    let err = ResizeVolume::new(host(), fx.services.clone()).run(&mut ctx()).unwrap_err();

    assert!(matches!(err, StepError::Provider(ProviderError::Http { status: 409, .. })));
    assert_eq!(fx.volumes.active_for_host("h1").unwrap().unwrap().total_size_kb, 1024);
}

#[test]
fn storage_credential_is_resolved_once_per_step() {
    let fx = fixture(true);
    let step = NewVolume::new(host(), fx.services.clone());
    let mut ctx = ctx();

    step.run(&mut ctx).unwrap();
    step.undo(&mut ctx).unwrap();

    assert_eq!(fx.credentials.resolutions(), 1);
}

#[test]
fn rerunning_new_volume_keeps_single_active_volume() {
    let fx = fixture(true);
    let step = NewVolume::new(host(), fx.services.clone());
    let mut ctx = ctx();

    step.run(&mut ctx).unwrap();
    step.run(&mut ctx).unwrap();

    assert_eq!(fx.storage.calls().len(), 1);
    assert_eq!(fx.volumes.all().len(), 1);

    step.undo(&mut ctx).unwrap();
    assert!(fx.volumes.active_for_host("h1").unwrap().is_none());
}

#[test]
fn step_ids_carry_the_host() {
    let fx = fixture(true);

    assert_eq!(NewVolume::new(host(), fx.services.clone()).id(), "new_volume:h1");
    assert_eq!(MountDataVolume::new(host(), fx.services.clone()).id(), "mount_data_volume:h1");
    assert_eq!(ResizeVolume::new(host(), fx.services.clone()).id(), "resize_volume:h1");
}

#[test]
fn failed_mount_script_is_recorded_as_host_failure() {
    let fx = fixture(true);
    fx.executor.fail_on("10.0.0.1", 32);
    let mut driver = WorkflowDriver::new().step(NewVolume::new(host(), fx.services.clone()))
                                          .step(MountDataVolume::new(host(), fx.services.clone()))
                                          .build();
    let mut ctx = ctx();

    let outcome = driver.run(&mut ctx);

    assert!(matches!(outcome, RunOutcome::RolledBack { ref failed_step, .. } if failed_step == "mount_data_volume:h1"));
    assert_eq!(ctx.errors().len(), 1);
    assert_eq!(ctx.errors()[0].code, ErrorCode::HostOperation);
}
