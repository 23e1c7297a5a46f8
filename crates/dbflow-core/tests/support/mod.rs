//! Colaboradores en memoria compartidos por los tests del core.
#![allow(dead_code)]

use std::sync::Arc;

use dbflow_core::{MultiHostRunner, PacingConfig, RecordingSleeper, WorkflowContext};
use dbflow_domain::{Credential, CredentialKind, DatabaseInfra, Host, HostAttr, InstanceDetail};
use dbflow_providers::implementations::{InMemoryCompute, InMemoryInventory, InMemoryRemoteExecutor,
                                        StaticCredentialResolver};

pub struct Harness {
    pub executor: Arc<InMemoryRemoteExecutor>,
    pub compute: Arc<InMemoryCompute>,
    pub sleeper: Arc<RecordingSleeper>,
    pub runner: MultiHostRunner,
}

/// `hosts` = (id, is_master); la dirección de cada host es su id.
pub fn context(hosts: &[(&str, bool)]) -> WorkflowContext {
    let instances = hosts.iter()
                         .map(|(id, master)| {
                             InstanceDetail::new(Host::new(id, &format!("{id}.db.local"), id).expect("host"), *master)
                         })
                         .collect();
    WorkflowContext::new("dev", DatabaseInfra::new("infra-a", "small", 1024), instances)
}

pub fn harness(hosts: &[(&str, bool)], pacing: PacingConfig) -> Harness {
    let inventory = hosts.iter().fold(InMemoryInventory::new(), |inv, (id, _)| {
                                    inv.with_host(id, HostAttr::new(&format!("vm-{id}"), "root", "secret"))
                                });
    let credentials = StaticCredentialResolver::new().with("dev",
                                                           CredentialKind::Compute,
                                                           Credential::new("cs", "pw", "http://compute.local", "dbaas"));
    let executor = Arc::new(InMemoryRemoteExecutor::new());
    let compute = Arc::new(InMemoryCompute::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let runner = MultiHostRunner::new(executor.clone(), Arc::new(inventory), compute.clone(), Arc::new(credentials))
        .with_sleeper(sleeper.clone())
        .with_pacing(pacing);
    Harness { executor,
              compute,
              sleeper,
              runner }
}
