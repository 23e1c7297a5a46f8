use std::sync::Arc;

use dbflow_adapters::{switch_dns_backward, switch_dns_forward, DnsCutover};
use dbflow_core::{ChangedObject, Step, StepError, WorkflowContext};
use dbflow_domain::{DatabaseInfra, DatabaseInstance, Host};
use dbflow_providers::implementations::{DnsUpdate, InMemoryBindingStore, InMemoryDns};
use dbflow_providers::BindingStore;

fn ctx() -> WorkflowContext { WorkflowContext::new("prod", DatabaseInfra::new("infra-x", "small", 1024), vec![]) }

// Par origen/destino: el destino publica inicialmente su propia dirección.
fn host_store() -> InMemoryBindingStore<Host> {
    InMemoryBindingStore::new().with_record(Host::new("src", "db.x", "10.0.0.1").unwrap().with_future_host("dst"))
                               .with_record(Host::new("dst", "10.0.0.2", "10.0.0.2").unwrap())
                               .with_record(Host::new("src2", "db.y", "10.0.1.1").unwrap().with_future_host("dst2"))
                               .with_record(Host::new("dst2", "10.0.1.2", "10.0.1.2").unwrap())
}

fn update(dns: &str, old_ip: &str, new_ip: &str) -> DnsUpdate {
    DnsUpdate { infra: "infra-x".into(),
                dns: dns.into(),
                old_ip: old_ip.into(),
                new_ip: new_ip.into() }
}

#[test]
fn forward_moves_name_to_equivalent() {
    let store = host_store();
    let dns = InMemoryDns::new();
    let mut ctx = ctx();

    switch_dns_forward::<Host>(&mut ctx, &["src".to_string()], &store, &dns).unwrap();

    assert_eq!(store.snapshot("src").unwrap().hostname, "10.0.0.1");
    assert_eq!(store.snapshot("dst").unwrap().hostname, "db.x");
    assert_eq!(dns.updates(), vec![update("db.x", "10.0.0.1", "10.0.0.2")]);
    assert_eq!(store.saves(), vec!["src", "dst"]);
    assert_eq!(ctx.changed_objects(), &[ChangedObject::dns_switch("host", "src")]);
}

#[test]
fn backward_after_forward_restores_records() {
    let store = host_store();
    let dns = InMemoryDns::new();
    let mut ctx = ctx();
    let before = (store.snapshot("src").unwrap(), store.snapshot("dst").unwrap());
    let sources = vec!["src".to_string()];

    switch_dns_forward::<Host>(&mut ctx, &sources, &store, &dns).unwrap();
    switch_dns_backward::<Host>(&ctx, &sources, &store, &dns).unwrap();

    assert_eq!((store.snapshot("src").unwrap(), store.snapshot("dst").unwrap()), before);
    assert_eq!(dns.updates()[1], update("db.x", "10.0.0.2", "10.0.0.1"));
    assert_eq!(store.saves(), vec!["src", "dst", "dst", "src"]);
}

#[test]
fn works_for_database_instances() {
    let store = InMemoryBindingStore::new()
        .with_record(DatabaseInstance::new("i1", "src", "10.0.0.1", 5432, "mysql.x").unwrap().with_future_instance("i2"))
        .with_record(DatabaseInstance::new("i2", "dst", "10.0.0.2", 5432, "10.0.0.2").unwrap());
    let dns = InMemoryDns::new();
    let mut ctx = ctx();

    switch_dns_forward::<DatabaseInstance>(&mut ctx, &["i1".to_string()], &store, &dns).unwrap();

    assert_eq!(store.snapshot("i2").unwrap().dns, "mysql.x");
    assert_eq!(ctx.changed_objects(), &[ChangedObject::dns_switch("instance", "i1")]);
}

#[test]
fn missing_equivalent_fails_without_side_effects() {
    let store = InMemoryBindingStore::new().with_record(Host::new("lonely", "db.z", "10.0.9.9").unwrap());
    let dns = InMemoryDns::new();
    let mut ctx = ctx();

    let err = switch_dns_forward::<Host>(&mut ctx, &["lonely".to_string()], &store, &dns).unwrap_err();

    assert_eq!(err,
               StepError::MissingEquivalent { kind: "host",
                                              key: "lonely".into() });
    assert!(dns.updates().is_empty());
    assert!(store.saves().is_empty());
}

#[test]
fn failure_on_second_pair_keeps_first_switched() {
    let store = host_store();
    let dns = InMemoryDns::new();
    dns.fail_on("db.y");
    let mut ctx = ctx();

    let result = switch_dns_forward::<Host>(&mut ctx, &["src".to_string(), "src2".to_string()], &store, &dns);

    assert!(result.is_err());
    assert_eq!(store.snapshot("dst").unwrap().hostname, "db.x");
    assert_eq!(store.snapshot("dst2").unwrap().hostname, "10.0.1.2");
    assert_eq!(ctx.changed_objects(), &[ChangedObject::dns_switch("host", "src")]);
}

fn cutover(store: &Arc<InMemoryBindingStore<Host>>, dns: &Arc<InMemoryDns>) -> DnsCutover<Host> {
    let store: Arc<dyn BindingStore<Host>> = store.clone();
    DnsCutover::new(vec!["src".to_string(), "src2".to_string()], store, dns.clone())
}

#[test]
fn step_undo_reverts_recorded_pairs_once() {
    let store = Arc::new(host_store());
    let dns = Arc::new(InMemoryDns::new());
    let step = cutover(&store, &dns);
    let mut ctx = ctx();

    step.run(&mut ctx).unwrap();
    step.undo(&mut ctx).unwrap();
    step.undo(&mut ctx).unwrap();

    // dos hacia adelante y dos de vuelta, el par más reciente primero
    let updates = dns.updates();
    assert_eq!(updates.len(), 4);
    assert_eq!(updates[2], update("db.y", "10.0.1.2", "10.0.1.1"));
    assert_eq!(updates[3], update("db.x", "10.0.0.2", "10.0.0.1"));
    assert_eq!(store.snapshot("src").unwrap().hostname, "db.x");
    assert_eq!(store.snapshot("dst2").unwrap().hostname, "10.0.1.2");
    assert!(ctx.changed_objects().is_empty());
}

#[test]
fn step_undo_after_partial_run_reverts_only_switched_pairs() {
    let store = Arc::new(host_store());
    let dns = Arc::new(InMemoryDns::new());
    dns.fail_on("db.y");
    let step = cutover(&store, &dns);
    let mut ctx = ctx();

    assert!(step.run(&mut ctx).is_err());
    assert!(step.compensates_partial_failure());
    step.undo(&mut ctx).unwrap();

    assert_eq!(store.snapshot("src").unwrap().hostname, "db.x");
    assert_eq!(store.snapshot("dst").unwrap().hostname, "10.0.0.2");
    assert_eq!(dns.updates().len(), 2);
}

#[test]
fn failed_undo_keeps_records_for_retry() {
    let store = Arc::new(host_store());
    let dns = Arc::new(InMemoryDns::new());
    let step = cutover(&store, &dns);
    let mut ctx = ctx();
    step.run(&mut ctx).unwrap();

    store.fail_save("dst2");
    assert!(step.undo(&mut ctx).is_err());

    assert_eq!(ctx.changed_objects(),
               &[ChangedObject::dns_switch("host", "src"), ChangedObject::dns_switch("host", "src2")]);
}
