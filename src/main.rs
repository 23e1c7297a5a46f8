//! Demo de una migración de hosts con colaboradores en memoria.
//!
//! Ejecuta la migración dos veces: una completa y otra con el proveedor DNS
//! rechazando el cambio, para mostrar la compensación.
use std::sync::Arc;

use dbflow_adapters::VolumeServices;
use dbflow_core::MultiHostRunner;
use dbflow_domain::{Credential, CredentialKind, DatabaseInfra, Host, HostAttr};
use dbflow_providers::implementations::{InMemoryBindingStore, InMemoryCompute, InMemoryDns, InMemoryInventory,
                                        InMemoryRemoteExecutor, InMemoryStorage, InMemoryVolumeRepository,
                                        StaticCredentialResolver};
use dbflow_rust::flows::{HostMigration, MigrationServices};
use dbflow_rust::{AppConfig, CoreError};
use log::{error, info};
use tracing_subscriber::EnvFilter;

struct Demo {
    services: MigrationServices,
    hosts: Arc<InMemoryBindingStore<Host>>,
    dns: Arc<InMemoryDns>,
    migration: HostMigration,
}

fn demo(config: &AppConfig) -> Result<Demo, CoreError> {
    let old = Host::new("old-1", "db1.dbaas.local", "10.0.0.11")?.with_future_host("new-1");
    let new = Host::new("new-1", "10.0.1.11", "10.0.1.11")?;

    let inventory = Arc::new(InMemoryInventory::new().with_host("new-1", HostAttr::new("vm-new-1", "root", "secret"))
                                                     .with_workload("new-1"));
    let credentials = Arc::new(StaticCredentialResolver::new().with(&config.environment,
                                                                    CredentialKind::VolumeProvider,
                                                                    Credential::new("vp",
                                                                                    "pw",
                                                                                    "http://volumes.local",
                                                                                    "dbaas")));
    let executor = Arc::new(InMemoryRemoteExecutor::new());
    let runner = MultiHostRunner::new(executor.clone(),
                                      inventory.clone(),
                                      Arc::new(InMemoryCompute::new()),
                                      credentials.clone()).with_pacing(config.pacing);
    let hosts = Arc::new(InMemoryBindingStore::new().with_record(old.clone()).with_record(new.clone()));
    let dns = Arc::new(InMemoryDns::new());
    let services = MigrationServices { runner: Arc::new(runner),
                                       volumes: VolumeServices { storage: Arc::new(InMemoryStorage::new()),
                                                                 volumes: Arc::new(InMemoryVolumeRepository::new()),
                                                                 inventory,
                                                                 executor,
                                                                 credentials },
                                       hosts: hosts.clone(),
                                       dns: dns.clone() };
    Ok(Demo { services,
              hosts,
              dns,
              migration: HostMigration::new(vec![(old, new)]) })
}

fn run_once(config: &AppConfig, demo: &Demo) {
    let mut ctx = demo.migration
                      .context(&config.environment, DatabaseInfra::new("infra-demo", "small", 10 * 1024 * 1024));
    match demo.migration.execute(&demo.services, &mut ctx) {
        Ok(()) => info!("migration {} completed", ctx.id),
        Err(err) => error!("migration {} failed: {err}", ctx.id),
    }
    for record in ctx.errors() {
        info!("  {} {}", record.code, record.trace.lines().next().unwrap_or_default());
    }
}

fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .init();
    let config = AppConfig::from_env()?;
    info!("environment={} pacing={:?}", config.environment, config.pacing);

    let ok = demo(&config)?;
    run_once(&config, &ok);
    if let Some(host) = ok.hosts.snapshot("new-1") {
        info!("new-1 now answers as {}", host.hostname);
    }

    let failing = demo(&config)?;
    failing.dns.fail_on("db1.dbaas.local");
    run_once(&config, &failing);
    if let Some(host) = failing.hosts.snapshot("old-1") {
        info!("old-1 still answers as {}", host.hostname);
    }
    Ok(())
}
