//! Secuencias de pasos de uso común.

use std::sync::Arc;

use dbflow_adapters::scripts::{bash_error_preamble, start_td_agent_script};
use dbflow_adapters::{DnsCutover, MountDataVolume, NewVolume, RunVmScript, VolumeServices};
use dbflow_core::{HostPass, MultiHostRunner, RunOutcome, WorkflowContext, WorkflowDriver};
use dbflow_domain::{DatabaseInfra, Host, InstanceDetail};
use dbflow_providers::{BindingStore, DnsProvider};

use crate::errors::CoreError;

/// Colaboradores que necesita una migración de hosts.
#[derive(Clone)]
pub struct MigrationServices {
    pub runner: Arc<MultiHostRunner>,
    pub volumes: VolumeServices,
    pub hosts: Arc<dyn BindingStore<Host>>,
    pub dns: Arc<dyn DnsProvider>,
}

/// Migración de hosts hacia sus equivalentes (`future_host`).
///
/// Sobre los hosts destino: volumen nuevo y montado, arranque del agente de
/// logs y, por último, el cutover DNS desde los hosts origen. Si algo falla
/// el driver compensa en orden inverso (DNS de vuelta, volúmenes borrados).
pub struct HostMigration {
    sources: Vec<Host>,
    targets: Vec<Host>,
}

impl HostMigration {
    /// `pairs` = (origen, destino). El primer destino es el primario.
    pub fn new(pairs: Vec<(Host, Host)>) -> Self {
        let (sources, targets) = pairs.into_iter().unzip();
        Self { sources, targets }
    }

    /// Contexto de ejecución sobre los hosts destino.
    pub fn context(&self, environment: &str, infra: DatabaseInfra) -> WorkflowContext {
        let instances = self.targets
                            .iter()
                            .enumerate()
                            .map(|(index, host)| InstanceDetail::new(host.clone(), index == 0))
                            .collect();
        WorkflowContext::new(environment, infra, instances)
    }

    pub fn driver(&self, services: &MigrationServices) -> WorkflowDriver {
        let mut builder = WorkflowDriver::new();
        for host in &self.targets {
            builder = builder.step(NewVolume::new(host.clone(), services.volumes.clone()))
                             .step(MountDataVolume::new(host.clone(), services.volumes.clone()));
        }
        let td_agent = format!("{}{}", bash_error_preamble(), start_td_agent_script());
        let sources = self.sources.iter().map(|h| h.id().to_string()).collect();
        builder.step(RunVmScript::new("start_td_agent", services.runner.clone(), td_agent).with_pass(HostPass::forward()))
               .step(DnsCutover::new(sources, services.hosts.clone(), services.dns.clone()))
               .build()
    }

    /// Arma el driver, lo ejecuta y traduce el resultado.
    pub fn execute(&self, services: &MigrationServices, ctx: &mut WorkflowContext) -> Result<(), CoreError> {
        let mut driver = self.driver(services);
        match driver.run(ctx) {
            RunOutcome::Completed => Ok(()),
            RunOutcome::RolledBack { failed_step, error, .. } => Err(CoreError::RolledBack { failed_step, error }),
        }
    }
}
