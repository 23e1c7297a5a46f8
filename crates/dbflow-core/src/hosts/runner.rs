use std::sync::Arc;

use dbflow_domain::{CredentialKind, InstanceDetail};
use dbflow_providers::{ComputeProvider, CredentialResolver, HostInventory, ProviderError, RemoteExecutor};
use log::{info, warn};
use serde_json::Value;

use super::readiness::wait_until_ready;
use super::report::{HostPass, HostRunReport};
use crate::config::PacingConfig;
use crate::constants::IS_MASTER_VAR;
use crate::context::WorkflowContext;
use crate::errors::{ErrorCode, StepError};
use crate::pacing::{Sleeper, ThreadSleeper};
use crate::template::{merge_vars, render_script, TemplateVars};

/// Aplica operaciones host por host, en secuencia y cortando en el primer
/// fallo: ejecución de scripts, arranque y parada de VMs.
pub struct MultiHostRunner {
    executor: Arc<dyn RemoteExecutor>,
    inventory: Arc<dyn HostInventory>,
    compute: Arc<dyn ComputeProvider>,
    credentials: Arc<dyn CredentialResolver>,
    sleeper: Arc<dyn Sleeper>,
    pacing: PacingConfig,
}

// Corte de una pasada sobre los hosts.
struct Interrupted {
    failed_host: Option<String>,
    completed: Vec<String>,
    error: StepError,
}

impl Interrupted {
    fn before_hosts(error: impl Into<StepError>) -> Self {
        Self { failed_host: None,
               completed: Vec::new(),
               error: error.into() }
    }
}

impl MultiHostRunner {
    pub fn new(executor: Arc<dyn RemoteExecutor>,
               inventory: Arc<dyn HostInventory>,
               compute: Arc<dyn ComputeProvider>,
               credentials: Arc<dyn CredentialResolver>)
               -> Self {
        Self { executor,
               inventory,
               compute,
               credentials,
               sleeper: Arc::new(ThreadSleeper),
               pacing: PacingConfig::default() }
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pacing(&self) -> PacingConfig { self.pacing }

    /// Renderiza `script` por host (con `IS_MASTER` según el rol) y lo
    /// ejecuta en cada uno, en el orden pedido. Un exit code distinto de cero
    /// corta el recorrido: los hosts restantes no se intentan.
    pub fn run_vm_script(&self,
                         ctx: &mut WorkflowContext,
                         vars: &TemplateVars,
                         script: &str,
                         pass: HostPass)
                         -> HostRunReport {
        let mut merged = merge_vars(&ctx.initial_context, vars);
        let result = self.each_host(&ctx.instances, pass, |detail| {
                             merged.insert(IS_MASTER_VAR.to_string(), Value::Bool(detail.is_master));
                             let command = render_script(script, &merged)?;
                             self.exec_on(detail, &command)
                         });
        self.finish(ctx, "run_vm_script", result)
    }

    /// Arranque en dos fases: primero se pide el start de todas las VMs
    /// (cortando en el primer rechazo, sin sondear nada); después se espera
    /// a que cada host responda. Con todos arriba se aplica una espera fija
    /// para que los servicios se estabilicen.
    pub fn start_vm(&self, ctx: &mut WorkflowContext) -> HostRunReport {
        let result = self.start_all(ctx);
        self.finish(ctx, "start_vm", result)
    }

    /// Pide el stop de cada VM en orden, cortando en el primer rechazo.
    pub fn stop_vm(&self, ctx: &mut WorkflowContext) -> HostRunReport {
        let result = self.stop_all(ctx);
        self.finish(ctx, "stop_vm", result)
    }

    fn start_all(&self, ctx: &WorkflowContext) -> Result<Vec<String>, Interrupted> {
        let credential = self.credentials
                             .resolve(&ctx.environment, CredentialKind::Compute)
                             .map_err(Interrupted::before_hosts)?;

        self.each_host(&ctx.instances, HostPass::forward(), |detail| {
                let attr = self.inventory.host_attr(&detail.host)?;
                info!("starting vm {} of host {}", attr.vm_id, detail.host);
                if self.compute.start_vm(&credential, &attr.vm_id)? {
                    Ok(())
                } else {
                    Err(rejected("start", &attr.vm_id))
                }
            })?;

        let ready = self.each_host(&ctx.instances, HostPass::forward(), |detail| {
                            let attr = self.inventory.host_attr(&detail.host)?;
                            wait_until_ready(self.executor.as_ref(),
                                             self.sleeper.as_ref(),
                                             detail.host.address(),
                                             &attr,
                                             self.pacing.readiness)
                        })?;

        if !ready.is_empty() {
            self.sleeper.sleep(self.pacing.start_settle);
        }
        Ok(ready)
    }

    fn stop_all(&self, ctx: &WorkflowContext) -> Result<Vec<String>, Interrupted> {
        let credential = self.credentials
                             .resolve(&ctx.environment, CredentialKind::Compute)
                             .map_err(Interrupted::before_hosts)?;

        self.each_host(&ctx.instances, HostPass::forward(), |detail| {
                let attr = self.inventory.host_attr(&detail.host)?;
                info!("stopping vm {} of host {}", attr.vm_id, detail.host);
                if self.compute.stop_vm(&credential, &attr.vm_id)? {
                    Ok(())
                } else {
                    Err(rejected("stop", &attr.vm_id))
                }
            })
    }

    fn exec_on(&self, detail: &InstanceDetail, command: &str) -> Result<(), StepError> {
        let host = &detail.host;
        let attr = self.inventory.host_attr(host)?;
        info!("running script on {host} (master={})", detail.is_master);
        let output = self.executor.exec(host.address(), &attr.vm_user, &attr.vm_password, command)?;
        if !output.succeeded() {
            return Err(StepError::RemoteCommand { host: host.address().to_string(),
                                                  exit_code: output.exit_code,
                                                  output: output.output });
        }
        Ok(())
    }

    fn each_host<F>(&self,
                    instances: &[InstanceDetail],
                    pass: HostPass,
                    mut action: F)
                    -> Result<Vec<String>, Interrupted>
        where F: FnMut(&InstanceDetail) -> Result<(), StepError>
    {
        let ordered: Box<dyn Iterator<Item = &InstanceDetail>> = if pass.reverse {
            Box::new(instances.iter().rev())
        } else {
            Box::new(instances.iter())
        };

        let mut completed = Vec::with_capacity(instances.len());
        for detail in ordered {
            if let Err(error) = action(detail) {
                return Err(Interrupted { failed_host: Some(detail.host.id().to_string()),
                                         completed,
                                         error });
            }
            completed.push(detail.host.id().to_string());
            if !pass.settle.is_zero() {
                self.sleeper.sleep(pass.settle);
            }
        }
        Ok(completed)
    }

    fn finish(&self, ctx: &mut WorkflowContext, operation: &str, result: Result<Vec<String>, Interrupted>) -> HostRunReport {
        match result {
            Ok(hosts) if hosts.is_empty() => HostRunReport::NoTargets,
            Ok(hosts) => HostRunReport::Applied { hosts },
            Err(Interrupted { failed_host,
                              completed,
                              error, }) => {
                warn!("{operation} aborted at host {:?} after {} host(s): {error}",
                      failed_host,
                      completed.len());
                ctx.record_error(ErrorCode::HostOperation, &error);
                HostRunReport::Aborted { failed_host,
                                         completed,
                                         error }
            }
        }
    }
}

fn rejected(operation: &str, vm_id: &str) -> StepError {
    StepError::Provider(ProviderError::Rejected { provider: "compute",
                                                  operation: format!("{operation} vm {vm_id}") })
}
