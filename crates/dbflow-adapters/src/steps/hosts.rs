//! Adaptadores `Step` sobre `MultiHostRunner`.
//!
//! El runner ya registró el fallo en el contexto (código `DBAAS_0015`); el
//! adaptador sólo lo traduce a `Err` para que el driver compense.

use std::sync::Arc;

use dbflow_core::{HostPass, HostRunReport, MultiHostRunner, Step, StepError, TemplateVars, WorkflowContext};

fn into_result(report: HostRunReport) -> Result<(), StepError> {
    match report {
        HostRunReport::Aborted { error, .. } => Err(error),
        HostRunReport::NoTargets | HostRunReport::Applied { .. } => Ok(()),
    }
}

/// Ejecuta un script en todos los hosts. El script de `undo`, si existe, se
/// aplica con su propia pasada (por defecto en orden inverso).
pub struct RunVmScript {
    id: String,
    runner: Arc<MultiHostRunner>,
    vars: TemplateVars,
    script: String,
    pass: HostPass,
    undo_script: Option<String>,
    undo_pass: HostPass,
}

impl RunVmScript {
    pub fn new(id: &str, runner: Arc<MultiHostRunner>, script: impl Into<String>) -> Self {
        Self { id: id.to_string(),
               runner,
               vars: TemplateVars::new(),
               script: script.into(),
               pass: HostPass::forward(),
               undo_script: None,
               undo_pass: HostPass::reversed() }
    }

    pub fn with_vars(mut self, vars: TemplateVars) -> Self {
        self.vars = vars;
        self
    }

    pub fn with_pass(mut self, pass: HostPass) -> Self {
        self.pass = pass;
        self
    }

    pub fn with_undo(mut self, script: impl Into<String>, pass: HostPass) -> Self {
        self.undo_script = Some(script.into());
        self.undo_pass = pass;
        self
    }
}

impl Step for RunVmScript {
    fn id(&self) -> &str { &self.id }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        into_result(self.runner.run_vm_script(ctx, &self.vars, &self.script, self.pass))
    }

    fn undo(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        match &self.undo_script {
            Some(script) => into_result(self.runner.run_vm_script(ctx, &self.vars, script, self.undo_pass)),
            None => Ok(()),
        }
    }
}

pub struct StartVms {
    runner: Arc<MultiHostRunner>,
}

impl StartVms {
    pub fn new(runner: Arc<MultiHostRunner>) -> Self { Self { runner } }
}

impl Step for StartVms {
    fn id(&self) -> &str { "start_vms" }

    fn name(&self) -> &str { "Starting VMs..." }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> { into_result(self.runner.start_vm(ctx)) }

    fn undo(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> { into_result(self.runner.stop_vm(ctx)) }
}

pub struct StopVms {
    runner: Arc<MultiHostRunner>,
}

impl StopVms {
    pub fn new(runner: Arc<MultiHostRunner>) -> Self { Self { runner } }
}

impl Step for StopVms {
    fn id(&self) -> &str { "stop_vms" }

    fn name(&self) -> &str { "Stopping VMs..." }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> { into_result(self.runner.stop_vm(ctx)) }

    fn undo(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> { into_result(self.runner.start_vm(ctx)) }
}
