//! Estado compartido de una ejecución.
//!
//! El contexto se crea por cada pedido de cambio y se descarta al final; no
//! se persiste. Tiene un único escritor (la ejecución secuencial), por lo que
//! no necesita locks.

mod record;

use dbflow_domain::{DatabaseInfra, InstanceDetail};
use uuid::Uuid;

use crate::errors::{full_stack, ErrorCode, StepError};
use crate::template::TemplateVars;

pub use record::{ChangedObject, ErrorRecord};

#[derive(Debug)]
pub struct WorkflowContext {
    pub id: Uuid,
    pub environment: String,
    pub infra: DatabaseInfra,
    /// Hosts objetivo en orden de aplicación.
    pub instances: Vec<InstanceDetail>,
    /// Variables que se fusionan en todos los scripts.
    pub initial_context: TemplateVars,
    errors: Vec<ErrorRecord>,
    changed_objects: Vec<ChangedObject>,
}

impl WorkflowContext {
    pub fn new(environment: &str, infra: DatabaseInfra, instances: Vec<InstanceDetail>) -> Self {
        Self { id: Uuid::new_v4(),
               environment: environment.to_string(),
               infra,
               instances,
               initial_context: TemplateVars::new(),
               errors: Vec::new(),
               changed_objects: Vec::new() }
    }

    pub fn with_var(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.initial_context.insert(name.to_string(), value.into());
        self
    }

    /// Agrega un registro `(código, traza)`. La lista sólo crece.
    pub fn record_error(&mut self, code: ErrorCode, err: &StepError) {
        self.errors.push(ErrorRecord { code,
                                       trace: full_stack(err) });
    }

    pub fn errors(&self) -> &[ErrorRecord] { &self.errors }

    pub fn has_failed(&self) -> bool { !self.errors.is_empty() }

    pub fn push_changed(&mut self, change: ChangedObject) { self.changed_objects.push(change); }

    pub fn changed_objects(&self) -> &[ChangedObject] { &self.changed_objects }

    /// Extrae (y quita) los registros de compensación que cumplen
    /// `predicate`, conservando su orden de registro.
    pub fn take_changed<F>(&mut self, mut predicate: F) -> Vec<ChangedObject>
        where F: FnMut(&ChangedObject) -> bool
    {
        let (taken, kept): (Vec<_>, Vec<_>) = self.changed_objects.drain(..).partition(|c| predicate(c));
        self.changed_objects = kept;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbflow_providers::ProviderError;

    fn ctx() -> WorkflowContext { WorkflowContext::new("dev", DatabaseInfra::new("infra", "small", 1024), vec![]) }

    #[test]
    fn errors_accumulate_in_order() {
        let mut ctx = ctx();
        assert!(!ctx.has_failed());
        ctx.record_error(ErrorCode::HostOperation,
                         &StepError::ReadinessTimeout { host: "a".into(),
                                                        attempts: 5 });
        ctx.record_error(ErrorCode::StepFailed, &StepError::Provider(ProviderError::NotFound("x".into())));
        let codes: Vec<&str> = ctx.errors().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["DBAAS_0015", "DBAAS_0001"]);
        assert!(ctx.errors()[0].trace.contains("not reachable"));
    }

    #[test]
    fn take_changed_keeps_unmatched_records() {
        let mut ctx = ctx();
        ctx.push_changed(ChangedObject::dns_switch("host", "h1"));
        ctx.push_changed(ChangedObject::dns_switch("instance", "i1"));
        ctx.push_changed(ChangedObject::dns_switch("host", "h2"));

        let taken = ctx.take_changed(|c| c.kind() == "host");
        assert_eq!(taken,
                   vec![ChangedObject::dns_switch("host", "h1"), ChangedObject::dns_switch("host", "h2")]);
        assert_eq!(ctx.changed_objects(), &[ChangedObject::dns_switch("instance", "i1")]);
    }
}
