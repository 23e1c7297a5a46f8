use std::sync::Arc;

use dbflow_core::{ChangedObject, Step, StepError, WorkflowContext};
use dbflow_domain::DnsBinding;
use dbflow_providers::{BindingStore, DnsProvider};
use log::warn;

use crate::dns::{switch_dns_backward, switch_dns_forward};

/// Cutover DNS de un conjunto de registros hacia sus equivalentes.
///
/// `undo` revierte sólo los pares que quedaron registrados en el contexto
/// (los más recientes primero) y consume esos registros, por lo que una
/// segunda llamada no hace nada. Como `run` puede fallar a mitad de
/// camino, el paso pide compensación también en ese caso.
pub struct DnsCutover<T: DnsBinding + 'static> {
    id: String,
    sources: Vec<String>,
    store: Arc<dyn BindingStore<T>>,
    dns: Arc<dyn DnsProvider>,
}

impl<T: DnsBinding + 'static> DnsCutover<T> {
    pub fn new(sources: Vec<String>, store: Arc<dyn BindingStore<T>>, dns: Arc<dyn DnsProvider>) -> Self {
        Self { id: format!("switch_{}_dns", T::KIND),
               sources,
               store,
               dns }
    }

    pub fn sources(&self) -> &[String] { &self.sources }

    fn is_mine(&self, change: &ChangedObject) -> bool {
        match change {
            ChangedObject::DnsSwitch { kind, source } => kind == T::KIND && self.sources.contains(source),
        }
    }
}

impl<T: DnsBinding + 'static> Step for DnsCutover<T> {
    fn id(&self) -> &str { &self.id }

    fn name(&self) -> &str { "Changing DNS..." }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        switch_dns_forward(ctx, &self.sources, self.store.as_ref(), self.dns.as_ref())
    }

    fn undo(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        let mut pending = ctx.take_changed(|c| self.is_mine(c));
        while let Some(change) = pending.pop() {
            let ChangedObject::DnsSwitch { source, .. } = &change;
            if let Err(err) = switch_dns_backward(ctx, std::slice::from_ref(source), self.store.as_ref(), self.dns.as_ref()) {
                warn!("DNS rollback of {source} failed: {err}");
                // Lo que no se pudo revertir vuelve al contexto.
                pending.push(change);
                for change in pending {
                    ctx.push_changed(change);
                }
                return Err(err);
            }
        }
        Ok(())
    }

    fn compensates_partial_failure(&self) -> bool { true }
}
