use std::collections::HashSet;
use std::sync::Mutex;

use dbflow_domain::Credential;

use super::{lock, CallJournal};
use crate::{ComputeProvider, ProviderError};

#[derive(Default)]
struct ComputeState {
    reject_start: HashSet<String>,
    reject_stop: HashSet<String>,
    calls: Vec<String>,
}

/// Proveedor de cómputo en memoria; las llamadas quedan como
/// `"start:<vm>"` / `"stop:<vm>"`.
#[derive(Default)]
pub struct InMemoryCompute {
    state: Mutex<ComputeState>,
    journal: Option<CallJournal>,
}

impl InMemoryCompute {
    pub fn new() -> Self { Self::default() }

    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn reject_start(&self, vm_id: &str) { lock(&self.state).reject_start.insert(vm_id.to_string()); }

    pub fn reject_stop(&self, vm_id: &str) { lock(&self.state).reject_stop.insert(vm_id.to_string()); }

    pub fn calls(&self) -> Vec<String> { lock(&self.state).calls.clone() }

    fn record(&self, state: &mut ComputeState, entry: String) {
        if let Some(journal) = &self.journal {
            journal.record(entry.clone());
        }
        state.calls.push(entry);
    }
}

impl ComputeProvider for InMemoryCompute {
    fn start_vm(&self, _credential: &Credential, vm_id: &str) -> Result<bool, ProviderError> {
        let mut state = lock(&self.state);
        self.record(&mut state, format!("start:{vm_id}"));
        Ok(!state.reject_start.contains(vm_id))
    }

    fn stop_vm(&self, _credential: &Credential, vm_id: &str) -> Result<bool, ProviderError> {
        let mut state = lock(&self.state);
        self.record(&mut state, format!("stop:{vm_id}"));
        Ok(!state.reject_stop.contains(vm_id))
    }
}
