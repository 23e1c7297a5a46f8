use std::collections::HashMap;
use std::sync::Mutex;

use super::{lock, CallJournal};
use crate::{ProviderError, RemoteExecutor, RemoteOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCall {
    pub address: String,
    pub user: String,
    pub command: String,
}

#[derive(Default)]
struct RemoteState {
    exit_codes: HashMap<String, i32>,
    unreachable: HashMap<String, u32>,
    calls: Vec<RemoteCall>,
    probes: Vec<String>,
}

/// Ejecutor remoto programable. Por defecto todo comando termina con
/// exit 0 y todo host responde al primer probe.
#[derive(Default)]
pub struct InMemoryRemoteExecutor {
    state: Mutex<RemoteState>,
    journal: Option<CallJournal>,
}

impl InMemoryRemoteExecutor {
    pub fn new() -> Self { Self::default() }

    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Todo comando ejecutado en `address` devolverá `exit_code`.
    pub fn fail_on(&self, address: &str, exit_code: i32) {
        lock(&self.state).exit_codes.insert(address.to_string(), exit_code);
    }

    /// El host no responde a los primeros `probes` intentos
    /// (`u32::MAX` = nunca).
    pub fn unreachable_for(&self, address: &str, probes: u32) {
        lock(&self.state).unreachable.insert(address.to_string(), probes);
    }

    pub fn calls(&self) -> Vec<RemoteCall> { lock(&self.state).calls.clone() }

    /// Direcciones en el orden en que recibieron comandos.
    pub fn visited(&self) -> Vec<String> { lock(&self.state).calls.iter().map(|c| c.address.clone()).collect() }

    pub fn probes(&self) -> Vec<String> { lock(&self.state).probes.clone() }
}

impl RemoteExecutor for InMemoryRemoteExecutor {
    fn exec(&self, address: &str, user: &str, _password: &str, command: &str) -> Result<RemoteOutput, ProviderError> {
        let mut state = lock(&self.state);
        state.calls.push(RemoteCall { address: address.to_string(),
                                      user: user.to_string(),
                                      command: command.to_string() });
        if let Some(journal) = &self.journal {
            journal.record(format!("exec:{address}"));
        }
        let exit_code = state.exit_codes.get(address).copied().unwrap_or(0);
        let output = if exit_code == 0 { "ok".to_string() } else { format!("exit {exit_code} on {address}") };
        Ok(RemoteOutput::new(exit_code, output))
    }

    fn probe(&self, address: &str, _user: &str, _password: &str) -> bool {
        let mut state = lock(&self.state);
        state.probes.push(address.to_string());
        if let Some(journal) = &self.journal {
            journal.record(format!("probe:{address}"));
        }
        match state.unreachable.get_mut(address) {
            Some(remaining) if *remaining > 0 => {
                if *remaining != u32::MAX {
                    *remaining -= 1;
                }
                false
            }
            _ => true,
        }
    }
}
