use std::collections::HashMap;
use std::sync::Mutex;

use super::{lock, CallJournal};
use crate::{ProviderError, StorageProvider, StorageTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCall {
    Create { group: String, size_kb: u64, to_address: String },
    MountCommand { identifier: String },
    Resize { identifier: String, new_size_kb: u64 },
    Delete { identifier: String },
}

impl StorageCall {
    fn operation(&self) -> &'static str {
        match self {
            StorageCall::Create { .. } => "create",
            StorageCall::MountCommand { .. } => "mount",
            StorageCall::Resize { .. } => "resize",
            StorageCall::Delete { .. } => "delete",
        }
    }
}

#[derive(Default)]
struct StorageState {
    next_id: u32,
    calls: Vec<StorageCall>,
    // operación -> (status, cuerpo)
    failures: HashMap<&'static str, (u16, String)>,
    sizes: HashMap<String, u64>,
}

/// Proveedor de storage en memoria. Los identificadores se asignan como
/// `vol-1`, `vol-2`, ...
#[derive(Default)]
pub struct InMemoryStorage {
    state: Mutex<StorageState>,
    journal: Option<CallJournal>,
}

impl InMemoryStorage {
    pub fn new() -> Self { Self::default() }

    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// La operación (`create`, `mount`, `resize`, `delete`) responderá con
    /// el status y cuerpo indicados.
    pub fn fail_with(&self, operation: &'static str, status: u16, body: &str) {
        lock(&self.state).failures.insert(operation, (status, body.to_string()));
    }

    pub fn calls(&self) -> Vec<StorageCall> { lock(&self.state).calls.clone() }

    /// Tamaño registrado por el proveedor para un volumen vivo.
    pub fn size_of(&self, identifier: &str) -> Option<u64> { lock(&self.state).sizes.get(identifier).copied() }

    fn call(&self, call: StorageCall) -> Result<(), ProviderError> {
        let mut state = lock(&self.state);
        let operation = call.operation();
        if let Some(journal) = &self.journal {
            journal.record(format!("storage:{operation}"));
        }
        state.calls.push(call);
        match state.failures.get(operation) {
            Some((status, body)) => Err(ProviderError::Http { status: *status,
                                                              body: body.clone() }),
            None => Ok(()),
        }
    }
}

impl StorageProvider for InMemoryStorage {
    fn create_volume(&self,
                     _target: &StorageTarget,
                     group: &str,
                     size_kb: u64,
                     to_address: &str)
                     -> Result<String, ProviderError> {
        self.call(StorageCall::Create { group: group.to_string(),
                                        size_kb,
                                        to_address: to_address.to_string() })?;
        let mut state = lock(&self.state);
        state.next_id += 1;
        let identifier = format!("vol-{}", state.next_id);
        state.sizes.insert(identifier.clone(), size_kb);
        Ok(identifier)
    }

    fn mount_command(&self, _target: &StorageTarget, identifier: &str) -> Result<String, ProviderError> {
        self.call(StorageCall::MountCommand { identifier: identifier.to_string() })?;
        Ok(format!("mount -t nfs storage:/exports/{identifier} /data"))
    }

    fn resize(&self, _target: &StorageTarget, identifier: &str, new_size_kb: u64) -> Result<(), ProviderError> {
        self.call(StorageCall::Resize { identifier: identifier.to_string(),
                                        new_size_kb })?;
        lock(&self.state).sizes.insert(identifier.to_string(), new_size_kb);
        Ok(())
    }

    fn delete(&self, _target: &StorageTarget, identifier: &str) -> Result<(), ProviderError> {
        self.call(StorageCall::Delete { identifier: identifier.to_string() })?;
        lock(&self.state).sizes.remove(identifier);
        Ok(())
    }
}
