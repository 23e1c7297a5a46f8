use std::sync::{Arc, Mutex};

use super::lock;

/// Registro compartido y ordenado de llamadas a colaboradores.
#[derive(Debug, Clone, Default)]
pub struct CallJournal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallJournal {
    pub fn new() -> Self { Self::default() }

    pub fn record(&self, entry: impl Into<String>) { lock(&self.entries).push(entry.into()); }

    pub fn entries(&self) -> Vec<String> { lock(&self.entries).clone() }

    /// Posición de la primera entrada que empieza con `prefix`.
    pub fn position(&self, prefix: &str) -> Option<usize> {
        lock(&self.entries).iter().position(|e| e.starts_with(prefix))
    }
}
