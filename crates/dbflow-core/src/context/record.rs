use serde::{Deserialize, Serialize};

use crate::errors::ErrorCode;

/// Error acumulado de una ejecución.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub code: ErrorCode,
    pub trace: String,
}

/// Registro de una mutación hecha hacia adelante, con lo necesario para
/// revertirla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangedObject {
    /// Se intercambió el DNS de `source` con su equivalente.
    DnsSwitch { kind: String, source: String },
}

impl ChangedObject {
    pub fn dns_switch(kind: &str, source: &str) -> Self {
        ChangedObject::DnsSwitch { kind: kind.to_string(),
                                   source: source.to_string() }
    }

    pub fn kind(&self) -> &str {
        match self {
            ChangedObject::DnsSwitch { kind, .. } => kind,
        }
    }
}
