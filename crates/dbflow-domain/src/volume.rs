use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// Volumen de bloque asignado a un host.
///
/// Sólo existe localmente después de que el proveedor de storage confirmó
/// su creación; `identifier` es el id que asignó el proveedor. Un host tiene
/// a lo sumo un volumen activo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub id: Uuid,
    pub host_id: String,
    identifier: String,
    pub total_size_kb: u64,
    pub is_active: bool,
}

impl Volume {
    pub fn new(host_id: &str, identifier: &str, total_size_kb: u64) -> Result<Self, DomainError> {
        if identifier.trim().is_empty() {
            return Err(DomainError::ValidationError("volume identifier must not be empty".to_string()));
        }
        Ok(Self { id: Uuid::new_v4(),
                  host_id: host_id.to_string(),
                  identifier: identifier.to_string(),
                  total_size_kb,
                  is_active: true })
    }

    pub fn identifier(&self) -> &str { &self.identifier }
}
