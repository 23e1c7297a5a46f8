use serde::{Deserialize, Serialize};

use crate::{DomainError, Host};

/// Host objetivo de una ejecución junto con su rol en esa ejecución.
///
/// El orden de los `InstanceDetail` dentro del contexto es significativo:
/// determina si el primario se toca primero o último.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDetail {
    pub host: Host,
    pub is_master: bool,
}

impl InstanceDetail {
    pub fn new(host: Host, is_master: bool) -> Self { Self { host, is_master } }
}

/// Instancia de base de datos publicada bajo un nombre DNS propio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInstance {
    id: String,
    pub host_id: String,
    address: String,
    pub port: u16,
    pub dns: String,
    pub future_instance: Option<String>,
}

impl DatabaseInstance {
    pub fn new(id: &str, host_id: &str, address: &str, port: u16, dns: &str) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError("instance id must not be empty".to_string()));
        }
        if address.trim().is_empty() {
            return Err(DomainError::ValidationError(format!("instance {id} has no address")));
        }
        Ok(Self { id: id.to_string(),
                  host_id: host_id.to_string(),
                  address: address.to_string(),
                  port,
                  dns: dns.to_string(),
                  future_instance: None })
    }

    pub fn with_future_instance(mut self, future: &str) -> Self {
        self.future_instance = Some(future.to_string());
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn address(&self) -> &str { &self.address }
}
