use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Host físico/virtual del inventario.
///
/// `hostname` es el nombre DNS con el que se publica el host; durante un
/// cutover puede contener temporalmente la dirección antigua (marca de
/// degradación). `future_host` enlaza con el host equivalente que lo
/// reemplaza en una migración.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    id: String,
    pub hostname: String,
    address: String,
    pub future_host: Option<String>,
}

impl Host {
    pub fn new(id: &str, hostname: &str, address: &str) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError("host id must not be empty".to_string()));
        }
        if address.trim().is_empty() {
            return Err(DomainError::ValidationError(format!("host {id} has no address")));
        }
        Ok(Host { id: id.to_string(),
                  hostname: hostname.to_string(),
                  address: address.to_string(),
                  future_host: None })
    }

    /// Enlaza el host con su equivalente (destino de una migración).
    pub fn with_future_host(mut self, future: &str) -> Self {
        self.future_host = Some(future.to_string());
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn address(&self) -> &str { &self.address }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hostname, self.address)
    }
}

/// Atributos del host en el proveedor de cómputo: id de la VM y
/// credenciales de acceso remoto. Se resuelven perezosamente desde el
/// inventario, nunca viajan dentro de `Host`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostAttr {
    pub vm_id: String,
    pub vm_user: String,
    pub vm_password: String,
}

impl HostAttr {
    pub fn new(vm_id: &str, vm_user: &str, vm_password: &str) -> Self {
        Self { vm_id: vm_id.to_string(),
               vm_user: vm_user.to_string(),
               vm_password: vm_password.to_string() }
    }
}

// La contraseña no debe terminar en logs.
impl fmt::Debug for HostAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostAttr")
         .field("vm_id", &self.vm_id)
         .field("vm_user", &self.vm_user)
         .field("vm_password", &"***")
         .finish()
    }
}
