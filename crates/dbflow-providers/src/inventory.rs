//! Persistencia del inventario consumida por los pasos.
//!
//! No hay transacciones multi-objeto: cada registro se guarda por separado,
//! en el orden en que el paso lo decide.

use dbflow_domain::{DnsBinding, Host, HostAttr, Volume};
use uuid::Uuid;

use crate::ProviderError;

pub trait HostInventory: Send + Sync {
    /// Atributos de cómputo y acceso remoto del host.
    fn host_attr(&self, host: &Host) -> Result<HostAttr, ProviderError>;
    /// Indica si el host ya tiene una instancia de base de datos asignada.
    fn has_database_instance(&self, host: &Host) -> Result<bool, ProviderError>;
}

pub trait VolumeRepository: Send + Sync {
    /// Volumen activo del host, si existe.
    fn active_for_host(&self, host_id: &str) -> Result<Option<Volume>, ProviderError>;
    fn save(&self, volume: &Volume) -> Result<(), ProviderError>;
    fn delete(&self, volume_id: Uuid) -> Result<(), ProviderError>;
}

/// Store de registros con binding DNS (hosts, instancias).
pub trait BindingStore<T: DnsBinding>: Send + Sync {
    fn get(&self, key: &str) -> Result<T, ProviderError>;
    fn save(&self, record: &T) -> Result<(), ProviderError>;
}
