use dbflow_domain::Credential;

use crate::ProviderError;

/// Proveedor de virtualización. `Ok(false)` es un rechazo del proveedor,
/// sin más detalle.
pub trait ComputeProvider: Send + Sync {
    fn start_vm(&self, credential: &Credential, vm_id: &str) -> Result<bool, ProviderError>;
    fn stop_vm(&self, credential: &Credential, vm_id: &str) -> Result<bool, ProviderError>;
}
