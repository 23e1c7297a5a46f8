//! dbflow-providers: contratos de los colaboradores externos.
//!
//! El motor de pasos sólo habla con el mundo exterior a través de estos
//! traits: ejecución remota, cómputo, DNS, storage, credenciales e
//! inventario. Todos son síncronos y toman `&self`; las implementaciones
//! en memoria de `implementations` registran cada llamada en orden.
pub mod compute;
pub mod credentials;
pub mod dns;
pub mod error;
pub mod implementations;
pub mod inventory;
pub mod remote;
pub mod storage;

pub use compute::ComputeProvider;
pub use credentials::CredentialResolver;
pub use dns::DnsProvider;
pub use error::ProviderError;
pub use inventory::{BindingStore, HostInventory, VolumeRepository};
pub use remote::{RemoteExecutor, RemoteOutput};
pub use storage::{HttpStorageProvider, StorageProvider, StorageTarget};
