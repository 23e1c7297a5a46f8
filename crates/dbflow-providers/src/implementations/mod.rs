//! Implementaciones en memoria de los colaboradores.
//!
//! Se usan en tests y en la demo: permiten programar fallos (exit codes,
//! rechazos, status HTTP) y registran cada llamada. Compartiendo un
//! `CallJournal` entre varios colaboradores se puede verificar el orden
//! global de las llamadas.

mod journal;
mod in_memory_compute;
mod in_memory_dns;
mod in_memory_inventory;
mod in_memory_remote;
mod in_memory_storage;
mod static_credentials;

use std::sync::{Mutex, MutexGuard};

pub use in_memory_compute::InMemoryCompute;
pub use in_memory_dns::{DnsUpdate, InMemoryDns};
pub use in_memory_inventory::{InMemoryBindingStore, InMemoryInventory, InMemoryVolumeRepository};
pub use in_memory_remote::{InMemoryRemoteExecutor, RemoteCall};
pub use in_memory_storage::{InMemoryStorage, StorageCall};
pub use journal::CallJournal;
pub use static_credentials::StaticCredentialResolver;

// Un panic dentro de un test no debe envenenar al resto de asserts.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
