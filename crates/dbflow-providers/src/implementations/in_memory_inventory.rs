use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use dbflow_domain::{DnsBinding, Host, HostAttr, Volume};
use uuid::Uuid;

use super::{lock, CallJournal};
use crate::{BindingStore, HostInventory, ProviderError, VolumeRepository};

/// Inventario de hosts: atributos de VM y hosts con instancia asignada.
#[derive(Default)]
pub struct InMemoryInventory {
    attrs: HashMap<String, HostAttr>,
    workloads: HashSet<String>,
}

impl InMemoryInventory {
    pub fn new() -> Self { Self::default() }

    pub fn with_host(mut self, host_id: &str, attr: HostAttr) -> Self {
        self.attrs.insert(host_id.to_string(), attr);
        self
    }

    /// Marca el host como portador de una instancia de base de datos.
    pub fn with_workload(mut self, host_id: &str) -> Self {
        self.workloads.insert(host_id.to_string());
        self
    }
}

impl HostInventory for InMemoryInventory {
    fn host_attr(&self, host: &Host) -> Result<HostAttr, ProviderError> {
        self.attrs
            .get(host.id())
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("host attributes for {}", host.id())))
    }

    fn has_database_instance(&self, host: &Host) -> Result<bool, ProviderError> { Ok(self.workloads.contains(host.id())) }
}

/// Repositorio de volúmenes en orden de alta. Un `save` de un volumen ya
/// conocido lo reemplaza en su lugar.
#[derive(Default)]
pub struct InMemoryVolumeRepository {
    volumes: Mutex<Vec<Volume>>,
    journal: Option<CallJournal>,
}

impl InMemoryVolumeRepository {
    pub fn new() -> Self { Self::default() }

    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn all(&self) -> Vec<Volume> { lock(&self.volumes).clone() }
}

impl VolumeRepository for InMemoryVolumeRepository {
    fn active_for_host(&self, host_id: &str) -> Result<Option<Volume>, ProviderError> {
        // el último dado de alta gana si hubiera más de uno activo
        Ok(lock(&self.volumes).iter()
                              .rev()
                              .find(|v| v.is_active && v.host_id == host_id)
                              .cloned())
    }

    fn save(&self, volume: &Volume) -> Result<(), ProviderError> {
        if let Some(journal) = &self.journal {
            journal.record(format!("volume:save:{}", volume.identifier()));
        }
        let mut volumes = lock(&self.volumes);
        match volumes.iter_mut().find(|v| v.id == volume.id) {
            Some(existing) => *existing = volume.clone(),
            None => volumes.push(volume.clone()),
        }
        Ok(())
    }

    fn delete(&self, volume_id: Uuid) -> Result<(), ProviderError> {
        if let Some(journal) = &self.journal {
            journal.record(format!("volume:delete:{volume_id}"));
        }
        let mut volumes = lock(&self.volumes);
        let index = volumes.iter()
                           .position(|v| v.id == volume_id)
                           .ok_or_else(|| ProviderError::NotFound(format!("volume {volume_id}")))?;
        volumes.remove(index);
        Ok(())
    }
}

/// Store de bindings DNS. Registra el orden de los `save` por clave.
pub struct InMemoryBindingStore<T: DnsBinding> {
    records: Mutex<HashMap<String, T>>,
    saves: Mutex<Vec<String>>,
    failing_saves: Mutex<HashSet<String>>,
}

impl<T: DnsBinding> Default for InMemoryBindingStore<T> {
    fn default() -> Self {
        Self { records: Mutex::new(HashMap::new()),
               saves: Mutex::new(Vec::new()),
               failing_saves: Mutex::new(HashSet::new()) }
    }
}

impl<T: DnsBinding> InMemoryBindingStore<T> {
    pub fn new() -> Self { Self::default() }

    pub fn with_record(self, record: T) -> Self {
        lock(&self.records).insert(record.key().to_string(), record);
        self
    }

    pub fn saves(&self) -> Vec<String> { lock(&self.saves).clone() }

    /// Los `save` de `key` fallarán.
    pub fn fail_save(&self, key: &str) { lock(&self.failing_saves).insert(key.to_string()); }

    pub fn snapshot(&self, key: &str) -> Option<T> { lock(&self.records).get(key).cloned() }
}

impl<T: DnsBinding + Send> BindingStore<T> for InMemoryBindingStore<T> {
    fn get(&self, key: &str) -> Result<T, ProviderError> {
        lock(&self.records).get(key)
                           .cloned()
                           .ok_or_else(|| ProviderError::NotFound(format!("{} {key}", T::KIND)))
    }

    fn save(&self, record: &T) -> Result<(), ProviderError> {
        if lock(&self.failing_saves).contains(record.key()) {
            return Err(ProviderError::Transport(format!("could not persist {} {}", T::KIND, record.key())));
        }
        lock(&self.saves).push(record.key().to_string());
        lock(&self.records).insert(record.key().to_string(), record.clone());
        Ok(())
    }
}
