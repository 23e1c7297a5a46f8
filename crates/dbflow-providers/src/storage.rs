//! Proveedor de volúmenes de bloque.
//!
//! El contrato HTTP está fijado por el servicio de volúmenes:
//!
//! | operación | método | ruta                              | cuerpo                              |
//! |-----------|--------|-----------------------------------|-------------------------------------|
//! | crear     | POST   | `{base}volume/new`                | `{group, size_kb, to_address}`      |
//! | montar    | GET    | `{base}commands/{id}/mount`       | -                                   |
//! | resize    | POST   | `{base}resize/{id}`               | `{new_size_kb}`                     |
//! | borrar    | DELETE | `{base}volume/{id}`               | -                                   |
//!
//! con `base = {endpoint}/{project}/{environment}/`. Cualquier status fuera de
//! 2xx es un fallo duro que conserva el cuerpo de la respuesta.

use std::time::Duration;

use dbflow_domain::Credential;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ProviderError;

/// Destino de las llamadas de storage: URL base ya resuelta para una
/// credencial y un ambiente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageTarget {
    base_url: String,
}

impl StorageTarget {
    pub fn new(credential: &Credential, environment: &str) -> Self {
        Self { base_url: format!("{}/{}/{}/", credential.endpoint, credential.project, environment) }
    }

    pub fn base_url(&self) -> &str { &self.base_url }
}

pub trait StorageProvider: Send + Sync {
    /// Crea un volumen y devuelve el identificador asignado por el proveedor.
    fn create_volume(&self,
                     target: &StorageTarget,
                     group: &str,
                     size_kb: u64,
                     to_address: &str)
                     -> Result<String, ProviderError>;
    /// Comando de montaje que debe ejecutarse en el host dueño del volumen.
    fn mount_command(&self, target: &StorageTarget, identifier: &str) -> Result<String, ProviderError>;
    fn resize(&self, target: &StorageTarget, identifier: &str, new_size_kb: u64) -> Result<(), ProviderError>;
    fn delete(&self, target: &StorageTarget, identifier: &str) -> Result<(), ProviderError>;
}

#[derive(Serialize)]
struct NewVolumeRequest<'a> {
    group: &'a str,
    size_kb: u64,
    to_address: &'a str,
}

#[derive(Deserialize)]
struct NewVolumeResponse {
    identifier: String,
}

#[derive(Deserialize)]
struct MountCommandResponse {
    command: String,
}

#[derive(Serialize)]
struct ResizeRequest {
    new_size_kb: u64,
}

/// Implementación HTTP bloqueante del proveedor de storage.
#[derive(Debug, Clone)]
pub struct HttpStorageProvider {
    client: reqwest::blocking::Client,
}

impl HttpStorageProvider {
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn check(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(ProviderError::Http { status: status.as_u16(),
                                  body })
    }
}

impl StorageProvider for HttpStorageProvider {
    fn create_volume(&self,
                     target: &StorageTarget,
                     group: &str,
                     size_kb: u64,
                     to_address: &str)
                     -> Result<String, ProviderError> {
        let url = format!("{}volume/new", target.base_url());
        debug!("POST {url} group={group} size_kb={size_kb}");
        let response = self.client
                           .post(&url)
                           .json(&NewVolumeRequest { group, size_kb, to_address })
                           .send()?;
        let created: NewVolumeResponse = Self::check(response)?.json()?;
        Ok(created.identifier)
    }

    fn mount_command(&self, target: &StorageTarget, identifier: &str) -> Result<String, ProviderError> {
        let url = format!("{}commands/{identifier}/mount", target.base_url());
        debug!("GET {url}");
        let response = self.client.get(&url).send()?;
        let mount: MountCommandResponse = Self::check(response)?.json()?;
        Ok(mount.command)
    }

    fn resize(&self, target: &StorageTarget, identifier: &str, new_size_kb: u64) -> Result<(), ProviderError> {
        let url = format!("{}resize/{identifier}", target.base_url());
        debug!("POST {url} new_size_kb={new_size_kb}");
        let response = self.client.post(&url).json(&ResizeRequest { new_size_kb }).send()?;
        Self::check(response)?;
        Ok(())
    }

    fn delete(&self, target: &StorageTarget, identifier: &str) -> Result<(), ProviderError> {
        let url = format!("{}volume/{identifier}", target.base_url());
        debug!("DELETE {url}");
        let response = self.client.delete(&url).send()?;
        Self::check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_joins_endpoint_project_and_environment() {
        let cred = Credential::new("u", "p", "http://volumes.local/", "dbaas");
        let target = StorageTarget::new(&cred, "prod");
        assert_eq!(target.base_url(), "http://volumes.local/dbaas/prod/");
    }
}
