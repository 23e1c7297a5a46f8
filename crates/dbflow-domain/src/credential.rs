use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo de credencial que se resuelve por ambiente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialKind {
    Compute,
    VolumeProvider,
    Dns,
}

impl CredentialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKind::Compute => "compute",
            CredentialKind::VolumeProvider => "volume_provider",
            CredentialKind::Dns => "dns",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub user: String,
    pub password: String,
    /// URL base del servicio (sin barra final).
    pub endpoint: String,
    /// Proyecto/tenant dentro del proveedor.
    pub project: String,
}

impl Credential {
    pub fn new(user: &str, password: &str, endpoint: &str, project: &str) -> Self {
        Self { user: user.to_string(),
               password: password.to_string(),
               endpoint: endpoint.trim_end_matches('/').to_string(),
               project: project.to_string() }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
         .field("user", &self.user)
         .field("password", &"***")
         .field("endpoint", &self.endpoint)
         .field("project", &self.project)
         .finish()
    }
}
