use dbflow_domain::{Credential, CredentialKind};

use crate::ProviderError;

/// Resolución de credenciales por ambiente y tipo.
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self, environment: &str, kind: CredentialKind) -> Result<Credential, ProviderError>;
}
