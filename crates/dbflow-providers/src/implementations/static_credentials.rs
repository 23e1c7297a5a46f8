use std::collections::HashMap;
use std::sync::Mutex;

use dbflow_domain::{Credential, CredentialKind};

use super::lock;
use crate::{CredentialResolver, ProviderError};

/// Resolver con credenciales fijas por `(ambiente, tipo)`. Cuenta las
/// resoluciones para poder verificar la memoización de los pasos.
#[derive(Default)]
pub struct StaticCredentialResolver {
    credentials: HashMap<(String, CredentialKind), Credential>,
    resolutions: Mutex<u32>,
}

impl StaticCredentialResolver {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, environment: &str, kind: CredentialKind, credential: Credential) -> Self {
        self.credentials.insert((environment.to_string(), kind), credential);
        self
    }

    pub fn resolutions(&self) -> u32 { *lock(&self.resolutions) }
}

impl CredentialResolver for StaticCredentialResolver {
    fn resolve(&self, environment: &str, kind: CredentialKind) -> Result<Credential, ProviderError> {
        *lock(&self.resolutions) += 1;
        self.credentials
            .get(&(environment.to_string(), kind))
            .cloned()
            .ok_or_else(|| ProviderError::Credential(format!("no {kind} credential for environment {environment}")))
    }
}
