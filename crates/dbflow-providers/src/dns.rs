use dbflow_domain::DatabaseInfra;

use crate::ProviderError;

/// Cliente de actualización DNS.
pub trait DnsProvider: Send + Sync {
    /// Apunta `dns` a `new_ip` (antes resolvía a `old_ip`) dentro de la
    /// zona de la infra.
    fn update_database_dns_content(&self,
                                   infra: &DatabaseInfra,
                                   dns: &str,
                                   old_ip: &str,
                                   new_ip: &str)
                                   -> Result<(), ProviderError>;
}
