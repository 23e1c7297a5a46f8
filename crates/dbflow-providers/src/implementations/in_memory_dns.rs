use std::collections::HashSet;
use std::sync::Mutex;

use dbflow_domain::DatabaseInfra;

use super::{lock, CallJournal};
use crate::{DnsProvider, ProviderError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsUpdate {
    pub infra: String,
    pub dns: String,
    pub old_ip: String,
    pub new_ip: String,
}

#[derive(Default)]
pub struct InMemoryDns {
    updates: Mutex<Vec<DnsUpdate>>,
    failing: Mutex<HashSet<String>>,
    journal: Option<CallJournal>,
}

impl InMemoryDns {
    pub fn new() -> Self { Self::default() }

    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Las actualizaciones del nombre `dns` fallarán.
    pub fn fail_on(&self, dns: &str) { lock(&self.failing).insert(dns.to_string()); }

    pub fn updates(&self) -> Vec<DnsUpdate> { lock(&self.updates).clone() }
}

impl DnsProvider for InMemoryDns {
    fn update_database_dns_content(&self,
                                   infra: &DatabaseInfra,
                                   dns: &str,
                                   old_ip: &str,
                                   new_ip: &str)
                                   -> Result<(), ProviderError> {
        if let Some(journal) = &self.journal {
            journal.record(format!("dns:{dns}:{old_ip}->{new_ip}"));
        }
        if lock(&self.failing).contains(dns) {
            return Err(ProviderError::Rejected { provider: "dns",
                                                 operation: format!("update {dns}") });
        }
        lock(&self.updates).push(DnsUpdate { infra: infra.name.clone(),
                                             dns: dns.to_string(),
                                             old_ip: old_ip.to_string(),
                                             new_ip: new_ip.to_string() });
        Ok(())
    }
}
