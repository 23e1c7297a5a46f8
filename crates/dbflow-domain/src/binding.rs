//! Contrato de registros que participan en un cutover DNS.
//!
//! Un binding expone una dirección, un campo de nombre DNS y un enlace a su
//! equivalente (la pareja con la que se intercambia). El cutover sólo
//! conoce este trait, por lo que funciona igual para hosts y para
//! instancias de base de datos.

use crate::{DatabaseInstance, Host};

pub trait DnsBinding: Clone {
    /// Nombre estable del tipo de registro, usado en los registros de
    /// compensación.
    const KIND: &'static str;

    /// Clave del registro dentro de su store.
    fn key(&self) -> &str;
    fn address(&self) -> &str;
    fn dns(&self) -> &str;
    fn set_dns(&mut self, dns: String);
    /// Clave del registro equivalente, si existe.
    fn equivalent(&self) -> Option<&str>;
}

impl DnsBinding for Host {
    const KIND: &'static str = "host";

    fn key(&self) -> &str { self.id() }
    fn address(&self) -> &str { Host::address(self) }
    fn dns(&self) -> &str { &self.hostname }
    fn set_dns(&mut self, dns: String) { self.hostname = dns; }
    fn equivalent(&self) -> Option<&str> { self.future_host.as_deref() }
}

impl DnsBinding for DatabaseInstance {
    const KIND: &'static str = "instance";

    fn key(&self) -> &str { self.id() }
    fn address(&self) -> &str { DatabaseInstance::address(self) }
    fn dns(&self) -> &str { &self.dns }
    fn set_dns(&mut self, dns: String) { self.dns = dns; }
    fn equivalent(&self) -> Option<&str> { self.future_instance.as_deref() }
}
