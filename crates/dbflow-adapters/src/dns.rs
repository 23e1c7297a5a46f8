//! Cutover DNS entre un registro y su equivalente.
//!
//! Hacia adelante, el nombre DNS del origen pasa a su equivalente y el
//! origen queda marcado con su propia dirección (degradado). Hacia atrás se
//! recalcula todo desde el estado actual de los registros, sin mirar lo que
//! guardó la pasada anterior. Cada par se procesa y guarda por separado: un
//! fallo en el par N deja aplicados los pares 1..N-1.

use dbflow_core::{ChangedObject, StepError, WorkflowContext};
use dbflow_domain::DnsBinding;
use dbflow_providers::{BindingStore, DnsProvider};
use log::info;

fn equivalent_of<T: DnsBinding>(record: &T) -> Result<String, StepError> {
    record.equivalent()
          .map(str::to_string)
          .ok_or_else(|| StepError::MissingEquivalent { kind: T::KIND,
                                                        key: record.key().to_string() })
}

/// Mueve el DNS de cada origen a su equivalente, en el orden dado, y deja
/// un `ChangedObject::DnsSwitch` por cada par completado.
pub fn switch_dns_forward<T>(ctx: &mut WorkflowContext,
                             sources: &[String],
                             store: &dyn BindingStore<T>,
                             dns: &dyn DnsProvider)
                             -> Result<(), StepError>
    where T: DnsBinding
{
    for key in sources {
        let mut source = store.get(key)?;
        let mut target = store.get(&equivalent_of(&source)?)?;

        let dns_name = source.dns().to_string();
        let old_ip = source.address().to_string();
        let new_ip = target.address().to_string();
        source.set_dns(old_ip.clone());
        target.set_dns(dns_name.clone());

        info!("Changing {dns_name}: from {old_ip} to {new_ip}");
        dns.update_database_dns_content(&ctx.infra, &dns_name, &old_ip, &new_ip)?;
        store.save(&source)?;
        store.save(&target)?;
        ctx.push_changed(ChangedObject::dns_switch(T::KIND, key));
    }
    Ok(())
}

/// Inversa de `switch_dns_forward` para los orígenes dados: el equivalente
/// devuelve el nombre DNS al origen.
pub fn switch_dns_backward<T>(ctx: &WorkflowContext,
                              sources: &[String],
                              store: &dyn BindingStore<T>,
                              dns: &dyn DnsProvider)
                              -> Result<(), StepError>
    where T: DnsBinding
{
    for key in sources {
        let mut source = store.get(key)?;
        let mut target = store.get(&equivalent_of(&source)?)?;

        let dns_name = target.dns().to_string();
        let old_ip = target.address().to_string();
        let new_ip = source.address().to_string();
        target.set_dns(old_ip.clone());
        source.set_dns(dns_name.clone());

        info!("Changing {dns_name}: from {old_ip} to {new_ip}");
        dns.update_database_dns_content(&ctx.infra, &dns_name, &old_ip, &new_ip)?;
        store.save(&target)?;
        store.save(&source)?;
    }
    Ok(())
}
