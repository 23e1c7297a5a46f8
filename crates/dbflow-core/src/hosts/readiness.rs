use dbflow_domain::HostAttr;
use dbflow_providers::RemoteExecutor;
use log::{debug, warn};

use crate::errors::StepError;
use crate::pacing::{ReadinessPolicy, Sleeper};

/// Sondea `address` hasta que responda o se agoten los intentos de la
/// política. No duerme después del último intento.
pub fn wait_until_ready(executor: &dyn RemoteExecutor,
                        sleeper: &dyn Sleeper,
                        address: &str,
                        attr: &HostAttr,
                        policy: ReadinessPolicy)
                        -> Result<(), StepError> {
    for attempt in 1..=policy.attempts {
        if executor.probe(address, &attr.vm_user, &attr.vm_password) {
            debug!("host {address} reachable after {attempt} attempt(s)");
            return Ok(());
        }
        if attempt < policy.attempts {
            sleeper.sleep(policy.interval);
        }
    }
    warn!("Host {address} is not ready...");
    Err(StepError::ReadinessTimeout { host: address.to_string(),
                                      attempts: policy.attempts })
}
