//! Carga de la configuración de ritmo desde variables de entorno.
//! Valores no definidos o no parseables caen en los defaults.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;

use crate::constants::{DEFAULT_READY_ATTEMPTS, DEFAULT_READY_INTERVAL_SECS, DEFAULT_START_SETTLE_SECS};
use crate::pacing::ReadinessPolicy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Espera fija tras confirmar que todos los hosts arrancados responden.
    pub start_settle: Duration,
    pub readiness: ReadinessPolicy,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self { start_settle: Duration::from_secs(DEFAULT_START_SETTLE_SECS),
               readiness: ReadinessPolicy::default() }
    }
}

impl PacingConfig {
    /// Lee `DBFLOW_START_SETTLE_SECS`, `DBFLOW_READY_ATTEMPTS` y
    /// `DBFLOW_READY_INTERVAL_SECS`.
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let start_settle = env_number("DBFLOW_START_SETTLE_SECS", DEFAULT_START_SETTLE_SECS);
        let attempts: u32 = env_number("DBFLOW_READY_ATTEMPTS", DEFAULT_READY_ATTEMPTS);
        let interval = env_number("DBFLOW_READY_INTERVAL_SECS", DEFAULT_READY_INTERVAL_SECS);
        Self { start_settle: Duration::from_secs(start_settle),
               readiness: ReadinessPolicy { attempts: attempts.max(1),
                                            interval: Duration::from_secs(interval) } }
    }

    /// Sin esperas: útil para tests y demos.
    pub fn immediate() -> Self {
        Self { start_settle: Duration::ZERO,
               readiness: ReadinessPolicy { attempts: 1,
                                            interval: Duration::ZERO } }
    }
}

// Valores fuera de rango para `T` también caen en el default.
fn env_number<T>(name: &str, default: T) -> T
    where T: FromStr + Display + Copy
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                                         warn!("{name}={raw:?} is not a valid number, using {default}");
                                         default
                                     }),
        Err(_) => default,
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_constants() {
        let cfg = PacingConfig::default();
        assert_eq!(cfg.start_settle, Duration::from_secs(60));
        assert_eq!(cfg.readiness.attempts, 5);
        assert_eq!(cfg.readiness.interval, Duration::from_secs(10));
    }

    #[test]
    fn unparsable_values_fall_back_to_default() {
        env::set_var("DBFLOW_TEST_NOT_A_NUMBER", "soon");
        assert_eq!(env_number("DBFLOW_TEST_NOT_A_NUMBER", 7), 7);
        env::set_var("DBFLOW_TEST_A_NUMBER", " 12 ");
        assert_eq!(env_number("DBFLOW_TEST_A_NUMBER", 7), 12);
    }

    #[test]
    fn out_of_range_values_fall_back_to_default() {
        env::set_var("DBFLOW_TEST_TOO_BIG", "4294967297");
        assert_eq!(env_number::<u32>("DBFLOW_TEST_TOO_BIG", 5), 5);
        assert_eq!(env_number::<u64>("DBFLOW_TEST_TOO_BIG", 5), 4_294_967_297);
    }
}
