//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable con
//! el ambiente de trabajo y el ritmo de las operaciones sobre hosts.
use std::env;

use dbflow_core::config::init_dotenv;
use dbflow_core::PacingConfig;

use crate::errors::CoreError;

pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Ambiente contra el que se resuelven credenciales y rutas de storage.
    pub environment: String,
    pub pacing: PacingConfig,
}

impl AppConfig {
    /// Lee `DBFLOW_ENVIRONMENT` (por defecto `dev`) y la configuración de
    /// ritmo (`DBFLOW_START_SETTLE_SECS`, `DBFLOW_READY_ATTEMPTS`,
    /// `DBFLOW_READY_INTERVAL_SECS`).
    pub fn from_env() -> Result<Self, CoreError> {
        init_dotenv();
        let environment = env::var("DBFLOW_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        Ok(Self { environment: validate_environment(&environment)?,
                  pacing: PacingConfig::from_env() })
    }
}

// El ambiente termina como segmento de ruta en las URLs de storage.
fn validate_environment(raw: &str) -> Result<String, CoreError> {
    let environment = raw.trim();
    if environment.is_empty() {
        return Err(CoreError::Config("DBFLOW_ENVIRONMENT must not be empty".to_string()));
    }
    if environment.contains('/') {
        return Err(CoreError::Config(format!("DBFLOW_ENVIRONMENT={environment:?} must not contain '/'")));
    }
    Ok(environment.to_string())
}
