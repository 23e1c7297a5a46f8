use dbflow_core::StepError;
use dbflow_domain::DomainError;
use dbflow_providers::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error en paso: {0}")]
    Step(#[from] StepError),
    #[error("Error de proveedor: {0}")]
    Provider(#[from] ProviderError),
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    /// La ejecución falló y se compensó.
    #[error("Ejecución revertida en el paso {failed_step}: {error}")]
    RolledBack { failed_step: String, error: StepError },
}
