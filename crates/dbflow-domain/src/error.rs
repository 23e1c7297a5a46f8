use thiserror::Error;

/// Errores de validación del inventario (hosts, volúmenes, infra).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("{0}")]
    ValidationError(String),
    #[error("not found: {0}")]
    NotFound(String),
}
