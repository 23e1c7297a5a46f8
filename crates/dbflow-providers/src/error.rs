//! Errores de colaboradores externos.
//! Cada variante conserva el contexto que devolvió el proveedor para
//! diagnóstico (cuerpo HTTP, identificador, operación).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{provider} rejected {operation}")]
    Rejected { provider: &'static str, operation: String },
    #[error("http status {status}: {body}")]
    Http { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("credential unavailable: {0}")]
    Credential(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<dbflow_domain::DomainError> for ProviderError {
    fn from(err: dbflow_domain::DomainError) -> Self {
        match err {
            dbflow_domain::DomainError::NotFound(what) => Self::NotFound(what),
            other => Self::InvalidResponse(other.to_string()),
        }
    }
}
