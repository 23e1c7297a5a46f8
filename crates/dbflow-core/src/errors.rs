//! Errores de los pasos y códigos con los que se registran en el contexto.

use std::error::Error as StdError;
use std::fmt;

use dbflow_domain::DomainError;
use dbflow_providers::ProviderError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    /// Un script remoto terminó con exit code distinto de cero.
    #[error("remote command failed on {host} (exit {exit_code}): {output}")]
    RemoteCommand { host: String, exit_code: i32, output: String },
    /// Rechazo o fallo de un proveedor (cómputo, storage, DNS, inventario).
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("host {host} not reachable after {attempts} attempts")]
    ReadinessTimeout { host: String, attempts: u32 },
    #[error("host {host} has no active volume")]
    MissingVolume { host: String },
    #[error("{kind} {key} has no equivalent record")]
    MissingEquivalent { kind: &'static str, key: String },
    #[error("could not render script: {0}")]
    Template(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StepError {
    /// Código con el que un fallo de paso se registra en el contexto.
    pub fn code(&self) -> ErrorCode {
        match self {
            StepError::RemoteCommand { .. } | StepError::ReadinessTimeout { .. } => ErrorCode::HostOperation,
            _ => ErrorCode::StepFailed,
        }
    }
}

impl From<minijinja::Error> for StepError {
    fn from(err: minijinja::Error) -> Self { StepError::Template(err.to_string()) }
}

/// Códigos de error visibles para el operador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Fallo genérico de un paso.
    StepFailed,
    /// Fallo en un host remoto: script con exit code no nulo, host que no
    /// responde, o start/stop rechazado durante un recorrido de hosts.
    HostOperation,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::StepFailed => "DBAAS_0001",
            ErrorCode::HostOperation => "DBAAS_0015",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Traza legible de un error: la cadena de `source()` y, si está
/// habilitado (`RUST_BACKTRACE`), el backtrace del punto de registro.
pub fn full_stack(err: &(dyn StdError + 'static)) -> String {
    let mut trace = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        trace.push_str("\ncaused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }
    let backtrace = std::backtrace::Backtrace::capture();
    if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
        trace.push('\n');
        trace.push_str(&backtrace.to_string());
    }
    trace
}
