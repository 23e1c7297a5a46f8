use std::time::Duration;

use crate::errors::StepError;

/// Dirección del recorrido y pausa entre hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostPass {
    /// Recorre los hosts en orden inverso al de inserción.
    pub reverse: bool,
    /// Pausa tras cada host exitoso. Acota el ritmo de cambios, no da
    /// garantías de consistencia.
    pub settle: Duration,
}

impl HostPass {
    pub fn forward() -> Self { Self::default() }

    pub fn reversed() -> Self {
        Self { reverse: true,
               ..Self::default() }
    }

    pub fn settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }
}

/// Resultado de una operación sobre todos los hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRunReport {
    /// El contexto no tiene hosts objetivo; no se hizo nada.
    NoTargets,
    /// Todos los hosts se procesaron, en este orden.
    Applied { hosts: Vec<String> },
    /// La operación se cortó. `completed` son los hosts ya procesados (con
    /// sus efectos aplicados); `failed_host` es `None` si el fallo ocurrió
    /// antes de tocar ningún host.
    Aborted {
        failed_host: Option<String>,
        completed: Vec<String>,
        error: StepError,
    },
}

impl HostRunReport {
    pub fn succeeded(&self) -> bool { !matches!(self, HostRunReport::Aborted { .. }) }

    pub fn error(&self) -> Option<&StepError> {
        match self {
            HostRunReport::Aborted { error, .. } => Some(error),
            _ => None,
        }
    }
}
