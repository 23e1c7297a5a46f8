//! Tipos de evento de una ejecución y estructura `WorkflowEvent`.
//!
//! El driver emite un evento por cada transición de un paso; la secuencia
//! permite reconstruir qué se aplicó y qué se compensó sin inspeccionar el
//! contexto.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkflowEventKind {
    /// Primer evento de una ejecución.
    RunStarted { step_count: usize },
    StepStarted { step_index: usize, step_id: String },
    StepFinished { step_index: usize, step_id: String },
    /// `run` falló; a continuación vienen los eventos de compensación.
    StepFailed {
        step_index: usize,
        step_id: String,
        code: ErrorCode,
        message: String,
    },
    StepUndone { step_index: usize, step_id: String },
    /// La compensación de un paso falló; el rollback continúa igual.
    UndoFailed {
        step_index: usize,
        step_id: String,
        message: String,
    },
    RunCompleted,
    RunRolledBack { failed_step: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub run_id: Uuid,
    pub kind: WorkflowEventKind,
    pub ts: DateTime<Utc>,
}
