use log::{info, warn};
use uuid::Uuid;

use crate::context::WorkflowContext;
use crate::engine::DriverBuilder;
use crate::errors::StepError;
use crate::event::{EventStore, InMemoryEventStore, WorkflowEvent, WorkflowEventKind};
use crate::step::{Step, StepStatus};

/// Ejecuta una secuencia ordenada de pasos sobre un contexto.
///
/// En el primer fallo registra el error en el contexto (salvo que el paso ya
/// lo haya registrado) y compensa los pasos completados en orden inverso. Un
/// `undo` fallido se loguea y se anota en el resultado, pero no detiene la
/// compensación de los pasos anteriores.
pub struct WorkflowDriver<E: EventStore = InMemoryEventStore> {
    event_store: E,
    steps: Vec<Box<dyn Step>>,
}

/// Compensación que no pudo completarse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoFailure {
    pub step_id: String,
    pub error: StepError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    RolledBack {
        failed_step: String,
        error: StepError,
        undo_failures: Vec<UndoFailure>,
    },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool { matches!(self, RunOutcome::Completed) }
}

impl WorkflowDriver<InMemoryEventStore> {
    /// Crea un builder con store de eventos en memoria.
    #[inline]
    pub fn new() -> DriverBuilder<InMemoryEventStore> { Self::builder(InMemoryEventStore::default()) }
}

impl<E: EventStore> WorkflowDriver<E> {
    #[inline]
    pub fn builder(event_store: E) -> DriverBuilder<E> {
        DriverBuilder { event_store,
                        steps: Vec::new() }
    }

    pub(crate) fn from_parts(event_store: E, steps: Vec<Box<dyn Step>>) -> Self { Self { event_store, steps } }

    pub fn event_store(&self) -> &E { &self.event_store }

    pub fn events_for(&self, run_id: Uuid) -> Vec<WorkflowEvent> { self.event_store.list(run_id) }

    pub fn step_ids(&self) -> Vec<&str> { self.steps.iter().map(|s| s.id()).collect() }

    /// Estado de cada paso en la ejecución `run_id`, reconstruido desde los
    /// eventos.
    pub fn step_statuses(&self, run_id: Uuid) -> Vec<(String, StepStatus)> {
        let mut statuses: Vec<(String, StepStatus)> =
            self.steps.iter().map(|s| (s.id().to_string(), StepStatus::Pending)).collect();
        for event in self.event_store.list(run_id) {
            let (index, status) = match event.kind {
                WorkflowEventKind::StepStarted { step_index, .. } => (step_index, StepStatus::Running),
                WorkflowEventKind::StepFinished { step_index, .. } => (step_index, StepStatus::Finished),
                WorkflowEventKind::StepFailed { step_index, .. } => (step_index, StepStatus::Failed),
                WorkflowEventKind::StepUndone { step_index, .. } => (step_index, StepStatus::Undone),
                WorkflowEventKind::UndoFailed { step_index, .. } => (step_index, StepStatus::UndoFailed),
                _ => continue,
            };
            if let Some(entry) = statuses.get_mut(index) {
                entry.1 = status;
            }
        }
        statuses
    }

    pub fn run(&mut self, ctx: &mut WorkflowContext) -> RunOutcome {
        let run_id = ctx.id;
        self.event_store
            .append_kind(run_id, WorkflowEventKind::RunStarted { step_count: self.steps.len() });

        let mut completed: Vec<usize> = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            info!("[{run_id}] step {index}: {}", step.name());
            self.event_store.append_kind(run_id,
                                         WorkflowEventKind::StepStarted { step_index: index,
                                                                          step_id: step.id().to_string() });
            let errors_before = ctx.errors().len();
            match step.run(ctx) {
                Ok(()) => {
                    self.event_store
                        .append_kind(run_id,
                                     WorkflowEventKind::StepFinished { step_index: index,
                                                                       step_id: step.id().to_string() });
                    completed.push(index);
                }
                Err(error) => {
                    warn!("[{run_id}] step {} failed: {error}", step.id());
                    if ctx.errors().len() == errors_before {
                        ctx.record_error(error.code(), &error);
                    }
                    self.event_store.append_kind(run_id,
                                                 WorkflowEventKind::StepFailed { step_index: index,
                                                                                 step_id: step.id().to_string(),
                                                                                 code: error.code(),
                                                                                 message: error.to_string() });

                    let mut undo_failures = Vec::new();
                    if step.compensates_partial_failure() {
                        compensate(&mut self.event_store, ctx, index, step.as_ref(), &mut undo_failures);
                    }
                    for &done in completed.iter().rev() {
                        compensate(&mut self.event_store,
                                   ctx,
                                   done,
                                   self.steps[done].as_ref(),
                                   &mut undo_failures);
                    }
                    self.event_store
                        .append_kind(run_id, WorkflowEventKind::RunRolledBack { failed_step: step.id().to_string() });
                    return RunOutcome::RolledBack { failed_step: step.id().to_string(),
                                                    error,
                                                    undo_failures };
                }
            }
        }

        self.event_store.append_kind(run_id, WorkflowEventKind::RunCompleted);
        RunOutcome::Completed
    }
}

fn compensate<E: EventStore>(event_store: &mut E,
                             ctx: &mut WorkflowContext,
                             index: usize,
                             step: &dyn Step,
                             failures: &mut Vec<UndoFailure>) {
    let run_id = ctx.id;
    info!("[{run_id}] undoing step {index}: {}", step.name());
    match step.undo(ctx) {
        Ok(()) => {
            event_store.append_kind(run_id,
                                    WorkflowEventKind::StepUndone { step_index: index,
                                                                    step_id: step.id().to_string() });
        }
        Err(error) => {
            warn!("[{run_id}] undo of step {} failed, continuing rollback: {error}", step.id());
            event_store.append_kind(run_id,
                                    WorkflowEventKind::UndoFailed { step_index: index,
                                                                    step_id: step.id().to_string(),
                                                                    message: error.to_string() });
            failures.push(UndoFailure { step_id: step.id().to_string(),
                                        error });
        }
    }
}
