use crate::context::WorkflowContext;
use crate::errors::StepError;

/// Trait que implementa cada paso de una ejecución.
///
/// - `run` es un no-op exitoso cuando su precondición no aplica (por ejemplo
///   el host todavía no tiene instancia de base de datos).
/// - `undo` sólo se invoca si `run` terminó bien; debe dejar el estado
///   externo como estaba y ser idempotente.
/// - Un paso sin inversa útil implementa `undo` como no-op: la compensación
///   la hace el paso que creó el recurso.
pub trait Step {
    /// Identificador estable del paso dentro de la ejecución.
    fn id(&self) -> &str;

    /// Descripción para logs.
    fn name(&self) -> &str { self.id() }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError>;

    fn undo(&self, ctx: &mut WorkflowContext) -> Result<(), StepError>;

    /// Si es `true`, el driver también llama a `undo` cuando `run` falló a
    /// mitad de camino. Sólo tiene sentido para pasos cuyo `undo` revierte
    /// exactamente lo registrado en `changed_objects`.
    fn compensates_partial_failure(&self) -> bool { false }
}
