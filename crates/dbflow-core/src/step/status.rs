use serde::{Deserialize, Serialize};

/// Estado de un Step dentro de una ejecución del driver.
///
/// Transiciones válidas:
/// - `Pending` -> `Running`
/// - `Running` -> `Finished` | `Failed`
/// - `Finished` | `Failed` -> `Undone` | `UndoFailed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Pending,
    Running,
    Finished,
    Failed,
    /// La compensación terminó bien.
    Undone,
    /// La compensación falló; se registró y el rollback siguió.
    UndoFailed,
}
