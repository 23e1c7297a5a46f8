//! dbflow-core: protocolo de pasos con compensación.
//!
//! Una ejecución recorre una lista ordenada de `Step`s sobre un
//! `WorkflowContext`. Las operaciones que abarcan todos los hosts
//! (`MultiHostRunner`) atrapan sus fallos y los registran en el contexto;
//! los pasos de recursos propagan el error al `WorkflowDriver`, que
//! compensa (`undo`) los pasos completados en orden inverso.
pub mod config;
pub mod constants;
pub mod context;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hosts;
pub mod pacing;
pub mod step;
pub mod template;

pub use config::PacingConfig;
pub use context::{ChangedObject, ErrorRecord, WorkflowContext};
pub use engine::{DriverBuilder, RunOutcome, UndoFailure, WorkflowDriver};
pub use errors::{ErrorCode, StepError};
pub use event::{EventStore, InMemoryEventStore, WorkflowEvent, WorkflowEventKind};
pub use hosts::{HostPass, HostRunReport, MultiHostRunner};
pub use pacing::{ReadinessPolicy, RecordingSleeper, Sleeper, ThreadSleeper};
pub use step::{Step, StepStatus};
pub use template::{merge_vars, render_script, TemplateVars};
