//! Driver de ejecución: corre los pasos en orden y compensa ante fallos.
pub mod builder;
pub mod driver;

pub use builder::DriverBuilder;
pub use driver::{RunOutcome, UndoFailure, WorkflowDriver};
