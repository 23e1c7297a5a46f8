//! Contrato de pasos.
//!
//! Un `Step` es una operación con acción hacia adelante (`run`) y acción
//! compensatoria (`undo`), acotada a un host o a un conjunto de bindings
//! DNS.

pub mod definition;
mod status;

pub use definition::Step;
pub use status::StepStatus;
