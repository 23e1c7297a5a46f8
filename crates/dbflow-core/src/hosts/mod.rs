//! Operaciones aplicadas sobre todos los hosts objetivo de una ejecución.
//!
//! A diferencia de los pasos de recursos, estas operaciones nunca propagan
//! errores: registran un `(código, traza)` en el contexto y devuelven un
//! `HostRunReport`.

mod readiness;
mod report;
mod runner;

pub use readiness::wait_until_ready;
pub use report::{HostPass, HostRunReport};
pub use runner::MultiHostRunner;
