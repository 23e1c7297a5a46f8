//! dbflow-adapters: pasos concretos sobre los colaboradores.
//!
//! - `dns`: cutover DNS entre registros equivalentes y su inversa.
//! - `steps::volume`: ciclo de vida del volumen de datos de un host.
//! - `steps::hosts`: adaptadores `Step` de las operaciones multi-host.
//! - `scripts`: fragmentos de shell reutilizados por los pasos.
pub mod dns;
pub mod scripts;
pub mod steps;

pub use dns::{switch_dns_backward, switch_dns_forward};
pub use steps::{DnsCutover, MountDataVolume, NewVolume, ResizeVolume, RunVmScript, StartVms, StopVms, VolumeServices};
