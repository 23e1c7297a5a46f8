//! Pasos concretos listos para encadenar en un `WorkflowDriver`.
mod dns_cutover;
mod hosts;
mod volume;

pub use dns_cutover::DnsCutover;
pub use hosts::{RunVmScript, StartVms, StopVms};
pub use volume::{MountDataVolume, NewVolume, ResizeVolume, VolumeServices};
