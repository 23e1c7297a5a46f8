//! Builder para `WorkflowDriver`.
//!
//! ```ignore
//! let mut driver = WorkflowDriver::new()
//!     .step(StartVms::new(runner.clone()))
//!     .step(NewVolume::new(host, services.clone()))
//!     .build();
//! ```

use crate::engine::WorkflowDriver;
use crate::event::EventStore;
use crate::step::Step;

pub struct DriverBuilder<E: EventStore> {
    pub(crate) event_store: E,
    pub(crate) steps: Vec<Box<dyn Step>>,
}

impl<E: EventStore> DriverBuilder<E> {
    /// Agrega un paso al final de la secuencia.
    #[inline]
    pub fn step<S>(mut self, step: S) -> Self
        where S: Step + 'static
    {
        self.steps.push(Box::new(step));
        self
    }

    #[inline]
    pub fn boxed_step(mut self, step: Box<dyn Step>) -> Self {
        self.steps.push(step);
        self
    }

    #[inline]
    pub fn build(self) -> WorkflowDriver<E> { WorkflowDriver::from_parts(self.event_store, self.steps) }
}
