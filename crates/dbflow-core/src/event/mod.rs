//! Bitácora append-only de una ejecución del driver.
pub mod store;
pub mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{WorkflowEvent, WorkflowEventKind};
