// dbflow-domain library entry point
pub mod binding;
pub mod credential;
pub mod error;
pub mod host;
pub mod infra;
pub mod instance;
pub mod volume;
pub use binding::DnsBinding;
pub use credential::{Credential, CredentialKind};
pub use error::DomainError;
pub use host::{Host, HostAttr};
pub use infra::{DatabaseInfra, DiskOffering};
pub use instance::{DatabaseInstance, InstanceDetail};
pub use volume::Volume;
