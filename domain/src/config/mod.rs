//! Configuration value objects for the domain layer
//!
//! These are the enumerated settings a scaffolded service is described by,
//! plus the registry of keys the configuration resolver understands.

mod compute;
pub mod config_key;
mod messaging;
pub mod validation;

pub use compute::ComputeTarget;
pub use messaging::MessagingPlatform;
