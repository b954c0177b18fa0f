//! Domain error types

use crate::config::{ComputeTarget, MessagingPlatform};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid compute target '{0}' (options: {options})", options = ComputeTarget::options())]
    InvalidComputeTarget(String),

    #[error(
        "Invalid messaging platform '{0}' (options: {options})",
        options = MessagingPlatform::options()
    )]
    InvalidMessagingPlatform(String),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),
}
