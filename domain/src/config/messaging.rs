//! Messaging platform value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inter-service communication mechanism a generated service integrates with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagingPlatform {
    /// gRPC
    Grpc,
    /// Azure Service Bus
    ServiceBus,
    /// Plain JSON over HTTP
    Json,
}

impl MessagingPlatform {
    /// Every messaging platform, in declaration order.
    pub const ALL: [MessagingPlatform; 3] = [
        MessagingPlatform::Grpc,
        MessagingPlatform::ServiceBus,
        MessagingPlatform::Json,
    ];

    /// Accepted names, in declaration order.
    pub const NAMES: [&'static str; 3] = ["grpc", "servicebus", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessagingPlatform::Grpc => "grpc",
            MessagingPlatform::ServiceBus => "servicebus",
            MessagingPlatform::Json => "json",
        }
    }

    /// Comma-joined list of valid values, used in help text.
    pub fn options() -> String {
        Self::NAMES.join(", ")
    }
}

impl fmt::Display for MessagingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessagingPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidMessagingPlatform(s.to_string()))
    }
}
