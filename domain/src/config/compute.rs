//! Compute target value object
//!
//! The deployment style a generated service targets.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute target for a scaffolded service
///
/// - **Func**: serverless function
/// - **Container**: containerized service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeTarget {
    /// Serverless function
    Func,
    /// Containerized service
    Container,
}

impl ComputeTarget {
    /// Every compute target, in declaration order.
    pub const ALL: [ComputeTarget; 2] = [ComputeTarget::Func, ComputeTarget::Container];

    /// Accepted names, in declaration order.
    pub const NAMES: [&'static str; 2] = ["func", "container"];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ComputeTarget::Func => "func",
            ComputeTarget::Container => "container",
        }
    }

    /// Comma-joined list of valid values, used in help text.
    pub fn options() -> String {
        Self::NAMES.join(", ")
    }
}

impl fmt::Display for ComputeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComputeTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidComputeTarget(s.to_string()))
    }
}
