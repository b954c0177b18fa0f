//! Generated project entity

use crate::config::{ComputeTarget, MessagingPlatform};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A project emitted by a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProject {
    /// Application name
    pub name: String,
    pub compute: ComputeTarget,
    pub messaging: MessagingPlatform,
    /// Whether registry and build tasks were emitted
    pub devops: bool,
    /// Emitted files, relative to the project root
    pub files: Vec<PathBuf>,
}

impl GeneratedProject {
    pub fn new(
        name: impl Into<String>,
        compute: ComputeTarget,
        messaging: MessagingPlatform,
    ) -> Self {
        Self {
            name: name.into(),
            compute,
            messaging,
            devops: false,
            files: Vec::new(),
        }
    }

    pub fn with_devops(mut self, devops: bool) -> Self {
        self.devops = devops;
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }
}
