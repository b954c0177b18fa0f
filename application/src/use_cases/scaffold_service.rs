//! Scaffold Service use case
//!
//! Checks that the effective configuration describes a complete service and
//! hands it to a [`ProjectGenerator`].

use crate::config::EffectiveConfig;
use crate::ports::project_generator::{GenerationError, ProjectGenerator};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use truss_domain::{GeneratedProject, lookup_key};

/// Errors that can occur during scaffolding
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Missing required setting '{key}' (set {flag} or add it to the config file)")]
    MissingSetting {
        key: &'static str,
        flag: &'static str,
    },

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Use case for scaffolding a service
pub struct ScaffoldServiceUseCase<G: ProjectGenerator + 'static> {
    generator: Arc<G>,
}

impl<G: ProjectGenerator + 'static> ScaffoldServiceUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    pub fn execute(&self, config: &EffectiveConfig) -> Result<GeneratedProject, ScaffoldError> {
        Self::check_complete(config)?;

        info!(
            "Scaffolding '{}' ({} / {})",
            config.name(),
            config.compute().map(|c| c.as_str()).unwrap_or_default(),
            config.messaging().map(|m| m.as_str()).unwrap_or_default()
        );

        let project = self.generator.generate(config)?;
        debug!("Generator emitted {} files", project.files.len());
        Ok(project)
    }

    fn check_complete(config: &EffectiveConfig) -> Result<(), ScaffoldError> {
        let missing = if config.compute().is_none() {
            "compute"
        } else if config.messaging().is_none() {
            "messaging"
        } else if config.name().is_empty() {
            "name"
        } else {
            return Ok(());
        };

        let flag = lookup_key(missing).map(|info| info.flag).unwrap_or_default();
        Err(ScaffoldError::MissingSetting { key: missing, flag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use truss_domain::{ComputeTarget, MessagingPlatform};

    /// Records every config it is asked to generate from
    #[derive(Default)]
    struct RecordingGenerator {
        seen: Mutex<Vec<EffectiveConfig>>,
        fail: bool,
    }

    impl ProjectGenerator for RecordingGenerator {
        fn generate(&self, config: &EffectiveConfig) -> Result<GeneratedProject, GenerationError> {
            self.seen.lock().unwrap().push(config.clone());
            if self.fail {
                return Err(GenerationError::Template("missing partial".to_string()));
            }
            let project = GeneratedProject::new(
                config.name(),
                config.compute().unwrap(),
                config.messaging().unwrap(),
            )
            .with_devops(config.devops_enabled())
            .with_file("main.go");
            Ok(project)
        }
    }

    fn complete_config() -> EffectiveConfig {
        EffectiveConfig::new()
            .with_compute(Some(ComputeTarget::Container))
            .with_messaging(Some(MessagingPlatform::Grpc))
            .with_name("orders")
            .with_devops(true)
    }

    #[test]
    fn test_execute_delegates_to_generator() {
        let generator = Arc::new(RecordingGenerator::default());
        let use_case = ScaffoldServiceUseCase::new(generator.clone());

        let project = use_case.execute(&complete_config()).unwrap();

        assert_eq!(project.name, "orders");
        assert_eq!(project.compute, ComputeTarget::Container);
        assert!(project.devops);
        assert_eq!(generator.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_compute_is_rejected_before_generation() {
        let generator = Arc::new(RecordingGenerator::default());
        let use_case = ScaffoldServiceUseCase::new(generator.clone());
        let config = complete_config().with_compute(None);

        let err = use_case.execute(&config).unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::MissingSetting { key: "compute", .. }
        ));
        assert!(generator.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_messaging_is_rejected() {
        let use_case = ScaffoldServiceUseCase::new(Arc::new(RecordingGenerator::default()));
        let config = complete_config().with_messaging(None);

        let err = use_case.execute(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required setting 'messaging' (set --messaging or add it to the config file)"
        );
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let use_case = ScaffoldServiceUseCase::new(Arc::new(RecordingGenerator::default()));
        let config = complete_config().with_name("");

        let err = use_case.execute(&config).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::MissingSetting {
                key: "name",
                flag: "--name"
            }
        ));
    }

    #[test]
    fn test_generator_failure_is_wrapped() {
        let generator = Arc::new(RecordingGenerator {
            fail: true,
            ..Default::default()
        });
        let use_case = ScaffoldServiceUseCase::new(generator);

        let err = use_case.execute(&complete_config()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Generation(_)));
        assert_eq!(err.to_string(), "Generation failed: Template error: missing partial");
    }
}
