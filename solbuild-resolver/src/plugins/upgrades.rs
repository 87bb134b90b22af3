//! Upgrade-safety checker plugin

use crate::error::PluginError;
use crate::plugin::{ActivationContext, Plugin, PluginMetadata};
use serde_json::json;
use tracing::debug;

/// Hooks the upgrade-safety checker into the build.
///
/// Depends on the `compiler` plugin having registered the toolchain first:
/// storage-layout validation is keyed to the compiler artifacts. Activation
/// out of order fails with `MissingDependency`.
#[derive(Debug, Default)]
pub struct UpgradesPlugin;

impl UpgradesPlugin {
    /// Create a new upgrades plugin
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for UpgradesPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::new(
            "upgrades",
            "1.0.0",
            Some("Enables upgrade-safety checks on compiler artifacts"),
        )
    }

    fn activate(&self, ctx: &mut ActivationContext) -> Result<(), PluginError> {
        if !ctx.contains("solc.version") {
            return Err(PluginError::MissingDependency {
                required: "compiler".to_string(),
            });
        }

        let artifacts = ctx.config.paths.artifacts.to_string_lossy().to_string();
        debug!(target: "solbuild::plugins", %artifacts, "enabling upgrade-safety checks");

        ctx.insert("upgrades.enabled", json!(true));
        ctx.insert("upgrades.artifacts", json!(artifacts));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::SolcPlugin;
    use solbuild_config::{
        BuildConfig, CompilerSettings, OptimizerSettings, ProjectPaths, Provenance,
    };
    use solbuild_vfs::MemoryFileSystem;
    use std::sync::Arc;

    fn test_context() -> ActivationContext {
        let config = Arc::new(BuildConfig {
            compiler: CompilerSettings {
                version: semver::Version::new(0, 8, 9),
                optimizer: OptimizerSettings::default(),
            },
            paths: ProjectPaths::rooted_at("/project"),
            plugins: vec![],
            provenance: Provenance::default(),
        });
        ActivationContext::new(config, Arc::new(MemoryFileSystem::new()))
    }

    #[test]
    fn test_requires_compiler_first() {
        let mut ctx = test_context();

        let result = UpgradesPlugin::new().activate(&mut ctx);
        assert!(matches!(
            result,
            Err(PluginError::MissingDependency { ref required }) if required == "compiler"
        ));
    }

    #[test]
    fn test_activates_after_compiler() {
        let mut ctx = test_context();

        SolcPlugin::new().activate(&mut ctx).unwrap();
        UpgradesPlugin::new().activate(&mut ctx).unwrap();

        assert_eq!(ctx.get("upgrades.enabled").unwrap(), &json!(true));
        assert_eq!(
            ctx.get("upgrades.artifacts").unwrap(),
            &json!("/project/artifacts")
        );
    }
}
