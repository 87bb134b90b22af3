//! Compiler toolchain plugin

use crate::error::PluginError;
use crate::plugin::{ActivationContext, Plugin, PluginMetadata};
use serde_json::json;
use tracing::debug;

/// Registers the compiler toolchain request into the activation context.
///
/// Publishes `solc.version` and `solc.optimizer`; plugins activated later
/// (e.g. `upgrades`) depend on these entries being present.
#[derive(Debug, Default)]
pub struct SolcPlugin;

impl SolcPlugin {
    /// Create a new compiler plugin
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for SolcPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::new(
            "compiler",
            "1.0.0",
            Some("Registers the compiler toolchain for the build"),
        )
    }

    fn activate(&self, ctx: &mut ActivationContext) -> Result<(), PluginError> {
        let config = ctx.config.clone();
        let compiler = &config.compiler;
        debug!(
            target: "solbuild::plugins",
            version = %compiler.version,
            optimizer = compiler.optimizer.enabled,
            "registering compiler toolchain"
        );

        ctx.insert("solc.version", json!(compiler.version.to_string()));
        ctx.insert(
            "solc.optimizer",
            json!({
                "enabled": compiler.optimizer.enabled,
                "runs": compiler.optimizer.runs,
            }),
        );
        ctx.insert(
            "solc.sources",
            json!(config.paths.sources.to_string_lossy()),
        );
        Ok(())
    }
}
