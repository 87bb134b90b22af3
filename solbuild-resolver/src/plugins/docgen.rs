//! Documentation generator plugin

use crate::error::PluginError;
use crate::plugin::{ActivationContext, Plugin, PluginMetadata};
use serde_json::json;
use tracing::debug;

/// Hooks the documentation generator into the build.
///
/// Publishes `docs.sources` and `docs.output` so the external generator
/// knows where to read source comments from and where to render to.
#[derive(Debug, Default)]
pub struct DocgenPlugin;

impl DocgenPlugin {
    /// Create a new docgen plugin
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for DocgenPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::new(
            "docgen",
            "1.0.0",
            Some("Enables documentation generation from source comments"),
        )
    }

    fn activate(&self, ctx: &mut ActivationContext) -> Result<(), PluginError> {
        let config = ctx.config.clone();
        let output = config.paths.root.join("docs");
        debug!(target: "solbuild::plugins", output = %output.display(), "enabling docgen");

        ctx.insert("docs.sources", json!(config.paths.sources.to_string_lossy()));
        ctx.insert("docs.output", json!(output.to_string_lossy()));
        Ok(())
    }
}
