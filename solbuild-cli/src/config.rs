//! CLI log configuration
//!
//! Per-stage overrides on top of a global level, keyed by the resolution
//! stages defined in `solbuild-config`.

use solbuild_config::Stage;
use tracing::Level;

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub loader: Option<Level>,
    pub resolver: Option<Level>,
    pub plugins: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            loader: None,
            resolver: None,
            plugins: None,
        }
    }
}

impl LogConfig {
    /// Get the log level for a specific stage
    pub fn level_for(&self, stage: Stage) -> Level {
        match stage {
            Stage::Loader => self.loader.unwrap_or(self.global),
            Stage::Resolver => self.resolver.unwrap_or(self.global),
            Stage::Plugins => self.plugins.unwrap_or(self.global),
            Stage::Cli => self.global,
        }
    }
}
