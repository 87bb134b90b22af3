//! Plugin trait definitions
//!
//! A plugin is a capability extension activated before compilation. Plugins
//! are registered explicitly into a [`crate::registry::PluginRegistry`] and
//! activated in declaration order; registration replaces the ambient
//! load-time side effects the original toolchain relied on.

use crate::error::PluginError;
use solbuild_config::BuildConfig;
use solbuild_vfs::VirtualFileSystem;
use std::collections::HashMap;
use std::sync::Arc;

/// Metadata about a plugin
#[derive(Debug, Clone)]
pub struct PluginMetadata {
    /// The plugin name (unique identifier, referenced from configuration)
    pub name: &'static str,
    /// The plugin version
    pub version: &'static str,
    /// Optional description
    pub description: Option<&'static str>,
}

impl PluginMetadata {
    /// Create new metadata
    pub fn new(name: &'static str, version: &'static str, description: Option<&'static str>) -> Self {
        Self {
            name,
            version,
            description,
        }
    }
}

/// Shared state plugins read and write during activation
///
/// Earlier plugins publish entries that later plugins consume; this is what
/// makes activation order significant.
pub struct ActivationContext {
    /// The resolved build configuration
    pub config: Arc<BuildConfig>,
    /// Virtual file system
    pub vfs: Arc<dyn VirtualFileSystem>,
    data: HashMap<String, serde_json::Value>,
}

impl std::fmt::Debug for ActivationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationContext")
            .field("config", &self.config)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl ActivationContext {
    /// Create a new context
    pub fn new(config: Arc<BuildConfig>, vfs: Arc<dyn VirtualFileSystem>) -> Self {
        Self {
            config,
            vfs,
            data: HashMap::new(),
        }
    }

    /// Insert data into the context
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Get data from the context
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove data from the context
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }
}

/// The base trait all plugins implement
pub trait Plugin: Send + Sync {
    /// Get the plugin metadata
    fn metadata(&self) -> PluginMetadata;

    /// Run the activation hook
    ///
    /// Called exactly once per build invocation, in plan order. A failing
    /// hook aborts the remainder of the plan.
    fn activate(&self, ctx: &mut ActivationContext) -> Result<(), PluginError>;
}

/// Helper methods for plugins
pub trait PluginExt: Plugin {
    /// Get the plugin name
    fn name(&self) -> &'static str {
        self.metadata().name
    }
}

impl<T: Plugin + ?Sized> PluginExt for T {}
