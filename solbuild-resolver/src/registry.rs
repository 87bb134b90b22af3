//! Plugin registry
//!
//! The registry is the explicit, dependency-injected replacement for the
//! original toolchain's "load a module for its side effects" activation
//! mechanism: every known plugin is registered by name before resolution,
//! and the planner checks declared identifiers against it.

use crate::plugin::{Plugin, PluginExt};
use crate::plugins::{DocgenPlugin, SolcPlugin, UpgradesPlugin};
use std::collections::HashMap;

/// Registry of known plugins, keyed by name
#[derive(Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, Box<dyn Plugin>>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("count", &self.plugins.len())
            .finish()
    }
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Create a registry with the built-in plugins registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SolcPlugin::new()));
        registry.register(Box::new(UpgradesPlugin::new()));
        registry.register(Box::new(DocgenPlugin::new()));
        registry
    }

    /// Register a plugin under its metadata name
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        let name = plugin.name().to_string();
        self.plugins.insert(name, plugin);
    }

    /// Get a plugin by name
    pub fn get(&self, name: &str) -> Option<&dyn Plugin> {
        self.plugins.get(name).map(|b| b.as_ref())
    }

    /// Check if a plugin is registered
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Remove a plugin
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Plugin>> {
        self.plugins.remove(name)
    }

    /// Get all registered plugin names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(|s| s.as_str())
    }

    /// Get the number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
