//! Solbuild Resolver
//!
//! Build-configuration resolution: loading, validation, normalization, and
//! plugin-activation planning.
//!
//! The resolver turns a raw project declaration into a validated, immutable
//! [`solbuild_config::BuildConfig`] and an ordered [`ActivationPlan`].
//! Compilation, upgrade-safety analysis, and documentation rendering are
//! external collaborators; the built-in plugins here only sequence them.

pub mod activation;
pub mod error;
pub mod loader;
pub mod paths;
pub mod plugin;
pub mod raw;
pub mod registry;
pub mod resolver;
pub mod version;

// Built-in plugin implementations
pub mod plugins;

pub use activation::ActivationPlan;
pub use error::{LoadError, PluginError, ResolveError};
pub use loader::ConfigLoader;
pub use plugin::{ActivationContext, Plugin, PluginExt, PluginMetadata};
pub use raw::{RawBuildConfig, RawOptimizer, RawPaths, RawSolcConfig, RawSolidity};
pub use registry::PluginRegistry;
pub use resolver::ConfigResolver;
pub use version::parse_compiler_version;

// Re-export the shared configuration vocabulary
pub use solbuild_config::{
    BuildConfig, CompilerSettings, OptimizerSettings, ProjectPaths, Provenance, Stage, ValueSource,
};

// Re-export built-in plugins
pub use plugins::{DocgenPlugin, SolcPlugin, UpgradesPlugin};
