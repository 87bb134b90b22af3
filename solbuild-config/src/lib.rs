//! Solbuild Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all solbuild crates.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Compiler optimizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Whether the optimizer is enabled
    pub enabled: bool,
    /// Number of optimization runs the bytecode is tuned for
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}

/// Compiler identity and tuning for one build invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// Exact compiler release to target (major.minor.patch)
    pub version: Version,
    /// Optimizer settings
    pub optimizer: OptimizerSettings,
}

/// Normalized project directory layout
///
/// All paths are absolute and guaranteed to sit inside `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    /// The project root; base directory for all relative declarations
    pub root: PathBuf,
    /// Directory where compilable source units are discovered
    pub sources: PathBuf,
    /// Directory where compiled artifacts are written
    pub artifacts: PathBuf,
    /// Directory for build caches
    pub cache: PathBuf,
}

impl ProjectPaths {
    /// Conventional layout rooted at the given directory
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            sources: root.join("contracts"),
            artifacts: root.join("artifacts"),
            cache: root.join("cache"),
            root,
        }
    }
}

/// Where a resolved value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueSource {
    /// Declared explicitly in the raw configuration
    Explicit,
    /// Filled in by the defaulting pass
    Default,
}

/// Per-field provenance of a resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub compiler_version: ValueSource,
    pub optimizer_enabled: ValueSource,
    pub optimizer_runs: ValueSource,
    pub sources: ValueSource,
    pub artifacts: ValueSource,
    pub cache: ValueSource,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            compiler_version: ValueSource::Explicit,
            optimizer_enabled: ValueSource::Default,
            optimizer_runs: ValueSource::Default,
            sources: ValueSource::Default,
            artifacts: ValueSource::Default,
            cache: ValueSource::Default,
        }
    }
}

/// The resolved, immutable configuration for one build invocation
///
/// Constructed once by the resolver, validated at construction, and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Compiler identity and optimizer settings
    pub compiler: CompilerSettings,
    /// Normalized project paths
    pub paths: ProjectPaths,
    /// Plugin identifiers in declaration order; order is significant
    pub plugins: Vec<String>,
    /// Provenance of each resolved field
    pub provenance: Provenance,
}

/// Resolution stage enum for stage-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Loader,
    Resolver,
    Plugins,
    Cli,
}

impl Stage {
    /// Get the string name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Loader => "loader",
            Stage::Resolver => "resolver",
            Stage::Plugins => "plugins",
            Stage::Cli => "cli",
        }
    }

    /// Get the log target name for this stage
    pub fn target(&self) -> String {
        format!("solbuild::{}", self.as_str())
    }
}
