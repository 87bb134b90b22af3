//! Configuration resolution
//!
//! A single deterministic pass: parse, validate, default-fill, normalize
//! paths, return. Explicit values always win over defaults, and each field
//! of the result carries its provenance.

use crate::activation::ActivationPlan;
use crate::error::ResolveError;
use crate::paths;
use crate::raw::RawBuildConfig;
use crate::registry::PluginRegistry;
use crate::version;
use solbuild_config::{
    BuildConfig, CompilerSettings, OptimizerSettings, ProjectPaths, Provenance, ValueSource,
};
use solbuild_vfs::VirtualFileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Resolves raw declarations into validated, immutable build configurations
pub struct ConfigResolver {
    root: PathBuf,
    vfs: Arc<dyn VirtualFileSystem>,
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl ConfigResolver {
    /// Create a resolver for the given project root.
    ///
    /// # Arguments
    /// * `root` - Absolute project root; normalized lexically on construction
    /// * `vfs` - File system used for the sources-directory probe
    pub fn new(root: impl Into<PathBuf>, vfs: Arc<dyn VirtualFileSystem>) -> Self {
        Self {
            root: paths::lexical_normalize(&root.into()),
            vfs,
        }
    }

    /// The normalized project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a raw declaration into a validated `BuildConfig`.
    ///
    /// Fails without returning a partial configuration when the compiler
    /// version is missing or malformed, the optimizer settings are invalid,
    /// or a declared path escapes the project root.
    pub fn resolve(&self, raw: &RawBuildConfig) -> Result<BuildConfig, ResolveError> {
        let declared_version = raw
            .declared_version()
            .ok_or(ResolveError::MissingCompilerVersion)?;
        let compiler_version = version::parse_compiler_version(declared_version)?;

        let optimizer = self.resolve_optimizer(raw)?;

        let raw_paths = raw.paths.clone().unwrap_or_default();
        let (sources, sources_origin) = self.resolve_path(raw_paths.sources.as_deref(), "contracts")?;
        let (artifacts, artifacts_origin) =
            self.resolve_path(raw_paths.artifacts.as_deref(), "artifacts")?;
        let (cache, cache_origin) = self.resolve_path(raw_paths.cache.as_deref(), "cache")?;

        // Probe only; a fresh project may not have its sources directory yet
        if !self.vfs.is_dir(&sources) {
            warn!(
                target: "solbuild::resolver",
                sources = %sources.display(),
                "sources directory does not exist"
            );
        }

        let plugins = raw.plugins.clone().unwrap_or_default();

        let provenance = Provenance {
            compiler_version: ValueSource::Explicit,
            optimizer_enabled: origin_of(raw.declared_optimizer().and_then(|o| o.enabled)),
            optimizer_runs: origin_of(raw.declared_optimizer().and_then(|o| o.runs)),
            sources: sources_origin,
            artifacts: artifacts_origin,
            cache: cache_origin,
        };

        info!(
            target: "solbuild::resolver",
            version = %compiler_version,
            optimizer = optimizer.enabled,
            plugins = plugins.len(),
            "resolved build configuration"
        );

        Ok(BuildConfig {
            compiler: CompilerSettings {
                version: compiler_version,
                optimizer,
            },
            paths: ProjectPaths {
                root: self.root.clone(),
                sources,
                artifacts,
                cache,
            },
            plugins,
            provenance,
        })
    }

    /// Produce the plugin-activation plan for a resolved configuration.
    ///
    /// The plan equals the declared plugin sequence verbatim; every
    /// identifier must be registered.
    pub fn plan_activation(
        &self,
        config: &BuildConfig,
        registry: &PluginRegistry,
    ) -> Result<ActivationPlan, ResolveError> {
        for name in &config.plugins {
            if !registry.contains(name) {
                return Err(ResolveError::UnknownPlugin { name: name.clone() });
            }
        }
        Ok(ActivationPlan::new(config.plugins.clone()))
    }

    /// Validate and default-fill the optimizer block.
    ///
    /// `runs` is validated even when the optimizer is disabled, so a bad
    /// declaration cannot hide behind `enabled: false`.
    fn resolve_optimizer(&self, raw: &RawBuildConfig) -> Result<OptimizerSettings, ResolveError> {
        let declared = raw.declared_optimizer();

        let runs = match declared.and_then(|o| o.runs) {
            Some(runs) if runs <= 0 => {
                return Err(ResolveError::InvalidOptimizerSettings {
                    message: format!("runs must be a positive integer, got {}", runs),
                });
            }
            Some(runs) if runs > i64::from(u32::MAX) => {
                return Err(ResolveError::InvalidOptimizerSettings {
                    message: format!("runs value {} is out of range", runs),
                });
            }
            Some(runs) => Some(runs as u32),
            None => None,
        };

        Ok(OptimizerSettings {
            enabled: declared.and_then(|o| o.enabled).unwrap_or(false),
            runs: runs.unwrap_or(200),
        })
    }

    /// Resolve one declared path, or default to `<root>/<default_subdir>`.
    fn resolve_path(
        &self,
        declared: Option<&str>,
        default_subdir: &str,
    ) -> Result<(PathBuf, ValueSource), ResolveError> {
        match declared {
            Some(value) => Ok((
                paths::resolve_under_root(&self.root, value)?,
                ValueSource::Explicit,
            )),
            None => Ok((self.root.join(default_subdir), ValueSource::Default)),
        }
    }
}

fn origin_of<T>(declared: Option<T>) -> ValueSource {
    if declared.is_some() {
        ValueSource::Explicit
    } else {
        ValueSource::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use solbuild_vfs::MemoryFileSystem;

    fn resolver() -> ConfigResolver {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all(Path::new("/project/contracts")).unwrap();
        ConfigResolver::new("/project", Arc::new(fs))
    }

    fn minimal() -> RawBuildConfig {
        RawBuildConfig::new().solidity_version("0.8.9")
    }

    #[test]
    fn test_minimal_resolution_applies_defaults() {
        let config = resolver().resolve(&minimal()).unwrap();

        assert_eq!(config.compiler.version, semver::Version::new(0, 8, 9));
        assert!(!config.compiler.optimizer.enabled);
        assert_eq!(config.compiler.optimizer.runs, 200);
        assert_eq!(config.paths.sources, PathBuf::from("/project/contracts"));
        assert_eq!(config.paths.artifacts, PathBuf::from("/project/artifacts"));
        assert_eq!(config.paths.cache, PathBuf::from("/project/cache"));
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_missing_version() {
        let result = resolver().resolve(&RawBuildConfig::new());
        assert!(matches!(result, Err(ResolveError::MissingCompilerVersion)));
    }

    #[test]
    fn test_invalid_version() {
        for input in ["latest", "8.9"] {
            let raw = RawBuildConfig::new().solidity_version(input);
            let result = resolver().resolve(&raw);
            assert!(
                matches!(result, Err(ResolveError::InvalidVersionFormat { .. })),
                "expected InvalidVersionFormat for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_enabled_optimizer_defaults_runs() {
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .optimizer(true, None);
        let config = resolver().resolve(&raw).unwrap();

        assert!(config.compiler.optimizer.enabled);
        assert_eq!(config.compiler.optimizer.runs, 200);
        assert_eq!(config.provenance.optimizer_enabled, ValueSource::Explicit);
        assert_eq!(config.provenance.optimizer_runs, ValueSource::Default);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .optimizer(true, Some(0));
        let result = resolver().resolve(&raw);
        assert!(matches!(
            result,
            Err(ResolveError::InvalidOptimizerSettings { .. })
        ));
    }

    #[test]
    fn test_negative_runs_rejected_even_when_disabled() {
        // Forward compatibility: runs is validated even if the optimizer is off
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .optimizer(false, Some(-1));
        let result = resolver().resolve(&raw);
        assert!(matches!(
            result,
            Err(ResolveError::InvalidOptimizerSettings { .. })
        ));
    }

    #[test]
    fn test_explicit_wins_over_default() {
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .optimizer(true, Some(1000))
            .sources("./src");
        let config = resolver().resolve(&raw).unwrap();

        assert_eq!(config.compiler.optimizer.runs, 1000);
        assert_eq!(config.paths.sources, PathBuf::from("/project/src"));
        assert_eq!(config.provenance.optimizer_runs, ValueSource::Explicit);
        assert_eq!(config.provenance.sources, ValueSource::Explicit);
        assert_eq!(config.provenance.artifacts, ValueSource::Default);
    }

    #[test]
    fn test_sources_escaping_root() {
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .sources("../../etc");
        let result = resolver().resolve(&raw);
        assert!(matches!(result, Err(ResolveError::PathEscapesRoot { .. })));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let raw = RawBuildConfig::from_value(json!({
            "solidity": {
                "version": "0.8.9",
                "settings": { "optimizer": { "enabled": true, "runs": 200 } }
            },
            "paths": { "sources": "./contracts" },
            "plugins": ["compiler", "upgrades", "docgen"]
        }))
        .unwrap();

        let resolver = resolver();
        let first = resolver.resolve(&raw).unwrap();
        let second = resolver.resolve(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_preserves_declaration_order() {
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .plugin("compiler")
            .plugin("upgrades")
            .plugin("docgen");
        let resolver = resolver();
        let config = resolver.resolve(&raw).unwrap();

        let registry = PluginRegistry::with_builtins();
        let plan = resolver.plan_activation(&config, &registry).unwrap();

        assert_eq!(plan.steps(), &["compiler", "upgrades", "docgen"]);
    }

    #[test]
    fn test_plan_keeps_duplicates() {
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .plugin("docgen")
            .plugin("compiler")
            .plugin("docgen");
        let resolver = resolver();
        let config = resolver.resolve(&raw).unwrap();

        let registry = PluginRegistry::with_builtins();
        let plan = resolver.plan_activation(&config, &registry).unwrap();

        assert_eq!(plan.steps(), &["docgen", "compiler", "docgen"]);
    }

    #[test]
    fn test_plan_rejects_unknown_plugin() {
        let raw = RawBuildConfig::new()
            .solidity_version("0.8.9")
            .plugin("compiler")
            .plugin("etherscan");
        let resolver = resolver();
        let config = resolver.resolve(&raw).unwrap();

        let registry = PluginRegistry::with_builtins();
        let result = resolver.plan_activation(&config, &registry);
        assert!(matches!(
            result,
            Err(ResolveError::UnknownPlugin { ref name }) if name == "etherscan"
        ));
    }

    #[test]
    fn test_missing_sources_dir_is_not_fatal() {
        // No directories at all in this file system
        let resolver = ConfigResolver::new("/project", Arc::new(MemoryFileSystem::new()));
        let config = resolver.resolve(&minimal()).unwrap();
        assert_eq!(config.paths.sources, PathBuf::from("/project/contracts"));
    }
}
