//! Solbuild CLI - Command line interface
//!
//! Project-based resolution - all configuration from solbuild.json

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::Level;

mod config;
mod logging;

use crate::config::LogConfig;
use crate::logging::{init_with_file, LogFormat};
use solbuild_resolver::{
    ActivationContext, ConfigLoader, ConfigResolver, PluginRegistry,
};
use solbuild_vfs::{NativeFileSystem, VirtualFileSystem};

#[derive(Parser)]
#[command(
    name = "solbuild",
    about = "Solbuild - declarative build-configuration resolver",
    version = "0.1.0"
)]
struct Cli {
    /// Project declaration file path (default: ./solbuild.json)
    #[arg(value_name = "CONFIG", default_value = "solbuild.json")]
    config: PathBuf,

    /// Print the activation plan and stop before running hooks
    #[arg(long)]
    plan_only: bool,

    /// Print the resolved configuration as JSON
    #[arg(long)]
    dump_config: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Override log level for the loader stage
    #[arg(long, value_name = "LEVEL")]
    log_loader: Option<String>,

    /// Override log level for the resolver stage
    #[arg(long, value_name = "LEVEL")]
    log_resolver: Option<String>,

    /// Override log level for the plugins stage
    #[arg(long, value_name = "LEVEL")]
    log_plugins: Option<String>,

    /// Log format: pretty, compact, json
    #[arg(long, default_value = "compact")]
    log_format: String,

    /// Also append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let log_config = match build_log_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let log_format = match parse_log_format(&cli.log_format) {
        Some(format) => format,
        None => {
            eprintln!("Error: unknown log format '{}'", cli.log_format);
            process::exit(1);
        }
    };
    if let Err(e) = init_with_file(&log_config, log_format, cli.log_file.as_ref()) {
        eprintln!("Error: cannot open log file: {}", e);
        process::exit(1);
    }

    // Resolve the project root from the declaration file location
    let root = project_root(&cli.config);
    let vfs: Arc<dyn VirtualFileSystem> = Arc::new(NativeFileSystem::new());

    let loader = ConfigLoader::new(vfs.clone());
    let raw = match loader.load(&cli.config) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let resolver = ConfigResolver::new(root, vfs.clone());
    let build_config = match resolver.resolve(&raw) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.dump_config {
        match serde_json::to_string_pretty(&build_config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: cannot serialize resolved configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let registry = PluginRegistry::with_builtins();
    let plan = match resolver.plan_activation(&build_config, &registry) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("[Build Configuration]");
    println!("Compiler : {}", build_config.compiler.version);
    println!(
        "Optimizer: enabled={} runs={}",
        build_config.compiler.optimizer.enabled, build_config.compiler.optimizer.runs
    );
    println!("Sources  : {}", build_config.paths.sources.display());
    println!("[Activation Plan]");
    if plan.is_empty() {
        println!("(no plugins declared)");
    }
    for (i, step) in plan.steps().iter().enumerate() {
        println!("{:2}. {}", i + 1, step);
    }

    if cli.plan_only {
        return;
    }

    let mut ctx = ActivationContext::new(Arc::new(build_config), vfs);
    if let Err(e) = plan.run(&registry, &mut ctx) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    println!("[Activation] {} plugin(s) activated", plan.len());
}

/// Derive the project root from the declaration file path
fn project_root(config_path: &Path) -> PathBuf {
    let parent = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    // Canonicalize so relative invocations get an absolute root; fall back
    // to the raw parent when the directory does not exist yet
    parent.canonicalize().unwrap_or(parent)
}

/// Build the log configuration from the CLI flags
fn build_log_config(cli: &Cli) -> Result<LogConfig, String> {
    let global = parse_log_level(&cli.log_level)
        .ok_or_else(|| format!("unknown log level '{}'", cli.log_level))?;

    let stage_level = |declared: &Option<String>| -> Result<Option<Level>, String> {
        match declared {
            Some(s) => parse_log_level(s)
                .map(Some)
                .ok_or_else(|| format!("unknown log level '{}'", s)),
            None => Ok(None),
        }
    };

    Ok(LogConfig {
        global,
        loader: stage_level(&cli.log_loader)?,
        resolver: stage_level(&cli.log_resolver)?,
        plugins: stage_level(&cli.log_plugins)?,
    })
}

/// Parse log level string
fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::ERROR), // silent = only errors
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Parse log format string
fn parse_log_format(s: &str) -> Option<LogFormat> {
    match s.to_lowercase().as_str() {
        "pretty" => Some(LogFormat::Pretty),
        "compact" => Some(LogFormat::Compact),
        "json" => Some(LogFormat::Json),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solbuild_config::Stage;

    #[test]
    fn test_build_log_config_with_stage_overrides() {
        let cli = Cli::parse_from(["solbuild", "--log-level", "info", "--log-resolver", "debug"]);
        let config = build_log_config(&cli).unwrap();

        assert_eq!(config.global, Level::INFO);
        assert_eq!(config.level_for(Stage::Resolver), Level::DEBUG);
        assert_eq!(config.level_for(Stage::Loader), Level::INFO);
    }

    #[test]
    fn test_build_log_config_rejects_bad_stage_level() {
        let cli = Cli::parse_from(["solbuild", "--log-plugins", "loud"]);
        assert!(build_log_config(&cli).is_err());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_log_level("SILENT"), Some(Level::ERROR));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("json"), Some(LogFormat::Json));
        assert_eq!(parse_log_format("yaml"), None);
    }

    #[test]
    fn test_project_root_of_bare_filename() {
        // A bare filename resolves against the current directory
        assert!(project_root(Path::new("solbuild.json")).is_absolute());
    }

    #[test]
    fn test_project_root_of_nested_path() {
        let root = project_root(Path::new("/no/such/dir/solbuild.json"));
        assert_eq!(root, PathBuf::from("/no/such/dir"));
    }
}
