//! Resolver demo - resolves a sample declaration and runs the plan
//!
//! Run: cargo run -p solbuild-resolver --example resolver_demo

use solbuild_resolver::{
    ActivationContext, ConfigLoader, ConfigResolver, PluginRegistry,
};
use solbuild_vfs::{MemoryFileSystem, VirtualFileSystem};
use std::path::Path;
use std::sync::Arc;

fn main() {
    let declaration = r#"{
        "solidity": {
            "version": "0.8.9",
            "settings": { "optimizer": { "enabled": true, "runs": 200 } }
        },
        "paths": { "sources": "./contracts" },
        "plugins": ["compiler", "upgrades", "docgen"]
    }"#;

    let fs = MemoryFileSystem::new();
    fs.write_file(Path::new("/project/solbuild.json"), declaration.as_bytes())
        .expect("demo setup");
    fs.create_dir_all(Path::new("/project/contracts"))
        .expect("demo setup");
    let vfs: Arc<dyn VirtualFileSystem> = Arc::new(fs);

    let loader = ConfigLoader::new(vfs.clone());
    let raw = loader
        .load(Path::new("/project/solbuild.json"))
        .expect("load declaration");

    let resolver = ConfigResolver::new("/project", vfs.clone());
    let config = resolver.resolve(&raw).expect("resolve declaration");
    println!("compiler : {}", config.compiler.version);
    println!(
        "optimizer: enabled={} runs={}",
        config.compiler.optimizer.enabled, config.compiler.optimizer.runs
    );
    println!("sources  : {}", config.paths.sources.display());

    let registry = PluginRegistry::with_builtins();
    let plan = resolver
        .plan_activation(&config, &registry)
        .expect("plan activation");
    println!("plan     : {:?}", plan.steps());

    let mut ctx = ActivationContext::new(Arc::new(config), vfs);
    plan.run(&registry, &mut ctx).expect("run activation");
    println!("solc     : {}", ctx.get("solc.version").expect("solc state"));
    println!("docs     : {}", ctx.get("docs.output").expect("docgen state"));
}
