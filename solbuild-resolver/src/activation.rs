//! Activation planning and execution
//!
//! Sequencing and execution are deliberately separate: the plan is a plain
//! value the resolver produces, and hooks only run when the caller asks for
//! it. This keeps planning testable without real plugin side effects.

use crate::error::ResolveError;
use crate::plugin::ActivationContext;
use crate::registry::PluginRegistry;
use tracing::info;

/// An ordered plugin-activation plan
///
/// The step order equals declaration order, verbatim: never reordered,
/// deduplicated, or parallelized. Later plugins may depend on state
/// established by earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationPlan {
    steps: Vec<String>,
}

impl ActivationPlan {
    /// Create a plan from an ordered step list
    pub fn new(steps: Vec<String>) -> Self {
        Self { steps }
    }

    /// The plugin identifiers, in activation order
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// The number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the plan has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every activation hook, strictly in plan order.
    ///
    /// The first failing hook aborts the remainder; context state written by
    /// already-activated plugins is left in place for the caller to inspect.
    pub fn run(
        &self,
        registry: &PluginRegistry,
        ctx: &mut ActivationContext,
    ) -> Result<(), ResolveError> {
        for name in &self.steps {
            let plugin = registry
                .get(name)
                .ok_or_else(|| ResolveError::UnknownPlugin { name: name.clone() })?;

            info!(target: "solbuild::plugins", plugin = %name, "activating plugin");
            plugin
                .activate(ctx)
                .map_err(|source| ResolveError::Plugin {
                    name: name.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}
