//! Shared application state for the wsaddr runtime.
//!
//! Built once at startup: bindings are assembled, references resolved, and
//! any setup error aborts boot before a message is processed.

use std::collections::HashMap;
use std::sync::Arc;

use wsaddr_core::error::Result;

use crate::binding::{Binding, BindingSetup};
use crate::config::RuntimeConfig;
use crate::obs::RuntimeMetrics;
use crate::pipeline::MessagePipeline;
use crate::refs::{ReferenceRegistry, ResolvedRef, ServiceRefDecl};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<RuntimeMetrics>,
}

struct AppStateInner {
    cfg: RuntimeConfig,
    bindings: HashMap<String, Arc<Binding>>,
    references: Vec<ResolvedRef>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can report setup errors instead of panicking.
    pub async fn build(cfg: RuntimeConfig, registry: &ReferenceRegistry) -> Result<Self> {
        // 1) Assemble bindings
        let mut bindings = HashMap::new();
        for b in &cfg.bindings {
            let binding = BindingSetup::from_config(b).build().map_err(|e| {
                tracing::error!(binding = %b.name, error = %e, "binding setup failed");
                e
            })?;
            bindings.insert(b.name.clone(), Arc::new(binding));
        }

        // 2) Resolve service references once
        let decls: Vec<ServiceRefDecl> = cfg.references.iter().map(ServiceRefDecl::from).collect();
        let references = registry.resolve_all(&decls).await?;

        tracing::info!(
            bindings = bindings.len(),
            references = references.len(),
            "runtime state built"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                bindings,
                references,
            }),
            metrics: Arc::new(RuntimeMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &RuntimeConfig {
        &self.inner.cfg
    }

    pub fn binding(&self, name: &str) -> Option<Arc<Binding>> {
        self.inner.bindings.get(name).cloned()
    }

    /// Compliance stage for a binding, if it exists.
    pub fn pipeline(&self, name: &str) -> Option<MessagePipeline> {
        self.binding(name)
            .map(|b| MessagePipeline::new(b, Arc::clone(&self.metrics)))
    }

    pub fn references(&self) -> &[ResolvedRef] {
        &self.inner.references
    }

    pub fn metrics(&self) -> Arc<RuntimeMetrics> {
        Arc::clone(&self.metrics)
    }
}
