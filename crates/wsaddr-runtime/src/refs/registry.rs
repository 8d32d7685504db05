use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use wsaddr_core::error::{Result, WsAddrError};

use super::resolver::ReferenceResolver;
use crate::binding::{Binding, BindingSetup, Role};
use crate::config::{FeatureConfig, ReferenceConfig};

/// A declared reference to a web service.
#[derive(Debug, Clone)]
pub struct ServiceRefDecl {
    /// Local reference name; resolvers are registered under it.
    pub name: String,
    /// Service class the reference targets.
    pub service: String,
    /// Injected type; a port type when set, otherwise the service itself.
    pub service_type: Option<String>,
    pub wsdl_location: Option<String>,
    /// Portable lookup name resolving to the target.
    pub lookup: Option<String>,
    /// Product-specific name the reference maps to.
    pub mapped_name: Option<String>,
    /// Capabilities the created reference is configured with.
    pub features: Vec<FeatureConfig>,
}

impl ServiceRefDecl {
    /// Type the resolved reference is handed out as.
    pub fn target_type(&self) -> &str {
        self.service_type
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.service)
    }
}

impl From<&ReferenceConfig> for ServiceRefDecl {
    fn from(c: &ReferenceConfig) -> Self {
        Self {
            name: c.name.clone(),
            service: c.service.clone(),
            service_type: c.service_type.clone(),
            wsdl_location: c.wsdl_location.clone(),
            lookup: c.lookup.clone(),
            mapped_name: c.mapped_name.clone(),
            features: c.features.clone(),
        }
    }
}

/// A reference after startup resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRef {
    pub name: String,
    pub service: String,
    pub service_type: String,
    pub address: String,
    #[serde(skip)]
    pub binding: Arc<Binding>,
}

/// Reference name → resolver, supplied by the hosting application.
#[derive(Default)]
pub struct ReferenceRegistry {
    resolvers: DashMap<String, Arc<dyn ReferenceResolver>>,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Self {
            resolvers: DashMap::new(),
        }
    }

    pub fn register(&self, name: impl Into<String>, resolver: Arc<dyn ReferenceResolver>) {
        let name = name.into();
        if self.resolvers.insert(name.clone(), resolver).is_some() {
            tracing::warn!(reference = %name, "resolver replaced");
        }
    }

    pub fn registered(&self) -> Vec<String> {
        self.resolvers.iter().map(|e| e.key().clone()).collect()
    }

    /// Resolve every declaration once. Any failure aborts startup.
    pub async fn resolve_all(&self, decls: &[ServiceRefDecl]) -> Result<Vec<ResolvedRef>> {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(decls.len());

        for decl in decls {
            if decl.name.trim().is_empty() {
                return Err(WsAddrError::BadConfig("reference name must not be empty".into()));
            }
            if !seen.insert(decl.name.as_str()) {
                return Err(WsAddrError::BadConfig(format!(
                    "duplicate reference name: {}",
                    decl.name
                )));
            }

            // Capability errors surface before the resolver is called.
            let binding = BindingSetup::new(decl.name.clone(), Role::Client)
                .features(&decl.features)
                .build()?;

            // Clone out of the map so no shard lock is held across the await.
            let resolver = self
                .resolvers
                .get(&decl.name)
                .map(|e| Arc::clone(e.value()))
                .ok_or_else(|| WsAddrError::Unresolved {
                    name: decl.name.clone(),
                    reason: "no resolver registered".into(),
                })?;

            let address = resolver.resolve(decl).await?;
            tracing::info!(reference = %decl.name, %address, "service reference resolved");

            out.push(ResolvedRef {
                name: decl.name.clone(),
                service: decl.service.clone(),
                service_type: decl.target_type().to_string(),
                address,
                binding: Arc::new(binding),
            });
        }

        Ok(out)
    }
}
