use wsaddr_core::error::{Result, WsAddrError};
use wsaddr_core::addressing::ADDRESSING_ID;
use wsaddr_core::{AddressingPolicy, Capability};

use super::{Binding, Role};
use crate::config::{BindingConfig, FeatureConfig};

/// Collects capabilities for one binding and checks them on `build`.
///
/// Setup fails before any message is processed when:
/// - a capability id is not implemented by this runtime;
/// - two capabilities share an id but disagree.
#[derive(Debug)]
pub struct BindingSetup {
    name: String,
    role: Role,
    capabilities: Vec<Capability>,
    unsupported: Vec<String>,
}

impl BindingSetup {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            capabilities: Vec::new(),
            unsupported: Vec::new(),
        }
    }

    pub fn from_config(cfg: &BindingConfig) -> Self {
        Self::new(cfg.name.clone(), cfg.role).features(&cfg.features)
    }

    pub fn capability(mut self, cap: impl Into<Capability>) -> Self {
        self.capabilities.push(cap.into());
        self
    }

    /// Add a configured capability entry, resolving its id.
    pub fn feature(mut self, f: &FeatureConfig) -> Self {
        match Capability::canonical_id(&f.id) {
            Some(ADDRESSING_ID) => {
                self.capabilities
                    .push(AddressingPolicy::new(f.enabled, f.required, f.responses).into());
            }
            _ => self.unsupported.push(f.id.clone()),
        }
        self
    }

    pub fn features(self, fs: &[FeatureConfig]) -> Self {
        fs.iter().fold(self, |s, f| s.feature(f))
    }

    pub fn build(self) -> Result<Binding> {
        if let Some(id) = self.unsupported.into_iter().next() {
            return Err(WsAddrError::UnsupportedCapability {
                binding: self.name,
                id,
            });
        }

        let mut capabilities: Vec<Capability> = Vec::with_capacity(self.capabilities.len());
        for cap in self.capabilities {
            // Compare effective values: inert refinements never conflict.
            let cap = cap.effective();
            match capabilities.iter().find(|c| c.id() == cap.id()) {
                Some(existing) if *existing == cap => {
                    tracing::warn!(binding = %self.name, id = cap.id(), "duplicate capability ignored");
                }
                Some(_) => {
                    return Err(WsAddrError::ConfigConflict {
                        binding: self.name,
                        id: cap.id().to_string(),
                    });
                }
                None => capabilities.push(cap),
            }
        }

        let addressing = capabilities
            .iter()
            .find_map(|c| match c {
                Capability::Addressing(p) => Some(*p),
                _ => None,
            })
            .unwrap_or_else(AddressingPolicy::disabled);

        tracing::debug!(
            binding = %self.name,
            role = ?self.role,
            enabled = addressing.is_enabled(),
            required = addressing.is_required(),
            responses = addressing.responses().as_str(),
            "binding assembled"
        );

        Ok(Binding {
            name: self.name,
            role: self.role,
            addressing,
            capabilities,
        })
    }
}
