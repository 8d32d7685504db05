//! Feature descriptors and the capability variants a binding can carry.

use serde::Serialize;

use crate::addressing::{AddressingPolicy, ADDRESSING_ID};

/// One named, independently toggleable protocol capability.
///
/// The id is fixed per capability type and never user supplied, so every
/// descriptor is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureDescriptor {
    id: &'static str,
    enabled: bool,
}

impl FeatureDescriptor {
    pub(crate) const fn new(id: &'static str, enabled: bool) -> Self {
        Self { id, enabled }
    }

    /// Stable capability identity, used to detect duplicate configuration.
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// A capability attached to a binding, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Capability {
    Addressing(AddressingPolicy),
}

impl Capability {
    pub fn descriptor(&self) -> FeatureDescriptor {
        match self {
            Capability::Addressing(p) => p.feature(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.descriptor().id()
    }

    /// The capability with refinements cleared where they are inert.
    ///
    /// A disabled addressing policy ignores `required` and `responses`, so two
    /// disabled entries compare equal regardless of those fields.
    pub fn effective(&self) -> Capability {
        match self {
            Capability::Addressing(p) if !p.is_enabled() => {
                Capability::Addressing(AddressingPolicy::disabled())
            }
            other => other.clone(),
        }
    }

    /// Map a configured capability name to its canonical id.
    ///
    /// Accepts the short tag (`addressing`) or the full capability URI.
    /// Returns `None` for capabilities this runtime does not implement.
    pub fn canonical_id(raw: &str) -> Option<&'static str> {
        match raw.trim() {
            "addressing" | ADDRESSING_ID => Some(ADDRESSING_ID),
            _ => None,
        }
    }
}

impl From<AddressingPolicy> for Capability {
    fn from(p: AddressingPolicy) -> Self {
        Capability::Addressing(p)
    }
}
