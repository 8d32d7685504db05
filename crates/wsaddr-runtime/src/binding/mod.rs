//! Bindings: a named endpoint or client configuration and its capabilities.
//!
//! A binding is assembled once at startup through [`BindingSetup`], then
//! shared read-only (`Arc<Binding>`) by every exchange that uses it.

pub mod setup;

use serde::{Deserialize, Serialize};

use wsaddr_core::{AddressingPolicy, Capability, HeaderComplianceValidator, PolicyFragment, Side};

pub use crate::config::schema::Role;
pub use setup::BindingSetup;

/// Direction of a message relative to this binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Binding {
    name: String,
    role: Role,
    addressing: AddressingPolicy,
    capabilities: Vec<Capability>,
}

impl Binding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Addressing policy; disabled when no addressing capability was configured.
    pub fn addressing(&self) -> &AddressingPolicy {
        &self.addressing
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn policy_fragment(&self) -> PolicyFragment {
        self.addressing.emit_policy_assertion()
    }

    /// Validator side for a message direction.
    ///
    /// Only an endpoint receiving requests enforces `required` and the
    /// response shape; clients check both directions with the sender table.
    pub fn side(&self, direction: Direction) -> Side {
        match (self.role, direction) {
            (Role::Endpoint, Direction::Inbound) => Side::Receiver,
            _ => Side::Sender,
        }
    }

    pub fn validator(&self, direction: Direction) -> HeaderComplianceValidator<'_> {
        HeaderComplianceValidator::new(&self.addressing, self.side(direction))
    }
}
