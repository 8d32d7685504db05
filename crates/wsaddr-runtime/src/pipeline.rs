//! Per-message compliance stage.
//!
//! Runs once per inbound message before dispatch and once per outbound
//! message before send. A rejected message is never dispatched; the
//! violation is returned as a protocol fault for the originator. Nothing here
//! retries.

use std::sync::Arc;

use serde::Serialize;

use wsaddr_core::error::{Result, WsAddrError};
use wsaddr_core::{HeaderSet, Verdict, Violation};

use crate::binding::{Binding, Direction};
use crate::obs::RuntimeMetrics;

/// SOAP-style fault describing a compliance violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolFault {
    /// Fault code; compliance faults are always the sender's.
    pub code: &'static str,
    pub subcode: &'static str,
    pub reason: String,
}

impl From<Violation> for ProtocolFault {
    fn from(v: Violation) -> Self {
        Self {
            code: "Sender",
            subcode: v.fault_subcode(),
            reason: v.to_string(),
        }
    }
}

/// Compliance stage for one binding.
#[derive(Clone)]
pub struct MessagePipeline {
    binding: Arc<Binding>,
    metrics: Arc<RuntimeMetrics>,
}

impl MessagePipeline {
    pub fn new(binding: Arc<Binding>, metrics: Arc<RuntimeMetrics>) -> Self {
        Self { binding, metrics }
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    pub fn check(&self, direction: Direction, headers: &HeaderSet) -> Verdict {
        let verdict = self.binding.validator(direction).validate(headers);
        let outcome = match verdict {
            Verdict::Accept => "accept",
            Verdict::Reject(_) => "reject",
        };
        self.metrics.verdicts.inc(&[
            ("binding", self.binding.name()),
            ("direction", direction.as_str()),
            ("outcome", outcome),
        ]);

        if let Verdict::Reject(violation) = verdict {
            tracing::warn!(
                binding = %self.binding.name(),
                direction = direction.as_str(),
                violation = %violation,
                "addressing compliance violation"
            );
        }
        verdict
    }

    /// Gate an inbound message before dispatch.
    pub fn inbound(&self, headers: &HeaderSet) -> Result<()> {
        self.check(Direction::Inbound, headers).into_result()
    }

    /// Gate an outbound message before send.
    pub fn outbound(&self, headers: &HeaderSet) -> Result<()> {
        self.check(Direction::Outbound, headers).into_result()
    }
}

/// Fault for an error returned by [`MessagePipeline::inbound`]/[`MessagePipeline::outbound`].
pub fn fault_for(err: &WsAddrError) -> Option<ProtocolFault> {
    err.violation().map(ProtocolFault::from)
}
