//! Per-message addressing header compliance.
//!
//! | enabled | required (receiver) | headers   | verdict                     |
//! |---------|---------------------|-----------|-----------------------------|
//! | false   | -                   | present   | reject: unsupported headers |
//! | false   | -                   | absent    | accept                      |
//! | true    | false               | any       | accept                      |
//! | true    | true                | absent    | reject: missing headers     |
//! | true    | true                | present   | accept iff shape matches    |
//!
//! The sender side only applies the `enabled` rows.

use std::fmt;

use serde::Serialize;

use crate::addressing::{AddressingPolicy, Responses};
use crate::error::{Result, WsAddrError};
use crate::headers::HeaderSet;

/// Which end of the exchange is validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Sender,
    Receiver,
}

/// Why a message was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// Addressing is disabled but the message carries addressing headers.
    UnsupportedHeaders,
    /// Addressing is required but the message carries none.
    MissingRequiredHeaders,
    /// A response endpoint does not satisfy the configured response shape.
    ResponseShape { expected: Responses },
}

impl Violation {
    pub fn as_str(self) -> &'static str {
        match self {
            Violation::UnsupportedHeaders => "unsupported_headers",
            Violation::MissingRequiredHeaders => "missing_required_headers",
            Violation::ResponseShape { .. } => "response_shape_violation",
        }
    }

    /// WS-Addressing fault subcode to report to the originator.
    pub fn fault_subcode(self) -> &'static str {
        match self {
            Violation::UnsupportedHeaders => "wsa:InvalidAddressingHeader",
            Violation::MissingRequiredHeaders => "wsa:MessageAddressingHeaderRequired",
            Violation::ResponseShape {
                expected: Responses::NonAnonymous,
            } => "wsa:OnlyNonAnonymousAddressSupported",
            Violation::ResponseShape { .. } => "wsa:OnlyAnonymousAddressSupported",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ResponseShape { expected } => {
                write!(f, "{} (expected {})", self.as_str(), expected.as_str())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Outcome of validating one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accept,
    Reject(Violation),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            Verdict::Accept => Ok(()),
            Verdict::Reject(v) => Err(WsAddrError::Compliance(v)),
        }
    }
}

/// Stateless validator borrowing the binding's policy.
#[derive(Debug, Clone, Copy)]
pub struct HeaderComplianceValidator<'p> {
    policy: &'p AddressingPolicy,
    side: Side,
}

impl<'p> HeaderComplianceValidator<'p> {
    pub fn new(policy: &'p AddressingPolicy, side: Side) -> Self {
        Self { policy, side }
    }

    pub fn sender(policy: &'p AddressingPolicy) -> Self {
        Self::new(policy, Side::Sender)
    }

    pub fn receiver(policy: &'p AddressingPolicy) -> Self {
        Self::new(policy, Side::Receiver)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn validate(&self, headers: &HeaderSet) -> Verdict {
        let verdict = self.evaluate(headers);
        if let Verdict::Reject(v) = verdict {
            tracing::trace!(side = ?self.side, violation = %v, "addressing headers rejected");
        }
        verdict
    }

    fn evaluate(&self, headers: &HeaderSet) -> Verdict {
        let present = headers.has_addressing();

        if !self.policy.is_enabled() {
            return if present {
                Verdict::Reject(Violation::UnsupportedHeaders)
            } else {
                Verdict::Accept
            };
        }

        if self.side == Side::Sender || !self.policy.is_required() {
            return Verdict::Accept;
        }

        if !present {
            return Verdict::Reject(Violation::MissingRequiredHeaders);
        }

        let expected = self.policy.responses();
        // Every response endpoint must conform, including repeated headers.
        let conforms = headers
            .reply_to_anonymity()
            .into_iter()
            .chain(headers.fault_to_anonymity())
            .all(|anon| expected.admits(anon));
        if conforms {
            Verdict::Accept
        } else {
            Verdict::Reject(Violation::ResponseShape { expected })
        }
    }

    /// Validate and convert a rejection into a compliance error.
    pub fn check(&self, headers: &HeaderSet) -> Result<()> {
        self.validate(headers).into_result()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::headers::ANONYMOUS_ADDRESS;

    fn request(reply_to: &str) -> HeaderSet {
        HeaderSet::new()
            .with("wsa:Action", "urn:example:getQuote")
            .with("wsa:ReplyTo", reply_to)
    }

    #[test]
    fn fault_to_is_checked_like_reply_to() {
        let p = AddressingPolicy::required(Responses::Anonymous);
        let h = request(ANONYMOUS_ADDRESS).with("wsa:FaultTo", "http://client.example/faults");
        assert_eq!(
            HeaderComplianceValidator::receiver(&p).validate(&h),
            Verdict::Reject(Violation::ResponseShape {
                expected: Responses::Anonymous
            })
        );
    }

    #[test]
    fn non_anonymous_rejects_defaulted_reply_to() {
        let p = AddressingPolicy::required(Responses::NonAnonymous);
        let h = HeaderSet::new().with("wsa:Action", "urn:example:getQuote");
        let v = HeaderComplianceValidator::receiver(&p).validate(&h);
        assert_eq!(
            v,
            Verdict::Reject(Violation::ResponseShape {
                expected: Responses::NonAnonymous
            })
        );
        if let Verdict::Reject(violation) = v {
            assert_eq!(violation.fault_subcode(), "wsa:OnlyNonAnonymousAddressSupported");
        }
    }

    #[test]
    fn repeated_reply_to_must_all_conform() {
        let p = AddressingPolicy::required(Responses::Anonymous);
        let h = request(ANONYMOUS_ADDRESS)
            .with_addressing("ReplyTo", "http://other.example/cb");
        assert_eq!(
            HeaderComplianceValidator::receiver(&p).validate(&h),
            Verdict::Reject(Violation::ResponseShape {
                expected: Responses::Anonymous
            })
        );
    }

    #[test]
    fn sender_ignores_shape_and_requirement() {
        let p = AddressingPolicy::required(Responses::Anonymous);
        let v = HeaderComplianceValidator::sender(&p);
        assert!(v.validate(&HeaderSet::new()).is_accept());
        assert!(v.validate(&request("http://client.example/cb")).is_accept());
    }

    #[test]
    fn check_maps_rejection_to_error() {
        let p = AddressingPolicy::disabled();
        let err = HeaderComplianceValidator::receiver(&p)
            .check(&request(ANONYMOUS_ADDRESS))
            .unwrap_err();
        assert_eq!(err.violation(), Some(Violation::UnsupportedHeaders));
        assert_eq!(err.code().as_str(), "COMPLIANCE_FAULT");
    }

    #[test]
    fn violation_display() {
        let v = Violation::ResponseShape {
            expected: Responses::Anonymous,
        };
        assert_eq!(v.to_string(), "response_shape_violation (expected anonymous)");
        assert_eq!(Violation::MissingRequiredHeaders.to_string(), "missing_required_headers");
    }
}
