//! WS-Addressing feature: enablement, requirement and response shape.
//!
//! Enabled addressing means the runtime produces addressing headers as a
//! sender and consumes them as a receiver. Disabled addressing means the
//! headers MUST NOT be used at all. `required` only has meaning on an
//! endpoint receiving messages; on a client it is inert.

use serde::{Deserialize, Serialize};

use crate::assertion::{NestedAssertion, PolicyAssertion, PolicyFragment};
use crate::feature::FeatureDescriptor;
use crate::headers::HeaderSet;
use crate::validator::{HeaderComplianceValidator, Side, Verdict};

/// Capability id of the addressing feature.
pub const ADDRESSING_ID: &str = "http://www.w3.org/2005/08/addressing/module";

/// Which response endpoints an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Responses {
    /// Only anonymous responses (reply on the same connection).
    Anonymous,
    /// Only responses to an addressable endpoint reference.
    NonAnonymous,
    /// Any response type.
    #[default]
    All,
}

impl Responses {
    pub fn as_str(self) -> &'static str {
        match self {
            Responses::Anonymous => "anonymous",
            Responses::NonAnonymous => "non_anonymous",
            Responses::All => "all",
        }
    }

    /// Whether a response endpoint with the given anonymity is acceptable.
    pub fn admits(self, anonymous: bool) -> bool {
        match self {
            Responses::Anonymous => anonymous,
            Responses::NonAnonymous => !anonymous,
            Responses::All => true,
        }
    }
}

/// Addressing policy for one binding.
///
/// Immutable once built; share it read-only across all exchanges on the
/// binding (`Arc` or plain borrows, no locking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressingPolicy {
    feature: FeatureDescriptor,
    required: bool,
    responses: Responses,
}

impl Default for AddressingPolicy {
    fn default() -> Self {
        Self::new(true, false, Responses::All)
    }
}

impl AddressingPolicy {
    pub fn new(enabled: bool, required: bool, responses: Responses) -> Self {
        Self {
            feature: FeatureDescriptor::new(ADDRESSING_ID, enabled),
            required,
            responses,
        }
    }

    /// Enabled, not required, all responses.
    pub fn enabled() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self::new(false, false, Responses::All)
    }

    pub fn required(responses: Responses) -> Self {
        Self::new(true, true, responses)
    }

    pub fn feature(&self) -> FeatureDescriptor {
        self.feature
    }

    pub fn id(&self) -> &'static str {
        self.feature.id()
    }

    pub fn is_enabled(&self) -> bool {
        self.feature.is_enabled()
    }

    /// Stored flag, verbatim. Meaningless when the feature is disabled.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Stored response shape, verbatim. Meaningless when the feature is disabled.
    pub fn responses(&self) -> Responses {
        self.responses
    }

    /// Policy assertion to publish in the endpoint's metadata.
    ///
    /// The response shape is only surfaced under a required assertion.
    pub fn emit_policy_assertion(&self) -> PolicyFragment {
        if !self.is_enabled() {
            return PolicyFragment::empty();
        }
        if !self.required {
            return PolicyFragment::from(PolicyAssertion::optional());
        }
        let nested = match self.responses {
            Responses::All => None,
            Responses::Anonymous => Some(NestedAssertion::AnonymousResponses),
            Responses::NonAnonymous => Some(NestedAssertion::NonAnonymousResponses),
        };
        PolicyFragment::from(PolicyAssertion::required(nested))
    }

    pub fn validator(&self, side: Side) -> HeaderComplianceValidator<'_> {
        HeaderComplianceValidator::new(self, side)
    }

    /// Shortcut for `self.validator(side).validate(headers)`.
    pub fn check(&self, side: Side, headers: &HeaderSet) -> Verdict {
        self.validator(side).validate(headers)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_feature_constructor() {
        let p = AddressingPolicy::default();
        assert!(p.is_enabled());
        assert!(!p.is_required());
        assert_eq!(p.responses(), Responses::All);
        assert_eq!(p.id(), ADDRESSING_ID);
    }

    #[test]
    fn getters_return_stored_values_even_when_disabled() {
        let p = AddressingPolicy::new(false, true, Responses::Anonymous);
        assert!(!p.is_enabled());
        assert!(p.is_required());
        assert_eq!(p.responses(), Responses::Anonymous);
    }

    #[test]
    fn responses_admits() {
        assert!(Responses::Anonymous.admits(true));
        assert!(!Responses::Anonymous.admits(false));
        assert!(Responses::NonAnonymous.admits(false));
        assert!(!Responses::NonAnonymous.admits(true));
        assert!(Responses::All.admits(true) && Responses::All.admits(false));
    }

    #[test]
    fn responses_parse_snake_case() {
        let r: Responses = serde_json::from_str("\"non_anonymous\"").unwrap();
        assert_eq!(r, Responses::NonAnonymous);
        assert!(serde_json::from_str::<Responses>("\"NONE\"").is_err());
    }

    #[test]
    fn four_way_assertion_branch() {
        assert!(AddressingPolicy::disabled().emit_policy_assertion().is_empty());

        let optional = AddressingPolicy::new(true, false, Responses::Anonymous)
            .emit_policy_assertion();
        let a = optional.assertion().unwrap();
        assert!(a.is_optional());
        assert!(a.nested().is_none());

        let all = AddressingPolicy::required(Responses::All).emit_policy_assertion();
        let a = all.assertion().unwrap();
        assert!(!a.is_optional());
        assert!(a.nested().is_none());

        let non_anon = AddressingPolicy::required(Responses::NonAnonymous).emit_policy_assertion();
        assert_eq!(
            non_anon.assertion().unwrap().nested(),
            Some(NestedAssertion::NonAnonymousResponses)
        );
    }
}
