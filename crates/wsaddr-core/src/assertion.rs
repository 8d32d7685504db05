//! Policy assertion fragments for metadata publication.
//!
//! Rendered per WS-Addressing 1.0 Metadata:
//!
//! ```text
//! <wsam:Addressing [wsp:Optional="true"]>
//!   <wsp:Policy>
//!     [<wsam:AnonymousResponses/> | <wsam:NonAnonymousResponses/>]
//!   </wsp:Policy>
//! </wsam:Addressing>
//! ```

use std::fmt::Write;

use serde::Serialize;

/// WS-Addressing Metadata namespace.
pub const WSAM_NS: &str = "http://www.w3.org/2007/05/addressing/metadata";
/// WS-Policy 1.5 namespace.
pub const WSP_NS: &str = "http://www.w3.org/ns/ws-policy";

/// Response-shape constraint nested inside the addressing assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NestedAssertion {
    AnonymousResponses,
    NonAnonymousResponses,
}

impl NestedAssertion {
    pub fn local_name(self) -> &'static str {
        match self {
            NestedAssertion::AnonymousResponses => "AnonymousResponses",
            NestedAssertion::NonAnonymousResponses => "NonAnonymousResponses",
        }
    }
}

/// The `wsam:Addressing` assertion and its inner policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PolicyAssertion {
    optional: bool,
    nested: Option<NestedAssertion>,
}

impl PolicyAssertion {
    pub(crate) fn optional() -> Self {
        Self {
            optional: true,
            nested: None,
        }
    }

    pub(crate) fn required(nested: Option<NestedAssertion>) -> Self {
        Self {
            optional: false,
            nested,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Nested shape assertion of the inner policy; `None` means an empty inner policy.
    pub fn nested(&self) -> Option<NestedAssertion> {
        self.nested
    }

    fn write_xml(&self, out: &mut String) {
        let _ = write!(
            out,
            "<wsam:Addressing xmlns:wsam=\"{WSAM_NS}\" xmlns:wsp=\"{WSP_NS}\""
        );
        if self.optional {
            out.push_str(" wsp:Optional=\"true\"");
        }
        out.push('>');
        match self.nested {
            None => out.push_str("<wsp:Policy/>"),
            Some(n) => {
                let _ = write!(out, "<wsp:Policy><wsam:{}/></wsp:Policy>", n.local_name());
            }
        }
        out.push_str("</wsam:Addressing>");
    }
}

/// Metadata fragment emitted for one binding. Empty when addressing is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PolicyFragment(Option<PolicyAssertion>);

impl PolicyFragment {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn assertion(&self) -> Option<&PolicyAssertion> {
        self.0.as_ref()
    }

    /// XML text of the fragment; the empty fragment renders as `""`.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.0 {
            a.write_xml(&mut out);
        }
        out
    }
}

impl From<PolicyAssertion> for PolicyFragment {
    fn from(a: PolicyAssertion) -> Self {
        Self(Some(a))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DECL: &str = "xmlns:wsam=\"http://www.w3.org/2007/05/addressing/metadata\" \
                        xmlns:wsp=\"http://www.w3.org/ns/ws-policy\"";

    #[test]
    fn empty_fragment_renders_nothing() {
        assert_eq!(PolicyFragment::empty().to_xml(), "");
    }

    #[test]
    fn optional_form() {
        let xml = PolicyFragment::from(PolicyAssertion::optional()).to_xml();
        assert_eq!(
            xml,
            format!("<wsam:Addressing {DECL} wsp:Optional=\"true\"><wsp:Policy/></wsam:Addressing>")
        );
    }

    #[test]
    fn required_with_nested_shape() {
        let xml = PolicyFragment::from(PolicyAssertion::required(Some(
            NestedAssertion::AnonymousResponses,
        )))
        .to_xml();
        assert_eq!(
            xml,
            format!(
                "<wsam:Addressing {DECL}><wsp:Policy><wsam:AnonymousResponses/></wsp:Policy></wsam:Addressing>"
            )
        );
    }

    #[test]
    fn json_shape() {
        let v = serde_json::to_value(PolicyFragment::from(PolicyAssertion::required(None))).unwrap();
        assert_eq!(v, serde_json::json!({ "optional": false, "nested": null }));
        assert_eq!(serde_json::to_value(PolicyFragment::empty()).unwrap(), serde_json::Value::Null);
    }
}
