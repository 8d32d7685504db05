//! Read-only view of a message's header block.
//!
//! The transport layer extracts headers into a name → value map. Names are
//! either Clark-qualified (`{http://www.w3.org/2005/08/addressing}ReplyTo`) or
//! use the conventional `wsa:` prefix. For endpoint-reference headers
//! (`ReplyTo`, `FaultTo`) the value is the EPR's address URI.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// WS-Addressing 1.0 namespace.
pub const WSA_NS: &str = "http://www.w3.org/2005/08/addressing";
/// Address of the anonymous endpoint (reply on the back channel).
pub const ANONYMOUS_ADDRESS: &str = "http://www.w3.org/2005/08/addressing/anonymous";

const WSA_PREFIX: &str = "wsa:";

/// Message header set keyed by qualified name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HeaderSet {
    entries: BTreeMap<String, String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Insert an addressing header by local name (e.g. `Action`).
    pub fn with_addressing(self, local: &str, value: impl Into<String>) -> Self {
        self.with(format!("{{{WSA_NS}}}{local}"), value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether any WS-Addressing header is present.
    pub fn has_addressing(&self) -> bool {
        self.entries.keys().any(|k| addressing_local_name(k).is_some())
    }

    /// Every value of an addressing header by local name, in either naming form.
    ///
    /// A header may appear under both forms; callers must consider all values.
    pub fn addressing_values<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| addressing_local_name(k) == Some(local))
            .map(|(_, v)| v.trim())
    }

    /// Anonymity of each `ReplyTo` value. An absent `ReplyTo` defaults to anonymous.
    pub fn reply_to_anonymity(&self) -> Vec<bool> {
        let out: Vec<bool> = self.addressing_values("ReplyTo").map(is_anonymous).collect();
        if out.is_empty() {
            vec![true]
        } else {
            out
        }
    }

    /// Anonymity of each `FaultTo` value; empty when the header is absent.
    pub fn fault_to_anonymity(&self) -> Vec<bool> {
        self.addressing_values("FaultTo").map(is_anonymous).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn is_anonymous(address: &str) -> bool {
    address == ANONYMOUS_ADDRESS
}

/// Local name of a header if it belongs to the addressing namespace.
fn addressing_local_name(name: &str) -> Option<&str> {
    if let Some(local) = name.strip_prefix(WSA_PREFIX) {
        return (!local.is_empty()).then_some(local);
    }
    let rest = name.strip_prefix('{')?;
    let (ns, local) = rest.split_once('}')?;
    (ns == WSA_NS && !local.is_empty()).then_some(local)
}
