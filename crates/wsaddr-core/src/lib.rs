//! wsaddr core: WS-Addressing feature descriptors, policy assertions and
//! per-message header compliance.
//!
//! This crate carries the decision surface only. It has no transport or
//! runtime dependencies so the same policy values can be shared by endpoint
//! and client bindings, tooling, and tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `WsAddrError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod addressing;
pub mod assertion;
pub mod error;
pub mod feature;
pub mod headers;
pub mod validator;

pub use addressing::{AddressingPolicy, Responses};
pub use assertion::{NestedAssertion, PolicyAssertion, PolicyFragment};
/// Shared result type.
pub use error::{Result, WsAddrError};
pub use feature::{Capability, FeatureDescriptor};
pub use headers::HeaderSet;
pub use validator::{HeaderComplianceValidator, Side, Verdict, Violation};
