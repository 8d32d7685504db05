//! Service references.
//!
//! Declared references are resolved once at startup through resolvers the
//! hosting application registers by reference name. Resolved references are
//! read-only; the runtime does not synchronize callers that share the
//! endpoints they point to.

pub mod registry;
pub mod resolver;

pub use registry::{ReferenceRegistry, ResolvedRef, ServiceRefDecl};
pub use resolver::{DeclaredAddressResolver, ReferenceResolver, StaticResolver};
