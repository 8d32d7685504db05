//! Top-level facade crate for wsaddr.
//!
//! Re-exports the policy core and the binding runtime so users can depend on a single crate.

pub mod core {
    pub use wsaddr_core::*;
}

pub mod runtime {
    pub use wsaddr_runtime::*;
}
