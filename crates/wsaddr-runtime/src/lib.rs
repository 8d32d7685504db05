//! wsaddr runtime library entry.
//!
//! This crate wires configuration, binding setup, reference resolution, the
//! per-message compliance pipeline, and the HTTP surface into one runtime. It
//! is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod binding;
pub mod config;
pub mod obs;
pub mod ops;
pub mod pipeline;
pub mod refs;
pub mod router;
