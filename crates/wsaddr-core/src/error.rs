//! Shared error type across wsaddr crates.

use thiserror::Error;

use crate::validator::Violation;

/// Stable error codes surfaced to operators and message originators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration input.
    BadConfig,
    /// Two capabilities with the same id disagree.
    ConfigConflict,
    /// Capability id not implemented by this runtime.
    UnsupportedCapability,
    /// Service reference could not be resolved.
    Unresolved,
    /// Message failed addressing header compliance.
    ComplianceFault,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::ConfigConflict => "CONFIG_CONFLICT",
            ErrorCode::UnsupportedCapability => "UNSUPPORTED_CAPABILITY",
            ErrorCode::Unresolved => "UNRESOLVED",
            ErrorCode::ComplianceFault => "COMPLIANCE_FAULT",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WsAddrError>;

/// Unified error type used by core and runtime.
#[derive(Debug, Error)]
pub enum WsAddrError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("conflicting capability {id} on binding {binding}")]
    ConfigConflict { binding: String, id: String },
    #[error("unsupported capability {id} on binding {binding}")]
    UnsupportedCapability { binding: String, id: String },
    #[error("unresolved service reference {name}: {reason}")]
    Unresolved { name: String, reason: String },
    #[error("addressing compliance fault: {0}")]
    Compliance(Violation),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl WsAddrError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WsAddrError::BadConfig(_) => ErrorCode::BadConfig,
            WsAddrError::ConfigConflict { .. } => ErrorCode::ConfigConflict,
            WsAddrError::UnsupportedCapability { .. } => ErrorCode::UnsupportedCapability,
            WsAddrError::Unresolved { .. } => ErrorCode::Unresolved,
            WsAddrError::Compliance(_) => ErrorCode::ComplianceFault,
            WsAddrError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            WsAddrError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// The compliance violation carried by this error, if any.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            WsAddrError::Compliance(v) => Some(*v),
            _ => None,
        }
    }
}
