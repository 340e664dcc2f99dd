//! Error type shared by every CouponHub crate.
//!
//! Cooldowns and an empty pool are claim outcomes, not errors. What ends up
//! here is bad input, failed admin auth, missing records, and anything the
//! store or an outside service could not do.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed underlying cause.
pub type BoxedSource = Box<dyn StdError + Send + Sync>;

/// Category of an [`AppError`]; decides the HTTP status and CLI exit text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No coupon (or other record) with the given id.
    NotFound,
    /// Bad admin credentials or token.
    Authentication,
    /// Authenticated but not allowed.
    Authorization,
    /// Request or identity failed validation.
    Validation,
    /// Change refused in the coupon's current state.
    Conflict,
    /// Broken invariant inside the service.
    Internal,
    /// PostgreSQL failure.
    Database,
    /// Document file or other local I/O failure.
    Storage,
    /// Missing or malformed settings.
    Configuration,
    /// JSON encoding or decoding failed.
    Serialization,
    /// The IP-echo lookup or another upstream failed.
    ExternalService,
    /// Temporarily unable to serve.
    ServiceUnavailable,
}

impl ErrorKind {
    /// Upper snake case label used in logs and error displays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Storage => "STORAGE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
            Self::ExternalService => "EXTERNAL_SERVICE",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Failures of the coupon store; a claim that hit one may be retried whole.
    pub const fn is_persistence(self) -> bool {
        matches!(self, Self::Database | Self::Storage | Self::Serialization)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error carried through `?` across crate boundaries.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Category.
    pub kind: ErrorKind,
    /// Message safe to show to the caller for 4xx kinds.
    pub message: String,
    /// Underlying cause, if any.
    #[source]
    pub source: Option<BoxedSource>,
}

impl AppError {
    /// Error without an underlying cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Error wrapping the failure that caused it.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Missing coupon or other record.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Rejected admin credentials or token.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Malformed request, identity, or coupon input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Change not allowed in the record's current state.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Broken invariant inside the service.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// PostgreSQL failure without a wrapped cause.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Document file or local I/O failure without a wrapped cause.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Missing or malformed settings.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Failed call to the IP-echo lookup or another upstream.
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }

    /// Whether the store failed (see [`ErrorKind::is_persistence`]).
    pub fn is_persistence(&self) -> bool {
        self.kind.is_persistence()
    }
}

// Sources are not `Clone`; a cloned error keeps kind and message only.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let message = format!("Malformed coupon document: {err}");
        Self::with_source(ErrorKind::Serialization, message, err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("Document I/O failed: {err}");
        Self::with_source(ErrorKind::Storage, message, err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        let message = format!("Invalid configuration: {err}");
        Self::with_source(ErrorKind::Configuration, message, err)
    }
}
