//! Domain-level error type used across the game controller and services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::GamePhase;

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Round,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The catalog cannot supply two distinct creatures
    CatalogTooSmall { size: usize },
    /// Operation is not allowed in the current phase
    PhaseMismatch {
        operation: &'static str,
        actual: GamePhase,
    },
    /// The registry holds as many live sessions as it may
    SessionLimit { max: usize },
    /// Input/user validation
    Validation(String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::CatalogTooSmall { size } => {
                write!(f, "catalog has {size} creature(s), at least 2 are required")
            }
            DomainError::PhaseMismatch { operation, actual } => {
                write!(f, "{operation} is not allowed while {actual:?}")
            }
            DomainError::SessionLimit { max } => {
                write!(f, "all {max} session slots are in use, try again later")
            }
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(d) => write!(f, "infra: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn catalog_too_small(size: usize) -> Self {
        Self::CatalogTooSmall { size }
    }
    pub fn phase_mismatch(operation: &'static str, actual: GamePhase) -> Self {
        Self::PhaseMismatch { operation, actual }
    }
    pub fn session_limit(max: usize) -> Self {
        Self::SessionLimit { max }
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(detail: impl Into<String>) -> Self {
        Self::Infra(detail.into())
    }
}
