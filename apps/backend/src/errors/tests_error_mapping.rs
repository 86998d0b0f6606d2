// Unit tests for error mapping - pure domain logic without HTTP
use crate::domain::GamePhase;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::error::AppError;
use crate::errors::ErrorCode;

#[test]
fn maps_catalog_too_small_to_503() {
    let app: AppError = DomainError::catalog_too_small(1).into();
    assert_eq!(app.code(), ErrorCode::CatalogTooSmall);
    assert_eq!(app.status().as_u16(), 503);
    assert!(app.detail().contains("1 creature"));
}

#[test]
fn maps_session_limit_to_503() {
    let app: AppError = DomainError::session_limit(2).into();
    assert_eq!(app.code(), ErrorCode::TooManySessions);
    assert_eq!(app.status().as_u16(), 503);
    assert!(app.detail().contains("all 2 session slots"));
}

#[test]
fn maps_phase_mismatch_to_409() {
    let app: AppError =
        DomainError::phase_mismatch("submit_guess", GamePhase::GeneratingHint).into();
    assert_eq!(app.code().as_str(), "PHASE_MISMATCH");
    assert_eq!(app.status().as_u16(), 409);
    assert!(app.detail().contains("GeneratingHint"));
}

#[test]
fn maps_validation_to_400() {
    let app: AppError = DomainError::validation("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Session, "no session").into();
    assert_eq!(app.code().as_str(), "SESSION_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Round, "no round").into();
    assert_eq!(app.code(), ErrorCode::RoundNotFound);

    let app: AppError =
        DomainError::not_found(NotFoundKind::Other("thing".into()), "missing").into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra_to_500() {
    let app: AppError = DomainError::infra("lock poisoned").into();
    assert_eq!(app.code(), ErrorCode::Internal);
    assert_eq!(app.status().as_u16(), 500);
}
