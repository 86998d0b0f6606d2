//! Shared helpers for the backend's unit and integration tests.
//!
//! Kept free of backend types so both test flavours can depend on it.

pub mod logging;
pub mod problem_details;
