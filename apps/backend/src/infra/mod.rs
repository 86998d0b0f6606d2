//! Infrastructure layer - wiring configuration into application state.

pub mod state;
