//! Test doubles and state builders shared by unit and integration tests.

mod gateway;
mod picker;

use std::sync::Arc;

pub use gateway::{GatewayCall, ScriptedGateway, SCRIPTED_MORPH};
pub use picker::FixedPicker;

use crate::domain::{Catalog, Creature};
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::AppState;

/// `[Bulbasaur, Charmander, Squirtle]` with stable fake image URLs.
pub fn starter_catalog() -> Catalog {
    Catalog::new(vec![
        Creature::new("Bulbasaur", "https://img.test/1.png"),
        Creature::new("Charmander", "https://img.test/4.png"),
        Creature::new("Squirtle", "https://img.test/7.png"),
    ])
}

/// Every round uses Bulbasaur as the silhouette and Squirtle as the target.
pub fn bulbasaur_then_squirtle() -> FixedPicker {
    FixedPicker::new([0, 2])
}

/// State over the starter catalog with a default scripted gateway.
pub async fn test_state() -> Result<AppState, AppError> {
    test_state_with(
        Arc::new(ScriptedGateway::new()),
        starter_catalog(),
        bulbasaur_then_squirtle(),
    )
    .await
}

pub async fn test_state_with(
    gateway: Arc<ScriptedGateway>,
    catalog: Catalog,
    picker: FixedPicker,
) -> Result<AppState, AppError> {
    build_state()
        .with_catalog(catalog)
        .with_gateway(gateway)
        .with_picker(Arc::new(picker))
        .build()
        .await
}
