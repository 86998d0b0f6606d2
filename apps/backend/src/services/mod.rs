pub mod game_controller;
pub mod sessions;
pub mod snapshot;

#[cfg(test)]
mod tests_game_controller;

pub use game_controller::{GameController, GameState, GuessOutcome};
pub use sessions::{spawn_reaper, Session, SessionRegistry};
pub use snapshot::GameSnapshot;
