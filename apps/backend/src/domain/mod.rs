//! Domain layer: pure game logic types and helpers.

pub mod catalog;
pub mod creature;
pub mod guess;
pub mod hints;
pub mod phase;
pub mod picker;
pub mod round;
pub mod scoring;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_guess;
#[cfg(test)]
mod tests_props_picker;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use catalog::Catalog;
pub use creature::Creature;
pub use guess::{is_blank, is_correct_guess};
pub use hints::{HintKind, FALLBACK_HINT};
pub use phase::GamePhase;
pub use picker::{pick_distinct_pair, IndexPicker, RandomPicker};
pub use round::{Round, GUESSES_PER_ROUND};
pub use scoring::points_for_correct_guess;
