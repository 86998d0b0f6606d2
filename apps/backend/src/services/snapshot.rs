//! Read-only view of a session for the browser.
//!
//! The target's name never appears in a snapshot until the round is revealed.

use serde::Serialize;

use crate::domain::{GamePhase, Round};
use crate::services::game_controller::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    /// Loader text while a gateway call is pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub silhouette_image_url: String,
    pub remaining_guesses: u8,
    /// Hidden once the round is revealed.
    pub hints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealView {
    pub correct: bool,
    pub silhouette_name: String,
    pub target_name: String,
    /// Morph result, or the target sprite when the morph failed.
    pub image_url: String,
    pub image_alt: String,
    pub morphed: bool,
    pub messages: Vec<String>,
    pub download_filename: String,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            loader_message: state.phase.loader_message(),
            round: state
                .round
                .as_ref()
                .map(|round| RoundView::new(round, state.phase)),
        }
    }
}

impl RoundView {
    fn new(round: &Round, phase: GamePhase) -> Self {
        let revealed = phase.is_revealed();
        Self {
            silhouette_image_url: round.silhouette.image_url.clone(),
            remaining_guesses: round.remaining_guesses,
            hints: if revealed {
                Vec::new()
            } else {
                round.hints.clone()
            },
            reveal: revealed.then(|| RevealView::new(round, phase == GamePhase::RevealedCorrect)),
        }
    }
}

impl RevealView {
    fn new(round: &Round, correct: bool) -> Self {
        let messages = if correct {
            vec![
                format!("The silhouette was {}!", round.silhouette.name),
                format!("You got it! The answer was {}!", round.target.name),
            ]
        } else {
            vec![format!("So close! The answer was {}!", round.target.name)]
        };

        Self {
            correct,
            silhouette_name: round.silhouette.name.clone(),
            target_name: round.target.name.clone(),
            image_url: round.display_image_url().to_string(),
            image_alt: round.display_alt_text(),
            morphed: round.morphed_image_url.is_some(),
            messages,
            download_filename: round.download_filename(),
        }
    }
}
