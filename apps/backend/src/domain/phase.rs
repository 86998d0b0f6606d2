use serde::Serialize;

/// Phases of a game session.
///
/// `Idle` is the only initial phase. The revealed phases end a round but not
/// the session; starting a new round re-enters `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No round has been started yet.
    Idle,
    /// Waiting for a guess.
    Playing,
    /// A hint request is in flight.
    GeneratingHint,
    /// Correct guess; morph request in flight.
    MorphingCorrect,
    /// Out of guesses; morph request in flight.
    MorphingWrong,
    RevealedCorrect,
    RevealedWrong,
}

impl GamePhase {
    pub fn can_start_round(self) -> bool {
        matches!(
            self,
            GamePhase::Idle | GamePhase::RevealedCorrect | GamePhase::RevealedWrong
        )
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, GamePhase::RevealedCorrect | GamePhase::RevealedWrong)
    }

    /// A gateway call is outstanding.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            GamePhase::GeneratingHint | GamePhase::MorphingCorrect | GamePhase::MorphingWrong
        )
    }

    /// Loader text shown while a gateway call is outstanding.
    pub fn loader_message(self) -> Option<&'static str> {
        match self {
            GamePhase::MorphingCorrect => Some("Gotcha! Revealing the true form..."),
            GamePhase::MorphingWrong => Some("AI is reforming the Pokémon..."),
            GamePhase::GeneratingHint => Some("Thinking of a clue..."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_start_allowed_only_when_settled() {
        assert!(GamePhase::Idle.can_start_round());
        assert!(GamePhase::RevealedCorrect.can_start_round());
        assert!(GamePhase::RevealedWrong.can_start_round());
        assert!(!GamePhase::Playing.can_start_round());
        assert!(!GamePhase::GeneratingHint.can_start_round());
        assert!(!GamePhase::MorphingCorrect.can_start_round());
        assert!(!GamePhase::MorphingWrong.can_start_round());
    }

    #[test]
    fn loader_messages_cover_pending_phases() {
        for phase in [
            GamePhase::GeneratingHint,
            GamePhase::MorphingCorrect,
            GamePhase::MorphingWrong,
        ] {
            assert!(phase.is_pending());
            assert!(phase.loader_message().is_some());
        }
        assert_eq!(GamePhase::Playing.loader_message(), None);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&GamePhase::RevealedCorrect).unwrap();
        assert_eq!(json, "\"revealed_correct\"");
    }
}
