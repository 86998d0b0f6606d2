//! Game controller - owns one session's round state and drives the AI gateway.
//!
//! State lives behind a mutex that is never held across an `.await`. Every
//! operation that calls the gateway first moves the session into a pending
//! phase (which rejects concurrent guesses), records the round epoch, releases
//! the lock, awaits the gateway, and applies the result only if the epoch is
//! unchanged.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cues::{self, Cue, CueSink};
use crate::domain::{
    is_blank, is_correct_guess, pick_distinct_pair, points_for_correct_guess, Catalog, GamePhase,
    HintKind, IndexPicker, Round, FALLBACK_HINT,
};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::gateway::AiGateway;
use crate::services::snapshot::GameSnapshot;

/// Mutable state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: GamePhase,
    pub round: Option<Round>,
    /// Never decreases.
    pub score: u32,
    /// Bumped on every round start; pending gateway results carry the epoch
    /// they were issued under.
    pub epoch: u64,
}

impl GameState {
    fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            round: None,
            score: 0,
            epoch: 0,
        }
    }
}

/// Result of a guess submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// Blank input or no active round.
    Ignored,
    Correct { points: u32 },
    /// Wrong guess with guesses left; `hint` is the clue appended for it.
    Incorrect {
        remaining_guesses: u8,
        hint: Option<String>,
    },
    /// Wrong guess that used up the last attempt.
    OutOfGuesses,
}

/// Gateway work decided under the lock, executed after it is released.
enum PendingCall {
    Morph {
        epoch: u64,
        source: String,
        shape: String,
        reveal: GamePhase,
    },
    Hint {
        epoch: u64,
        creature_name: String,
        kind: HintKind,
    },
}

pub struct GameController {
    catalog: Arc<Catalog>,
    gateway: Arc<dyn AiGateway>,
    picker: Arc<dyn IndexPicker>,
    cues: Arc<dyn CueSink>,
    state: Mutex<GameState>,
}

impl GameController {
    pub fn new(
        catalog: Arc<Catalog>,
        gateway: Arc<dyn AiGateway>,
        picker: Arc<dyn IndexPicker>,
        cues: Arc<dyn CueSink>,
    ) -> Self {
        Self {
            catalog,
            gateway,
            picker,
            cues,
            state: Mutex::new(GameState::new()),
        }
    }

    /// Copy of the current state.
    pub fn state(&self) -> GameState {
        self.state.lock().clone()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(&self.state.lock())
    }

    /// Start a fresh round with a random silhouette and a distinct target.
    ///
    /// Allowed from `Idle` and the revealed phases only.
    pub fn start_round(&self) -> Result<(), DomainError> {
        {
            let mut state = self.state.lock();
            if !state.phase.can_start_round() {
                return Err(DomainError::phase_mismatch("start_round", state.phase));
            }

            let (silhouette_idx, target_idx) =
                pick_distinct_pair(self.picker.as_ref(), self.catalog.len())?;
            let silhouette = self.creature_at(silhouette_idx)?;
            let target = self.creature_at(target_idx)?;

            debug!(silhouette = %silhouette.name, target = %target.name, "round drawn");

            state.round = Some(Round::new(silhouette, target));
            state.epoch += 1;
            state.phase = GamePhase::Playing;
            info!(epoch = state.epoch, score = state.score, "round started");
        }

        cues::notify(self.cues.as_ref(), Cue::Intro);
        Ok(())
    }

    /// Evaluate a guess against the current target.
    ///
    /// Gateway failures never surface here: a failed morph reveals the
    /// original image and a failed hint appends [`FALLBACK_HINT`].
    pub async fn submit_guess(&self, guess: &str) -> Result<GuessOutcome, DomainError> {
        let (outcome, cue, call) = {
            let mut guard = self.state.lock();
            let GameState {
                phase,
                round,
                score,
                epoch,
            } = &mut *guard;

            let Some(round) = round.as_mut() else {
                return Ok(GuessOutcome::Ignored);
            };
            if is_blank(guess) {
                return Ok(GuessOutcome::Ignored);
            }
            if *phase != GamePhase::Playing {
                return Err(DomainError::phase_mismatch("submit_guess", *phase));
            }

            if is_correct_guess(guess, &round.target.name) {
                let points = points_for_correct_guess(round.remaining_guesses);
                *score = score.saturating_add(points);
                *phase = GamePhase::MorphingCorrect;
                info!(points, score = *score, "correct guess");

                let call = PendingCall::Morph {
                    epoch: *epoch,
                    source: round.target.image_url.clone(),
                    shape: round.silhouette.image_url.clone(),
                    reveal: GamePhase::RevealedCorrect,
                };
                (GuessOutcome::Correct { points }, Cue::Correct, call)
            } else {
                round.remaining_guesses = round.remaining_guesses.saturating_sub(1);
                let remaining = round.remaining_guesses;
                debug!(remaining, "wrong guess");

                match HintKind::for_remaining(remaining) {
                    Some(kind) => {
                        *phase = GamePhase::GeneratingHint;
                        let call = PendingCall::Hint {
                            epoch: *epoch,
                            creature_name: round.target.name.clone(),
                            kind,
                        };
                        let outcome = GuessOutcome::Incorrect {
                            remaining_guesses: remaining,
                            hint: None,
                        };
                        (outcome, Cue::Wrong, call)
                    }
                    None => {
                        *phase = GamePhase::MorphingWrong;
                        info!(score = *score, "out of guesses");
                        let call = PendingCall::Morph {
                            epoch: *epoch,
                            source: round.target.image_url.clone(),
                            shape: round.silhouette.image_url.clone(),
                            reveal: GamePhase::RevealedWrong,
                        };
                        (GuessOutcome::OutOfGuesses, Cue::Wrong, call)
                    }
                }
            }
        };

        // Cue goes out before the gateway call so feedback is immediate.
        cues::notify(self.cues.as_ref(), cue);

        match call {
            PendingCall::Morph {
                epoch,
                source,
                shape,
                reveal,
            } => {
                self.resolve_morph(epoch, &source, &shape, reveal).await;
                Ok(outcome)
            }
            PendingCall::Hint {
                epoch,
                creature_name,
                kind,
            } => {
                let hint = self.resolve_hint(epoch, &creature_name, kind).await;
                Ok(match outcome {
                    GuessOutcome::Incorrect {
                        remaining_guesses, ..
                    } => GuessOutcome::Incorrect {
                        remaining_guesses,
                        hint,
                    },
                    other => other,
                })
            }
        }
    }

    /// Image to offer for download, with its file name.
    ///
    /// Only available once the round is revealed.
    pub fn result_image(&self) -> Result<(String, String), DomainError> {
        let state = self.state.lock();
        let round = state.round.as_ref().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Round, "no round has been played yet")
        })?;
        if !state.phase.is_revealed() {
            return Err(DomainError::phase_mismatch("result_image", state.phase));
        }
        Ok((
            round.display_image_url().to_string(),
            round.download_filename(),
        ))
    }

    async fn resolve_morph(&self, epoch: u64, source: &str, shape: &str, reveal: GamePhase) {
        let result = self.gateway.morph(source, shape).await;

        let mut state = self.state.lock();
        if state.epoch != epoch {
            warn!(
                issued_epoch = epoch,
                current_epoch = state.epoch,
                "discarding stale morph result"
            );
            return;
        }

        let morphed = match result {
            Ok(uri) => Some(uri),
            Err(err) => {
                warn!(error = %err, "morph failed; revealing original image");
                None
            }
        };
        if let Some(round) = state.round.as_mut() {
            round.morphed_image_url = morphed;
        }
        state.phase = reveal;
        info!(phase = ?reveal, "round revealed");
    }

    async fn resolve_hint(&self, epoch: u64, creature_name: &str, kind: HintKind) -> Option<String> {
        let hint = match self.gateway.generate_hint(creature_name, kind).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, ?kind, "hint generation failed; using fallback");
                FALLBACK_HINT.to_string()
            }
        };

        let mut state = self.state.lock();
        if state.epoch != epoch {
            warn!(
                issued_epoch = epoch,
                current_epoch = state.epoch,
                "discarding stale hint"
            );
            return None;
        }

        if let Some(round) = state.round.as_mut() {
            round.hints.push(hint.clone());
        }
        state.phase = GamePhase::Playing;
        Some(hint)
    }

    fn creature_at(&self, index: usize) -> Result<crate::domain::Creature, DomainError> {
        self.catalog
            .get(index)
            .cloned()
            .ok_or_else(|| DomainError::infra(format!("catalog index {index} out of range")))
    }
}
