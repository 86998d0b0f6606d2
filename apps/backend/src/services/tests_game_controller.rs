use std::sync::Arc;

use tokio::sync::Notify;

use crate::cues::{Cue, QueuedCues};
use crate::domain::{Catalog, Creature, GamePhase, HintKind, FALLBACK_HINT};
use crate::errors::domain::DomainError;
use crate::services::game_controller::{GameController, GuessOutcome};
use crate::test_support::{
    bulbasaur_then_squirtle, starter_catalog, GatewayCall, ScriptedGateway, SCRIPTED_MORPH,
};

struct Harness {
    controller: GameController,
    gateway: Arc<ScriptedGateway>,
    cues: Arc<QueuedCues>,
}

fn harness_with(gateway: ScriptedGateway, catalog: Catalog) -> Harness {
    let gateway = Arc::new(gateway);
    let cues = Arc::new(QueuedCues::default());
    let controller = GameController::new(
        Arc::new(catalog),
        gateway.clone(),
        Arc::new(bulbasaur_then_squirtle()),
        cues.clone(),
    );
    Harness {
        controller,
        gateway,
        cues,
    }
}

/// Silhouette is Bulbasaur, target is Squirtle.
fn harness(gateway: ScriptedGateway) -> Harness {
    harness_with(gateway, starter_catalog())
}

fn playing(gateway: ScriptedGateway) -> Harness {
    let h = harness(gateway);
    h.controller.start_round().unwrap();
    h
}

#[tokio::test]
async fn correct_first_guess_scores_100_and_reveals_morph() {
    let h = playing(ScriptedGateway::new());

    let outcome = h.controller.submit_guess("squirtle").await.unwrap();

    assert_eq!(outcome, GuessOutcome::Correct { points: 100 });
    let state = h.controller.state();
    assert_eq!(state.phase, GamePhase::RevealedCorrect);
    assert_eq!(state.score, 100);
    let round = state.round.unwrap();
    assert_eq!(round.morphed_image_url.as_deref(), Some(SCRIPTED_MORPH));
    assert_eq!(round.remaining_guesses, 3);
}

#[tokio::test]
async fn guess_matching_ignores_case_and_outer_whitespace() {
    let h = playing(ScriptedGateway::new());
    let outcome = h.controller.submit_guess("  SqUiRtLe \n").await.unwrap();
    assert_eq!(outcome, GuessOutcome::Correct { points: 100 });
}

#[tokio::test]
async fn morph_reshapes_target_into_silhouette() {
    let h = playing(ScriptedGateway::new());
    h.controller.submit_guess("Squirtle").await.unwrap();

    assert_eq!(
        h.gateway.calls(),
        vec![GatewayCall::Morph {
            source: "https://img.test/7.png".into(),
            shape: "https://img.test/1.png".into(),
        }]
    );
}

#[tokio::test]
async fn three_misses_reveal_wrong_with_two_hints() {
    let h = playing(ScriptedGateway::new());

    let first = h.controller.submit_guess("Pikachu").await.unwrap();
    assert_eq!(
        first,
        GuessOutcome::Incorrect {
            remaining_guesses: 2,
            hint: Some("Color hint".into()),
        }
    );
    let second = h.controller.submit_guess("Eevee").await.unwrap();
    assert_eq!(
        second,
        GuessOutcome::Incorrect {
            remaining_guesses: 1,
            hint: Some("EasyPokedexEntry hint".into()),
        }
    );
    let third = h.controller.submit_guess("Mew").await.unwrap();
    assert_eq!(third, GuessOutcome::OutOfGuesses);

    let state = h.controller.state();
    assert_eq!(state.phase, GamePhase::RevealedWrong);
    assert_eq!(state.score, 0);
    let round = state.round.unwrap();
    assert_eq!(round.remaining_guesses, 0);
    assert_eq!(round.hints.len(), 2);
    assert_eq!(
        h.gateway.hint_kinds(),
        vec![HintKind::Color, HintKind::EasyPokedexEntry]
    );
    assert!(matches!(
        h.gateway.calls().last(),
        Some(GatewayCall::Morph { .. })
    ));
}

#[tokio::test]
async fn points_drop_with_each_miss() {
    let h = playing(ScriptedGateway::new());
    h.controller.submit_guess("Pikachu").await.unwrap();
    let outcome = h.controller.submit_guess("Squirtle").await.unwrap();
    assert_eq!(outcome, GuessOutcome::Correct { points: 50 });

    h.controller.start_round().unwrap();
    h.controller.submit_guess("Pikachu").await.unwrap();
    h.controller.submit_guess("Eevee").await.unwrap();
    let outcome = h.controller.submit_guess("Squirtle").await.unwrap();
    assert_eq!(outcome, GuessOutcome::Correct { points: 10 });

    assert_eq!(h.controller.state().score, 60);
}

#[tokio::test]
async fn failed_morph_still_reveals_original_image() {
    let h = playing(ScriptedGateway::new().failing_morph());

    h.controller.submit_guess("Squirtle").await.unwrap();

    let state = h.controller.state();
    assert_eq!(state.phase, GamePhase::RevealedCorrect);
    let round = state.round.unwrap();
    assert!(round.morphed_image_url.is_none());
    assert_eq!(round.display_image_url(), "https://img.test/7.png");
    assert_eq!(state.score, 100);
}

#[tokio::test]
async fn failed_hint_appends_fallback_and_keeps_playing() {
    let h = playing(ScriptedGateway::new().failing_hints());

    let outcome = h.controller.submit_guess("Pikachu").await.unwrap();

    assert_eq!(
        outcome,
        GuessOutcome::Incorrect {
            remaining_guesses: 2,
            hint: Some(FALLBACK_HINT.into()),
        }
    );
    let state = h.controller.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.round.unwrap().hints, vec![FALLBACK_HINT.to_string()]);
}

#[tokio::test]
async fn blank_or_idle_guesses_are_ignored() {
    let h = harness(ScriptedGateway::new());
    assert_eq!(
        h.controller.submit_guess("Squirtle").await.unwrap(),
        GuessOutcome::Ignored
    );
    assert_eq!(h.controller.state().phase, GamePhase::Idle);

    h.controller.start_round().unwrap();
    let before = h.controller.state();
    assert_eq!(
        h.controller.submit_guess("   ").await.unwrap(),
        GuessOutcome::Ignored
    );
    assert_eq!(h.controller.state(), before);
    assert!(h.gateway.calls().is_empty());
}

#[tokio::test]
async fn guesses_after_reveal_are_rejected() {
    let h = playing(ScriptedGateway::new());
    h.controller.submit_guess("Squirtle").await.unwrap();

    let err = h.controller.submit_guess("Squirtle").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::PhaseMismatch {
            actual: GamePhase::RevealedCorrect,
            ..
        }
    ));
    assert_eq!(h.controller.state().score, 100);
}

#[tokio::test]
async fn pending_hint_blocks_guesses_and_round_start() {
    let gate = Arc::new(Notify::new());
    let h = playing(ScriptedGateway::new().gated(gate.clone()));

    let pending = h.controller.submit_guess("Pikachu");
    let contender = async {
        while h.controller.state().phase != GamePhase::GeneratingHint {
            tokio::task::yield_now().await;
        }
        let snapshot = h.controller.snapshot();
        let guess_err = h.controller.submit_guess("Squirtle").await.unwrap_err();
        let start_err = h.controller.start_round().unwrap_err();
        gate.notify_one();
        (snapshot, guess_err, start_err)
    };

    let (outcome, (snapshot, guess_err, start_err)) = tokio::join!(pending, contender);

    assert_eq!(snapshot.loader_message, Some("Thinking of a clue..."));
    assert!(matches!(guess_err, DomainError::PhaseMismatch { .. }));
    assert!(matches!(start_err, DomainError::PhaseMismatch { .. }));
    assert!(matches!(
        outcome.unwrap(),
        GuessOutcome::Incorrect {
            remaining_guesses: 2,
            ..
        }
    ));
    // The rejected guess must not have been scored or counted
    let state = h.controller.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.round.unwrap().remaining_guesses, 2);
}

#[tokio::test]
async fn start_round_is_rejected_while_playing() {
    let h = playing(ScriptedGateway::new());
    let epoch = h.controller.state().epoch;

    let err = h.controller.start_round().unwrap_err();

    assert!(matches!(
        err,
        DomainError::PhaseMismatch {
            actual: GamePhase::Playing,
            ..
        }
    ));
    assert_eq!(h.controller.state().epoch, epoch);
}

#[tokio::test]
async fn new_round_resets_guesses_and_hints_but_keeps_score() {
    let h = playing(ScriptedGateway::new());
    h.controller.submit_guess("Pikachu").await.unwrap();
    h.controller.submit_guess("Squirtle").await.unwrap();
    let first = h.controller.state();
    assert_eq!(first.score, 50);

    h.controller.start_round().unwrap();

    let second = h.controller.state();
    assert_eq!(second.phase, GamePhase::Playing);
    assert_eq!(second.score, 50);
    assert_eq!(second.epoch, first.epoch + 1);
    let round = second.round.unwrap();
    assert_eq!(round.remaining_guesses, 3);
    assert!(round.hints.is_empty());
    assert!(round.morphed_image_url.is_none());
}

#[test]
fn tiny_catalog_cannot_start_a_round() {
    let h = harness_with(
        ScriptedGateway::new(),
        Catalog::new(vec![Creature::new("Mew", "https://img.test/151.png")]),
    );

    let err = h.controller.start_round().unwrap_err();

    assert_eq!(err, DomainError::CatalogTooSmall { size: 1 });
    let state = h.controller.state();
    assert_eq!(state.phase, GamePhase::Idle);
    assert!(state.round.is_none());
    assert!(h.cues.drain().is_empty());
}

#[tokio::test]
async fn cues_follow_the_round() {
    let h = playing(ScriptedGateway::new());
    h.controller.submit_guess("Squirtle").await.unwrap();
    assert_eq!(h.cues.drain(), vec![Cue::Intro, Cue::Correct]);

    h.controller.start_round().unwrap();
    for guess in ["Pikachu", "Eevee", "Mew"] {
        h.controller.submit_guess(guess).await.unwrap();
    }
    assert_eq!(
        h.cues.drain(),
        vec![Cue::Intro, Cue::Wrong, Cue::Wrong, Cue::Wrong]
    );
}

#[tokio::test]
async fn result_image_is_available_only_after_reveal() {
    let h = harness(ScriptedGateway::new());
    assert!(matches!(
        h.controller.result_image(),
        Err(DomainError::NotFound(..))
    ));

    h.controller.start_round().unwrap();
    assert!(matches!(
        h.controller.result_image(),
        Err(DomainError::PhaseMismatch { .. })
    ));

    h.controller.submit_guess("Squirtle").await.unwrap();
    let (url, filename) = h.controller.result_image().unwrap();
    assert_eq!(url, SCRIPTED_MORPH);
    assert_eq!(filename, "Squirtle-as-Bulbasaur.png");
}

#[tokio::test]
async fn revealed_snapshot_names_both_creatures_and_hides_hints() {
    let h = playing(ScriptedGateway::new());
    h.controller.submit_guess("Pikachu").await.unwrap();
    h.controller.submit_guess("squirtle").await.unwrap();

    let snap = h.controller.snapshot();
    let round = snap.round.unwrap();
    assert!(round.hints.is_empty());
    let reveal = round.reveal.unwrap();
    assert!(reveal.correct);
    assert!(reveal.morphed);
    assert_eq!(
        reveal.messages,
        vec![
            "The silhouette was Bulbasaur!".to_string(),
            "You got it! The answer was Squirtle!".to_string(),
        ]
    );
}
