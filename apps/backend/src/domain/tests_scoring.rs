use crate::domain::hints::HintKind;
use crate::domain::round::GUESSES_PER_ROUND;
use crate::domain::scoring::points_for_correct_guess;

#[test]
fn scoring_schedule_by_guesses_left() {
    assert_eq!(points_for_correct_guess(3), 100);
    assert_eq!(points_for_correct_guess(2), 50);
    assert_eq!(points_for_correct_guess(1), 10);
}

#[test]
fn reward_decays_with_each_miss() {
    let schedule: Vec<u32> = (1..=GUESSES_PER_ROUND)
        .rev()
        .map(points_for_correct_guess)
        .collect();
    assert_eq!(schedule, vec![100, 50, 10]);
    assert!(schedule.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn hints_get_easier_as_guesses_deplete() {
    assert_eq!(HintKind::for_remaining(2), Some(HintKind::Color));
    assert_eq!(HintKind::for_remaining(1), Some(HintKind::EasyPokedexEntry));
    assert_eq!(HintKind::for_remaining(0), None);
}
