/// Points for a correct guess, keyed by the guesses left *before* it.
///
/// 3 → 100, 2 → 50, 1 → 10.
pub fn points_for_correct_guess(remaining_before: u8) -> u32 {
    match remaining_before {
        3 => 100,
        2 => 50,
        _ => 10,
    }
}
