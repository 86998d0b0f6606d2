/// A guess is blank when nothing but whitespace was typed.
pub fn is_blank(guess: &str) -> bool {
    guess.trim().is_empty()
}

/// Case-insensitive, whitespace-trimmed comparison against the answer.
pub fn is_correct_guess(guess: &str, answer: &str) -> bool {
    guess.trim().to_lowercase() == answer.trim().to_lowercase()
}
