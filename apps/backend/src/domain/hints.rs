use serde::Serialize;

/// Text appended when the hint request fails.
pub const FALLBACK_HINT: &str = "Couldn't think of a clue, but that's not it!";

/// Category of textual clue; controls prompt phrasing and difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    /// Primary colour(s) of the creature.
    Color,
    /// Pokedex-style clue about appearance or habitat.
    AppearanceHabitat,
    /// Very easy pokedex-style clue that points strongly at the answer.
    EasyPokedexEntry,
}

impl HintKind {
    /// Hint to request after a miss, given the guesses left after it.
    ///
    /// Hints get easier as guesses run out; no hint once none remain.
    pub fn for_remaining(remaining_after_miss: u8) -> Option<HintKind> {
        match remaining_after_miss {
            0 => None,
            2 => Some(HintKind::Color),
            _ => Some(HintKind::EasyPokedexEntry),
        }
    }
}
