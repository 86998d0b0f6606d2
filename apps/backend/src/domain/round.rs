use crate::domain::creature::Creature;

/// Guesses available at the start of every round.
pub const GUESSES_PER_ROUND: u8 = 3;

/// One play cycle from silhouette selection to reveal.
///
/// A round is replaced wholesale when the next one starts; within a round the
/// hint list only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Creature whose outline is shown.
    pub silhouette: Creature,
    /// Creature the player has to name.
    pub target: Creature,
    pub remaining_guesses: u8,
    /// Hints in the order they were revealed.
    pub hints: Vec<String>,
    /// `data:` URI of the morph result, when the morph succeeded.
    pub morphed_image_url: Option<String>,
}

impl Round {
    pub fn new(silhouette: Creature, target: Creature) -> Self {
        Self {
            silhouette,
            target,
            remaining_guesses: GUESSES_PER_ROUND,
            hints: Vec::new(),
            morphed_image_url: None,
        }
    }

    /// Image shown on reveal: the morph when present, else the target sprite.
    pub fn display_image_url(&self) -> &str {
        self.morphed_image_url
            .as_deref()
            .unwrap_or(&self.target.image_url)
    }

    pub fn display_alt_text(&self) -> String {
        if self.morphed_image_url.is_some() {
            format!(
                "A reformed Pokémon: {} in the shape of {}",
                self.target.name, self.silhouette.name
            )
        } else {
            self.target.name.clone()
        }
    }

    /// File name offered when saving the result image.
    pub fn download_filename(&self) -> String {
        format!("{}-as-{}.png", self.target.name, self.silhouette.name)
    }
}
