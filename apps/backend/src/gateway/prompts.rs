use crate::domain::HintKind;

/// Instruction sent with the (source, shape) image pair.
pub const MORPH_PROMPT: &str = "Take the first image (the 'source pokemon') and reshape it to \
perfectly match the silhouette of the second image (the 'target shape'). The final image must \
retain the source pokemon's colors, textures, and features, but be morphed into the target \
shape. Crucially, the final image **must have a completely transparent background**. Do not add \
any background color or shadows. The output should be a clean PNG with a transparent background.";

/// Prompt for a single hint. Each kind forbids naming the creature; only the
/// colour kind may talk about colour.
pub fn hint_prompt(creature_name: &str, kind: HintKind) -> String {
    match kind {
        HintKind::Color => format!(
            "Give a short, one-sentence clue about the primary color(s) of the Pokémon \
             \"{creature_name}\". Do not mention its name or what type of creature it is. \
             For example, for Squirtle, a good clue is \"It is primarily a light blue color.\""
        ),
        HintKind::AppearanceHabitat => format!(
            "Give me a short, one-sentence Pokedex-style clue for the Pokémon \
             \"{creature_name}\", focusing on its appearance or habitat. Do not mention its name \
             or its primary colors. For example, for Pikachu, a good clue is \"It lives in \
             forests and stores electricity in its cheeks.\""
        ),
        HintKind::EasyPokedexEntry => format!(
            "Give me a short, one-sentence, very easy Pokedex-style clue for the Pokémon \
             \"{creature_name}\". The clue should be simple and hint strongly at its identity \
             without using its name. For example, for Snorlax, a good clue is \"This large \
             Pokémon is famous for blocking paths while it sleeps.\" Do not mention its color."
        ),
    }
}
