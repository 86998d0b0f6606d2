//! Static creature catalog.
//!
//! The catalog is loaded once at startup (built-in list or a JSON file) and
//! shared read-only by every session.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::creature::Creature;
use crate::errors::domain::DomainError;

/// Minimum catalog size needed to draw a silhouette and a distinct target.
pub const MIN_CATALOG_SIZE: usize = 2;

const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// National dex number and name for the built-in list.
const BUILTIN: &[(u16, &str)] = &[
    (1, "Bulbasaur"),
    (4, "Charmander"),
    (7, "Squirtle"),
    (10, "Caterpie"),
    (16, "Pidgey"),
    (19, "Rattata"),
    (23, "Ekans"),
    (25, "Pikachu"),
    (27, "Sandshrew"),
    (35, "Clefairy"),
    (37, "Vulpix"),
    (39, "Jigglypuff"),
    (41, "Zubat"),
    (43, "Oddish"),
    (50, "Diglett"),
    (52, "Meowth"),
    (54, "Psyduck"),
    (58, "Growlithe"),
    (60, "Poliwag"),
    (63, "Abra"),
    (66, "Machop"),
    (74, "Geodude"),
    (77, "Ponyta"),
    (79, "Slowpoke"),
    (81, "Magnemite"),
    (92, "Gastly"),
    (94, "Gengar"),
    (95, "Onix"),
    (104, "Cubone"),
    (113, "Chansey"),
    (120, "Staryu"),
    (129, "Magikarp"),
    (131, "Lapras"),
    (132, "Ditto"),
    (133, "Eevee"),
    (143, "Snorlax"),
    (147, "Dratini"),
    (150, "Mewtwo"),
    (151, "Mew"),
];

/// Ordered, immutable list of creatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    creatures: Vec<Creature>,
}

impl Catalog {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Self { creatures }
    }

    /// Built-in first-generation list using official artwork sprites.
    pub fn builtin() -> Self {
        let creatures = BUILTIN
            .iter()
            .map(|(dex, name)| Creature::new(*name, format!("{ARTWORK_BASE}/{dex}.png")))
            .collect();
        Self { creatures }
    }

    /// Parse a JSON array of `{"name", "imageUrl"}` objects.
    pub fn from_json_str(raw: &str) -> Result<Self, DomainError> {
        let creatures: Vec<Creature> = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("invalid catalog JSON: {e}")))?;

        if let Some(blank) = creatures.iter().position(|c| c.name.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "catalog entry {blank} has an empty name"
            )));
        }

        // Distinct indices must mean distinct answers
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(creatures.len());
        for (i, creature) in creatures.iter().enumerate() {
            let key = creature.name.trim().to_lowercase();
            if let Some(first) = seen.insert(key, i) {
                return Err(DomainError::validation(format!(
                    "catalog entry {i} duplicates the name of entry {first} ({})",
                    creature.name.trim()
                )));
            }
        }

        Ok(Self { creatures })
    }

    pub fn load_path(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::infra(format!("failed to read catalog {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Whether a round can be started from this catalog.
    pub fn is_playable(&self) -> bool {
        self.creatures.len() >= MIN_CATALOG_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_playable() {
        let catalog = Catalog::builtin();
        assert!(catalog.is_playable());
        assert_eq!(catalog.get(0).map(|c| c.name.as_str()), Some("Bulbasaur"));
        assert!(catalog.creatures().iter().all(|c| c.image_url.ends_with(".png")));
    }

    #[test]
    fn builtin_names_are_unique() {
        let catalog = Catalog::builtin();
        let mut names: Vec<_> = catalog
            .creatures()
            .iter()
            .map(|c| c.name.to_lowercase())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn parses_camel_case_json() {
        let raw = r#"[
            {"name": "Bulbasaur", "imageUrl": "https://img/1.png"},
            {"name": "Squirtle", "imageUrl": "https://img/7.png"}
        ]"#;
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().image_url, "https://img/7.png");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json_str(r#"[{"name": "Mew"}]"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_blank_names() {
        let raw = r#"[{"name": "  ", "imageUrl": "https://img/1.png"}]"#;
        let err = Catalog::from_json_str(raw).unwrap_err();
        assert!(err.to_string().contains("entry 0"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let raw = r#"[
            {"name": "Pikachu", "imageUrl": "https://img/25.png"},
            {"name": "Eevee", "imageUrl": "https://img/133.png"},
            {"name": " pikachu ", "imageUrl": "https://img/25b.png"}
        ]"#;
        let err = Catalog::from_json_str(raw).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("entry 2 duplicates the name of entry 0"));
    }

    #[test]
    fn single_entry_catalog_is_not_playable() {
        let catalog = Catalog::new(vec![Creature::new("Mew", "https://img/151.png")]);
        assert!(!catalog.is_playable());
    }
}
