//! Knowledge base - static farming strategies and crafting methods
//!
//! Pure data. Lookups are by exact key or by substring in table order,
//! falling back to a fixed default record per category.

mod crafting;
mod farming;

use serde::Serialize;

/// Placeholder location for cards the base knows nothing about
pub const UNKNOWN_CARD_LOCATION: &str = "Check PoE Wiki for specific farming locations";

/// How to farm a given item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FarmingStrategy {
    pub method: &'static str,
    pub locations: &'static [&'static str],
    pub strategy: &'static str,
}

impl FarmingStrategy {
    pub fn locations_owned(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.to_string()).collect()
    }
}

/// One entry of the crafting catalogue
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraftingMethod {
    pub name: &'static str,
    pub description: &'static str,
    pub materials: &'static [&'static str],
    pub strategy: &'static str,
    pub estimated_cost: f64,
    pub estimated_return: f64,
    pub base_score: f64,
}

/// Immutable lookup tables consulted by the farming and crafting advisors
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    pub scarabs: &'static [(&'static str, FarmingStrategy)],
    pub scarab_default: FarmingStrategy,
    pub fragments: &'static [(&'static str, FarmingStrategy)],
    pub fragment_default: FarmingStrategy,
    pub oil: FarmingStrategy,
    pub cards: &'static [(&'static str, FarmingStrategy)],
    pub card_default: FarmingStrategy,
    pub crafting: &'static [CraftingMethod],
}

/// Tables compiled into the binary
pub static STANDARD: KnowledgeBase = KnowledgeBase {
    scarabs: farming::SCARAB_STRATEGIES,
    scarab_default: farming::SCARAB_DEFAULT,
    fragments: farming::FRAGMENT_STRATEGIES,
    fragment_default: farming::FRAGMENT_DEFAULT,
    oil: farming::OIL_STRATEGY,
    cards: farming::CARD_STRATEGIES,
    card_default: farming::CARD_DEFAULT,
    crafting: crafting::CRAFTING_METHODS,
};

impl KnowledgeBase {
    pub fn standard() -> &'static KnowledgeBase {
        &STANDARD
    }

    /// Scarab strategy keyed by the last word of the item name
    pub fn scarab_strategy(&self, scarab_name: &str) -> &FarmingStrategy {
        let scarab_type = scarab_type(scarab_name);
        exact(self.scarabs, scarab_type).unwrap_or(&self.scarab_default)
    }

    /// First fragment key contained in the name wins
    pub fn fragment_strategy(&self, fragment_name: &str) -> &FarmingStrategy {
        self.fragments
            .iter()
            .find(|(key, _)| fragment_name.contains(key))
            .map(|(_, strategy)| strategy)
            .unwrap_or(&self.fragment_default)
    }

    pub fn oil_strategy(&self) -> &FarmingStrategy {
        &self.oil
    }

    pub fn find_card_strategy(&self, card_name: &str) -> Option<&FarmingStrategy> {
        exact(self.cards, card_name)
    }

    pub fn card_strategy(&self, card_name: &str) -> &FarmingStrategy {
        self.find_card_strategy(card_name).unwrap_or(&self.card_default)
    }

    /// Known drop locations for a card, or the wiki placeholder
    pub fn card_locations(&self, card_name: &str) -> Vec<String> {
        match self.find_card_strategy(card_name) {
            Some(strategy) => strategy.locations_owned(),
            None => vec![UNKNOWN_CARD_LOCATION.to_string()],
        }
    }

    pub fn crafting_methods(&self) -> &[CraftingMethod] {
        self.crafting
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        STANDARD
    }
}

/// "Gilded Breach Scarab" -> "Scarab"; a single-word name has no type
fn scarab_type(name: &str) -> &str {
    if name.contains(' ') {
        name.rsplit(' ').next().unwrap_or("")
    } else {
        ""
    }
}

fn exact<'a>(table: &'a [(&'static str, FarmingStrategy)], key: &str) -> Option<&'a FarmingStrategy> {
    table.iter().find(|(k, _)| *k == key).map(|(_, strategy)| strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scarab_lookup_uses_last_name_token() {
        let kb = KnowledgeBase::standard();

        assert_eq!(kb.scarab_strategy("Polished Breach").method, "Breach Farming");
        assert_eq!(kb.scarab_strategy("Winged Cartography").method, "Atlas Passive Tree + Map Farming");
        // Real scarab names end in "Scarab", which has no table entry
        assert_eq!(kb.scarab_strategy("Winged Breach Scarab"), &kb.scarab_default);
        assert_eq!(kb.scarab_strategy("Breach"), &kb.scarab_default);
    }

    #[test]
    fn test_fragment_lookup_is_first_substring_match() {
        let kb = KnowledgeBase::standard();

        assert_eq!(kb.fragment_strategy("Fragment of the Phoenix").method, "General Fragment Farming");
        assert_eq!(kb.fragment_strategy("Timeless Maraketh Emblem").method, "Legion Farming");
        assert_eq!(kb.fragment_strategy("Mortal Grief").method, "Atziri Farming");
        assert_eq!(kb.fragment_strategy("Sacrifice at Dusk").method, "Vaal Side Area Farming");
    }

    #[test]
    fn test_card_lookup_is_exact() {
        let kb = KnowledgeBase::standard();

        let doctor = kb.card_strategy("The Doctor");
        assert_eq!(doctor.locations, &["Burial Chambers", "Spider Forest"]);
        assert!(doctor.strategy.starts_with("Farm Burial Chambers"));

        assert!(kb.find_card_strategy("the doctor").is_none());
        assert_eq!(kb.card_strategy("The Doctor's Apprentice"), &kb.card_default);
    }

    #[test]
    fn test_card_locations_placeholder() {
        let kb = KnowledgeBase::standard();

        assert_eq!(kb.card_locations("The Nurse"), vec!["Tower Map".to_string()]);
        assert_eq!(kb.card_locations("Rain of Chaos"), vec![UNKNOWN_CARD_LOCATION.to_string()]);
    }

    #[test]
    fn test_crafting_catalogue_has_ten_entries() {
        let methods = KnowledgeBase::standard().crafting_methods();
        assert_eq!(methods.len(), 10);
        assert!(methods.iter().all(|m| m.base_score > 0.0 && m.estimated_return > m.estimated_cost));
    }
}
