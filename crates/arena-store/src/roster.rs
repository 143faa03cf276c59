//! The starting rosters written into a fresh store.

use arena_core::Character;

/// The four heroes every new store starts with.
pub fn default_heroes() -> Vec<Character> {
    vec![
        Character::new(1, "Sword Knight", 120, 25, 15)
            .with_description("A sturdy warrior wielding a legendary blade"),
        Character::new(2, "Fire Mage", 80, 35, 8)
            .with_description("A master of devastating fire magic"),
        Character::new(3, "Elven Archer", 90, 30, 12)
            .with_description("An unerring marksman from the elven woods"),
        Character::new(4, "Holy Paladin", 140, 20, 20)
            .with_description("A sacred guardian wielding the power of light"),
    ]
}

/// The four mercenaries every new store starts with.
pub fn default_mercenaries() -> Vec<Character> {
    vec![
        Character::new(1, "Shadow Assassin", 70, 40, 5)
            .with_description("A swift killer from the darkness"),
        Character::new(2, "Orc Berserker", 110, 28, 10)
            .with_description("A brutal fighter who knows no fear"),
        Character::new(3, "White Healer", 60, 15, 18)
            .with_description("A healer with restorative powers"),
        Character::new(4, "Necromancer", 75, 32, 8)
            .with_description("A lord of death and dark spirits"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rosters_are_battle_ready() {
        for c in default_heroes().iter().chain(default_mercenaries().iter()) {
            assert!(c.validate().is_ok(), "{} should be valid", c.name);
        }
    }

    #[test]
    fn ids_are_unique_per_roster() {
        for roster in [default_heroes(), default_mercenaries()] {
            let ids: HashSet<u32> = roster.iter().map(|c| c.id.0).collect();
            assert_eq!(ids.len(), roster.len());
        }
    }
}
