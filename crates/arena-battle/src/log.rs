//! Battle log entries.

use serde::{Deserialize, Serialize};

use arena_core::Character;

/// What a log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// One combatant hit the other.
    #[default]
    Strike,
    /// A combatant dropped to zero HP.
    Knockout,
    /// The round cap was reached with both combatants standing.
    Draw,
    /// The simulation could not run.
    Fault,
}

/// One line of the battle narrative.
///
/// Announcements (knockout, draw, fault) leave `attacker` and `defender`
/// empty and report zero damage and HP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleLogEntry {
    /// Round the entry belongs to (1-based; 0 for a fault).
    pub round: u32,
    /// Name of the striking combatant.
    pub attacker: String,
    /// Name of the struck combatant.
    pub defender: String,
    /// Damage dealt by the strike.
    pub damage: u32,
    /// Defender's HP after the strike.
    pub remaining_hp: u32,
    /// Human-readable description.
    pub message: String,
    /// What the entry records.
    #[serde(default)]
    pub kind: EntryKind,
}

impl BattleLogEntry {
    /// The hero's opening strike of a round.
    pub fn strike(
        round: u32,
        attacker: &Character,
        defender: &Character,
        damage: u32,
        remaining_hp: u32,
    ) -> Self {
        Self {
            round,
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            damage,
            remaining_hp,
            message: format!(
                "{} strikes {} for {damage} damage. {} HP: {remaining_hp}",
                attacker.name, defender.name, defender.name
            ),
            kind: EntryKind::Strike,
        }
    }

    /// The mercenary's retaliation.
    pub fn counter(
        round: u32,
        attacker: &Character,
        defender: &Character,
        damage: u32,
        remaining_hp: u32,
    ) -> Self {
        Self {
            message: format!(
                "{} strikes back at {} for {damage} damage. {} HP: {remaining_hp}",
                attacker.name, defender.name, defender.name
            ),
            ..Self::strike(round, attacker, defender, damage, remaining_hp)
        }
    }

    /// `loser` has dropped to zero HP.
    pub fn knockout(round: u32, loser: &Character, victor: &Character) -> Self {
        Self::announcement(
            round,
            EntryKind::Knockout,
            format!("{} has been defeated! {} wins!", loser.name, victor.name),
        )
    }

    /// Both combatants are still standing after the last round.
    pub fn draw(round: u32) -> Self {
        Self::announcement(
            round,
            EntryKind::Draw,
            "The battle ended in a draw! Both fighters are still standing.".to_string(),
        )
    }

    /// The simulation could not run.
    pub fn fault() -> Self {
        Self::announcement(
            0,
            EntryKind::Fault,
            "An error occurred during the battle".to_string(),
        )
    }

    fn announcement(round: u32, kind: EntryKind, message: String) -> Self {
        Self {
            round,
            attacker: String::new(),
            defender: String::new(),
            damage: 0,
            remaining_hp: 0,
            message,
            kind,
        }
    }

    /// Whether this entry is a strike rather than an announcement.
    pub fn is_strike(&self) -> bool {
        self.kind == EntryKind::Strike
    }
}
