//! Battle outcomes and their text renderings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::log::{BattleLogEntry, EntryKind};

/// Which side won a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The hero knocked out the mercenary.
    Hero,
    /// The mercenary knocked out the hero.
    Mercenary,
    /// Neither side was knocked out, or the battle could not run.
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Mercenary => write!(f, "mercenary"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// The complete, immutable outcome of one battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    /// Which side won.
    pub winner: Winner,
    /// Ordered narrative of the battle.
    pub battle_log: Vec<BattleLogEntry>,
    /// Number of rounds in which the hero struck.
    pub total_rounds: u32,
    /// Set when the battle could not run. The winner is then `Draw`, but no
    /// draw actually took place.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub errored: bool,
}

impl BattleResult {
    /// The result reported when a battle could not run.
    pub fn fault() -> Self {
        Self {
            winner: Winner::Draw,
            battle_log: vec![BattleLogEntry::fault()],
            total_rounds: 0,
            errored: true,
        }
    }

    /// A draw that was actually fought out to the round cap.
    pub fn is_genuine_draw(&self) -> bool {
        self.winner == Winner::Draw && !self.errored
    }

    /// Number of strike entries in the log.
    pub fn strike_count(&self) -> usize {
        self.battle_log.iter().filter(|e| e.is_strike()).count()
    }

    /// The closing announcement, if any.
    pub fn final_entry(&self) -> Option<&BattleLogEntry> {
        self.battle_log.last()
    }

    /// One-line summary of the outcome.
    pub fn headline(&self) -> String {
        if self.errored {
            return "Battle failed: no result".to_string();
        }
        let rounds = if self.total_rounds == 1 {
            "1 round".to_string()
        } else {
            format!("{} rounds", self.total_rounds)
        };
        match self.winner {
            Winner::Draw => format!("Draw after {rounds}"),
            winner => format!("Winner: {winner} after {rounds}"),
        }
    }

    /// Export the battle as plain text.
    pub fn export_text(&self) -> String {
        let mut out = format!("{}\n", self.headline());
        for entry in &self.battle_log {
            out.push_str(&format!("[round {}] {}\n", entry.round, entry.message));
        }
        out
    }

    /// Export the battle as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = format!("# {}\n\n", self.headline());
        let mut current_round = None;
        for entry in &self.battle_log {
            if current_round != Some(entry.round) && entry.kind == EntryKind::Strike {
                out.push_str(&format!("## Round {}\n\n", entry.round));
                current_round = Some(entry.round);
            }
            match entry.kind {
                EntryKind::Strike => out.push_str(&format!("- {}\n", entry.message)),
                _ => out.push_str(&format!("\n**{}**\n", entry.message)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Character;

    #[test]
    fn fault_is_distinguishable_from_draw() {
        let r = BattleResult::fault();
        assert_eq!(r.winner, Winner::Draw);
        assert_eq!(r.total_rounds, 0);
        assert_eq!(r.battle_log.len(), 1);
        assert!(r.errored);
        assert!(!r.is_genuine_draw());
        assert_eq!(r.headline(), "Battle failed: no result");
    }

    #[test]
    fn errored_flag_omitted_when_false() {
        let r = BattleResult {
            winner: Winner::Draw,
            battle_log: vec![BattleLogEntry::draw(20)],
            total_rounds: 20,
            errored: false,
        };
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("errored").is_none());
        assert_eq!(json["winner"], "draw");
        assert_eq!(json["totalRounds"], 20);
        assert!(r.is_genuine_draw());

        let json = serde_json::to_value(BattleResult::fault()).unwrap();
        assert_eq!(json["errored"], true);
    }

    #[test]
    fn stored_result_without_flag_parses() {
        let json = r#"{"winner":"hero","battleLog":[],"totalRounds":3}"#;
        let r: BattleResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.winner, Winner::Hero);
        assert!(!r.errored);
    }

    #[test]
    fn headline_pluralizes_rounds() {
        let a = Character::new(1, "A", 10, 50, 0);
        let b = Character::new(1, "B", 10, 1, 0);
        let r = BattleResult {
            winner: Winner::Hero,
            battle_log: vec![
                BattleLogEntry::strike(1, &a, &b, 52, 0),
                BattleLogEntry::knockout(1, &b, &a),
            ],
            total_rounds: 1,
            errored: false,
        };
        assert_eq!(r.headline(), "Winner: hero after 1 round");
        assert_eq!(r.strike_count(), 1);
        assert_eq!(r.final_entry().map(|e| e.kind), Some(EntryKind::Knockout));
    }

    #[test]
    fn markdown_groups_strikes_by_round() {
        let a = Character::new(1, "A", 10, 5, 0);
        let b = Character::new(1, "B", 10, 5, 0);
        let r = BattleResult {
            winner: Winner::Draw,
            battle_log: vec![
                BattleLogEntry::strike(1, &a, &b, 6, 4),
                BattleLogEntry::counter(1, &b, &a, 6, 4),
                BattleLogEntry::draw(1),
            ],
            total_rounds: 1,
            errored: false,
        };
        let md = r.export_markdown();
        assert!(md.starts_with("# Draw after 1 round\n"));
        assert_eq!(md.matches("## Round 1").count(), 1);
        assert!(md.contains("**The battle ended in a draw!"));
    }
}
