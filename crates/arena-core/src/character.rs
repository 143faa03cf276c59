use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier of a character within its roster.
///
/// Heroes and mercenaries are numbered independently, so the same id can
/// name one character in each roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The roster a character belongs to, which is also its side in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The side that strikes first.
    Hero,
    /// The side that retaliates.
    Mercenary,
}

impl Role {
    /// Both roles, heroes first.
    pub const ALL: [Role; 2] = [Role::Hero, Role::Mercenary];

    /// Capitalized label for headings and messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Mercenary => "Mercenary",
        }
    }

    /// Parse a role name, accepting singular and plural forms.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "hero" | "heroes" => Ok(Self::Hero),
            "mercenary" | "mercenaries" | "merc" => Ok(Self::Mercenary),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Mercenary => write!(f, "mercenary"),
        }
    }
}

/// A combatant record as stored in a roster.
///
/// `hp` is the maximum hit points. Battles track current HP on their own and
/// never modify the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Identifier within the roster.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Maximum hit points.
    pub hp: u32,
    /// Flat attack power.
    pub attack: u32,
    /// Flat defense; halved (rounding down) when mitigating a strike.
    pub defense: u32,
    /// Flavor text.
    pub description: String,
    /// Optional portrait location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Character {
    /// Create a character with an empty description.
    pub fn new(id: u32, name: impl Into<String>, hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            id: CharacterId(id),
            name: name.into(),
            hp,
            attack,
            defense,
            description: String::new(),
            image_url: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the portrait location.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Check that the character can enter a battle.
    pub fn validate(&self) -> CoreResult<()> {
        if self.hp == 0 {
            return Err(CoreError::InvalidStats {
                id: self.id,
                name: self.name.clone(),
                reason: "hp must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
