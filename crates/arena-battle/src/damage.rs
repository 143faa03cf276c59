//! The damage formula.
//!
//! `max(1, attack - floor(defense / 2) + bonus)` with a bonus drawn
//! uniformly from `BONUS_MIN..=BONUS_MAX`.

use crate::error::{BattleError, EngineResult};
use crate::random::RandomSource;

/// Smallest random bonus added to a strike.
pub const BONUS_MIN: u32 = 1;
/// Largest random bonus added to a strike.
pub const BONUS_MAX: u32 = 5;

/// Damage for a strike with a known bonus. Never less than 1.
pub fn damage_for(attack: u32, defense: u32, bonus: u32) -> u32 {
    let raw = i64::from(attack) - i64::from(defense / 2) + i64::from(bonus);
    u32::try_from(raw.max(1)).unwrap_or(u32::MAX)
}

/// Roll the bonus and compute the damage of one strike.
///
/// Fails with [`BattleError::InternalFault`] if the source hands back a
/// bonus outside the allowed range.
pub fn roll_damage(
    attack: u32,
    defense: u32,
    rng: &mut impl RandomSource,
) -> EngineResult<u32> {
    let bonus = rng.roll(BONUS_MIN, BONUS_MAX);
    if !(BONUS_MIN..=BONUS_MAX).contains(&bonus) {
        return Err(BattleError::InternalFault(format!(
            "random bonus {bonus} outside {BONUS_MIN}..={BONUS_MAX}"
        )));
    }
    Ok(damage_for(attack, defense, bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRoll, ScriptedRolls};

    #[test]
    fn defense_is_halved_rounding_down() {
        // 25 - floor(5 / 2) + 3
        assert_eq!(damage_for(25, 5, 3), 26);
        // 40 - floor(15 / 2) + 3
        assert_eq!(damage_for(40, 15, 3), 36);
    }

    #[test]
    fn heavy_defense_still_deals_one() {
        assert_eq!(damage_for(0, 0, 1), 1);
        assert_eq!(damage_for(5, 1000, 5), 1);
        assert_eq!(damage_for(0, u32::MAX, 1), 1);
    }

    #[test]
    fn huge_attack_saturates() {
        assert_eq!(damage_for(u32::MAX, 0, 5), u32::MAX);
    }

    #[test]
    fn roll_uses_source_bonus() {
        let mut rng = ScriptedRolls::new([1, 5]);
        assert_eq!(roll_damage(10, 4, &mut rng).unwrap(), 9);
        assert_eq!(roll_damage(10, 4, &mut rng).unwrap(), 13);
    }

    #[test]
    fn out_of_range_bonus_is_internal_fault() {
        let mut rng = FixedRoll(9);
        let err = roll_damage(10, 4, &mut rng).unwrap_err();
        assert!(matches!(err, BattleError::InternalFault(_)));

        let mut rng = FixedRoll(0);
        assert!(roll_damage(10, 4, &mut rng).is_err());
    }
}
