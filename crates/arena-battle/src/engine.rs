//! The battle loop.
//!
//! Each round the hero strikes first; the mercenary retaliates only if it is
//! still standing. A knockout ends the battle on the spot, so the hero wins
//! any round in which both sides would have fallen.

use arena_core::{Character, Role};

use crate::damage::roll_damage;
use crate::error::{BattleError, EngineResult};
use crate::log::BattleLogEntry;
use crate::random::RandomSource;
use crate::result::{BattleResult, Winner};

/// Rounds fought before the battle is declared a draw.
pub const MAX_ROUNDS: u32 = 20;

/// Simulate a battle between a hero and a mercenary.
///
/// Neither character is modified; current HP lives only inside the loop.
/// Fails with [`BattleError::InvalidCombatants`] if either side has zero HP,
/// and with [`BattleError::InternalFault`] if the random source misbehaves.
pub fn simulate(
    hero: &Character,
    mercenary: &Character,
    rng: &mut impl RandomSource,
) -> EngineResult<BattleResult> {
    check_combatant(Role::Hero, hero)?;
    check_combatant(Role::Mercenary, mercenary)?;

    let mut log = Vec::new();
    let mut hero_hp = hero.hp;
    let mut mercenary_hp = mercenary.hp;
    let mut round = 1;
    let mut total_rounds = 0;

    while hero_hp > 0 && mercenary_hp > 0 && round <= MAX_ROUNDS {
        let damage = roll_damage(hero.attack, mercenary.defense, rng)?;
        mercenary_hp = mercenary_hp.saturating_sub(damage);
        total_rounds += 1;
        log.push(BattleLogEntry::strike(
            round,
            hero,
            mercenary,
            damage,
            mercenary_hp,
        ));
        if mercenary_hp == 0 {
            log.push(BattleLogEntry::knockout(round, mercenary, hero));
            break;
        }

        let damage = roll_damage(mercenary.attack, hero.defense, rng)?;
        hero_hp = hero_hp.saturating_sub(damage);
        log.push(BattleLogEntry::counter(
            round, mercenary, hero, damage, hero_hp,
        ));
        if hero_hp == 0 {
            log.push(BattleLogEntry::knockout(round, hero, mercenary));
            break;
        }

        round += 1;
    }

    let winner = match (hero_hp > 0, mercenary_hp > 0) {
        (true, false) => Winner::Hero,
        (false, true) => Winner::Mercenary,
        _ => {
            log.push(BattleLogEntry::draw(total_rounds));
            Winner::Draw
        }
    };

    tracing::debug!(
        hero = %hero.name,
        mercenary = %mercenary.name,
        %winner,
        total_rounds,
        hero_hp,
        mercenary_hp,
        "battle simulated"
    );

    Ok(BattleResult {
        winner,
        battle_log: log,
        total_rounds,
        errored: false,
    })
}

/// Simulate a battle, degrading every failure to [`BattleResult::fault`].
///
/// This is the lenient policy for callers that must always hand back a
/// result. The fallback carries `errored = true` so it is never mistaken for
/// a real draw.
pub fn simulate_or_fallback(
    hero: Option<&Character>,
    mercenary: Option<&Character>,
    rng: &mut impl RandomSource,
) -> BattleResult {
    let outcome = match (hero, mercenary) {
        (Some(hero), Some(mercenary)) => simulate(hero, mercenary, rng),
        _ => Err(BattleError::InvalidCombatants(
            "a hero and a mercenary must both be selected".to_string(),
        )),
    };
    outcome.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "battle degraded to fallback result");
        BattleResult::fault()
    })
}

fn check_combatant(role: Role, character: &Character) -> EngineResult<()> {
    character
        .validate()
        .map_err(|e| BattleError::InvalidCombatants(format!("{role}: {e}")))
}
