//! Mission scoring and randomized resolution
//!
//! Pure with respect to squadron state: these functions read pilots and
//! fighters, draw from the rng handed in, and return an outcome descriptor
//! for the ledger to apply.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{EQUIPMENT_SLOT_BONUS, EQUIPMENT_WEIGHT, PILOT_SKILL_WEIGHT};
use crate::core::types::PilotId;
use crate::model::fighter::Spacefighter;
use crate::model::mission::{Mission, MissionKind, RecommendedEquipment};
use crate::model::pilot::Pilot;

/// What happened on a mission
///
/// Equipment loss and fighter damage are whole-mission flags reported to
/// the caller; no inventory or fighter state is changed for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub success: bool,
    /// The chance the success draw was made against, in [0, 100]
    pub chance: f32,
    pub injured: Vec<PilotId>,
    pub equipment_lost: bool,
    pub fighters_damaged: bool,
    /// Mission reward on success, 0 on failure
    pub reward: i64,
}

/// The skill a pilot brings to this mission profile
fn pilot_mission_skill(pilot: &Pilot, kind: Option<MissionKind>) -> f32 {
    let s = &pilot.skills;
    match kind {
        Some(MissionKind::Patrol) | Some(MissionKind::Intercept) => {
            (s.air_to_air + s.maneuver) as f32 / 2.0
        }
        Some(MissionKind::Strike) => (s.air_to_ground + s.survival) as f32 / 2.0,
        Some(MissionKind::Escort) => (s.air_to_air + s.eccm) as f32 / 2.0,
        Some(MissionKind::Recon) => (s.ecm + s.survival) as f32 / 2.0,
        None => s.combat_average(),
    }
}

/// Bonus a fighter contributes from its loadout
///
/// Weapon, shield, and engine each count when fitted. Rack kinds count
/// only when the mission recommends them and at least one is carried.
fn fighter_equipment_bonus(fighter: &Spacefighter, recommended: Option<&RecommendedEquipment>) -> f32 {
    let mut bonus = 0.0;
    let loadout = &fighter.loadout;
    if loadout.weapon.is_some() {
        bonus += EQUIPMENT_SLOT_BONUS;
    }
    if loadout.shield.is_some() {
        bonus += EQUIPMENT_SLOT_BONUS;
    }
    if loadout.engine.is_some() {
        bonus += EQUIPMENT_SLOT_BONUS;
    }
    if let Some(rec) = recommended {
        if rec.missiles && !loadout.missiles.is_empty() {
            bonus += EQUIPMENT_SLOT_BONUS;
        }
        if rec.bombs && !loadout.bombs.is_empty() {
            bonus += EQUIPMENT_SLOT_BONUS;
        }
        if rec.flares && !loadout.flares.is_empty() {
            bonus += EQUIPMENT_SLOT_BONUS;
        }
    }
    bonus
}

/// Success chance in [0, 100] for a task force against a mission
pub fn success_chance(mission: &Mission, pilots: &[&Pilot], fighters: &[&Spacefighter]) -> f32 {
    if pilots.is_empty() || fighters.is_empty() {
        return 0.0;
    }

    let avg_pilot_skill: f32 = pilots
        .iter()
        .map(|p| pilot_mission_skill(p, mission.kind))
        .sum::<f32>()
        / pilots.len() as f32;

    let recommended = mission.requirements.recommended_equipment.as_ref();
    let equipment_bonus: f32 = fighters
        .iter()
        .map(|f| fighter_equipment_bonus(f, recommended))
        .sum::<f32>()
        / fighters.len() as f32;

    let raw = avg_pilot_skill * PILOT_SKILL_WEIGHT + equipment_bonus * EQUIPMENT_WEIGHT;
    (raw * mission.difficulty.multiplier()).clamp(0.0, 100.0)
}

/// Draw the mission outcome
///
/// One uniform draw in [0, 100) decides success, inclusive on the success
/// side; a chance of exactly 0 never succeeds and 100 always does. With a
/// risk profile present, each pilot gets an independent injury draw, then
/// one draw each decides equipment loss and fighter damage for the whole
/// mission. Without risks no further draws are made.
pub fn resolve(
    mission: &Mission,
    pilots: &[&Pilot],
    fighters: &[&Spacefighter],
    rng: &mut impl Rng,
) -> MissionOutcome {
    let chance = success_chance(mission, pilots, fighters);
    let roll: f32 = rng.gen_range(0.0..100.0);
    let success = chance > 0.0 && roll <= chance;

    let mut injured = Vec::new();
    let mut equipment_lost = false;
    let mut fighters_damaged = false;

    if let Some(risks) = &mission.risks {
        for pilot in pilots {
            if rng.gen::<f32>() < risks.pilot_injury {
                injured.push(pilot.id);
            }
        }
        equipment_lost = rng.gen::<f32>() < risks.equipment_loss;
        fighters_damaged = rng.gen::<f32>() < risks.fighter_damage;
    }

    MissionOutcome {
        success,
        chance,
        injured,
        equipment_lost,
        fighters_damaged,
        reward: if success { mission.reward } else { 0 },
    }
}
