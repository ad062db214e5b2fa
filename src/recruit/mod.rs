//! Recruitment - candidate pilots and fresh hulls
//!
//! Candidates are rolled by rank tier: the tier fixes the level band, and
//! every derived stat scales off the rolled level.

pub mod names;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::{HIRE_BASE_COST, HIRE_COST_PER_LEVEL, RECRUIT_FATIGUE, RECRUIT_MORALE};
use crate::core::types::PilotId;
use crate::model::fighter::Spacefighter;
use crate::model::pilot::{CombatRecord, Pilot, PilotStatus, Sex, SkillSet};

/// Hiring tier, which fixes the candidate level band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    Rookie,
    Seasoned,
    Elite,
}

impl RankTier {
    /// Inclusive level band for candidates of this tier
    pub fn level_range(&self) -> (u32, u32) {
        match self {
            RankTier::Rookie => (1, 3),
            RankTier::Seasoned => (4, 6),
            RankTier::Elite => (7, 10),
        }
    }

    /// The tier a level falls in
    pub fn for_level(level: u32) -> RankTier {
        if level >= 7 {
            RankTier::Elite
        } else if level >= 4 {
            RankTier::Seasoned
        } else {
            RankTier::Rookie
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RankTier::Rookie => "Rookie",
            RankTier::Seasoned => "Seasoned",
            RankTier::Elite => "Elite",
        }
    }
}

/// Hiring fee for a candidate of the given level
pub fn hire_cost(level: u32) -> i64 {
    HIRE_BASE_COST + level as i64 * HIRE_COST_PER_LEVEL
}

struct SkillRoll {
    skill: u32,
    exp: u32,
}

/// Roll one skill/experience pair for a level
///
/// Base skill is 30 plus 5 per level, with a floor of 50 for the two
/// air-combat skills, then +/-10 variation capped at 100.
fn roll_skill(level: u32, air_combat: bool, rng: &mut ChaCha8Rng) -> SkillRoll {
    let mut base = 30 + level as i32 * 5;
    if air_combat {
        base = base.max(50);
    }
    SkillRoll {
        skill: (base + rng.gen_range(-10..10)).min(100) as u32,
        exp: rng.gen_range(0..500) + level * 200,
    }
}

/// Confirmed kills: 1.5 per level, with half a level of variation
fn roll_kills(level: u32, rng: &mut ChaCha8Rng) -> u32 {
    let base = (level as f32 * 1.5) as i32;
    let variation = (level as f32 * 0.5) as i32;
    let kills = if variation == 0 {
        base
    } else {
        base + rng.gen_range(-variation..variation)
    };
    kills.max(0) as u32
}

/// Roll one candidate of the given tier
pub fn generate_pilot(tier: RankTier, rng: &mut ChaCha8Rng) -> Pilot {
    let (min_level, max_level) = tier.level_range();
    let level = rng.gen_range(min_level..=max_level);

    let air_to_air = roll_skill(level, true, rng);
    let air_to_ground = roll_skill(level, true, rng);
    let ecm = roll_skill(level, false, rng);
    let eccm = roll_skill(level, false, rng);
    let maneuver = roll_skill(level, false, rng);
    let survival = roll_skill(level, false, rng);

    let name = names::PILOT_NAMES[rng.gen_range(0..names::PILOT_NAMES.len())];
    let call_sign = names::CALL_SIGNS[rng.gen_range(0..names::CALL_SIGNS.len())];
    let age = rng.gen_range(20..40);
    let sex = match rng.gen_range(0..3) {
        0 => Sex::Male,
        1 => Sex::Female,
        _ => Sex::Other,
    };

    Pilot {
        id: PilotId::new(),
        name: name.into(),
        call_sign: call_sign.into(),
        rank: RankTier::for_level(level).name().into(),
        level,
        age,
        sex,
        skills: SkillSet {
            air_to_air: air_to_air.skill,
            air_to_ground: air_to_ground.skill,
            ecm: ecm.skill,
            eccm: eccm.skill,
            maneuver: maneuver.skill,
            survival: survival.skill,
        },
        experience: SkillSet {
            air_to_air: air_to_air.exp,
            air_to_ground: air_to_ground.exp,
            ecm: ecm.exp,
            eccm: eccm.exp,
            maneuver: maneuver.exp,
            survival: survival.exp,
        },
        combat_record: CombatRecord {
            air_to_air_kills: roll_kills(level, rng),
            ground_target_kills: roll_kills(level, rng),
        },
        status: PilotStatus::Available,
        morale: RECRUIT_MORALE,
        fatigue: RECRUIT_FATIGUE,
    }
}

/// Roll a pool of candidates for the hiring board
pub fn candidate_pool(tier: RankTier, count: usize, rng: &mut ChaCha8Rng) -> Vec<Pilot> {
    (0..count).map(|_| generate_pilot(tier, rng)).collect()
}

/// Roll a new hull with a pool name and tail number
pub fn generate_fighter(rng: &mut ChaCha8Rng) -> Spacefighter {
    let name = names::HULL_NAMES[rng.gen_range(0..names::HULL_NAMES.len())];
    Spacefighter::new(format!("{}-{}", name, rng.gen_range(0..1000)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_tier_bands() {
        assert_eq!(RankTier::Rookie.level_range(), (1, 3));
        assert_eq!(RankTier::Seasoned.level_range(), (4, 6));
        assert_eq!(RankTier::Elite.level_range(), (7, 10));

        assert_eq!(RankTier::for_level(1), RankTier::Rookie);
        assert_eq!(RankTier::for_level(4), RankTier::Seasoned);
        assert_eq!(RankTier::for_level(6), RankTier::Seasoned);
        assert_eq!(RankTier::for_level(7), RankTier::Elite);
        assert_eq!(RankTier::for_level(10), RankTier::Elite);
    }

    #[test]
    fn test_hire_cost_scales_with_level() {
        assert_eq!(hire_cost(1), 1500);
        assert_eq!(hire_cost(4), 3000);
        assert_eq!(hire_cost(10), 6000);
    }

    #[test]
    fn test_rookies_are_fresh_and_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let p = generate_pilot(RankTier::Rookie, &mut rng);
            assert!((1..=3).contains(&p.level));
            assert_eq!(p.rank, "Rookie");
            assert_eq!(p.status, PilotStatus::Available);
            assert_eq!(p.morale, 75);
            assert_eq!(p.fatigue, 0);
            assert!((20..40).contains(&p.age));
        }
    }

    #[test]
    fn test_air_combat_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let p = generate_pilot(RankTier::Rookie, &mut rng);
            // Air-combat base floors at 50; variation reaches at most -10
            assert!(p.skills.air_to_air >= 40, "got {}", p.skills.air_to_air);
            assert!(p.skills.air_to_ground >= 40);
        }
    }

    #[test]
    fn test_skills_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let p = generate_pilot(RankTier::Elite, &mut rng);
            let s = &p.skills;
            for skill in [
                s.air_to_air,
                s.air_to_ground,
                s.ecm,
                s.eccm,
                s.maneuver,
                s.survival,
            ] {
                assert!(skill <= 100);
            }
        }
    }

    #[test]
    fn test_experience_scales_with_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let p = generate_pilot(RankTier::Elite, &mut rng);
            let floor = p.level * 200;
            assert!(p.experience.air_to_air >= floor);
            assert!(p.experience.air_to_air < floor + 500);
            assert!(p.experience.survival >= floor);
        }
    }

    #[test]
    fn test_kills_within_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let p = generate_pilot(RankTier::Seasoned, &mut rng);
            let base = (p.level as f32 * 1.5) as u32;
            let variation = (p.level as f32 * 0.5) as u32;
            assert!(p.combat_record.air_to_air_kills <= base + variation);
            assert!(p.combat_record.air_to_air_kills + variation >= base);
        }
    }

    #[test]
    fn test_candidate_pool_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pool = candidate_pool(RankTier::Seasoned, 3, &mut rng);
        assert_eq!(pool.len(), 3);
        for p in &pool {
            assert!((4..=6).contains(&p.level));
        }
    }

    #[test]
    fn test_fighter_names_use_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let fighter = generate_fighter(&mut rng);
            let (hull, tail) = fighter.name.split_once('-').expect("name has tail number");
            assert!(names::HULL_NAMES.contains(&hull));
            let tail: u32 = tail.parse().expect("numeric tail");
            assert!(tail < 1000);
        }
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let first = generate_pilot(RankTier::Elite, &mut a);
        let second = generate_pilot(RankTier::Elite, &mut b);
        assert_eq!(first.name, second.name);
        assert_eq!(first.call_sign, second.call_sign);
        assert_eq!(first.level, second.level);
        assert_eq!(first.skills, second.skills);
        assert_eq!(first.combat_record, second.combat_record);
        // Identity is always fresh
        assert_ne!(first.id, second.id);
    }
}
