//! Pilot records: identity, skills, experience, and duty status

use serde::{Deserialize, Serialize};

use crate::core::config::{STAT_MAX, STAT_MIN};
use crate::core::types::PilotId;

/// The six flight skills, each scored 0-100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub air_to_air: u32,
    pub air_to_ground: u32,
    pub ecm: u32,
    pub eccm: u32,
    pub maneuver: u32,
    pub survival: u32,
}

impl SkillSet {
    /// Mean of all six skills
    pub fn average(&self) -> f32 {
        (self.air_to_air
            + self.air_to_ground
            + self.ecm
            + self.eccm
            + self.maneuver
            + self.survival) as f32
            / 6.0
    }

    /// Mean of the three combat skills (air-to-air, air-to-ground, maneuver)
    pub fn combat_average(&self) -> f32 {
        (self.air_to_air + self.air_to_ground + self.maneuver) as f32 / 3.0
    }
}

/// Confirmed kill counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRecord {
    pub air_to_air_kills: u32,
    pub ground_target_kills: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Duty status of a pilot
///
/// Deployed means seated in a fighter. Status changes through the ledger
/// carry morale/fatigue side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PilotStatus {
    Available,
    Deployed,
    Injured,
    Training,
    OnCall,
    RAndR,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pilot {
    pub id: PilotId,
    pub name: String,
    pub call_sign: String,
    /// Display rank derived from level (Rookie / Seasoned / Elite)
    pub rank: String,
    pub level: u32,
    pub age: u32,
    pub sex: Sex,
    pub skills: SkillSet,
    /// Accumulated per-skill experience; written at generation, not yet
    /// consumed by any progression rule.
    pub experience: SkillSet,
    pub combat_record: CombatRecord,
    pub status: PilotStatus,
    pub morale: i32,
    pub fatigue: i32,
}

impl Pilot {
    /// Add to morale, clamped to the stat band
    pub fn adjust_morale(&mut self, delta: i32) {
        self.morale = (self.morale + delta).clamp(STAT_MIN, STAT_MAX);
    }

    /// Add to fatigue, clamped to the stat band
    pub fn adjust_fatigue(&mut self, delta: i32) {
        self.fatigue = (self.fatigue + delta).clamp(STAT_MIN, STAT_MAX);
    }

    /// Eligible for campaign work (counts toward combat rating)
    pub fn is_combat_ready(&self) -> bool {
        matches!(self.status, PilotStatus::Available | PilotStatus::Deployed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pilot() -> Pilot {
        Pilot {
            id: PilotId::new(),
            name: "Alex".into(),
            call_sign: "Maverick".into(),
            rank: "Rookie".into(),
            level: 1,
            age: 25,
            sex: Sex::Other,
            skills: SkillSet {
                air_to_air: 60,
                air_to_ground: 30,
                ecm: 40,
                eccm: 40,
                maneuver: 60,
                survival: 50,
            },
            experience: SkillSet::default(),
            combat_record: CombatRecord::default(),
            status: PilotStatus::Available,
            morale: 75,
            fatigue: 0,
        }
    }

    #[test]
    fn test_skill_averages() {
        let pilot = test_pilot();
        assert!((pilot.skills.average() - 280.0 / 6.0).abs() < 0.001);
        assert!((pilot.skills.combat_average() - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_morale_clamped_high() {
        let mut pilot = test_pilot();
        pilot.adjust_morale(200);
        assert_eq!(pilot.morale, 100);
    }

    #[test]
    fn test_fatigue_clamped_low() {
        let mut pilot = test_pilot();
        pilot.adjust_fatigue(-50);
        assert_eq!(pilot.fatigue, 0);
    }

    #[test]
    fn test_combat_ready_statuses() {
        let mut pilot = test_pilot();
        assert!(pilot.is_combat_ready());
        pilot.status = PilotStatus::Deployed;
        assert!(pilot.is_combat_ready());
        pilot.status = PilotStatus::Injured;
        assert!(!pilot.is_combat_ready());
        pilot.status = PilotStatus::RAndR;
        assert!(!pilot.is_combat_ready());
    }
}
