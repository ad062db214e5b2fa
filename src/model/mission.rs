//! Mission definitions: requirements, risks, and objectives

use serde::{Deserialize, Serialize};

use crate::core::config::{DIFFICULTY_EASY_MULT, DIFFICULTY_HARD_MULT, DIFFICULTY_MEDIUM_MULT};
use crate::core::types::MissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Multiplier applied to the weighted success score
    pub fn multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => DIFFICULTY_EASY_MULT,
            Difficulty::Medium => DIFFICULTY_MEDIUM_MULT,
            Difficulty::Hard => DIFFICULTY_HARD_MULT,
        }
    }
}

/// Mission profile, which selects the relevant pilot skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    Patrol,
    Escort,
    Strike,
    Intercept,
    Recon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Advisory equipment flags; the rack flags feed the scoring bonus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedEquipment {
    #[serde(default)]
    pub weapons: bool,
    #[serde(default)]
    pub missiles: bool,
    #[serde(default)]
    pub bombs: bool,
    #[serde(default)]
    pub flares: bool,
}

/// Advisory per-skill minimums shown to the player; not enforced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedSkills {
    pub air_to_air: Option<u32>,
    pub air_to_ground: Option<u32>,
    pub ecm: Option<u32>,
    pub eccm: Option<u32>,
    pub maneuver: Option<u32>,
    pub survival: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionRequirements {
    pub min_pilots: u32,
    pub min_combat_rating: f32,
    pub recommended_equipment: Option<RecommendedEquipment>,
    pub recommended_skills: Option<RecommendedSkills>,
}

/// Independent per-mission risk probabilities, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionRisks {
    pub pilot_injury: f32,
    pub equipment_loss: f32,
    pub fighter_damage: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objectives {
    pub primary: String,
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub kind: Option<MissionKind>,
    pub reward: i64,
    pub duration_days: u32,
    pub requirements: MissionRequirements,
    pub risks: Option<MissionRisks>,
    pub objectives: Option<Objectives>,
    pub status: MissionStatus,
}
