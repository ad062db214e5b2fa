//! Domain records - plain data with small invariant-preserving helpers

pub mod campaign;
pub mod equipment;
pub mod fighter;
pub mod mission;
pub mod pilot;
pub mod squadron;

pub use campaign::{Campaign, CampaignStatus};
pub use equipment::{Equipment, EquipmentKind, EquipmentStats};
pub use fighter::{EquipmentSlot, FighterStatus, Loadout, Spacefighter};
pub use mission::{
    Difficulty, Mission, MissionKind, MissionRequirements, MissionRisks, MissionStatus,
    Objectives, RecommendedEquipment, RecommendedSkills,
};
pub use pilot::{CombatRecord, Pilot, PilotStatus, Sex, SkillSet};
pub use squadron::Squadron;
