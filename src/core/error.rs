use thiserror::Error;

use crate::catalog::CatalogLoadError;
use crate::core::types::{EquipmentId, FighterId, MissionId, PilotId};
use crate::model::equipment::EquipmentKind;
use crate::model::fighter::EquipmentSlot;

#[derive(Error, Debug)]
pub enum SquadronError {
    #[error("Pilot not found: {0:?}")]
    PilotNotFound(PilotId),

    #[error("Spacefighter not found: {0:?}")]
    FighterNotFound(FighterId),

    #[error("Equipment not found: {0:?}")]
    EquipmentNotFound(EquipmentId),

    #[error("Mission not found: {0:?}")]
    MissionNotFound(MissionId),

    #[error("Equipment of kind {kind:?} does not fit the {slot:?} slot")]
    SlotMismatch {
        kind: EquipmentKind,
        slot: EquipmentSlot,
    },

    #[error("Insufficient credits: need {needed}, have {available}")]
    InsufficientCredits { needed: i64, available: i64 },

    #[error("Pilot is already assigned to another spacefighter: {0:?}")]
    PilotAlreadyAssigned(PilotId),

    #[error("A campaign is already in progress: {0}")]
    CampaignInProgress(String),

    #[error("No active campaign")]
    NoActiveCampaign,

    #[error("Campaign requirements not met: {0}")]
    RequirementsNotMet(String),

    #[error("Task force too small: mission requires {required}, got {pilots} pilots and {fighters} fighters")]
    UnderStrength {
        required: u32,
        pilots: u32,
        fighters: u32,
    },

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogLoadError),
}

pub type Result<T> = std::result::Result<T, SquadronError>;
