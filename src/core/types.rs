//! Core identifier types used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for pilots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PilotId(pub Uuid);

impl PilotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PilotId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for spacefighters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FighterId(pub Uuid);

impl FighterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FighterId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for equipment instances
///
/// Each purchased item gets its own id; catalog templates and the
/// instances cloned from them are distinct entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquipmentId(pub Uuid);

impl EquipmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EquipmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for missions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub Uuid);

impl MissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MissionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for campaigns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub Uuid);

impl CampaignId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CampaignId {
    fn default() -> Self {
        Self::new()
    }
}
