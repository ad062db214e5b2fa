//! Campaigns: ordered mission sequences with an aggregate reward

use serde::{Deserialize, Serialize};

use crate::core::types::{CampaignId, MissionId};
use crate::model::mission::Mission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Pending,
    Active,
    Completed,
    Failed,
}

/// A contract of several missions
///
/// The campaign owns its missions; resolved missions are removed from the
/// sequence, and an empty sequence means the contract is fulfilled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub missions: Vec<Mission>,
    pub duration_days: u32,
    pub current_day: u32,
    pub status: CampaignStatus,
    /// Paid on top of mission rewards once every mission is resolved
    pub reward: i64,
}

impl Campaign {
    pub fn mission(&self, id: MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    pub fn is_cleared(&self) -> bool {
        self.missions.is_empty()
    }
}
