//! The squadron aggregate: roster, fleet, inventory, and finances

use serde::{Deserialize, Serialize};

use crate::core::config::{INITIAL_CREDITS, INITIAL_REPUTATION, INITIAL_SQUADRON_NAME};
use crate::core::types::{EquipmentId, FighterId, PilotId};
use crate::model::campaign::Campaign;
use crate::model::equipment::Equipment;
use crate::model::fighter::Spacefighter;
use crate::model::pilot::Pilot;

/// The aggregate root for all squadron state
///
/// Credits are never driven negative by purchases (the ledger rejects
/// unaffordable ones); reputation is unbounded in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squadron {
    pub name: String,
    pub credits: i64,
    pub reputation: i64,
    pub pilots: Vec<Pilot>,
    pub fighters: Vec<Spacefighter>,
    /// Purchased equipment not currently mounted on any fighter
    pub inventory: Vec<Equipment>,
    pub active_campaign: Option<Campaign>,
}

impl Squadron {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credits: INITIAL_CREDITS,
            reputation: INITIAL_REPUTATION,
            pilots: Vec::new(),
            fighters: Vec::new(),
            inventory: Vec::new(),
            active_campaign: None,
        }
    }

    pub fn pilot(&self, id: PilotId) -> Option<&Pilot> {
        self.pilots.iter().find(|p| p.id == id)
    }

    pub fn pilot_mut(&mut self, id: PilotId) -> Option<&mut Pilot> {
        self.pilots.iter_mut().find(|p| p.id == id)
    }

    pub fn fighter(&self, id: FighterId) -> Option<&Spacefighter> {
        self.fighters.iter().find(|f| f.id == id)
    }

    pub fn fighter_mut(&mut self, id: FighterId) -> Option<&mut Spacefighter> {
        self.fighters.iter_mut().find(|f| f.id == id)
    }

    /// Position of an item in the unassigned inventory
    pub fn inventory_position(&self, id: EquipmentId) -> Option<usize> {
        self.inventory.iter().position(|e| e.id == id)
    }

    /// The fighter currently holding this pilot, if any
    pub fn fighter_of_pilot(&self, pilot_id: PilotId) -> Option<&Spacefighter> {
        self.fighters.iter().find(|f| f.pilot == Some(pilot_id))
    }

    /// Total equipment count across inventory and all fighter loadouts
    pub fn total_equipment_count(&self) -> usize {
        self.inventory.len()
            + self
                .fighters
                .iter()
                .map(|f| f.loadout.installed_count())
                .sum::<usize>()
    }
}

impl Default for Squadron {
    fn default() -> Self {
        Self::new(INITIAL_SQUADRON_NAME)
    }
}
