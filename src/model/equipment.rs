//! Equipment items: weapons, defensive systems, and expendable stores

use serde::{Deserialize, Serialize};

use crate::core::types::EquipmentId;

/// What an item is, which determines the slot it mounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    Weapon,
    Shield,
    Engine,
    Special,
    Missile,
    Bomb,
    Flare,
}

/// Sparse stat bag; only the fields relevant to the kind are populated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentStats {
    pub damage: Option<u32>,
    pub defense: Option<u32>,
    pub speed: Option<u32>,
    pub special: Option<String>,
    pub range: Option<u32>,
    pub blast_radius: Option<u32>,
    pub countermeasure_rating: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub kind: EquipmentKind,
    pub stats: EquipmentStats,
    pub cost: i64,
    pub description: String,
}

impl Equipment {
    /// Clone this item as a newly purchased instance with its own identity
    pub fn purchased_instance(&self) -> Equipment {
        let mut item = self.clone();
        item.id = EquipmentId::new();
        item
    }
}
