//! Spacefighters and their equipment loadouts

use serde::{Deserialize, Serialize};

use crate::core::types::{EquipmentId, FighterId, PilotId};
use crate::model::equipment::{Equipment, EquipmentKind};

/// Named mount points on a fighter
///
/// The first four hold at most one item; the racks hold any number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Engine,
    Special,
    Missiles,
    Bombs,
    Flares,
}

impl EquipmentSlot {
    /// The equipment kind this slot accepts
    pub fn accepted_kind(&self) -> EquipmentKind {
        match self {
            EquipmentSlot::Weapon => EquipmentKind::Weapon,
            EquipmentSlot::Shield => EquipmentKind::Shield,
            EquipmentSlot::Engine => EquipmentKind::Engine,
            EquipmentSlot::Special => EquipmentKind::Special,
            EquipmentSlot::Missiles => EquipmentKind::Missile,
            EquipmentSlot::Bombs => EquipmentKind::Bomb,
            EquipmentSlot::Flares => EquipmentKind::Flare,
        }
    }

    pub fn accepts(&self, kind: EquipmentKind) -> bool {
        self.accepted_kind() == kind
    }

    /// True for the multi-item slots (missiles, bombs, flares)
    pub fn is_rack(&self) -> bool {
        matches!(
            self,
            EquipmentSlot::Missiles | EquipmentSlot::Bombs | EquipmentSlot::Flares
        )
    }
}

/// Everything mounted on one fighter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loadout {
    pub weapon: Option<Equipment>,
    pub shield: Option<Equipment>,
    pub engine: Option<Equipment>,
    pub special: Option<Equipment>,
    pub missiles: Vec<Equipment>,
    pub bombs: Vec<Equipment>,
    pub flares: Vec<Equipment>,
}

impl Loadout {
    /// Mutable access to a single-item slot; None for rack slots
    pub fn single_slot_mut(&mut self, slot: EquipmentSlot) -> Option<&mut Option<Equipment>> {
        match slot {
            EquipmentSlot::Weapon => Some(&mut self.weapon),
            EquipmentSlot::Shield => Some(&mut self.shield),
            EquipmentSlot::Engine => Some(&mut self.engine),
            EquipmentSlot::Special => Some(&mut self.special),
            _ => None,
        }
    }

    /// Mutable access to a rack slot; None for single-item slots
    pub fn rack_mut(&mut self, slot: EquipmentSlot) -> Option<&mut Vec<Equipment>> {
        match slot {
            EquipmentSlot::Missiles => Some(&mut self.missiles),
            EquipmentSlot::Bombs => Some(&mut self.bombs),
            EquipmentSlot::Flares => Some(&mut self.flares),
            _ => None,
        }
    }

    /// Mount an item, returning the item displaced from a single slot
    ///
    /// Racks append and never displace. The caller is responsible for the
    /// kind/slot check; this only moves items.
    pub fn install(&mut self, slot: EquipmentSlot, item: Equipment) -> Option<Equipment> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.replace(item),
            EquipmentSlot::Shield => self.shield.replace(item),
            EquipmentSlot::Engine => self.engine.replace(item),
            EquipmentSlot::Special => self.special.replace(item),
            EquipmentSlot::Missiles => {
                self.missiles.push(item);
                None
            }
            EquipmentSlot::Bombs => {
                self.bombs.push(item);
                None
            }
            EquipmentSlot::Flares => {
                self.flares.push(item);
                None
            }
        }
    }

    /// Take a mounted item out of the named slot by id
    pub fn uninstall(&mut self, slot: EquipmentSlot, id: EquipmentId) -> Option<Equipment> {
        if let Some(rack) = self.rack_mut(slot) {
            let idx = rack.iter().position(|e| e.id == id)?;
            return Some(rack.remove(idx));
        }
        let single = self.single_slot_mut(slot)?;
        if single.as_ref().map(|e| e.id) == Some(id) {
            single.take()
        } else {
            None
        }
    }

    /// Total number of items mounted anywhere on the fighter
    pub fn installed_count(&self) -> usize {
        [&self.weapon, &self.shield, &self.engine, &self.special]
            .iter()
            .filter(|s| s.is_some())
            .count()
            + self.missiles.len()
            + self.bombs.len()
            + self.flares.len()
    }

    /// Look up a mounted item by id across all slots
    pub fn contains(&self, id: EquipmentId) -> bool {
        [&self.weapon, &self.shield, &self.engine, &self.special]
            .iter()
            .any(|s| s.as_ref().map(|e| e.id) == Some(id))
            || self.missiles.iter().any(|e| e.id == id)
            || self.bombs.iter().any(|e| e.id == id)
            || self.flares.iter().any(|e| e.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterStatus {
    Ready,
    Damaged,
    Repairing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spacefighter {
    pub id: FighterId,
    pub name: String,
    /// Seat assignment; the roster entry stays the source of truth
    pub pilot: Option<PilotId>,
    pub loadout: Loadout,
    pub status: FighterStatus,
}

impl Spacefighter {
    /// An empty hull with no pilot and nothing mounted
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FighterId::new(),
            name: name.into(),
            pilot: None,
            loadout: Loadout::default(),
            status: FighterStatus::Ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::equipment::EquipmentStats;

    fn missile(name: &str) -> Equipment {
        Equipment {
            id: EquipmentId::new(),
            name: name.into(),
            kind: EquipmentKind::Missile,
            stats: EquipmentStats {
                damage: Some(80),
                range: Some(100),
                ..Default::default()
            },
            cost: 3000,
            description: String::new(),
        }
    }

    #[test]
    fn test_slot_accepts_matching_kind() {
        assert!(EquipmentSlot::Weapon.accepts(EquipmentKind::Weapon));
        assert!(EquipmentSlot::Missiles.accepts(EquipmentKind::Missile));
        assert!(!EquipmentSlot::Weapon.accepts(EquipmentKind::Missile));
        assert!(!EquipmentSlot::Flares.accepts(EquipmentKind::Bomb));
    }

    #[test]
    fn test_rack_slots() {
        assert!(EquipmentSlot::Missiles.is_rack());
        assert!(EquipmentSlot::Bombs.is_rack());
        assert!(EquipmentSlot::Flares.is_rack());
        assert!(!EquipmentSlot::Weapon.is_rack());
        assert!(!EquipmentSlot::Special.is_rack());
    }

    #[test]
    fn test_loadout_counts_and_lookup() {
        let mut fighter = Spacefighter::new("Raptor-1");
        assert_eq!(fighter.loadout.installed_count(), 0);

        let m1 = missile("AIM-120 AMRAAM");
        let m1_id = m1.id;
        fighter.loadout.missiles.push(m1);
        fighter.loadout.missiles.push(missile("AIM-9 Sidewinder"));

        assert_eq!(fighter.loadout.installed_count(), 2);
        assert!(fighter.loadout.contains(m1_id));
        assert!(!fighter.loadout.contains(EquipmentId::new()));
    }

    #[test]
    fn test_single_slot_vs_rack_access() {
        let mut loadout = Loadout::default();
        assert!(loadout.single_slot_mut(EquipmentSlot::Weapon).is_some());
        assert!(loadout.single_slot_mut(EquipmentSlot::Missiles).is_none());
        assert!(loadout.rack_mut(EquipmentSlot::Missiles).is_some());
        assert!(loadout.rack_mut(EquipmentSlot::Engine).is_none());
    }

    #[test]
    fn test_install_single_slot_displaces_previous() {
        let mut loadout = Loadout::default();
        let mut first = missile("Old Cannon");
        first.kind = EquipmentKind::Weapon;
        let first_id = first.id;
        let mut second = missile("New Cannon");
        second.kind = EquipmentKind::Weapon;

        assert!(loadout.install(EquipmentSlot::Weapon, first).is_none());
        let displaced = loadout.install(EquipmentSlot::Weapon, second);
        assert_eq!(displaced.map(|e| e.id), Some(first_id));
        assert_eq!(loadout.installed_count(), 1);
    }

    #[test]
    fn test_install_rack_appends() {
        let mut loadout = Loadout::default();
        assert!(loadout.install(EquipmentSlot::Missiles, missile("A")).is_none());
        assert!(loadout.install(EquipmentSlot::Missiles, missile("B")).is_none());
        assert_eq!(loadout.missiles.len(), 2);
    }

    #[test]
    fn test_uninstall_by_id() {
        let mut loadout = Loadout::default();
        let m = missile("AIM-120 AMRAAM");
        let id = m.id;
        loadout.install(EquipmentSlot::Missiles, m);

        // Wrong slot finds nothing, item stays put
        assert!(loadout.uninstall(EquipmentSlot::Bombs, id).is_none());
        assert_eq!(loadout.missiles.len(), 1);

        let removed = loadout.uninstall(EquipmentSlot::Missiles, id);
        assert_eq!(removed.map(|e| e.id), Some(id));
        assert!(loadout.missiles.is_empty());
    }
}
