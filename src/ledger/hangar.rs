//! Hangar commands: fighters, equipment, and seat assignments

use crate::core::config::FIGHTER_COST;
use crate::core::error::{Result, SquadronError};
use crate::core::types::{EquipmentId, FighterId, PilotId};
use crate::ledger::SquadronLedger;
use crate::model::equipment::Equipment;
use crate::model::fighter::{EquipmentSlot, Spacefighter};
use crate::model::pilot::PilotStatus;

impl SquadronLedger {
    /// Buy a new hull and park it in the hangar.
    pub fn add_fighter(&mut self, fighter: Spacefighter) -> Result<()> {
        self.debit(FIGHTER_COST)?;
        tracing::info!("Acquired spacefighter '{}'", fighter.name);
        self.squadron.fighters.push(fighter);
        Ok(())
    }

    /// Buy one instance of a catalog item into the inventory.
    ///
    /// Every purchase mints a fresh id, so two purchases of the same
    /// template are distinct items that can be mounted independently.
    pub fn purchase_equipment(&mut self, template: &Equipment) -> Result<EquipmentId> {
        self.debit(template.cost)?;
        let item = template.purchased_instance();
        let id = item.id;
        tracing::info!("Purchased '{}' for {} credits", item.name, item.cost);
        self.squadron.inventory.push(item);
        Ok(id)
    }

    /// Move an inventory item into a fighter slot.
    ///
    /// Single slots swap: a previously mounted item goes back to the
    /// inventory. Rack slots (missiles, bombs, flares) append. A kind/slot
    /// mismatch rejects the command with the item still in the inventory.
    pub fn install_equipment(
        &mut self,
        fighter_id: FighterId,
        equipment_id: EquipmentId,
        slot: EquipmentSlot,
    ) -> Result<()> {
        let fighter_idx = self
            .squadron
            .fighters
            .iter()
            .position(|f| f.id == fighter_id)
            .ok_or(SquadronError::FighterNotFound(fighter_id))?;
        let item_idx = self
            .squadron
            .inventory_position(equipment_id)
            .ok_or(SquadronError::EquipmentNotFound(equipment_id))?;

        let kind = self.squadron.inventory[item_idx].kind;
        if !slot.accepts(kind) {
            return Err(SquadronError::SlotMismatch { kind, slot });
        }

        let item = self.squadron.inventory.remove(item_idx);
        tracing::debug!("Mounting '{}' in {:?}", item.name, slot);
        let displaced = self.squadron.fighters[fighter_idx].loadout.install(slot, item);
        if let Some(previous) = displaced {
            self.squadron.inventory.push(previous);
        }
        Ok(())
    }

    /// Take a mounted item off a fighter and return it to the inventory.
    pub fn remove_equipment(
        &mut self,
        fighter_id: FighterId,
        equipment_id: EquipmentId,
        slot: EquipmentSlot,
    ) -> Result<()> {
        let fighter_idx = self
            .squadron
            .fighters
            .iter()
            .position(|f| f.id == fighter_id)
            .ok_or(SquadronError::FighterNotFound(fighter_id))?;
        let item = self.squadron.fighters[fighter_idx]
            .loadout
            .uninstall(slot, equipment_id)
            .ok_or(SquadronError::EquipmentNotFound(equipment_id))?;
        self.squadron.inventory.push(item);
        Ok(())
    }

    /// Seat a pilot in a fighter.
    ///
    /// The pilot must not be seated elsewhere. If the fighter already had a
    /// pilot, that pilot returns to the available pool; the new occupant is
    /// marked deployed. Re-seating a pilot in their own fighter is a no-op.
    pub fn assign_pilot(&mut self, fighter_id: FighterId, pilot_id: PilotId) -> Result<()> {
        if self.squadron.pilot(pilot_id).is_none() {
            return Err(SquadronError::PilotNotFound(pilot_id));
        }
        let fighter_idx = self
            .squadron
            .fighters
            .iter()
            .position(|f| f.id == fighter_id)
            .ok_or(SquadronError::FighterNotFound(fighter_id))?;
        if let Some(seat) = self.squadron.fighter_of_pilot(pilot_id) {
            if seat.id != fighter_id {
                return Err(SquadronError::PilotAlreadyAssigned(pilot_id));
            }
        }

        let previous = self.squadron.fighters[fighter_idx].pilot.replace(pilot_id);
        if let Some(previous_id) = previous {
            if previous_id != pilot_id {
                if let Some(p) = self.squadron.pilot_mut(previous_id) {
                    p.status = PilotStatus::Available;
                }
            }
        }
        if let Some(p) = self.squadron.pilot_mut(pilot_id) {
            p.status = PilotStatus::Deployed;
        }
        tracing::debug!("Pilot {:?} seated in fighter {:?}", pilot_id, fighter_id);
        Ok(())
    }

    /// Empty a fighter's seat; the pilot (if any) becomes available.
    pub fn unassign_pilot(&mut self, fighter_id: FighterId) -> Result<()> {
        let fighter_idx = self
            .squadron
            .fighters
            .iter()
            .position(|f| f.id == fighter_id)
            .ok_or(SquadronError::FighterNotFound(fighter_id))?;
        if let Some(pilot_id) = self.squadron.fighters[fighter_idx].pilot.take() {
            if let Some(p) = self.squadron.pilot_mut(pilot_id) {
                p.status = PilotStatus::Available;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PilotId;
    use crate::model::equipment::{EquipmentKind, EquipmentStats};
    use crate::model::pilot::{CombatRecord, Pilot, Sex, SkillSet};

    fn pilot(call_sign: &str) -> Pilot {
        Pilot {
            id: PilotId::new(),
            name: "Casey".into(),
            call_sign: call_sign.into(),
            rank: "Rookie".into(),
            level: 2,
            age: 24,
            sex: Sex::Male,
            skills: SkillSet::default(),
            experience: SkillSet::default(),
            combat_record: CombatRecord::default(),
            status: PilotStatus::Available,
            morale: 75,
            fatigue: 0,
        }
    }

    fn laser_cannon() -> Equipment {
        Equipment {
            id: EquipmentId::new(),
            name: "Pulse Laser Cannon".into(),
            kind: EquipmentKind::Weapon,
            stats: EquipmentStats {
                damage: Some(75),
                ..Default::default()
            },
            cost: 1_500,
            description: String::new(),
        }
    }

    fn missile_pod() -> Equipment {
        Equipment {
            id: EquipmentId::new(),
            name: "Javelin Missile".into(),
            kind: EquipmentKind::Missile,
            stats: EquipmentStats::default(),
            cost: 3_000,
            description: String::new(),
        }
    }

    #[test]
    fn test_add_fighter_charges_flat_cost() {
        let mut ledger = SquadronLedger::with_seed(2);
        let before = ledger.squadron().credits;

        ledger.add_fighter(Spacefighter::new("Viper-7")).unwrap();

        assert_eq!(ledger.squadron().credits, before - FIGHTER_COST);
        assert_eq!(ledger.squadron().fighters.len(), 1);
    }

    #[test]
    fn test_purchase_mints_fresh_instance() {
        let mut ledger = SquadronLedger::with_seed(2);
        let template = laser_cannon();
        let before = ledger.squadron().credits;

        let first = ledger.purchase_equipment(&template).unwrap();
        let second = ledger.purchase_equipment(&template).unwrap();

        assert_ne!(first, second);
        assert_ne!(first, template.id);
        assert_eq!(ledger.squadron().inventory.len(), 2);
        assert_eq!(ledger.squadron().credits, before - 2 * template.cost);
    }

    #[test]
    fn test_purchase_rejected_when_broke() {
        let mut ledger = SquadronLedger::with_seed(2);
        let mut template = laser_cannon();
        template.cost = ledger.squadron().credits + 1;

        let err = ledger.purchase_equipment(&template).unwrap_err();

        assert!(matches!(err, SquadronError::InsufficientCredits { .. }));
        assert!(ledger.squadron().inventory.is_empty());
    }

    #[test]
    fn test_install_into_single_slot() {
        let mut ledger = SquadronLedger::with_seed(2);
        let fighter = Spacefighter::new("Falcon-2");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();
        let item_id = ledger.purchase_equipment(&laser_cannon()).unwrap();

        ledger
            .install_equipment(fighter_id, item_id, EquipmentSlot::Weapon)
            .unwrap();

        let squadron = ledger.squadron();
        assert!(squadron.inventory.is_empty());
        let fighter = squadron.fighter(fighter_id).unwrap();
        assert_eq!(fighter.loadout.weapon.as_ref().map(|e| e.id), Some(item_id));
    }

    #[test]
    fn test_install_swap_returns_previous_to_inventory() {
        let mut ledger = SquadronLedger::with_seed(2);
        let fighter = Spacefighter::new("Falcon-2");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();
        let first = ledger.purchase_equipment(&laser_cannon()).unwrap();
        let second = ledger.purchase_equipment(&laser_cannon()).unwrap();

        ledger
            .install_equipment(fighter_id, first, EquipmentSlot::Weapon)
            .unwrap();
        ledger
            .install_equipment(fighter_id, second, EquipmentSlot::Weapon)
            .unwrap();

        let squadron = ledger.squadron();
        let fighter = squadron.fighter(fighter_id).unwrap();
        assert_eq!(fighter.loadout.weapon.as_ref().map(|e| e.id), Some(second));
        assert_eq!(squadron.inventory.len(), 1);
        assert_eq!(squadron.inventory[0].id, first);
        // Nothing vanished in the swap
        assert_eq!(squadron.total_equipment_count(), 2);
    }

    #[test]
    fn test_install_rack_accumulates() {
        let mut ledger = SquadronLedger::with_seed(2);
        let fighter = Spacefighter::new("Falcon-2");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();
        let first = ledger.purchase_equipment(&missile_pod()).unwrap();
        let second = ledger.purchase_equipment(&missile_pod()).unwrap();

        ledger
            .install_equipment(fighter_id, first, EquipmentSlot::Missiles)
            .unwrap();
        ledger
            .install_equipment(fighter_id, second, EquipmentSlot::Missiles)
            .unwrap();

        let fighter = ledger.squadron().fighter(fighter_id).unwrap();
        assert_eq!(fighter.loadout.missiles.len(), 2);
    }

    #[test]
    fn test_install_slot_mismatch_leaves_inventory_alone() {
        let mut ledger = SquadronLedger::with_seed(2);
        let fighter = Spacefighter::new("Falcon-2");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();
        let item_id = ledger.purchase_equipment(&missile_pod()).unwrap();

        let err = ledger
            .install_equipment(fighter_id, item_id, EquipmentSlot::Weapon)
            .unwrap_err();

        assert!(matches!(err, SquadronError::SlotMismatch { .. }));
        assert_eq!(ledger.squadron().inventory.len(), 1);
        let fighter = ledger.squadron().fighter(fighter_id).unwrap();
        assert_eq!(fighter.loadout.installed_count(), 0);
    }

    #[test]
    fn test_install_unknown_ids() {
        let mut ledger = SquadronLedger::with_seed(2);
        let fighter = Spacefighter::new("Falcon-2");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();

        let err = ledger
            .install_equipment(FighterId::new(), EquipmentId::new(), EquipmentSlot::Weapon)
            .unwrap_err();
        assert!(matches!(err, SquadronError::FighterNotFound(_)));

        let err = ledger
            .install_equipment(fighter_id, EquipmentId::new(), EquipmentSlot::Weapon)
            .unwrap_err();
        assert!(matches!(err, SquadronError::EquipmentNotFound(_)));
    }

    #[test]
    fn test_remove_returns_item_to_inventory() {
        let mut ledger = SquadronLedger::with_seed(2);
        let fighter = Spacefighter::new("Falcon-2");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();
        let item_id = ledger.purchase_equipment(&missile_pod()).unwrap();
        ledger
            .install_equipment(fighter_id, item_id, EquipmentSlot::Missiles)
            .unwrap();

        ledger
            .remove_equipment(fighter_id, item_id, EquipmentSlot::Missiles)
            .unwrap();

        let squadron = ledger.squadron();
        assert_eq!(squadron.inventory.len(), 1);
        assert_eq!(squadron.inventory[0].id, item_id);
        let fighter = squadron.fighter(fighter_id).unwrap();
        assert_eq!(fighter.loadout.installed_count(), 0);
    }

    #[test]
    fn test_remove_from_wrong_slot_fails() {
        let mut ledger = SquadronLedger::with_seed(2);
        let fighter = Spacefighter::new("Falcon-2");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();
        let item_id = ledger.purchase_equipment(&missile_pod()).unwrap();
        ledger
            .install_equipment(fighter_id, item_id, EquipmentSlot::Missiles)
            .unwrap();

        let err = ledger
            .remove_equipment(fighter_id, item_id, EquipmentSlot::Bombs)
            .unwrap_err();

        assert!(matches!(err, SquadronError::EquipmentNotFound(_)));
        let fighter = ledger.squadron().fighter(fighter_id).unwrap();
        assert_eq!(fighter.loadout.missiles.len(), 1);
    }

    #[test]
    fn test_assign_marks_deployed() {
        let mut ledger = SquadronLedger::with_seed(2);
        let p = pilot("Maverick");
        let pilot_id = p.id;
        ledger.hire_pilot(p, 0).unwrap();
        let fighter = Spacefighter::new("Raptor-1");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();

        ledger.assign_pilot(fighter_id, pilot_id).unwrap();

        let squadron = ledger.squadron();
        assert_eq!(squadron.fighter(fighter_id).unwrap().pilot, Some(pilot_id));
        assert_eq!(
            squadron.pilot(pilot_id).unwrap().status,
            PilotStatus::Deployed
        );
    }

    #[test]
    fn test_assign_rejects_double_seating() {
        let mut ledger = SquadronLedger::with_seed(2);
        let p = pilot("Maverick");
        let pilot_id = p.id;
        ledger.hire_pilot(p, 0).unwrap();
        let first = Spacefighter::new("Raptor-1");
        let first_id = first.id;
        let second = Spacefighter::new("Raptor-2");
        let second_id = second.id;
        ledger.add_fighter(first).unwrap();
        ledger.add_fighter(second).unwrap();
        ledger.assign_pilot(first_id, pilot_id).unwrap();

        let err = ledger.assign_pilot(second_id, pilot_id).unwrap_err();

        assert!(matches!(err, SquadronError::PilotAlreadyAssigned(_)));
        assert_eq!(ledger.squadron().fighter(second_id).unwrap().pilot, None);
    }

    #[test]
    fn test_assign_same_seat_is_idempotent() {
        let mut ledger = SquadronLedger::with_seed(2);
        let p = pilot("Maverick");
        let pilot_id = p.id;
        ledger.hire_pilot(p, 0).unwrap();
        let fighter = Spacefighter::new("Raptor-1");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();

        ledger.assign_pilot(fighter_id, pilot_id).unwrap();
        ledger.assign_pilot(fighter_id, pilot_id).unwrap();

        let squadron = ledger.squadron();
        assert_eq!(squadron.fighter(fighter_id).unwrap().pilot, Some(pilot_id));
        assert_eq!(
            squadron.pilot(pilot_id).unwrap().status,
            PilotStatus::Deployed
        );
    }

    #[test]
    fn test_assign_displaces_previous_occupant() {
        let mut ledger = SquadronLedger::with_seed(2);
        let first = pilot("Maverick");
        let first_id = first.id;
        let second = pilot("Goose");
        let second_id = second.id;
        ledger.hire_pilot(first, 0).unwrap();
        ledger.hire_pilot(second, 0).unwrap();
        let fighter = Spacefighter::new("Raptor-1");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();

        ledger.assign_pilot(fighter_id, first_id).unwrap();
        ledger.assign_pilot(fighter_id, second_id).unwrap();

        let squadron = ledger.squadron();
        assert_eq!(squadron.fighter(fighter_id).unwrap().pilot, Some(second_id));
        assert_eq!(
            squadron.pilot(first_id).unwrap().status,
            PilotStatus::Available
        );
        assert_eq!(
            squadron.pilot(second_id).unwrap().status,
            PilotStatus::Deployed
        );
    }

    #[test]
    fn test_unassign_frees_pilot() {
        let mut ledger = SquadronLedger::with_seed(2);
        let p = pilot("Maverick");
        let pilot_id = p.id;
        ledger.hire_pilot(p, 0).unwrap();
        let fighter = Spacefighter::new("Raptor-1");
        let fighter_id = fighter.id;
        ledger.add_fighter(fighter).unwrap();
        ledger.assign_pilot(fighter_id, pilot_id).unwrap();

        ledger.unassign_pilot(fighter_id).unwrap();

        let squadron = ledger.squadron();
        assert_eq!(squadron.fighter(fighter_id).unwrap().pilot, None);
        assert_eq!(
            squadron.pilot(pilot_id).unwrap().status,
            PilotStatus::Available
        );

        // Unassigning an empty seat is fine
        ledger.unassign_pilot(fighter_id).unwrap();
    }
}
