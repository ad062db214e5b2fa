//! Roster commands: hiring, dismissal, and duty-status changes

use crate::core::config::{
    ON_CALL_FATIGUE, ON_CALL_MORALE, REFRESHED_FATIGUE, REFRESHED_MORALE, R_AND_R_FATIGUE,
    R_AND_R_MORALE, TRAINING_FATIGUE, TRAINING_MORALE,
};
use crate::core::error::{Result, SquadronError};
use crate::core::types::PilotId;
use crate::ledger::SquadronLedger;
use crate::model::pilot::{Pilot, PilotStatus};

impl SquadronLedger {
    /// Add a pilot to the roster, charging the agreed hiring fee.
    pub fn hire_pilot(&mut self, pilot: Pilot, cost: i64) -> Result<()> {
        self.debit(cost)?;
        tracing::info!(
            "Hired {} '{}' for {} credits",
            pilot.rank,
            pilot.call_sign,
            cost
        );
        self.squadron.pilots.push(pilot);
        Ok(())
    }

    /// Remove a pilot from the roster, returning the record.
    ///
    /// Any fighter seat the pilot held is emptied.
    pub fn dismiss_pilot(&mut self, id: PilotId) -> Result<Pilot> {
        let idx = self
            .squadron
            .pilots
            .iter()
            .position(|p| p.id == id)
            .ok_or(SquadronError::PilotNotFound(id))?;
        for fighter in &mut self.squadron.fighters {
            if fighter.pilot == Some(id) {
                fighter.pilot = None;
            }
        }
        let pilot = self.squadron.pilots.remove(idx);
        tracing::info!("Dismissed '{}'", pilot.call_sign);
        Ok(pilot)
    }

    /// Move a pilot to a new duty status.
    ///
    /// Entering a status applies its morale/fatigue effect: on-call and
    /// training wear a pilot down, R&R restores. Leaving R&R additionally
    /// grants a refreshed bonus. Each adjustment clamps to the 0-100 band.
    pub fn update_pilot_status(&mut self, id: PilotId, status: PilotStatus) -> Result<()> {
        let pilot = self
            .squadron
            .pilot_mut(id)
            .ok_or(SquadronError::PilotNotFound(id))?;
        let previous = pilot.status;
        pilot.status = status;

        match status {
            PilotStatus::OnCall => {
                pilot.adjust_fatigue(ON_CALL_FATIGUE);
                pilot.adjust_morale(ON_CALL_MORALE);
            }
            PilotStatus::Training => {
                pilot.adjust_fatigue(TRAINING_FATIGUE);
                pilot.adjust_morale(TRAINING_MORALE);
            }
            PilotStatus::RAndR => {
                pilot.adjust_fatigue(R_AND_R_FATIGUE);
                pilot.adjust_morale(R_AND_R_MORALE);
            }
            _ => {}
        }

        if previous == PilotStatus::RAndR && status != PilotStatus::RAndR {
            pilot.adjust_morale(REFRESHED_MORALE);
            pilot.adjust_fatigue(REFRESHED_FATIGUE);
        }

        tracing::debug!("'{}' now {:?}", pilot.call_sign, status);
        Ok(())
    }
}
