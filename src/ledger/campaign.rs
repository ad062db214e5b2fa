//! Campaign commands: contract lifecycle and mission execution

use serde::{Deserialize, Serialize};

use crate::core::config::{
    REPUTATION_CAMPAIGN_COMPLETE, REPUTATION_MISSION_FAILURE, REPUTATION_MISSION_SUCCESS,
};
use crate::core::error::{Result, SquadronError};
use crate::core::types::{FighterId, MissionId, PilotId};
use crate::ledger::SquadronLedger;
use crate::model::campaign::{Campaign, CampaignStatus};
use crate::model::pilot::PilotStatus;
use crate::resolver;
use crate::resolver::MissionOutcome;

/// The pilots and fighters sent on a mission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskForce {
    pub pilots: Vec<PilotId>,
    pub fighters: Vec<FighterId>,
}

/// Bookkeeping result of settling a mission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionCompletion {
    pub success: bool,
    /// Mission reward plus, on the final mission, the campaign reward
    pub credits_awarded: i64,
    pub reputation_delta: i64,
    pub days_elapsed: u32,
    pub campaign_concluded: bool,
}

impl SquadronLedger {
    /// Accept a contract and make it the active campaign.
    ///
    /// Only one campaign runs at a time, and the roster must satisfy every
    /// mission's requirements up front: enough combat-ready pilots for the
    /// headcount, and a combat rating at or above each mission's floor.
    pub fn start_campaign(&mut self, mut campaign: Campaign) -> Result<()> {
        if let Some(active) = &self.squadron.active_campaign {
            return Err(SquadronError::CampaignInProgress(active.name.clone()));
        }
        if !resolver::campaign_eligible(&campaign, &self.squadron.pilots) {
            return Err(SquadronError::RequirementsNotMet(campaign.name.clone()));
        }
        campaign.status = CampaignStatus::Active;
        tracing::info!(
            "Campaign accepted: '{}' ({} missions)",
            campaign.name,
            campaign.missions.len()
        );
        self.squadron.active_campaign = Some(campaign);
        Ok(())
    }

    /// Settle a mission of the active campaign as won or lost.
    ///
    /// The mission is removed from the campaign and the clock advances by
    /// its duration either way. Success pays the mission reward and earns
    /// reputation; failure costs reputation. Clearing the last mission pays
    /// the campaign reward on top and closes the campaign, win or lose.
    pub fn complete_mission(
        &mut self,
        mission_id: MissionId,
        success: bool,
    ) -> Result<MissionCompletion> {
        let campaign = self
            .squadron
            .active_campaign
            .as_mut()
            .ok_or(SquadronError::NoActiveCampaign)?;
        let idx = campaign
            .missions
            .iter()
            .position(|m| m.id == mission_id)
            .ok_or(SquadronError::MissionNotFound(mission_id))?;

        let mission = campaign.missions.remove(idx);
        campaign.current_day += mission.duration_days;

        let mut credits_awarded = 0;
        let mut reputation_delta = if success {
            credits_awarded += mission.reward;
            REPUTATION_MISSION_SUCCESS
        } else {
            REPUTATION_MISSION_FAILURE
        };

        let campaign_concluded = campaign.is_cleared();
        if campaign_concluded {
            credits_awarded += campaign.reward;
            reputation_delta += REPUTATION_CAMPAIGN_COMPLETE;
            tracing::info!("Campaign '{}' concluded", campaign.name);
        }

        self.squadron.credits += credits_awarded;
        self.squadron.reputation += reputation_delta;
        if campaign_concluded {
            self.squadron.active_campaign = None;
        }

        Ok(MissionCompletion {
            success,
            credits_awarded,
            reputation_delta,
            days_elapsed: mission.duration_days,
            campaign_concluded,
        })
    }

    /// Fly a mission of the active campaign with the given task force.
    ///
    /// The force must field at least the mission's minimum headcount in
    /// both pilots and fighters. The outcome draw, pilot status wrap-up,
    /// and settlement all happen in one command; the returned outcome
    /// reports injuries and loss/damage flags for the caller.
    pub fn execute_mission(
        &mut self,
        mission_id: MissionId,
        force: &TaskForce,
    ) -> Result<MissionOutcome> {
        let mission = self
            .squadron
            .active_campaign
            .as_ref()
            .ok_or(SquadronError::NoActiveCampaign)?
            .mission(mission_id)
            .ok_or(SquadronError::MissionNotFound(mission_id))?
            .clone();

        let mut pilots = Vec::with_capacity(force.pilots.len());
        for &id in &force.pilots {
            pilots.push(
                self.squadron
                    .pilot(id)
                    .ok_or(SquadronError::PilotNotFound(id))?,
            );
        }
        let mut fighters = Vec::with_capacity(force.fighters.len());
        for &id in &force.fighters {
            fighters.push(
                self.squadron
                    .fighter(id)
                    .ok_or(SquadronError::FighterNotFound(id))?,
            );
        }

        let required = mission.requirements.min_pilots;
        if (pilots.len() as u32) < required || (fighters.len() as u32) < required {
            return Err(SquadronError::UnderStrength {
                required,
                pilots: pilots.len() as u32,
                fighters: fighters.len() as u32,
            });
        }

        let outcome = resolver::resolve(&mission, &pilots, &fighters, &mut self.rng);
        tracing::info!(
            "Mission '{}' {} (chance {:.1}%)",
            mission.name,
            if outcome.success { "succeeded" } else { "failed" },
            outcome.chance
        );

        // Wrap-up statuses apply only to missions that carry a risk
        // profile, and are set directly: no duty-status side effects here.
        if mission.risks.is_some() {
            for &id in &force.pilots {
                let status = if !outcome.success && outcome.injured.contains(&id) {
                    PilotStatus::Injured
                } else {
                    PilotStatus::Available
                };
                if let Some(pilot) = self.squadron.pilot_mut(id) {
                    pilot.status = status;
                }
            }
        }

        self.complete_mission(mission_id, outcome.success)?;
        Ok(outcome)
    }
}
