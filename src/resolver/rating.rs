//! Squadron-level ratings used for campaign eligibility

use crate::core::config::{STAT_MAX, STRENGTH_SCALE};
use crate::model::campaign::Campaign;
use crate::model::pilot::Pilot;

/// Number of pilots that count toward campaign work
pub fn eligible_pilot_count(pilots: &[Pilot]) -> u32 {
    pilots.iter().filter(|p| p.is_combat_ready()).count() as u32
}

/// Mean combat-skill average over combat-ready pilots; 0 with none
pub fn combat_rating(pilots: &[Pilot]) -> f32 {
    let ready: Vec<&Pilot> = pilots.iter().filter(|p| p.is_combat_ready()).collect();
    if ready.is_empty() {
        return 0.0;
    }
    let total: f32 = ready.iter().map(|p| p.skills.combat_average()).sum();
    total / ready.len() as f32
}

/// Whether the squadron may take this campaign
///
/// Every mission in the campaign must be within reach: enough eligible
/// pilots and a high enough combat rating.
pub fn campaign_eligible(campaign: &Campaign, pilots: &[Pilot]) -> bool {
    let count = eligible_pilot_count(pilots);
    let rating = combat_rating(pilots);
    campaign.missions.iter().all(|mission| {
        count >= mission.requirements.min_pilots
            && rating >= mission.requirements.min_combat_rating
    })
}

/// Coarse strength gauge over the whole roster, scaled to [0, 100]
///
/// Counts every pilot regardless of status, unlike [`combat_rating`].
pub fn squadron_strength(pilots: &[Pilot]) -> f32 {
    let total: f32 = pilots.iter().map(|p| p.skills.average()).sum();
    let mean = total / pilots.len().max(1) as f32;
    (mean * STRENGTH_SCALE).min(STAT_MAX as f32)
}
