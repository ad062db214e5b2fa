//! Squadron economy and mission tuning values in one place
//!
//! Morale/fatigue deltas are ADDITIVE and clamped to [STAT_MIN, STAT_MAX]
//! after every application.

// Starting squadron
pub const INITIAL_SQUADRON_NAME: &str = "Stellar Hawks";
pub const INITIAL_CREDITS: i64 = 100_000;
pub const INITIAL_REPUTATION: i64 = 0;

// Economy
/// Flat hull price charged for every fighter purchase, regardless of hull.
pub const FIGHTER_COST: i64 = 5_000;
pub const HIRE_BASE_COST: i64 = 1_000;
pub const HIRE_COST_PER_LEVEL: i64 = 500;

// Reputation swings
pub const REPUTATION_MISSION_SUCCESS: i64 = 10;
pub const REPUTATION_MISSION_FAILURE: i64 = -5;
pub const REPUTATION_CAMPAIGN_COMPLETE: i64 = 25;

// Mission scoring weights
pub const PILOT_SKILL_WEIGHT: f32 = 0.6;
pub const EQUIPMENT_WEIGHT: f32 = 0.4;
/// Bonus per fitted single slot, and per recommended rack kind carried.
pub const EQUIPMENT_SLOT_BONUS: f32 = 10.0;

// Difficulty multipliers applied to the weighted score
pub const DIFFICULTY_EASY_MULT: f32 = 1.2;
pub const DIFFICULTY_MEDIUM_MULT: f32 = 1.0;
pub const DIFFICULTY_HARD_MULT: f32 = 0.8;

// Morale/fatigue band
pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 100;

// Duty status effects (fatigue delta, morale delta)
pub const ON_CALL_FATIGUE: i32 = 5;
pub const ON_CALL_MORALE: i32 = 10;
pub const TRAINING_FATIGUE: i32 = 15;
pub const TRAINING_MORALE: i32 = 5;
pub const R_AND_R_FATIGUE: i32 = -30;
pub const R_AND_R_MORALE: i32 = 20;
// One-time bonus when leaving R&R for any other status
pub const REFRESHED_FATIGUE: i32 = -20;
pub const REFRESHED_MORALE: i32 = 10;

// Recruitment
pub const RECRUIT_MORALE: i32 = 75;
pub const RECRUIT_FATIGUE: i32 = 0;

/// Strength bar scale: mean six-skill average times this, capped at 100.
pub const STRENGTH_SCALE: f32 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(DIFFICULTY_EASY_MULT > DIFFICULTY_MEDIUM_MULT);
        assert!(DIFFICULTY_MEDIUM_MULT > DIFFICULTY_HARD_MULT);
    }

    #[test]
    fn test_scoring_weights_sum_to_one() {
        assert!((PILOT_SKILL_WEIGHT + EQUIPMENT_WEIGHT - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stat_band() {
        assert!(STAT_MIN < STAT_MAX);
        assert!(RECRUIT_MORALE >= STAT_MIN && RECRUIT_MORALE <= STAT_MAX);
        assert!(RECRUIT_FATIGUE >= STAT_MIN && RECRUIT_FATIGUE <= STAT_MAX);
    }

    #[test]
    fn test_rest_recovers_fatigue() {
        assert!(R_AND_R_FATIGUE < 0);
        assert!(REFRESHED_FATIGUE < 0);
        assert!(TRAINING_FATIGUE > 0);
    }
}
