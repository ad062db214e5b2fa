//! Mission resolver - pure scoring, eligibility, and randomized resolution

pub mod mission;
pub mod rating;

pub use mission::{resolve, success_chance, MissionOutcome};
pub use rating::{campaign_eligible, combat_rating, eligible_pilot_count, squadron_strength};
